use yew::prelude::*;

pub(crate) struct SideNav {
    input_ref: NodeRef,
}

pub(crate) enum Msg {
    Select(Option<i32>),
    Delete(i32),
    Submit,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) labels: Vec<common::Label>,
    pub(crate) filter: Option<i32>,
    pub(crate) on_select: Callback<Option<i32>>,
    pub(crate) on_delete: Callback<i32>,
    pub(crate) on_submit: Callback<common::NewLabelPayload>,
}

impl Component for SideNav {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(filter) => {
                ctx.props().on_select.emit(filter);
                false
            }
            Msg::Delete(id) => {
                ctx.props().on_delete.emit(id);
                false
            }
            Msg::Submit => {
                let input = self.input_ref.cast::<web_sys::HtmlInputElement>();
                let name = input
                    .as_ref()
                    .map(|h| h.value())
                    .unwrap_or(String::new());
                if name.is_empty() {
                    return false;
                }
                ctx.props().on_submit.emit(common::NewLabelPayload { name });
                if let Some(input) = input {
                    input.set_value("");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <div style="border: 1px solid black; padding: 8px; min-width: 160px;">
                <div>
                    <button
                        onclick={link.callback(|_| Msg::Select(None))}
                        disabled={props.filter.is_none()}
                    >
                        { "All" }
                    </button>
                </div>
                { for props.labels.iter().map(|label| {
                    let id = label.id;
                    html!(
                        <div>
                            <button
                                onclick={link.callback(move |_| Msg::Select(Some(id)))}
                                disabled={props.filter == Some(id)}
                            >
                                { &label.name }
                            </button>
                            <button onclick={link.callback(move |_| Msg::Delete(id))}>{ "X" }</button>
                        </div>
                    )
                })}
                <input ref={self.input_ref.clone()}/>
                <button onclick={link.callback(|_| Msg::Submit)}>{ "Add label" }</button>
            </div>
        }
    }
}
