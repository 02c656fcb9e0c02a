use yew::prelude::*;

pub(crate) struct LabelModal;

pub(crate) enum Msg {
    Toggle(i32),
    Close,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) labels: Vec<common::Label>,
    pub(crate) selected: Vec<i32>,
    pub(crate) on_toggle: Callback<i32>,
    pub(crate) on_close: Callback<()>,
}

impl Component for LabelModal {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle(id) => {
                ctx.props().on_toggle.emit(id);
                false
            }
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <div style="position: fixed; top: 20%; left: 30%; background: white; border: 1px solid black; padding: 8px;">
                <div>{ "Labels" }</div>
                { for props.labels.iter().map(|label| {
                    let id = label.id;
                    html!(
                        <div>
                            <input
                                type="checkbox"
                                checked={props.selected.contains(&id)}
                                onchange={link.callback(move |_| Msg::Toggle(id))}
                            />
                            { &label.name }
                        </div>
                    )
                })}
                <button onclick={link.callback(|_| Msg::Close)}>{ "Close" }</button>
            </div>
        }
    }
}
