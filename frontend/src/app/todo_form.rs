use super::label_modal;
use yew::prelude::*;

pub(crate) struct TodoForm {
    input_ref: NodeRef,
    selected_labels: Vec<i32>,
    modal_open: bool,
}

pub(crate) enum Msg {
    Submit,
    ToggleLabel(i32),
    OpenModal,
    CloseModal,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) labels: Vec<common::Label>,
    pub(crate) on_submit: Callback<common::NewTodoPayload>,
}

impl Component for TodoForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input_ref: Default::default(),
            selected_labels: vec![],
            modal_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                let input = self.input_ref.cast::<web_sys::HtmlInputElement>();
                let text = input
                    .as_ref()
                    .map(|h| h.value())
                    .unwrap_or(String::new());
                if text.is_empty() {
                    return false;
                }
                ctx.props().on_submit.emit(common::NewTodoPayload {
                    text,
                    labels: self.selected_labels.clone(),
                });
                if let Some(input) = input {
                    input.set_value("");
                }
                self.selected_labels.clear();
                true
            }
            Msg::ToggleLabel(id) => {
                match self
                    .selected_labels
                    .iter()
                    .position(|selected| *selected == id)
                {
                    Some(index) => {
                        self.selected_labels.remove(index);
                    }
                    None => self.selected_labels.push(id),
                }
                true
            }
            Msg::OpenModal => {
                self.modal_open = true;
                true
            }
            Msg::CloseModal => {
                self.modal_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let modal = if self.modal_open {
            html!(
                <label_modal::LabelModal
                    labels={ctx.props().labels.clone()}
                    selected={self.selected_labels.clone()}
                    on_toggle={link.callback(Msg::ToggleLabel)}
                    on_close={link.callback(|_| Msg::CloseModal)}
                />
            )
        } else {
            html!()
        };
        html! {
            <div style="border: 1px solid black; padding: 8px;">
                <div>{ "New Todo" }</div>
                <input ref={self.input_ref.clone()}/>
                <button onclick={link.callback(|_| Msg::OpenModal)}>
                    { format!("Labels ({})", self.selected_labels.len()) }
                </button>
                <button onclick={link.callback(|_| Msg::Submit)}>{ "Submit" }</button>
                { modal }
            </div>
        }
    }
}
