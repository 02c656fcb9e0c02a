use yew::prelude::*;

pub(crate) struct TodoItem;

pub(crate) enum Msg {
    Delete,
    Toggle,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) todo: common::Todo,
    pub(crate) on_toggle: Callback<common::UpdateTodoPayload>,
    pub(crate) on_delete: Callback<i32>,
}

impl Component for TodoItem {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let todo = &ctx.props().todo;
        match msg {
            Msg::Delete => {
                ctx.props().on_delete.emit(todo.id);
                false
            }
            Msg::Toggle => {
                ctx.props().on_toggle.emit(common::UpdateTodoPayload {
                    id: todo.id,
                    text: None,
                    completed: Some(!todo.completed),
                    labels: None,
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let todo = &ctx.props().todo;
        html! {
            <div style="padding: 4px; border: 1px dashed black;">
                <button onclick={link.callback(|_| Msg::Delete)}>{ "X" }</button>
                <input
                    type="checkbox"
                    checked={todo.completed}
                    onchange={link.callback(|_| Msg::Toggle)}
                />
                { &todo.text }
                { for todo.labels.iter().map(|label| {
                    html!(
                        <span style="margin-left: 4px; font-size: smaller;">
                            { format!("#{}", label.name) }
                        </span>
                    )
                })}
            </div>
        }
    }
}
