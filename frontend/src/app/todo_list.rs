use super::todo_item;
use yew::prelude::*;

pub(crate) struct TodoList;

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) todos: Vec<common::Todo>,
    pub(crate) on_toggle: Callback<common::UpdateTodoPayload>,
    pub(crate) on_delete: Callback<i32>,
}

impl Component for TodoList {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div>
                { for props.todos.iter().map(|todo| {
                    html!(
                        <todo_item::TodoItem
                            todo={todo.clone()}
                            on_toggle={props.on_toggle.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    )
                })}
            </div>
        }
    }
}
