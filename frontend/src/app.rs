mod api;
mod label_modal;
mod side_nav;
mod store;
mod todo_form;
mod todo_item;
mod todo_list;

use yew::prelude::*;

pub(crate) struct App {
    store: store::Store,
}

impl Component for App {
    type Message = store::Intent;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: store::Store::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, intent: Self::Message) -> bool {
        if let store::Intent::RequestFailed(error) = &intent {
            web_sys::console::error_1(&error.as_str().into());
        }
        for effect in self.store.apply(intent) {
            perform(ctx, effect);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(store::Intent::Mounted);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let todos: Vec<common::Todo> = self
            .store
            .visible_todos()
            .into_iter()
            .cloned()
            .collect();
        html! {
            <div style="display: flex; gap: 8px;">
                <side_nav::SideNav
                    labels={self.store.labels.clone()}
                    filter={self.store.filter}
                    on_select={link.callback(store::Intent::SelectFilter)}
                    on_delete={link.callback(store::Intent::RemoveLabel)}
                    on_submit={link.callback(store::Intent::SubmitLabel)}
                />
                <div>
                    <todo_form::TodoForm
                        labels={self.store.labels.clone()}
                        on_submit={link.callback(store::Intent::SubmitTodo)}
                    />
                    <todo_list::TodoList
                        todos={todos}
                        on_toggle={link.callback(store::Intent::ToggleTodo)}
                        on_delete={link.callback(store::Intent::RemoveTodo)}
                    />
                </div>
            </div>
        }
    }
}

fn perform(ctx: &Context<App>, effect: store::Effect) {
    match effect {
        store::Effect::FetchTodos => api::get_todos(ctx),
        store::Effect::FetchLabels => api::get_labels(ctx),
        store::Effect::CreateTodo(payload) => api::create_todo(ctx, payload),
        store::Effect::UpdateTodo(payload) => api::update_todo(ctx, payload),
        store::Effect::DeleteTodo(id) => api::delete_todo(ctx, id),
        store::Effect::CreateLabel(payload) => api::create_label(ctx, payload),
        store::Effect::DeleteLabel(id) => api::delete_label(ctx, id),
    }
}
