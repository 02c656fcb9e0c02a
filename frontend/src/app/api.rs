use super::{store::Intent, App};

const BACKEND_URL: &'static str = "http://localhost:3000";

pub(crate) fn get_todos(ctx: &yew::Context<App>) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::get(&format!("{}/todos", BACKEND_URL))
            .send()
            .await;
        match response {
            Ok(body) => match body.json::<Vec<common::Todo>>().await {
                Ok(todos) => {
                    link.send_message(Intent::TodosFetched(todos));
                }
                Err(error) => {
                    link.send_message(Intent::RequestFailed(error.to_string()));
                }
            },
            Err(error) => {
                link.send_message(Intent::RequestFailed(error.to_string()));
            }
        }
    });
}

pub(crate) fn create_todo(ctx: &yew::Context<App>, new_todo: common::NewTodoPayload) {
    let link = ctx.link().clone();
    match serde_json::to_string(&new_todo) {
        Ok(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let response = reqwasm::http::Request::post(&format!("{}/todos", BACKEND_URL))
                    .body(payload)
                    .header("content-type", "application/json")
                    .send()
                    .await;
                match response {
                    Ok(body) => match body.json::<common::Todo>().await {
                        Ok(_) => {
                            link.send_message(Intent::TodoWritten);
                        }
                        Err(error) => {
                            link.send_message(Intent::RequestFailed(error.to_string()));
                        }
                    },
                    Err(error) => {
                        link.send_message(Intent::RequestFailed(error.to_string()));
                    }
                }
            });
        }
        Err(error) => {
            link.send_message(Intent::RequestFailed(error.to_string()));
        }
    }
}

pub(crate) fn update_todo(ctx: &yew::Context<App>, update_todo: common::UpdateTodoPayload) {
    let link = ctx.link().clone();
    match serde_json::to_string(&update_todo) {
        Ok(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let response = reqwasm::http::Request::patch(&format!(
                    "{}/todos/{}",
                    BACKEND_URL, update_todo.id
                ))
                .body(payload)
                .header("content-type", "application/json")
                .send()
                .await;
                match response {
                    Ok(body) => match body.json::<common::Todo>().await {
                        Ok(_) => {
                            link.send_message(Intent::TodoWritten);
                        }
                        Err(error) => {
                            link.send_message(Intent::RequestFailed(error.to_string()));
                        }
                    },
                    Err(error) => {
                        link.send_message(Intent::RequestFailed(error.to_string()));
                    }
                }
            });
        }
        Err(error) => {
            link.send_message(Intent::RequestFailed(error.to_string()));
        }
    }
}

pub(crate) fn delete_todo(ctx: &yew::Context<App>, id: i32) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::delete(&format!("{}/todos/{}", BACKEND_URL, id))
            .send()
            .await;
        match response {
            Ok(body) => {
                if body.ok() {
                    link.send_message(Intent::TodoWritten);
                } else {
                    link.send_message(Intent::RequestFailed(format!(
                        "delete todo failed with status {}",
                        body.status()
                    )));
                }
            }
            Err(error) => {
                link.send_message(Intent::RequestFailed(error.to_string()));
            }
        }
    });
}

pub(crate) fn get_labels(ctx: &yew::Context<App>) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::get(&format!("{}/labels", BACKEND_URL))
            .send()
            .await;
        match response {
            Ok(body) => match body.json::<Vec<common::Label>>().await {
                Ok(labels) => {
                    link.send_message(Intent::LabelsFetched(labels));
                }
                Err(error) => {
                    link.send_message(Intent::RequestFailed(error.to_string()));
                }
            },
            Err(error) => {
                link.send_message(Intent::RequestFailed(error.to_string()));
            }
        }
    });
}

pub(crate) fn create_label(ctx: &yew::Context<App>, new_label: common::NewLabelPayload) {
    let link = ctx.link().clone();
    match serde_json::to_string(&new_label) {
        Ok(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let response = reqwasm::http::Request::post(&format!("{}/labels", BACKEND_URL))
                    .body(payload)
                    .header("content-type", "application/json")
                    .send()
                    .await;
                match response {
                    Ok(body) => match body.json::<common::Label>().await {
                        Ok(label) => {
                            link.send_message(Intent::LabelCreated(label));
                        }
                        Err(error) => {
                            link.send_message(Intent::RequestFailed(error.to_string()));
                        }
                    },
                    Err(error) => {
                        link.send_message(Intent::RequestFailed(error.to_string()));
                    }
                }
            });
        }
        Err(error) => {
            link.send_message(Intent::RequestFailed(error.to_string()));
        }
    }
}

pub(crate) fn delete_label(ctx: &yew::Context<App>, id: i32) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::delete(&format!("{}/labels/{}", BACKEND_URL, id))
            .send()
            .await;
        match response {
            Ok(body) => {
                if body.ok() {
                    link.send_message(Intent::LabelDeleted(id));
                } else {
                    link.send_message(Intent::RequestFailed(format!(
                        "delete label failed with status {}",
                        body.status()
                    )));
                }
            }
            Err(error) => {
                link.send_message(Intent::RequestFailed(error.to_string()));
            }
        }
    });
}
