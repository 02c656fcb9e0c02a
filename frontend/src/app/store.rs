#[derive(Debug)]
pub(crate) enum Intent {
    Mounted,
    SubmitTodo(common::NewTodoPayload),
    ToggleTodo(common::UpdateTodoPayload),
    RemoveTodo(i32),
    SubmitLabel(common::NewLabelPayload),
    RemoveLabel(i32),
    SelectFilter(Option<i32>),
    TodosFetched(Vec<common::Todo>),
    LabelsFetched(Vec<common::Label>),
    TodoWritten,
    LabelCreated(common::Label),
    LabelDeleted(i32),
    RequestFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    FetchTodos,
    FetchLabels,
    CreateTodo(common::NewTodoPayload),
    UpdateTodo(common::UpdateTodoPayload),
    DeleteTodo(i32),
    CreateLabel(common::NewLabelPayload),
    DeleteLabel(i32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Store {
    pub(crate) todos: Vec<common::Todo>,
    pub(crate) labels: Vec<common::Label>,
    pub(crate) filter: Option<i32>,
    mounted: bool,
}

impl Store {
    pub(crate) fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Mounted => {
                if self.mounted {
                    return vec![];
                }
                self.mounted = true;
                vec![Effect::FetchTodos, Effect::FetchLabels]
            }
            Intent::SubmitTodo(payload) => {
                if payload.text.is_empty() {
                    return vec![];
                }
                vec![Effect::CreateTodo(payload)]
            }
            Intent::ToggleTodo(payload) => vec![Effect::UpdateTodo(payload)],
            Intent::RemoveTodo(id) => vec![Effect::DeleteTodo(id)],
            Intent::SubmitLabel(payload) => {
                if payload.name.is_empty()
                    || self.labels.iter().any(|label| label.name == payload.name)
                {
                    return vec![];
                }
                vec![Effect::CreateLabel(payload)]
            }
            Intent::RemoveLabel(id) => vec![Effect::DeleteLabel(id)],
            Intent::SelectFilter(filter) => {
                self.filter = filter;
                vec![]
            }
            Intent::TodosFetched(todos) => {
                self.todos = todos;
                vec![]
            }
            Intent::LabelsFetched(labels) => {
                self.labels = labels;
                vec![]
            }
            Intent::TodoWritten => vec![Effect::FetchTodos],
            Intent::LabelCreated(label) => {
                self.labels.push(label);
                vec![]
            }
            Intent::LabelDeleted(id) => {
                self.labels.retain(|label| label.id != id);
                vec![]
            }
            Intent::RequestFailed(_) => vec![],
        }
    }

    pub(crate) fn visible_todos(&self) -> Vec<&common::Todo> {
        self.todos
            .iter()
            .filter(|todo| match self.filter {
                Some(id) => todo.labels.iter().any(|label| label.id == id),
                None => true,
            })
            .collect()
    }
}
