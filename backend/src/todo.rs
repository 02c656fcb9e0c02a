use crate::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, payload: common::NewTodoPayload) -> anyhow::Result<common::Todo>;
    async fn find(&self, id: i32) -> anyhow::Result<common::Todo>;
    async fn all(&self) -> anyhow::Result<Vec<common::Todo>>;
    async fn update(
        &self,
        id: i32,
        payload: common::UpdateTodoPayload,
    ) -> anyhow::Result<common::Todo>;
    async fn delete(&self, id: i32) -> anyhow::Result<()>;
}

#[derive(Debug, sqlx::FromRow)]
struct TodoWithLabelRow {
    id: i32,
    text: String,
    completed: bool,
    label_id: Option<i32>,
    label_name: Option<String>,
}

// Rows arrive todo-major from the join; consecutive rows with the same todo id
// carry one label each.
fn fold_rows(rows: Vec<TodoWithLabelRow>) -> Vec<common::Todo> {
    let mut todos: Vec<common::Todo> = Vec::new();
    for row in rows {
        if todos.last().map(|todo| todo.id) != Some(row.id) {
            todos.push(common::Todo {
                id: row.id,
                text: row.text,
                completed: row.completed,
                labels: Vec::new(),
            });
        }
        if let (Some(id), Some(name)) = (row.label_id, row.label_name) {
            if let Some(todo) = todos.last_mut() {
                todo.labels.push(common::Label { id, name });
            }
        }
    }
    todos
}

#[derive(Debug, Clone)]
pub struct TodoRepositoryForDb {
    pool: sqlx::PgPool,
}

impl TodoRepositoryForDb {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for TodoRepositoryForDb {
    async fn create(&self, payload: common::NewTodoPayload) -> anyhow::Result<common::Todo> {
        let mut tx = self.pool.begin().await?;
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            insert into todos (text, completed) values ($1, false)
            returning id
            "#,
        )
        .bind(&payload.text)
        .fetch_one(&mut *tx)
        .await?;
        sqlx::query(
            r#"
            insert into todo_labels (todo_id, label_id)
            select $1, id from labels where id = any($2)
            "#,
        )
        .bind(id)
        .bind(&payload.labels)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        self.find(id).await
    }

    async fn find(&self, id: i32) -> anyhow::Result<common::Todo> {
        let rows = sqlx::query_as::<_, TodoWithLabelRow>(
            r#"
            select todos.id, todos.text, todos.completed,
                   labels.id as label_id, labels.name as label_name
            from todos
            left outer join todo_labels on todos.id = todo_labels.todo_id
            left outer join labels on labels.id = todo_labels.label_id
            where todos.id = $1
            order by labels.id asc
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        fold_rows(rows)
            .pop()
            .ok_or_else(|| RepositoryError::NotFound(id).into())
    }

    async fn all(&self) -> anyhow::Result<Vec<common::Todo>> {
        let rows = sqlx::query_as::<_, TodoWithLabelRow>(
            r#"
            select todos.id, todos.text, todos.completed,
                   labels.id as label_id, labels.name as label_name
            from todos
            left outer join todo_labels on todos.id = todo_labels.todo_id
            left outer join labels on labels.id = todo_labels.label_id
            order by todos.id desc, labels.id asc
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(fold_rows(rows))
    }

    async fn update(
        &self,
        id: i32,
        payload: common::UpdateTodoPayload,
    ) -> anyhow::Result<common::Todo> {
        let old_todo = self.find(id).await?;
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            update todos set text = $1, completed = $2 where id = $3
            "#,
        )
        .bind(payload.text.unwrap_or(old_todo.text))
        .bind(payload.completed.unwrap_or(old_todo.completed))
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if let Some(labels) = payload.labels {
            sqlx::query(
                r#"
                delete from todo_labels where todo_id = $1
                "#,
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
            sqlx::query(
                r#"
                insert into todo_labels (todo_id, label_id)
                select $1, id from labels where id = any($2)
                "#,
            )
            .bind(id)
            .bind(&labels)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        self.find(id).await
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            delete from todo_labels where todo_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        let result = sqlx::query(
            r#"
            delete from todos where id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|error| RepositoryError::Unexpected(error.to_string()))?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id).into());
        }
        tx.commit().await?;

        Ok(())
    }
}

pub(crate) async fn index<T: TodoRepository>(
    repository: actix_web::web::Data<T>,
) -> actix_web::HttpResponse {
    match repository.all().await {
        Ok(todos) => actix_web::HttpResponse::Ok().json(todos),
        Err(error) => {
            log::error!("failed to list todos: {}", error);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) async fn create<T: TodoRepository>(
    repository: actix_web::web::Data<T>,
    payload: actix_web::web::Json<common::NewTodoPayload>,
) -> actix_web::HttpResponse {
    let payload = payload.into_inner();
    if payload.text.is_empty() {
        return actix_web::HttpResponse::BadRequest().finish();
    }
    match repository.create(payload).await {
        Ok(todo) => actix_web::HttpResponse::Created().json(todo),
        Err(error) => {
            log::error!("failed to create todo: {}", error);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) async fn find<T: TodoRepository>(
    repository: actix_web::web::Data<T>,
    id: actix_web::web::Path<i32>,
) -> actix_web::HttpResponse {
    match repository.find(id.into_inner()).await {
        Ok(todo) => actix_web::HttpResponse::Ok().json(todo),
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound(_)) => actix_web::HttpResponse::NotFound().finish(),
            _ => {
                log::error!("failed to find todo: {}", error);
                actix_web::HttpResponse::InternalServerError().finish()
            }
        },
    }
}

pub(crate) async fn update<T: TodoRepository>(
    repository: actix_web::web::Data<T>,
    id: actix_web::web::Path<i32>,
    payload: actix_web::web::Json<common::UpdateTodoPayload>,
) -> actix_web::HttpResponse {
    // The id in the path wins over the one repeated in the payload.
    match repository
        .update(id.into_inner(), payload.into_inner())
        .await
    {
        Ok(todo) => actix_web::HttpResponse::Ok().json(todo),
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound(_)) => actix_web::HttpResponse::NotFound().finish(),
            _ => {
                log::error!("failed to update todo: {}", error);
                actix_web::HttpResponse::InternalServerError().finish()
            }
        },
    }
}

pub(crate) async fn delete<T: TodoRepository>(
    repository: actix_web::web::Data<T>,
    id: actix_web::web::Path<i32>,
) -> actix_web::HttpResponse {
    match repository.delete(id.into_inner()).await {
        Ok(()) => actix_web::HttpResponse::NoContent().finish(),
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound(_)) => actix_web::HttpResponse::NotFound().finish(),
            _ => {
                log::error!("failed to delete todo: {}", error);
                actix_web::HttpResponse::InternalServerError().finish()
            }
        },
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::TodoRepositoryForMemory;
    use super::*;

    fn label_fixtures() -> Vec<common::Label> {
        vec![
            common::Label {
                id: 1,
                name: "home".to_string(),
            },
            common::Label {
                id: 2,
                name: "work".to_string(),
            },
        ]
    }

    #[test]
    fn fold_rows_groups_labels_under_their_todo() {
        let rows = vec![
            TodoWithLabelRow {
                id: 2,
                text: "write report".to_string(),
                completed: false,
                label_id: Some(2),
                label_name: Some("work".to_string()),
            },
            TodoWithLabelRow {
                id: 2,
                text: "write report".to_string(),
                completed: false,
                label_id: Some(3),
                label_name: Some("urgent".to_string()),
            },
            TodoWithLabelRow {
                id: 1,
                text: "buy milk".to_string(),
                completed: true,
                label_id: None,
                label_name: None,
            },
        ];

        let todos = fold_rows(rows);

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 2);
        assert_eq!(
            todos[0].labels,
            vec![
                common::Label {
                    id: 2,
                    name: "work".to_string(),
                },
                common::Label {
                    id: 3,
                    name: "urgent".to_string(),
                },
            ]
        );
        assert_eq!(todos[1].id, 1);
        assert!(todos[1].completed);
        assert!(todos[1].labels.is_empty());
    }

    #[actix_web::test]
    async fn todo_crud_scenario() {
        let repository = TodoRepositoryForMemory::new(label_fixtures());

        // create
        let created = repository
            .create(common::NewTodoPayload {
                text: "test1".to_string(),
                labels: vec![1],
            })
            .await
            .expect("failed create todo");
        assert_eq!(created.id, 1);
        assert_eq!(created.text, "test1");
        assert!(!created.completed);
        assert_eq!(created.labels, label_fixtures()[..1].to_vec());

        // find
        let todo = repository.find(created.id).await.expect("failed find todo");
        assert_eq!(created, todo);

        // update
        let updated = repository
            .update(
                created.id,
                common::UpdateTodoPayload {
                    id: created.id,
                    text: Some("test2".to_string()),
                    completed: Some(true),
                    labels: Some(vec![2]),
                },
            )
            .await
            .expect("failed update todo");
        assert_eq!(updated.text, "test2");
        assert!(updated.completed);
        assert_eq!(updated.labels, label_fixtures()[1..].to_vec());

        // all
        assert_eq!(
            vec![updated],
            repository.all().await.expect("failed get all todos")
        );

        // delete
        assert!(repository.delete(created.id).await.is_ok());
        assert!(repository.find(created.id).await.is_err());
    }

    #[actix_web::test]
    async fn unknown_label_ids_are_skipped() {
        let repository = TodoRepositoryForMemory::new(label_fixtures());
        let todo = repository
            .create(common::NewTodoPayload {
                text: "test".to_string(),
                labels: vec![2, 99],
            })
            .await
            .expect("failed create todo");
        assert_eq!(todo.labels, label_fixtures()[1..].to_vec());
    }
}
