use crate::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait LabelRepository: Send + Sync + 'static {
    async fn create(&self, name: String) -> anyhow::Result<common::Label>;
    async fn all(&self) -> anyhow::Result<Vec<common::Label>>;
    async fn delete(&self, id: i32) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct LabelRepositoryForDb {
    pool: sqlx::PgPool,
}

impl LabelRepositoryForDb {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelRepository for LabelRepositoryForDb {
    async fn create(&self, name: String) -> anyhow::Result<common::Label> {
        let existing = sqlx::query_as::<_, (i32, String)>(
            r#"
            select id, name from labels where name = $1
            "#,
        )
        .bind(&name)
        .fetch_optional(&self.pool)
        .await?;
        if let Some((id, _)) = existing {
            return Err(RepositoryError::Duplicate(id).into());
        }

        let (id, name) = sqlx::query_as::<_, (i32, String)>(
            r#"
            insert into labels (name) values ($1)
            returning id, name
            "#,
        )
        .bind(&name)
        .fetch_one(&self.pool)
        .await?;
        Ok(common::Label { id, name })
    }

    async fn all(&self) -> anyhow::Result<Vec<common::Label>> {
        let rows = sqlx::query_as::<_, (i32, String)>(
            r#"
            select id, name from labels order by id asc
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| common::Label { id, name })
            .collect())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        // todo_labels rows go with the label through the cascade.
        let result = sqlx::query(
            r#"
            delete from labels where id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|error| RepositoryError::Unexpected(error.to_string()))?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id).into());
        }
        Ok(())
    }
}

pub(crate) async fn index<L: LabelRepository>(
    repository: actix_web::web::Data<L>,
) -> actix_web::HttpResponse {
    match repository.all().await {
        Ok(labels) => actix_web::HttpResponse::Ok().json(labels),
        Err(error) => {
            log::error!("failed to list labels: {}", error);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) async fn create<L: LabelRepository>(
    repository: actix_web::web::Data<L>,
    payload: actix_web::web::Json<common::NewLabelPayload>,
) -> actix_web::HttpResponse {
    let payload = payload.into_inner();
    if payload.name.is_empty() {
        return actix_web::HttpResponse::BadRequest().finish();
    }
    match repository.create(payload.name).await {
        Ok(label) => actix_web::HttpResponse::Created().json(label),
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::Duplicate(_)) => actix_web::HttpResponse::Conflict().finish(),
            _ => {
                log::error!("failed to create label: {}", error);
                actix_web::HttpResponse::InternalServerError().finish()
            }
        },
    }
}

pub(crate) async fn delete<L: LabelRepository>(
    repository: actix_web::web::Data<L>,
    id: actix_web::web::Path<i32>,
) -> actix_web::HttpResponse {
    match repository.delete(id.into_inner()).await {
        Ok(()) => actix_web::HttpResponse::NoContent().finish(),
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound(_)) => actix_web::HttpResponse::NotFound().finish(),
            _ => {
                log::error!("failed to delete label: {}", error);
                actix_web::HttpResponse::InternalServerError().finish()
            }
        },
    }
}
