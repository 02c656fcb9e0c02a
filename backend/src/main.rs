mod error;
mod label;
mod todo;

fn routes<T, L>(cfg: &mut actix_web::web::ServiceConfig)
where
    T: todo::TodoRepository,
    L: label::LabelRepository,
{
    cfg.route("/todos", actix_web::web::get().to(todo::index::<T>))
        .route("/todos", actix_web::web::post().to(todo::create::<T>))
        .route("/todos/{id}", actix_web::web::get().to(todo::find::<T>))
        .route("/todos/{id}", actix_web::web::patch().to(todo::update::<T>))
        .route("/todos/{id}", actix_web::web::delete().to(todo::delete::<T>))
        .route("/labels", actix_web::web::get().to(label::index::<L>))
        .route("/labels", actix_web::web::post().to(label::create::<L>))
        .route("/labels/{id}", actix_web::web::delete().to(label::delete::<L>));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("undefined [DATABASE_URL]");
    let server_port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .expect("Port must be a u16");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .unwrap_or_else(|_| panic!("fail connect database, url is [{}]", database_url));
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let todo_repository = actix_web::web::Data::new(todo::TodoRepositoryForDb::new(pool.clone()));
    let label_repository = actix_web::web::Data::new(label::LabelRepositoryForDb::new(pool));

    log::info!("listening on 0.0.0.0:{}", server_port);
    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(todo_repository.clone())
            .app_data(label_repository.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .configure(routes::<todo::TodoRepositoryForDb, label::LabelRepositoryForDb>)
    })
    .bind(("0.0.0.0", server_port))?
    .run()
    .await
}
