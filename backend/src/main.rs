mod fee;
mod tenant;

struct AppState {
    pool: sqlx::Pool<sqlx::Sqlite>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rentroll.db?mode=rwc".into());
    let server_port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse::<u16>()
        .expect("Port must be a u16");

    let pool = sqlx::pool::PoolOptions::new()
        .connect(&database_url)
        .await
        .expect("Could not connect to the DB");
    tenant::init_schema(&pool)
        .await
        .expect("Could not initialise the schema");
    log::info!("serving on port {server_port}");

    let app_state = actix_web::web::Data::new(AppState { pool });

    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(app_state.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .route("/tenants", actix_web::web::get().to(tenant::index))
            .route("/add", actix_web::web::post().to(tenant::create))
            .route(
                "/mark_paid/{id}",
                actix_web::web::put().to(tenant::mark_paid),
            )
            .route("/reminder/{id}", actix_web::web::get().to(tenant::reminder))
    })
    .bind(("0.0.0.0", server_port))?
    .run()
    .await
}
