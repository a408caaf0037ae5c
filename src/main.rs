use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tasktracker::app_state::AppState;
use tasktracker::config::Config;
use tasktracker::repository::InMemoryTaskRepository;
use tasktracker::routes;
use tasktracker::service::TaskService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let repository = Arc::new(InMemoryTaskRepository::new());
    let state = AppState {
        task_service: TaskService::new(repository),
    };

    println!(
        "Server running at http://0.0.0.0:{} in {} mode",
        config.port, config.environment
    );
    println!("Health check: http://localhost:{}/health", config.port);
    println!("API endpoints: http://localhost:{}/api/tasks", config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
