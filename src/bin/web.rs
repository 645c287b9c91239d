//! Single binary web server: page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; override with env HOST, PORT.
//! Scores are stored in SQLite at DATABASE_PATH (default data/padel.db).

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use padel_tournament_web::{api, Database, ServerConfig, TournamentService};
use std::sync::Mutex;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let db = Database::open(&config.database_path).map_err(|e| {
        log::error!("Cannot open database {}: {}", config.database_path.display(), e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;
    log::info!("Using database {}", config.database_path.display());

    let service = TournamentService::new(db);
    if let Err(e) = service.ensure_seeded() {
        log::error!("Failed to seed first cycle: {}", e);
    }
    let state = Data::new(Mutex::new(service));

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
