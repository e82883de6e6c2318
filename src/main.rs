use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use clio::auth::TokenIssuer;
use clio::config::ServerConfig;
use clio::dates::{Clock, SystemClock};
use clio::repository::DieselRepository;
use clio::routes::configure;
use clio::services::auth::seed_admin;
use clio::settings::{JsonFileSettingsStore, Preferences, SettingsStore, SharedPreferences};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let issuer = match TokenIssuer::new(&config.secret_key, config.token_ttl_secs) {
        Ok(issuer) => issuer,
        Err(e) => {
            log::error!("Invalid SECRET_KEY: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Some(admin) = &config.admin {
        if let Err(e) = seed_admin(&repo, &admin.name, &admin.email, &admin.password) {
            log::error!("Failed to create the initial administrator: {e}");
            std::process::exit(1);
        }
    }

    let store: Box<dyn SettingsStore> = Box::new(JsonFileSettingsStore::new(&config.settings_path));
    let preferences: SharedPreferences = match Preferences::init(store) {
        Ok(preferences) => preferences,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.settings_path.display());
            std::process::exit(1);
        }
    };
    let preferences = web::Data::new(preferences);

    let clock: web::Data<dyn Clock> = web::Data::from(Arc::new(SystemClock) as Arc<dyn Clock>);

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(issuer.clone()))
            .app_data(preferences.clone())
            .app_data(clock.clone())
            .configure(configure)
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
