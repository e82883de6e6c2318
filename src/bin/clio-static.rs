//! Serves the built single-page frontend. Unknown paths get `index.html`
//! so client-side routes survive a reload.

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, middleware};
use dotenvy::dotenv;

use clio::config::StaticServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let config = match StaticServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let index: PathBuf = config.static_dir.join("index.html");
    if !index.is_file() {
        log::error!("{} not found", index.display());
        std::process::exit(1);
    }

    log::info!(
        "Serving {} on {}:{}",
        config.static_dir.display(),
        config.address,
        config.port
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let index = index.clone();
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
