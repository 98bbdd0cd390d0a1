#[macro_use]
extern crate rocket;

use std::process::ExitCode;
use std::time::SystemTime;

use log::LevelFilter;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use crate::config::{parse_config, IntakeConfig};
use crate::fairing::Cors;
use crate::handler::{
    api_handler::{health_check, json_catcher, preflight},
    submission_handler::submit_delivery,
};
use crate::upload::UploadStore;

mod config;
mod fairing;
mod handler;
mod model;
mod service;
#[cfg(test)]
mod test;
mod upload;

/// builds the server around an upload directory that has already been prepared
pub fn build_rocket(config: &IntakeConfig, store: UploadStore) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));
    rocket::custom(figment)
        .attach(Cors)
        .attach(AdHoc::on_liftoff("Startup message", |rocket| {
            Box::pin(async move {
                log::info!("Server is running on port {}", rocket.config().port);
            })
        }))
        .manage(store)
        .manage(config.upload.clone())
        .mount("/", routes![health_check, preflight])
        .mount("/api", routes![submit_delivery])
        .register("/", catchers![json_catcher])
}

fn setup_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // rocket is very chatty at info
        .level_for("rocket", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}

#[rocket::main]
async fn main() -> ExitCode {
    let config = match parse_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse config file. Exception is {e}");
            return ExitCode::FAILURE;
        }
    };
    let level = config.logging.level.parse().unwrap_or_else(|_| {
        eprintln!(
            "Unknown log level {}, falling back to info",
            config.logging.level
        );
        LevelFilter::Info
    });
    if let Err(e) = setup_logger(level) {
        eprintln!("Failed to set up logging. Exception is {e}");
        return ExitCode::FAILURE;
    }
    // the upload directory has to exist before we take any requests
    let store = match UploadStore::prepare(&config.upload.directory) {
        Ok(store) => store,
        Err(e) => {
            log::error!(
                "Failed to create upload directory {}. Exception is {e}",
                config.upload.directory
            );
            return ExitCode::FAILURE;
        }
    };
    log::info!("Storing uploads in {:?}", store.directory());
    if let Err(e) = build_rocket(&config, store).launch().await {
        log::error!("Server stopped unexpectedly. Exception is {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
