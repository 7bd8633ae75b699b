use clap::Parser;
use crate::config::Settings;
use log::error;

mod app;
mod clients;
mod config;
mod db;
mod domain;
mod errors;
mod report;

#[cfg(test)]
mod tests;

fn main() {
    let settings = Settings::parse();

    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    if let Err(e) = app::run(&settings) {
        error!("{e}");
        std::process::exit(1);
    }
}
