//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `henryflix_core` linkage by running the signup-to-rating walkthrough.
//! - Start file logging when `HENRYFLIX_LOG_DIR` is set.

use henryflix_core::{init_logging, CatalogResult, CatalogService, LogConfig};
use std::fmt::Display;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(config) = LogConfig::from_env() {
        if let Err(err) = config.and_then(|config| init_logging(&config)) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("henryflix_core version={}", henryflix_core::core_version());

    let mut service = CatalogService::in_memory();
    report("add_user", service.add_user("a@x.com", "Ana"));
    report(
        "add_serie",
        service
            .add_serie("Dark", 3, "premium", 2017)
            .map(|catalog| catalog.len()),
    );
    report("play", service.play("Dark", "a@x.com"));
    report("switch_plan", service.switch_plan("a@x.com"));
    report("play", service.play("Dark", "a@x.com"));
    report("rate_serie", service.rate_serie("Dark", "a@x.com", 5.0));

    match service.list_series(None) {
        Ok(listed) => {
            for series in listed {
                println!(
                    "{} category={} rating={}",
                    series.name, series.category, series.rating
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!(
                "event=cli_list module=cli status=error error_code={}",
                err.kind()
            );
            eprintln!("list_series: {err}");
            ExitCode::FAILURE
        }
    }
}

fn report<T: Display>(step: &str, result: CatalogResult<T>) {
    match result {
        Ok(value) => println!("{step}: {value}"),
        Err(err) => println!("{step} failed: {err}"),
    }
}
