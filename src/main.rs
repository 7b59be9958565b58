//! Health Metrics Engine CLI
//!
//! Reads one JSON request (from the file named by the first argument or `HM_REQUEST_PATH`,
//! otherwise stdin) and writes one JSON response to stdout.

use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use healthmetrics::build_info::{self, BuildInfo};
use healthmetrics::config::EngineConfig;
use healthmetrics::tools::{dispatch, Request};

/// Request file from the command line or environment, if any
fn get_request_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("HM_REQUEST_PATH").ok())
        .map(PathBuf::from)
}

fn read_request() -> Result<String, std::io::Error> {
    match get_request_path() {
        Some(path) => {
            eprintln!("Reading request from {}", path.display());
            std::fs::read_to_string(path)
        }
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[derive(Serialize)]
struct Response {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    build: BuildInfo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries only the response
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("healthmetrics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = EngineConfig::from_env()?;
    let input = read_request()?;

    let outcome = serde_json::from_str::<Request>(&input)
        .map_err(|e| format!("Invalid request: {}", e))
        .and_then(|request| dispatch(request, &config));

    let response = match outcome {
        Ok(result) => Response {
            ok: true,
            result: Some(result),
            error: None,
            build: BuildInfo::current(),
        },
        Err(error) => Response {
            ok: false,
            result: None,
            error: Some(error),
            build: BuildInfo::current(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.ok {
        std::process::exit(1);
    }
    Ok(())
}
