//! ReqGen - Synthetic Trade-Clearing Request Generator
//!
//! Entry point. Flow:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│ Generator │───▶│  Output  │
//! │  (YAML)  │    │  (rand)   │    │ (stdout) │
//! └──────────┘    └───────────┘    └──────────┘
//! ```

use anyhow::Result;

use reqgen::config::{AppConfig, ConfigError};
use reqgen::generator::RequestGenerator;
use reqgen::logging::init_logging;
use reqgen::render::render_request;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn main() -> Result<()> {
    let env = get_env();
    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        // No config file is fine for a one-shot generator run
        Err(ConfigError::Read { .. }) => AppConfig::default(),
        Err(err) => return Err(err.into()),
    };
    let _guard = init_logging(&config);

    let mut generator = RequestGenerator::new();
    let requests = generator.generate_requests(config.generator.request_count);
    tracing::info!(count = requests.len(), env = %env, "generated request batch");

    for request in &requests {
        println!("{}", render_request(request));
    }

    Ok(())
}
