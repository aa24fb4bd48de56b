//! Orgzaar API server
//!
//! ```text
//! cargo run -- --env dev --port 5000
//! ```

use orgzaar_api::config::AppConfig;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = orgzaar_api::logging::init_logging(&app_config);

    tracing::info!(
        "Starting Orgzaar API v{} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let addr = app_config.bind_addr(get_port_override());
    orgzaar_api::run_server(&addr).await
}
