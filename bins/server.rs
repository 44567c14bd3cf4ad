use std::process::ExitCode;

use dotenvy::dotenv;
use server::startup::LoadedConfig;
use tracing::{error, info};
use uuid::Uuid;

/// Runtime sized from `server.worker_threads`.
fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn install_panic_hook(instance: Uuid) {
    std::panic::set_hook(Box::new(move |info| {
        error!(%instance, event = "panic", message = %info, "unhandled panic");
    }));
}

async fn serve_until_ctrl_c(loaded: LoadedConfig) -> ExitCode {
    tokio::select! {
        res = server::run(loaded.config) => match res {
            Ok(()) => {
                info!(event = "stop", "listener closed");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(event = "run_failed", error = %e, "petstore server failed");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!(event = "shutdown_signal", "ctrl-c received, shutting down");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    // .env first so CONFIG_PATH, RUST_LOG and the SERVER_* fallbacks are visible
    dotenv().ok();

    let loaded = server::load_config();
    let json_logs = loaded.as_ref().map(|l| l.config.logging.json).unwrap_or(false);
    common::utils::logging::init_logging(json_logs);

    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };
    loaded.log_source();

    let instance = Uuid::new_v4();
    install_panic_hook(instance);

    let worker_threads = loaded.config.server.worker_threads;
    let rt = match build_runtime(worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        event = "start",
        %instance,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = worker_threads.unwrap_or_default(),
        "petstore starting"
    );
    rt.block_on(serve_until_ctrl_c(loaded))
}
