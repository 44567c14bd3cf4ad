use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::observability;
use crate::routes::{self, ServerState};
use service::{file::attachments::AttachmentStore, runtime, PetStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Where the running configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File,
    /// No readable config file; the reason is kept so it can be logged once logging is up.
    Environment(String),
}

/// Configuration read once at process start and handed to everything that needs it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File => info!("configuration loaded from file"),
            ConfigSource::Environment(reason) => {
                warn!(%reason, "config file not loaded; using environment and defaults")
            }
        }
    }
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = port;
    }
    if let Some(w) = env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    if let Ok(dir) = env::var("UPLOAD_DIR") {
        cfg.uploads.dir = dir;
    }
}

/// Load configuration from `CONFIG_PATH`/`config.toml`, falling back to env vars.
pub fn load_config() -> Result<LoadedConfig, StartupError> {
    let (mut config, source) = match configs::load_default() {
        Ok(cfg) => (cfg, ConfigSource::File),
        Err(e) => {
            let mut cfg = AppConfig::default();
            apply_env_overrides(&mut cfg);
            (cfg, ConfigSource::Environment(e.to_string()))
        }
    };
    config
        .normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(LoadedConfig { config, source })
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Construct the process-wide state: an empty catalog and the upload sink.
pub fn build_state(cfg: &AppConfig) -> ServerState {
    ServerState {
        pets: Arc::new(PetStore::with_first_id(cfg.store.first_id)),
        attachments: Arc::new(AttachmentStore::new(&cfg.uploads.dir)),
    }
}

pub fn build_app(state: ServerState) -> Router {
    observability::init();
    routes::build_router(state, build_cors())
}

/// Build the app from an already loaded configuration and serve it until the listener fails.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    runtime::ensure_env(&cfg.uploads.dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let app = build_app(build_state(&cfg));

    let addr = bind_addr(&cfg)?;
    info!(%addr, first_id = cfg.store.first_id, upload_dir = %cfg.uploads.dir, "starting petstore server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_honours_first_id() {
        let mut cfg = AppConfig::default();
        cfg.store.first_id = 500;
        let state = build_state(&cfg);
        assert_eq!(state.pets.add(models::Pet::default()).unwrap().id, 500);
    }

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn run_reports_bind_failure_as_io() {
        let taken = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let tmp = tempfile::tempdir().unwrap();

        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = port;
        cfg.uploads.dir = tmp.path().join("uploads").to_string_lossy().into_owned();
        assert!(matches!(run(cfg).await, Err(StartupError::Io(_))));
    }
}
