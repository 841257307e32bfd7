//! Process bootstrap shared by the `clients` and `products` binaries.

use dotenvy::dotenv;
use server::ServiceKind;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(kind: ServiceKind) {
    // load .env first so RUST_LOG / LOG_FORMAT take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = kind.name(), event = "logger_init", "tracing subscriber initialized");
}

pub fn main(kind: ServiceKind) -> std::process::ExitCode {
    init_logging(kind);
    let service = kind.name();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_for_service(service) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    rt.block_on(async move {
        match server::run(kind, cfg).await {
            Ok(()) => {
                info!(service, event = "stop", %service_id, pid, "service stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service, event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
