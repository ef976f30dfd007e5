use std::process::ExitCode;

use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    let cfg = match server::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    server::init_logging(cfg.logging.format);

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "hotel-api", event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "hotel-api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "hotel-api",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "hotel api starting"
    );

    // serve() returns once Ctrl+C has drained in-flight requests.
    match rt.block_on(server::serve(cfg)) {
        Ok(()) => {
            info!(service = "hotel-api", event = "stop", %instance_id, pid, "server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "hotel-api", event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
