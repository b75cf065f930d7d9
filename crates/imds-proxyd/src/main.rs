use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use imds_api::HttpApi;
use imds_core::prelude::{
    ConfigSource, MetadataService, ProcessEnv, ProcessTimes, ServerConfig, SystemClock,
};
use imds_observe::{LoggerConfig, init_logger};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) process-lifetime instants, before anything else
    let times = ProcessTimes::capture(&SystemClock)?;

    // 2) logger
    let cfg = LoggerConfig::resolve(|key| ProcessEnv.lookup(key))?;
    init_logger(&cfg)?;
    info!(
        format = %cfg.format,
        level = cfg.level.as_str(),
        started_at = %times.started_at(),
        spot_interruption_time = times.spot_interruption_time(),
        "logger initialized"
    );

    // 3) listener
    let server = ServerConfig::from_source(&ProcessEnv)?;
    let listener = TcpListener::bind(server.listen).await?;

    // 4) service
    let service = MetadataService::new(ProcessEnv, SystemClock, times);
    let app = HttpApi::new(Arc::new(service)).router();

    info!(listen = %server.listen, "ec2 metadata test double started");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("ec2 metadata test double stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
