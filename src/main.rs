use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;

use webhook_inspector::cli::Args;
use webhook_inspector::{Error, KubeSource, inspect};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the report
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = install_crypto_provider() {
        eprintln!("error: {}", e);
        return ExitCode::from(1);
    }

    match run(&args).await {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(report.as_bytes()).and_then(|_| stdout.flush()) {
                // A closed pipe (e.g. `| head`) is not worth a noisy error
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    eprintln!("error: failed to write report: {}", e);
                    return ExitCode::from(1);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(kind = e.kind(), "Inspection failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(args: &Args) -> Result<String, Error> {
    let client = args.client_options().connect().await?;
    let source = KubeSource::new(client).with_page_size(args.page_size);
    inspect(
        &source,
        args.report_options(),
        args.timeout(),
        shutdown_signal(),
    )
    .await
}

/// Install the TLS crypto provider before any TLS operations
fn install_crypto_provider() -> Result<(), &'static str> {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
        && rustls::crypto::CryptoProvider::get_default().is_none()
    {
        return Err("failed to install rustls crypto provider and no provider is available");
    }
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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
    debug!("Received shutdown signal");
}
