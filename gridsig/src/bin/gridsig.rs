//! gridsig daemon: prints ISO-NE total-emissions signals until Ctrl-C.
//!
//! Usage: `gridsig [raw] [CONFIG.json]`
//!
//! `raw` performs a single fetch and prints the response body. `CONFIG.json` is a
//! serialized `SourceConfig`; omitted fields keep their defaults. Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::error::Error;
use std::path::Path;

use gridsig::pipeline::forward;
use gridsig::sink::{DEFAULT_CAPACITY, StdoutSink};
use gridsig::{Sink, Source, SourceConfig};
use gridsig_core::Fetcher;
use gridsig_isone::{EmissionsSource, HttpFetcher};
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let mut raw = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "raw" {
            raw = true;
        } else {
            config_path = Some(arg);
        }
    }
    let cfg = match config_path {
        Some(path) => load_config(Path::new(&path))?,
        None => SourceConfig::default(),
    };

    if raw {
        print_raw(&cfg).await
    } else {
        run(&cfg).await
    }
}

fn load_config(path: &Path) -> Result<SourceConfig, Box<dyn Error>> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn print_raw(cfg: &SourceConfig) -> Result<(), Box<dyn Error>> {
    let mut fetcher = HttpFetcher::emissions(cfg)?;
    let body = fetcher.raw_data().await?;
    let mut out = tokio::io::stdout();
    out.write_all(&body).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

async fn run(cfg: &SourceConfig) -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "tracing")]
    tracing::info!(endpoint = %cfg.endpoint, "setting up sources and sinks");
    let mut src = EmissionsSource::from_config(cfg)?;
    let mut snk = StdoutSink::stdout().spawn(DEFAULT_CAPACITY)?;

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            #[cfg(feature = "tracing")]
            tracing::info!("interrupted, shutting down");
        }
        (_delivered, _end) = forward(&mut src, &snk) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(delivered = _delivered, end = ?_end, "pipeline ended");
        }
    }

    src.close().await?;
    snk.close().await?;
    Ok(())
}
