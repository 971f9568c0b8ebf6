use anyhow::Result;
use gumdrop::Options;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use bls_sig::curve::bls12381::PairingCurve;
use sig_handshake::{config::HandshakeConfig, opts::Opts, run};

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse_args_default_or_exit();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&opts.log_level),
        )
        .init();

    let config = HandshakeConfig::from(opts);
    let verdict = run::<PairingCurve>(&config).await?;
    println!("{}", verdict);

    if !verdict.is_verified() {
        process::exit(1);
    }
    Ok(())
}
