use tracing_subscriber::EnvFilter;

use rcon_ui_verify::{verifier, VerifyConfig};

#[tokio::main]
async fn main() -> rcon_ui_verify::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    verifier::run(&VerifyConfig::default()).await
}
