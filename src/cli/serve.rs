//! Handler for the `serve` command.

use solana_sdk::signer::Signer;
use tokio::signal;
use tracing::{info, warn};

use crate::app::{self, AppState, Config};
use crate::cli::ServeArgs;
use crate::error::Result;

/// Execute the serve command.
///
/// Missing or malformed wallet keys abort before the listener is bound.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load(&args.common.config)?;
    args.common.apply(&mut config);
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let credentials = config.credentials()?;

    config.init_logging();

    if !credentials.keys_match() {
        warn!(
            public_key = %credentials.public_key(),
            signer = %credentials.keypair().pubkey(),
            "PUBLIC_KEY does not match PRIVATE_KEY; the maker slot will not be signed"
        );
    }

    let state = AppState::from_config(&config, &credentials);
    let address = config.server.socket_address();
    info!(
        maker = %credentials.public_key(),
        api_url = %config.jupiter.api_url,
        rpc_url = %config.solana.rpc_url,
        "trigger-scheduler starting"
    );

    tokio::select! {
        result = app::serve(address, state) => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("trigger-scheduler stopped");
    Ok(())
}
