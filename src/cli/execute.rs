//! Handler for the `execute` command.
//!
//! Runs the execution job in the foreground for an order created elsewhere,
//! without any delay.

use std::sync::Arc;

use tracing::info;

use crate::app::{job, AppState, Config, JobOutcome};
use crate::cli::ExecuteArgs;
use crate::domain::RequestId;
use crate::error::{ExecutionError, Result};

/// Execute the execute command.
pub async fn execute(args: &ExecuteArgs) -> Result<()> {
    let mut config = Config::load(&args.common.config)?;
    args.common.apply(&mut config);

    let credentials = config.credentials()?;

    config.init_logging();

    let state = AppState::from_config(&config, &credentials);
    let context = Arc::clone(state.execution());
    let request_id = RequestId::new(args.request_id.clone());

    match job::run(&context, &args.transaction, &request_id).await {
        JobOutcome::Executed(report) => {
            info!(
                request_id = %request_id,
                signature = %report.signature,
                "Transaction executed successfully"
            );
            println!("{}", report.response);
            Ok(())
        }
        JobOutcome::Failed { reason } => Err(ExecutionError::SubmissionFailed(reason).into()),
    }
}
