//! Fire-and-forget scheduling of execution jobs.
//!
//! Jobs live only in process memory: a job whose delay has not elapsed when
//! the process exits never runs.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::FutureExt;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::app::job::{self, JobOutcome};
use crate::app::state::ExecutionContext;
use crate::domain::RequestId;
use crate::exchange::CreatedOrder;

/// An execution job waiting for its delay to elapse.
#[derive(Debug, Clone)]
pub struct ScheduledExecution {
    /// Unsigned transaction, base64-encoded.
    pub transaction: String,
    pub request_id: RequestId,
    pub delay: Duration,
    pub fire_at: DateTime<Utc>,
}

impl ScheduledExecution {
    #[must_use]
    pub fn new(order: CreatedOrder, delay: Duration) -> Self {
        let fire_at = chrono::Duration::from_std(delay)
            .ok()
            .and_then(|delay| Utc::now().checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            transaction: order.transaction,
            request_id: order.request_id,
            delay,
            fire_at,
        }
    }
}

/// Spawn the job on the runtime and return immediately.
///
/// The returned handle may be dropped; the job keeps running detached. Panics
/// inside the job are caught and logged like any other failure.
pub fn spawn_execution(
    context: Arc<ExecutionContext>,
    execution: ScheduledExecution,
) -> JoinHandle<JobOutcome> {
    info!(
        request_id = %execution.request_id,
        delay_secs = execution.delay.as_secs(),
        fire_at = %execution.fire_at.to_rfc3339(),
        "Execution scheduled"
    );

    tokio::spawn(async move {
        tokio::time::sleep(execution.delay).await;

        let request_id = execution.request_id.clone();
        let job = job::run(&context, &execution.transaction, &execution.request_id);
        match AssertUnwindSafe(job).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(_) => {
                error!(
                    at = %Utc::now().to_rfc3339(),
                    request_id = %request_id,
                    "Execution job panicked"
                );
                JobOutcome::Failed {
                    reason: "job panicked".into(),
                }
            }
        }
    })
}
