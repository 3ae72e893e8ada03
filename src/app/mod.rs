//! Application layer - configuration, shared state, HTTP surface and the
//! delayed execution job.

pub mod config;
pub mod job;
pub mod scheduler;
pub mod server;
mod state;

pub use config::{
    Config, Credentials, JupiterConfig, LogFormat, LoggingConfig, ServerConfig, SolanaConfig,
    WalletConfig,
};
pub use job::{ExecutionReport, JobOutcome};
pub use scheduler::{spawn_execution, ScheduledExecution};
pub use server::{routes, serve};
pub use state::{AppState, ExecutionContext};
