use thiserror::Error;

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while turning a created order into a submitted transaction.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to decode transaction: {0}")]
    Decode(String),

    #[error("failed to sign transaction: {0}")]
    SigningFailed(String),

    #[error("failed to encode signed transaction: {0}")]
    Encode(String),

    #[error("execute request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to submit order: {0}")]
    SubmissionFailed(String),
}

/// Errors returned by the aggregator's create-order endpoint.
#[derive(Error, Debug)]
pub enum CreateOrderError {
    #[error("createOrder returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("createOrder response missing transaction or request id")]
    Incomplete { response: serde_json::Value },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    CreateOrder(#[from] CreateOrderError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RPC error: {0}")]
    Rpc(String),
}

pub type Result<T> = std::result::Result<T, Error>;
