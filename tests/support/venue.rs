//! Mock [`TriggerApi`] and [`SignatureStatusSource`] implementations.
//!
//! Both mocks record every call so tests can assert on what was sent and
//! whether anything was scheduled at all.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use solana_sdk::signature::Signature;
use tokio::sync::Notify;

use trigger_scheduler::error::{CreateOrderError, Error, ExecutionError};
use trigger_scheduler::exchange::{
    ConfirmationStatus, CreateOrderPayload, ExecuteRequest, SignatureStatusSource, TriggerApi,
};

/// Scripted createOrder behavior.
#[derive(Debug, Clone)]
pub enum CreateBehavior {
    Respond(Value),
    Status(u16, String),
}

/// Scripted execute behavior.
#[derive(Debug, Clone)]
pub enum ExecuteBehavior {
    Respond(Value),
    Reject(u16, String),
}

/// Venue mock recording create and execute calls.
pub struct MockTriggerApi {
    create: CreateBehavior,
    execute: ExecuteBehavior,
    created: Mutex<Vec<CreateOrderPayload>>,
    executed: Mutex<Vec<ExecuteRequest>>,
    execute_seen: Notify,
}

impl MockTriggerApi {
    pub fn new(create: CreateBehavior, execute: ExecuteBehavior) -> Self {
        Self {
            create,
            execute,
            created: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
            execute_seen: Notify::new(),
        }
    }

    /// createOrder answers with `transaction` and `request_id`; execute succeeds.
    pub fn accepting(transaction: &str, request_id: &str) -> Self {
        Self::new(
            CreateBehavior::Respond(json!({"requestId": request_id, "transaction": transaction})),
            ExecuteBehavior::Respond(json!({"status": "Success", "signature": "sig"})),
        )
    }

    pub fn created(&self) -> Vec<CreateOrderPayload> {
        self.created.lock().unwrap().clone()
    }

    pub fn executed(&self) -> Vec<ExecuteRequest> {
        self.executed.lock().unwrap().clone()
    }

    /// Wait until execute has been called, or panic after `timeout`.
    pub async fn wait_for_execute(&self, timeout: Duration) -> ExecuteRequest {
        tokio::time::timeout(timeout, self.execute_seen.notified())
            .await
            .expect("execute was not called in time");
        self.executed()
            .last()
            .cloned()
            .expect("execute call recorded")
    }
}

#[async_trait]
impl TriggerApi for MockTriggerApi {
    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<Value, Error> {
        self.created.lock().unwrap().push(payload.clone());
        match &self.create {
            CreateBehavior::Respond(body) => Ok(body.clone()),
            CreateBehavior::Status(status, body) => Err(CreateOrderError::Status {
                status: *status,
                body: body.clone(),
            }
            .into()),
        }
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<Value, Error> {
        self.executed.lock().unwrap().push(request.clone());
        self.execute_seen.notify_one();
        match &self.execute {
            ExecuteBehavior::Respond(body) => Ok(body.clone()),
            ExecuteBehavior::Reject(status, body) => Err(ExecutionError::Rejected {
                status: *status,
                body: body.clone(),
            }
            .into()),
        }
    }

    fn venue_name(&self) -> &'static str {
        "mock"
    }
}

/// Status source returning a fixed answer.
pub struct MockStatuses {
    status: Result<Option<ConfirmationStatus>, String>,
    queried: Mutex<Vec<Signature>>,
}

impl MockStatuses {
    pub fn returning(status: Option<ConfirmationStatus>) -> Self {
        Self {
            status: Ok(status),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            status: Err(message.to_string()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<Signature> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignatureStatusSource for MockStatuses {
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<ConfirmationStatus>, Error> {
        self.queried.lock().unwrap().push(*signature);
        self.status.clone().map_err(Error::Rpc)
    }
}
