//! Подменный gateway для тестов: детерминированный хост без Zoho.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use contracts::domain::common::UserRef;
use contracts::usecases::u101_update_subform::{
    UpdateOutcome, UpdateOutcomeDetails, UpdateRecordCall, UpdateResponse,
};

use crate::host::{HostError, HostGateway};

pub fn success_response(record_id: &str) -> UpdateResponse {
    UpdateResponse {
        data: vec![UpdateOutcome {
            code: "SUCCESS".to_string(),
            message: "record updated".to_string(),
            status: "success".to_string(),
            details: Some(UpdateOutcomeDetails {
                modified_time: "2024-03-05T14:30:00-05:00".to_string(),
                modified_by: UserRef::new("Jane Doe", "u-1"),
                created_time: "2024-01-10T09:00:00-05:00".to_string(),
                id: record_id.to_string(),
            }),
        }],
    }
}

pub struct FakeGateway {
    ready_after: u32,
    poll_count: AtomicU32,
    api_available: bool,
    dev: bool,
    page_load: Mutex<Option<Value>>,
    update_result: Mutex<Result<UpdateResponse, HostError>>,
    pub update_calls: Mutex<Vec<UpdateRecordCall>>,
    pub resize_calls: AtomicU32,
    pub close_calls: AtomicU32,
    resize_available: bool,
    close_available: bool,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            ready_after: 0,
            poll_count: AtomicU32::new(0),
            api_available: true,
            dev: false,
            page_load: Mutex::new(None),
            update_result: Mutex::new(Ok(success_response("rec-1"))),
            update_calls: Mutex::new(Vec::new()),
            resize_calls: AtomicU32::new(0),
            close_calls: AtomicU32::new(0),
            resize_available: true,
            close_available: true,
        }
    }

    pub fn sdk_ready_after(mut self, polls: u32) -> Self {
        self.ready_after = polls;
        self
    }

    pub fn sdk_never_ready(mut self) -> Self {
        self.ready_after = u32::MAX;
        self
    }

    pub fn dev_host(mut self) -> Self {
        self.dev = true;
        self
    }

    pub fn without_api(mut self) -> Self {
        self.api_available = false;
        self
    }

    pub fn without_resize(mut self) -> Self {
        self.resize_available = false;
        self
    }

    pub fn without_close(mut self) -> Self {
        self.close_available = false;
        self
    }

    pub fn with_page_load(self, payload: Value) -> Self {
        *self.page_load.lock().unwrap() = Some(payload);
        self
    }

    pub fn with_update_response(self, response: UpdateResponse) -> Self {
        *self.update_result.lock().unwrap() = Ok(response);
        self
    }

    pub fn with_update_failure(self, message: &str) -> Self {
        *self.update_result.lock().unwrap() = Err(HostError::Call {
            message: message.to_string(),
        });
        self
    }

    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }

    pub fn last_update_call(&self) -> Option<UpdateRecordCall> {
        self.update_calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HostGateway for FakeGateway {
    fn sdk_ready(&self) -> bool {
        if self.ready_after == u32::MAX {
            return false;
        }
        self.poll_count.fetch_add(1, Ordering::SeqCst) >= self.ready_after
    }

    fn is_api_available(&self) -> bool {
        self.api_available
    }

    fn is_dev_host(&self) -> bool {
        self.dev
    }

    fn init(&self) -> Result<(), HostError> {
        Ok(())
    }

    async fn next_page_load(&self) -> Option<Value> {
        let payload = self.page_load.lock().unwrap().take();
        match payload {
            Some(value) => Some(value),
            // событие не запланировано — ждём вечно, таймаут снаружи
            None => std::future::pending().await,
        }
    }

    async fn update_record(&self, call: UpdateRecordCall) -> Result<UpdateResponse, HostError> {
        self.update_calls.lock().unwrap().push(call);
        self.update_result.lock().unwrap().clone()
    }

    async fn resize(&self, _height: &str, _width: &str) -> Result<(), HostError> {
        if !self.resize_available {
            return Err(HostError::Unavailable {
                capability: "resize",
            });
        }
        self.resize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) -> Result<(), HostError> {
        if !self.close_available {
            return Err(HostError::Unavailable { capability: "close" });
        }
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
