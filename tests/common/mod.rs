#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use hrdash::client::ResourceGateway;
use hrdash::entity::Resource;
use hrdash::error::ApiError;
use hrdash::models::Document;
use hrdash::session::Session;

/// In-memory gateway double. Counts every call so tests can assert the
/// auth gate short-circuits before any network work.
pub struct FakeGateway<T: Resource> {
    items: Mutex<Vec<T>>,
    fail_save_message: Mutex<Option<String>>,
    assign_id: Mutex<Option<String>>,
    hang_save: AtomicBool,
    calls: AtomicUsize,
}

impl<T: Resource> FakeGateway<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_save_message: Mutex::new(None),
            assign_id: Mutex::new(None),
            hang_save: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Every save fails with a server-style validation message.
    pub fn failing_save(message: &str) -> Self {
        let gateway = Self::empty();
        *gateway.fail_save_message.lock().unwrap() = Some(message.to_string());
        gateway
    }

    /// Saves record the call and then never complete.
    pub fn hanging_save() -> Self {
        let gateway = Self::empty();
        gateway.hang_save.store(true, Ordering::SeqCst);
        gateway
    }

    /// Creates get this server-assigned id.
    pub fn assigning_id(id: &str) -> Self {
        let gateway = Self::empty();
        *gateway.assign_id.lock().unwrap() = Some(id.to_string());
        gateway
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for FakeGateway<T> {
    async fn list(&self, _token: &str) -> Result<Vec<T>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.lock().unwrap().clone())
    }

    async fn save(&self, _token: &str, entity: &T, is_update: bool) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_save.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if let Some(message) = self.fail_save_message.lock().unwrap().clone() {
            return Err(ApiError::Validation { message });
        }
        let mut saved = entity.clone();
        if !is_update {
            if let Some(id) = self.assign_id.lock().unwrap().clone() {
                saved.set_id(id);
            }
        }
        Ok(saved)
    }

    async fn remove(&self, _token: &str, _id: &str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn authed_session() -> Session {
    Session {
        token: Some("test-token".to_string()),
        role: Some("Administrator".to_string()),
    }
}

pub fn anonymous_session() -> Session {
    Session::default()
}

pub fn doc(id: &str, name: &str) -> Document {
    Document {
        ess_id: id.to_string(),
        nama_dokumen: name.to_string(),
        ..Document::default()
    }
}
