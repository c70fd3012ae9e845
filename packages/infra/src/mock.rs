//! # テスト用モックディスパッチャ
//!
//! ユースケーステストで使用するインメモリの記録型ディスパッチャ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! notiflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use notiflow_domain::{
    NotificationError,
    notification::{Addressing, NotificationKind, NotificationStyle},
    strategy::NotificationStrategy,
};

use crate::dispatcher::NotificationDispatcher;

/// 送出された通知の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub kind:       NotificationKind,
    pub addressing: Addressing,
    pub body:       String,
    pub style:      NotificationStyle,
}

// ===== MockNotificationDispatcher =====

#[derive(Clone, Default)]
pub struct MockNotificationDispatcher {
    records:      Arc<Mutex<Vec<DispatchRecord>>>,
    banners:      Arc<Mutex<Vec<String>>>,
    fail_message: Option<String>,
}

impl MockNotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に `DispatchFailed` を返すモックを作成
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn banners(&self) -> Vec<String> {
        self.banners.lock().unwrap().clone()
    }
}

impl NotificationDispatcher for MockNotificationDispatcher {
    fn dispatch(&self, strategy: &dyn NotificationStrategy) -> Result<(), NotificationError> {
        let body = strategy.body().ok_or(NotificationError::BodyNotBuilt)?;

        if let Some(message) = &self.fail_message {
            return Err(NotificationError::DispatchFailed(message.clone()));
        }

        self.records.lock().unwrap().push(DispatchRecord {
            kind:       strategy.kind(),
            addressing: strategy.addressing().clone(),
            body:       body.to_string(),
            style:      strategy.style(),
        });
        Ok(())
    }

    fn announce(&self, text: &str) -> Result<(), NotificationError> {
        if let Some(message) = &self.fail_message {
            return Err(NotificationError::DispatchFailed(message.clone()));
        }

        self.banners.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
