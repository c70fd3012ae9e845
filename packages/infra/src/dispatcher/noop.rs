//! Noop 送出実装
//!
//! 本文を出力せず、ログ出力のみ行う。
//! 出力を抑止したい実行やテストで使用する。

use notiflow_domain::{NotificationError, strategy::NotificationStrategy};

use super::NotificationDispatcher;

/// Noop 送出（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopDispatcher;

impl NotificationDispatcher for NoopDispatcher {
    fn dispatch(&self, strategy: &dyn NotificationStrategy) -> Result<(), NotificationError> {
        let body = strategy.body().ok_or(NotificationError::BodyNotBuilt)?;

        tracing::info!(
            notification.kind = %strategy.kind(),
            to = %strategy.addressing().to,
            body_len = body.len(),
            "Noop: 通知の送出をスキップ"
        );
        Ok(())
    }

    fn announce(&self, text: &str) -> Result<(), NotificationError> {
        tracing::info!(banner = text, "Noop: バナーの出力をスキップ");
        Ok(())
    }
}
