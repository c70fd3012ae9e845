//! # Notifier エラーハンドリング
//!
//! アプリケーション層で発生するエラーの定義。
//! バイナリの境界では `anyhow::Error` に変換して返す。

use notiflow_domain::NotificationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Notifier 層で発生するエラー
#[derive(Debug, Error)]
pub enum NotifierError {
    /// 設定の読み込みに失敗
    #[error("設定エラー: {0}")]
    Config(#[from] ConfigError),

    /// 通知の生成・送出に失敗
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// デモシナリオが意図的に起こす障害
    #[error("{0}")]
    Simulated(String),
}
