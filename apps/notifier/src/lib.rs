//! # Notifier
//!
//! 通知種別に応じて本文生成の Strategy を選び、送出するアプリケーション層。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - アプリケーション層のエラー
//! - [`scenario`] - ビジネス通知 → 例外通知を順に送るデモシナリオ
//! - [`usecase`] - Strategy の選択と送出を統合する `NotificationManager`

pub mod config;
pub mod error;
pub mod scenario;
pub mod usecase;

pub use error::NotifierError;
pub use usecase::NotificationManager;
