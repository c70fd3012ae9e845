//! # NotiFlow 共有ユーティリティ
//!
//! ワークスペース内のすべてのクレート（domain, infra, notifier）から利用される
//! 共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング初期化は `observability` feature の背後に置き、
//!   ライブラリクレートが `tracing-subscriber` に依存しないようにする

pub mod event_log;
pub mod observability;
