//! # NotiFlow インフラ層
//!
//! 生成済みの通知本文を出力先へ送出するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ドメイン層の Strategy が本文と表示スタイルを決め、このクレートは
//! それを受け取って書き出すだけを担う。出力先の詳細（ANSI エスケープ、
//! 書き込み先、ロック）はここにカプセル化する。
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`dispatcher`] - 送出トレイトとコンソール / Noop 実装
//! - `mock` - テスト用の記録型ディスパッチャ（`test-utils` feature）

pub mod dispatcher;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use dispatcher::{ConsoleDispatcher, NoopDispatcher, NotificationDispatcher};
