//! # 通知の送出
//!
//! 本文生成済みの Strategy を受け取り、出力先へ書き出す。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationDispatcher` trait で出力先を抽象化
//! - **2 つの実装**: Console（ANSI カラー付き標準出力）、Noop（ログ出力のみ）
//! - **スタイルは引数**: 色は Strategy から送出のたびに受け取り、
//!   送出後は必ず既定スタイルに戻す。出力先に色の状態を残さない
//! - **本文生成はしない**: `build_body()` を呼ぶのは呼び出し側の責務。
//!   未生成のまま渡された場合は [`NotificationError::BodyNotBuilt`] を返す

mod console;
mod noop;

pub use console::ConsoleDispatcher;
pub use noop::NoopDispatcher;
use notiflow_domain::{NotificationError, strategy::NotificationStrategy};

/// 通知送出トレイト
///
/// 本文をちょうど 1 回出力先に届け、その後スタイルを既定に戻す。
pub trait NotificationDispatcher: Send + Sync {
    /// 本文生成済みの Strategy を送出する
    fn dispatch(&self, strategy: &dyn NotificationStrategy) -> Result<(), NotificationError>;

    /// 通知ではない案内行（バナー）を出力する
    fn announce(&self, text: &str) -> Result<(), NotificationError>;
}
