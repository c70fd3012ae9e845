//! # ユースケース層
//!
//! ドメインの Strategy とインフラの Dispatcher を組み合わせる。

mod notification_manager;

pub use notification_manager::NotificationManager;
