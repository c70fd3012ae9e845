//! # NotiFlow ドメイン層
//!
//! 通知本文の生成ルールを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **Strategy パターン**: 本文の生成アルゴリズムを [`strategy::NotificationStrategy`]
//!   トレイトで抽象化し、通知種別ごとに実装を差し替える
//! - **閉じた列挙型**: 通知種別 [`notification::NotificationKind`] と
//!   選択結果 [`strategy::SelectedStrategy`] はどちらも enum で、
//!   対応漏れはコンパイル時に検出される
//! - **入出力を持たない**: 出力先（コンソール等）への書き込みはインフラ層の責務
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`content_source`] - 本文の材料（ステートメント、捕捉した障害）
//! - [`notification`] - 通知種別、宛先、表示スタイル、エラー
//! - [`strategy`] - 本文生成の Strategy とその実装
//!
//! ## 使用例
//!
//! ```rust
//! use notiflow_domain::{
//!     content_source::MessageContentSource,
//!     notification::NotificationKind,
//!     strategy::{NotificationStrategy, SelectedStrategy},
//! };
//!
//! let mut source = MessageContentSource::new();
//! source.set_statements(vec!["Business Email Notification.".to_string()]);
//!
//! let mut strategy = SelectedStrategy::for_kind(NotificationKind::Business, &source);
//! strategy.build_body().unwrap();
//! assert_eq!(strategy.body(), Some("Business Email Notification."));
//! ```

#[macro_use]
mod macros;

pub mod content_source;
pub mod notification;
pub mod strategy;

pub use notification::NotificationError;
