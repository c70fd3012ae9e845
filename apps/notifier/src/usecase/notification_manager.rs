//! # 通知マネージャ
//!
//! Strategy の選択 → 宛先設定 → 本文生成 → 送出を統合するコンテキスト。
//!
//! ## 設計方針
//!
//! - **網羅的な選択**: 通知種別から Strategy への対応は [`SelectedStrategy::for_kind`] の
//!   match に集約され、対応漏れはコンパイルエラーになる
//! - **失敗は呼び出し元へ**: 本文生成・送出の失敗はログに記録したうえで `Err` として返す。
//!   リトライや部分的な成功はない
//! - **依存性注入**: 出力先は `NotificationDispatcher` trait、宛先は設定から受け取る

use std::sync::Arc;

use notiflow_domain::{
    NotificationError,
    content_source::MessageContentSource,
    notification::{Addressing, NotificationId, NotificationKind},
    strategy::{NotificationStrategy, SelectedStrategy},
};
use notiflow_infra::dispatcher::NotificationDispatcher;
use notiflow_shared::{event_log::event, log_business_event};

/// 通知マネージャ
///
/// 送信のたびに Strategy を新しく生成し、送出後に破棄する。
/// 内部にカウンタ等の状態は持たないため、同じ入力からは常に同じ本文が送出される。
pub struct NotificationManager {
    dispatcher: Arc<dyn NotificationDispatcher>,
    addressing: Addressing,
}

impl NotificationManager {
    pub fn new(dispatcher: Arc<dyn NotificationDispatcher>, addressing: Addressing) -> Self {
        Self {
            dispatcher,
            addressing,
        }
    }

    pub fn addressing(&self) -> &Addressing {
        &self.addressing
    }

    /// 通知を送信する
    ///
    /// 成功時は採番した [`NotificationId`] を返す。
    ///
    /// # エラー
    ///
    /// - [`NotificationError::EmptyStatements`]: ビジネス通知でステートメントが空
    /// - [`NotificationError::MissingFault`]: 例外通知で障害が未記録
    /// - [`NotificationError::DispatchFailed`]: 出力先への書き込みに失敗
    pub fn send(
        &self,
        kind: NotificationKind,
        source: &MessageContentSource,
    ) -> Result<NotificationId, NotificationError> {
        let id = NotificationId::new();
        let kind_str: &str = kind.into();
        let _span = tracing::info_span!(
            "notification",
            notification.id = %id,
            notification.kind = kind_str
        )
        .entered();

        match self.build_and_dispatch(kind, source) {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::NOTIFICATION,
                    event.entity_id = %id,
                    event.result = event::result::SUCCESS,
                    notification.kind = kind_str,
                    notification.recipient = %self.addressing.to,
                    "通知送信成功"
                );
                Ok(id)
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::NOTIFICATION,
                    event.entity_id = %id,
                    event.result = event::result::FAILURE,
                    notification.kind = kind_str,
                    notification.recipient = %self.addressing.to,
                    error.kind = e.kind(),
                    error = %e,
                    "通知送信失敗"
                );
                Err(e)
            }
        }
    }

    /// 文字列で指定された通知種別で送信する
    ///
    /// 未知の種別は [`NotificationError::InvalidKind`] を返し、何も送出しない。
    pub fn send_named(
        &self,
        kind: &str,
        source: &MessageContentSource,
    ) -> Result<NotificationId, NotificationError> {
        let kind = NotificationKind::parse(kind).inspect_err(|e| {
            tracing::warn!(error.kind = e.kind(), error = %e, "通知種別を解決できません");
        })?;
        self.send(kind, source)
    }

    /// 通知ではない案内行を出力先に書き出す
    pub fn announce(&self, text: &str) -> Result<(), NotificationError> {
        self.dispatcher.announce(text)
    }

    /// Strategy を選択・設定し、本文を生成して送出する
    fn build_and_dispatch(
        &self,
        kind: NotificationKind,
        source: &MessageContentSource,
    ) -> Result<(), NotificationError> {
        let mut strategy = SelectedStrategy::for_kind(kind, source);
        strategy.set_addressing(self.addressing.clone());
        strategy.build_body()?;

        self.dispatcher.dispatch(&strategy)
    }
}
