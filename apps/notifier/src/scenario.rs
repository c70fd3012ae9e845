//! # デモシナリオ
//!
//! 同じ材料を使い回しながら、ビジネス通知と例外通知を順に送る。
//!
//! 0. バナー行を出力する
//! 1. ステートメントを 1 件設定してビジネス通知を送る
//! 2. 処理が失敗した体で障害を作り、材料に記録する
//! 3. 例外通知を送る

use notiflow_domain::{content_source::MessageContentSource, notification::NotificationKind};

use crate::{error::NotifierError, usecase::NotificationManager};

/// 実行開始時にバナーとして出力する行
pub const BANNER: &str = "Executing notification scenario...";

/// ビジネス通知の本文になるステートメント
pub const BUSINESS_STATEMENT: &str = "Business Email Notification.";

/// 意図的に起こす障害のメッセージ
pub const SIMULATED_FAULT_MESSAGE: &str = "Exception Message Notification";

/// シナリオを実行する
pub fn run(manager: &NotificationManager) -> Result<(), NotifierError> {
    manager.announce(BANNER)?;

    let mut source = MessageContentSource::new();
    source.set_statements(vec![BUSINESS_STATEMENT.to_string()]);
    manager.send(NotificationKind::Business, &source)?;

    if let Err(fault) = simulated_operation() {
        tracing::debug!(error = %fault, "障害を捕捉しました");
        source.set_captured_fault(fault);
    }
    manager.send(NotificationKind::Exception, &source)?;

    Ok(())
}

/// 常に失敗する処理
fn simulated_operation() -> Result<(), NotifierError> {
    Err(NotifierError::Simulated(SIMULATED_FAULT_MESSAGE.to_string()))
}
