//! # 本文の材料
//!
//! 通知本文を組み立てるための入力データを保持する。
//!
//! 呼び出し側が段階的に値を詰め、Strategy は不変参照として読むだけ。
//! 値の検証は行わない。空のステートメントや未設定の障害はそれ自体は正当な状態で、
//! それを必要とする Strategy が本文を組み立てる時点でエラーになる。

use std::{error::Error, fmt};

/// 捕捉した障害
///
/// 任意のエラー値を保持し、本文に使う人間可読なメッセージを提供する。
pub struct CapturedFault {
    error: Box<dyn Error + Send + Sync + 'static>,
}

impl CapturedFault {
    /// エラー値から作成する
    pub fn new(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 障害のメッセージ（`Display` の出力）を返す
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// 元のエラー値を返す
    pub fn source_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }
}

impl fmt::Debug for CapturedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedFault")
            .field("message", &self.message())
            .finish()
    }
}

/// 通知本文の材料
///
/// - `statements`: 本文候補の文の列（ビジネス通知は先頭を使う）
/// - `captured_fault`: 捕捉した障害（例外通知はそのメッセージを使う）
#[derive(Debug, Default)]
pub struct MessageContentSource {
    statements:     Vec<String>,
    captured_fault: Option<CapturedFault>,
}

impl MessageContentSource {
    /// 空の材料を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// ステートメントの列を置き換える
    pub fn set_statements(&mut self, statements: Vec<String>) {
        self.statements = statements;
    }

    /// 障害を記録する（既存の障害は置き換える）
    pub fn set_captured_fault(
        &mut self,
        fault: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) {
        self.captured_fault = Some(CapturedFault::new(fault));
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn captured_fault(&self) -> Option<&CapturedFault> {
        self.captured_fault.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("ディスクがいっぱいです")]
    struct DiskFull;

    #[test]
    fn 新規作成時は空である() {
        let source = MessageContentSource::new();

        assert!(source.statements().is_empty());
        assert!(source.captured_fault().is_none());
    }

    #[test]
    fn set_statementsは既存の列を置き換える() {
        let mut source = MessageContentSource::new();
        source.set_statements(vec!["一".to_string(), "二".to_string()]);
        source.set_statements(vec!["三".to_string()]);

        assert_eq!(source.statements().to_vec(), vec!["三".to_string()]);
    }

    #[test]
    fn set_captured_faultはエラー型のメッセージを保持する() {
        let mut source = MessageContentSource::new();
        source.set_captured_fault(DiskFull);

        let fault = source.captured_fault().unwrap();
        assert_eq!(fault.message(), "ディスクがいっぱいです");
        assert!(fault.source_error().downcast_ref::<DiskFull>().is_some());
    }

    #[test]
    fn set_captured_faultは文字列からも作成できる() {
        let mut source = MessageContentSource::new();
        source.set_captured_fault("Exception Message Notification");

        assert_eq!(
            source.captured_fault().unwrap().message(),
            "Exception Message Notification"
        );
    }

    #[test]
    fn set_captured_faultは後から設定した障害で上書きする() {
        let mut source = MessageContentSource::new();
        source.set_captured_fault("最初の障害");
        source.set_captured_fault("二番目の障害");

        assert_eq!(source.captured_fault().unwrap().message(), "二番目の障害");
    }

    #[test]
    fn captured_faultのdebug出力にメッセージが含まれる() {
        let fault = CapturedFault::new("接続が切断されました");

        assert!(format!("{fault:?}").contains("接続が切断されました"));
    }
}
