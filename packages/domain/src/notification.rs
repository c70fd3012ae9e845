//! # 通知
//!
//! 通知の種別・宛先・表示スタイル・エラーを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`NotificationKind`] | 通知種別 | ビジネス通知 / 例外通知の閉じた集合 |
//! | [`Addressing`] | 宛先情報 | 送信元・送信先・中継サーバー |
//! | [`NotificationStyle`] | 表示スタイル | 出力時の色。Strategy が本文生成時に選ぶ |
//!
//! ## 設計方針
//!
//! - **閉じた列挙型**: 未知の種別は文字列のパース時点で [`NotificationError::InvalidKind`] になり、
//!   それ以降のコードに「対応する Strategy がない」状態は存在しない
//! - **宛先は設定から**: [`Addressing`] の既定値はプレースホルダーで、実際の値は設定で与える

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

define_uuid_id! {
    /// 通知 ID（一意識別子）
    ///
    /// 送信 1 回ごとに採番し、ログの相関にのみ使う。本文には含めない。
    pub struct NotificationId;
}

/// 通知エラー
#[derive(Debug, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationError {
    /// 未知の通知種別（InvalidArgument）
    #[error("未知の通知種別です: {0}")]
    InvalidKind(String),

    /// ステートメントが空（OutOfRange）
    #[error("ステートメントが空のため本文を生成できません")]
    EmptyStatements,

    /// 障害が記録されていない（MissingState）
    #[error("障害が記録されていないため本文を生成できません")]
    MissingFault,

    /// 本文が未生成のまま送出しようとした
    #[error("本文が生成されていません")]
    BodyNotBuilt,

    /// 出力先への書き込みに失敗
    #[error("通知の送出に失敗: {0}")]
    DispatchFailed(String),
}

impl NotificationError {
    /// ログの `error.kind` フィールドに使う識別子を返す
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// 通知種別
///
/// snake_case で文字列化される（`"business"`, `"exception"`）。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    /// ビジネス通知: ステートメントの先頭を本文にする
    Business,
    /// 例外通知: 捕捉した障害のメッセージを本文にする
    Exception,
}

impl NotificationKind {
    /// 文字列から通知種別をパースする
    ///
    /// 未知の値は [`NotificationError::InvalidKind`] を返す。
    pub fn parse(s: &str) -> Result<Self, NotificationError> {
        s.parse()
            .map_err(|_| NotificationError::InvalidKind(s.to_string()))
    }
}

/// 宛先情報
///
/// Strategy の選択後、本文生成の前にコンテキストが設定する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addressing {
    /// 送信元
    pub from:  String,
    /// 送信先
    pub to:    String,
    /// 中継サーバー
    pub relay: String,
}

impl Addressing {
    pub fn new(from: impl Into<String>, to: impl Into<String>, relay: impl Into<String>) -> Self {
        Self {
            from:  from.into(),
            to:    to.into(),
            relay: relay.into(),
        }
    }
}

impl Default for Addressing {
    /// 設定がない場合のプレースホルダー
    fn default() -> Self {
        Self::new("from", "to", "smtp")
    }
}

/// 表示スタイル
///
/// 出力先が本文の前に適用する色。グローバルな状態ではなく、
/// 送出のたびに明示的に渡される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationStyle {
    /// 既定（白）。送出後はこのスタイルに戻す
    #[default]
    Neutral,
    /// ビジネス通知（緑）
    Business,
    /// 例外通知（赤）
    Exception,
    /// 実行開始などの案内行（黄）
    Banner,
}
