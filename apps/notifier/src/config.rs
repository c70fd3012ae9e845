//! # Notifier 設定
//!
//! 環境変数から Notifier の設定を読み込む。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFICATION_FROM` | No | 送信元（デフォルト: `from`） |
//! | `NOTIFICATION_TO` | No | 送信先（デフォルト: `to`） |
//! | `NOTIFICATION_RELAY` | No | 中継サーバー（デフォルト: `smtp`） |
//! | `NOTIFICATION_BACKEND` | No | `console` / `noop`（デフォルト: `console`） |
//! | `NOTIFICATION_COLOR` | No | `true` / `false`（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `pretty` / `json`（デフォルト: `pretty`） |

use std::env;

use notiflow_domain::notification::Addressing;
use notiflow_shared::observability::LogFormat;
use thiserror::Error;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 値が許容範囲外
    #[error("{key} の値が不正です: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 送出バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DispatcherBackend {
    /// 標準出力へ ANSI カラー付きで書き出す
    #[default]
    Console,
    /// 書き出さない（ログ出力のみ）
    Noop,
}

/// Notifier の設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Strategy に設定する宛先
    pub addressing: Addressing,
    /// 送出バックエンド
    pub backend:    DispatcherBackend,
    /// ANSI カラーを出力するか
    pub color:      bool,
    /// ログ出力形式
    pub log_format: LogFormat,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// キーから値を引く関数を使って設定を読み込む
    ///
    /// 未設定のキーは既定値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Addressing::default();
        let addressing = Addressing {
            from:  lookup("NOTIFICATION_FROM").unwrap_or(defaults.from),
            to:    lookup("NOTIFICATION_TO").unwrap_or(defaults.to),
            relay: lookup("NOTIFICATION_RELAY").unwrap_or(defaults.relay),
        };

        let backend: DispatcherBackend = match lookup("NOTIFICATION_BACKEND") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "NOTIFICATION_BACKEND",
                value,
            })?,
            None => DispatcherBackend::default(),
        };

        let color: bool = match lookup("NOTIFICATION_COLOR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "NOTIFICATION_COLOR",
                value,
            })?,
            None => true,
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            addressing,
            backend,
            color,
            log_format,
        })
    }
}
