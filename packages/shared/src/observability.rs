//! # Observability 基盤
//!
//! ログ出力形式の選択、トレーシングの初期化、ルートスパンの作成を提供する。
//!
//! 通知本文は stdout に出力されるため、ログはすべて stderr に書き出す。
//! 本文とログが混ざらないことで、パイプで本文だけを取り出せる。

/// `RUST_LOG` が未設定のときのフィルタ
const DEFAULT_FILTER: &str = "info,notiflow=debug";

/// ログ出力形式
///
/// `LOG_FORMAT` の値（`json` / `pretty`）に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LogFormat {
    /// 1 行 1 JSON（機械処理向け）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式を決める
    ///
    /// 解釈できない値は [`Pretty`](LogFormat::Pretty) として扱う。
    /// トレーシング初期化前に呼ばれるため、警告は stderr に直接書く。
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            eprintln!("WARNING: unknown LOG_FORMAT={s:?}, falling back to pretty");
            Self::Pretty
        })
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// ルートスパン `app` の `service` フィールドになる名前
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }
}

/// ルートスパン `app` を作成する
///
/// 以降のすべてのログに `service` が付く。JSON 形式では `span.service` として出力される。
pub fn root_span(config: &TracingConfig) -> tracing::Span {
    tracing::info_span!("app", service = %config.service_name)
}

/// トレーシングを初期化し、ルートスパンに入る
///
/// 戻り値のガードを保持している間、ログはルートスパンの中で記録される。
/// `main` の先頭で束縛し、終了まで保持すること。
///
/// ログレベルは `RUST_LOG` で制御する。未設定なら `info,notiflow=debug`。
#[cfg(feature = "observability")]
#[must_use = "ガードを破棄するとルートスパンから抜ける"]
pub fn init_tracing(config: &TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match config.log_format {
        LogFormat::Json => stderr_layer
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => stderr_layer.boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    root_span(config).entered()
}
