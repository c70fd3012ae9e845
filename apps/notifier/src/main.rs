//! # Notifier
//!
//! デモシナリオを実行するエントリーポイント。
//!
//! ## 出力
//!
//! - **stdout**: バナー行と通知本文（表示スタイルに応じた ANSI カラー付き）
//! - **stderr**: トレーシングログ
//!
//! ```text
//! Executing notification scenario...   (黄)
//! Business Email Notification.         (緑)
//! Exception Message Notification       (赤)
//! ```
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p notiflow-notifier
//!
//! # 本文を出さずにログだけ確認する
//! NOTIFICATION_BACKEND=noop LOG_FORMAT=json cargo run -p notiflow-notifier
//! ```
//!
//! 環境変数の一覧は [`notiflow_notifier::config`] を参照。

use std::sync::Arc;

use anyhow::Context as _;
use notiflow_infra::{ConsoleDispatcher, NoopDispatcher};
use notiflow_notifier::{
    NotificationManager,
    config::{DispatcherBackend, NotifierConfig},
    scenario,
};
use notiflow_shared::observability::{TracingConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = NotifierConfig::from_env().context("設定の読み込みに失敗しました")?;

    let _root_span = init_tracing(&TracingConfig::new("notifier", config.log_format));

    tracing::info!(
        backend = %config.backend,
        from = %config.addressing.from,
        to = %config.addressing.to,
        relay = %config.addressing.relay,
        "通知シナリオを開始します"
    );

    let manager = match config.backend {
        DispatcherBackend::Console => NotificationManager::new(
            Arc::new(ConsoleDispatcher::stdout(config.color)),
            config.addressing,
        ),
        DispatcherBackend::Noop => {
            NotificationManager::new(Arc::new(NoopDispatcher), config.addressing)
        }
    };

    scenario::run(&manager)?;

    tracing::info!("通知シナリオが完了しました");
    Ok(())
}
