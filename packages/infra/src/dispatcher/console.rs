//! コンソール送出実装
//!
//! 表示スタイルを ANSI エスケープシーケンスに変換し、本文を 1 行として書き出す。
//! 書き込み先は `Write` を実装する任意の型で、本番では標準出力を使う。

use std::{
    io::{self, Stdout, Write},
    sync::Mutex,
};

use notiflow_domain::{
    NotificationError,
    notification::NotificationStyle,
    strategy::NotificationStrategy,
};

use super::NotificationDispatcher;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const WHITE: &str = "\x1b[37m";
}

/// 表示スタイルに対応する ANSI シーケンス
fn style_marker(style: NotificationStyle) -> &'static str {
    match style {
        NotificationStyle::Neutral => ansi::WHITE,
        NotificationStyle::Business => ansi::GREEN,
        NotificationStyle::Exception => ansi::RED,
        NotificationStyle::Banner => ansi::YELLOW,
    }
}

/// コンソール送出
///
/// 1 回の書き込み（スタイル → 本文 → リセット → 改行）はロック内で完結するため、
/// 行の途中に別の書き込みが割り込むことはない。
pub struct ConsoleDispatcher<W: Write + Send> {
    writer: Mutex<W>,
    color:  bool,
}

impl ConsoleDispatcher<Stdout> {
    /// 標準出力に書き出すインスタンスを作成
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsoleDispatcher<W> {
    /// 新しいコンソール送出インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `writer`: 書き込み先
    /// - `color`: `false` の場合は ANSI シーケンスを出力しない
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
        }
    }

    /// 指定スタイルで 1 行書き出し、既定スタイルに戻す
    ///
    /// 行は 1 回の `write_all` で書き出す。途中で失敗した場合もリセットの書き込みを
    /// 試みてから [`NotificationError::DispatchFailed`] を返す。
    pub fn write_styled(
        &self,
        style: NotificationStyle,
        text: &str,
    ) -> Result<(), NotificationError> {
        let mut writer = self.writer.lock().map_err(|_| {
            NotificationError::DispatchFailed("出力先のロックが汚染されています".to_string())
        })?;

        let line = if self.color {
            format!("{}{text}{}\n", style_marker(style), ansi::RESET)
        } else {
            format!("{text}\n")
        };

        let written = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush());

        if let Err(e) = written {
            if self.color {
                // マーカーだけ届いている可能性がある
                let _ = writer
                    .write_all(ansi::RESET.as_bytes())
                    .and_then(|()| writer.flush());
            }
            return Err(NotificationError::DispatchFailed(format!("書き込み失敗: {e}")));
        }
        Ok(())
    }

    /// 書き込み先を取り出す
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> NotificationDispatcher for ConsoleDispatcher<W> {
    fn dispatch(&self, strategy: &dyn NotificationStrategy) -> Result<(), NotificationError> {
        let body = strategy.body().ok_or(NotificationError::BodyNotBuilt)?;

        tracing::debug!(
            notification.kind = %strategy.kind(),
            notification.style = %strategy.style(),
            "コンソールへ送出"
        );

        self.write_styled(strategy.style(), body)
    }

    fn announce(&self, text: &str) -> Result<(), NotificationError> {
        self.write_styled(NotificationStyle::Banner, text)
    }
}

#[cfg(test)]
mod tests {
    use notiflow_domain::{
        content_source::MessageContentSource,
        notification::NotificationKind,
        strategy::SelectedStrategy,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn output_of(dispatcher: ConsoleDispatcher<Vec<u8>>) -> String {
        String::from_utf8(dispatcher.into_inner()).unwrap()
    }

    fn populated_source() -> MessageContentSource {
        let mut source = MessageContentSource::new();
        source.set_statements(vec!["Business Email Notification.".to_string()]);
        source.set_captured_fault("Exception Message Notification");
        source
    }

    #[rstest]
    #[case(
        NotificationKind::Business,
        "\x1b[32mBusiness Email Notification.\x1b[0m\n"
    )]
    #[case(
        NotificationKind::Exception,
        "\x1b[31mException Message Notification\x1b[0m\n"
    )]
    fn 本文をスタイル付きで書き出しリセットする(
        #[case] kind: NotificationKind,
        #[case] expected: &str,
    ) {
        let source = populated_source();
        let mut strategy = SelectedStrategy::for_kind(kind, &source);
        strategy.build_body().unwrap();
        let dispatcher = ConsoleDispatcher::new(Vec::new(), true);

        dispatcher.dispatch(&strategy).unwrap();

        assert_eq!(output_of(dispatcher), expected);
    }

    #[test]
    fn カラー無効時は本文だけを書き出す() {
        let source = populated_source();
        let mut strategy = SelectedStrategy::for_kind(NotificationKind::Business, &source);
        strategy.build_body().unwrap();
        let dispatcher = ConsoleDispatcher::new(Vec::new(), false);

        dispatcher.dispatch(&strategy).unwrap();

        assert_eq!(output_of(dispatcher), "Business Email Notification.\n");
    }

    #[test]
    fn 本文未生成ならbody_not_builtを返し何も書き出さない() {
        let source = populated_source();
        let strategy = SelectedStrategy::for_kind(NotificationKind::Business, &source);
        let dispatcher = ConsoleDispatcher::new(Vec::new(), true);

        let result = dispatcher.dispatch(&strategy);

        assert!(matches!(result, Err(NotificationError::BodyNotBuilt)));
        assert_eq!(output_of(dispatcher), "");
    }

    #[test]
    fn write_styledはバナー行を黄色で書き出す() {
        let dispatcher = ConsoleDispatcher::new(Vec::new(), true);

        dispatcher
            .write_styled(NotificationStyle::Banner, "Executing notification scenario...")
            .unwrap();

        assert_eq!(
            output_of(dispatcher),
            "\x1b[33mExecuting notification scenario...\x1b[0m\n"
        );
    }

    #[test]
    fn 連続した送出でも各行が既定スタイルに戻る() {
        let dispatcher = ConsoleDispatcher::new(Vec::new(), true);

        dispatcher.write_styled(NotificationStyle::Exception, "一行目").unwrap();
        dispatcher.write_styled(NotificationStyle::Neutral, "二行目").unwrap();

        assert_eq!(
            output_of(dispatcher),
            "\x1b[31m一行目\x1b[0m\n\x1b[37m二行目\x1b[0m\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn 書き込みに失敗したらdispatch_failedを返す() {
        let source = populated_source();
        let mut strategy = SelectedStrategy::for_kind(NotificationKind::Exception, &source);
        strategy.build_body().unwrap();
        let dispatcher = ConsoleDispatcher::new(BrokenPipe, true);

        let result = dispatcher.dispatch(&strategy);

        assert!(matches!(result, Err(NotificationError::DispatchFailed(_))));
    }

    /// `limit` バイトまで受け付けた後、次の書き込みを 1 回だけ失敗させる
    struct FailsOnceAfter {
        accepted: Vec<u8>,
        limit:    usize,
        failed:   bool,
    }

    impl FailsOnceAfter {
        fn new(limit: usize) -> Self {
            Self {
                accepted: Vec::new(),
                limit,
                failed: false,
            }
        }
    }

    impl Write for FailsOnceAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.failed {
                self.accepted.extend_from_slice(buf);
                return Ok(buf.len());
            }
            let room = self.limit - self.accepted.len();
            if room == 0 {
                self.failed = true;
                return Err(io::Error::other("closed"));
            }
            let n = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn 行の途中で書き込みに失敗してもリセットを書き出す() {
        let dispatcher = ConsoleDispatcher::new(FailsOnceAfter::new(ansi::RED.len()), true);

        let result = dispatcher.write_styled(NotificationStyle::Exception, "body");

        assert!(
            matches!(result, Err(NotificationError::DispatchFailed(ref msg)) if msg.contains("closed"))
        );
        let output = String::from_utf8(dispatcher.into_inner().accepted).unwrap();
        assert_eq!(output, "\x1b[31m\x1b[0m");
    }

    #[test]
    fn announceはバナー行を黄色で書き出す() {
        let dispatcher = ConsoleDispatcher::new(Vec::new(), true);

        dispatcher.announce("開始します").unwrap();

        assert_eq!(output_of(dispatcher), "\x1b[33m開始します\x1b[0m\n");
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConsoleDispatcher<Stdout>>();
        assert_send_sync::<ConsoleDispatcher<Vec<u8>>>();
    }
}
