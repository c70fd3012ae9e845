//! # 本文生成の Strategy
//!
//! 通知本文の生成アルゴリズムを [`NotificationStrategy`] トレイトで抽象化する。
//!
//! ## 設計方針
//!
//! - **トレイトによる能力の定義**: 宛先の保持、本文の生成、表示スタイルの選択
//! - **閉じた直和型**: [`SelectedStrategy`] は実装を列挙した enum で、
//!   [`SelectedStrategy::for_kind`] が通知種別を網羅的に match する。
//!   新しい種別を追加すると、対応する実装を書くまでコンパイルが通らない
//! - **1 回使い切り**: Strategy は送信のたびに生成し、送出後に破棄する
//!
//! ## ライフサイクル
//!
//! ```text
//! for_kind → set_addressing → build_body → (Dispatcher が body / style を読む)
//! ```

mod business;
mod exception;

pub use business::BusinessNotificationStrategy;
pub use exception::ExceptionNotificationStrategy;

use crate::{
    content_source::MessageContentSource,
    notification::{Addressing, NotificationError, NotificationKind, NotificationStyle},
};

/// 通知本文の生成アルゴリズム
///
/// `build_body()` は本文を読む前に必ず呼ばれる。成功すると `body()` が `Some` になり、
/// `style()` はその実装の表示スタイルを返す。失敗した場合、本文は `None` のまま。
pub trait NotificationStrategy {
    /// この実装が担当する通知種別
    fn kind(&self) -> NotificationKind;

    fn addressing(&self) -> &Addressing;

    fn set_addressing(&mut self, addressing: Addressing);

    /// 本文を生成し、表示スタイルを選択する
    fn build_body(&mut self) -> Result<(), NotificationError>;

    /// 生成済みの本文（未生成なら `None`）
    fn body(&self) -> Option<&str>;

    /// 送出時に適用する表示スタイル
    fn style(&self) -> NotificationStyle;
}

/// 通知種別に対応して選択された Strategy
#[derive(Debug)]
pub enum SelectedStrategy<'a> {
    Business(BusinessNotificationStrategy<'a>),
    Exception(ExceptionNotificationStrategy<'a>),
}

impl<'a> SelectedStrategy<'a> {
    /// 通知種別から Strategy を選択する
    ///
    /// 生成直後の宛先は [`Addressing::default`]、本文は未生成。
    pub fn for_kind(kind: NotificationKind, source: &'a MessageContentSource) -> Self {
        match kind {
            NotificationKind::Business => Self::Business(BusinessNotificationStrategy::new(source)),
            NotificationKind::Exception => {
                Self::Exception(ExceptionNotificationStrategy::new(source))
            }
        }
    }

    fn as_strategy(&self) -> &dyn NotificationStrategy {
        match self {
            Self::Business(strategy) => strategy,
            Self::Exception(strategy) => strategy,
        }
    }

    fn as_strategy_mut(&mut self) -> &mut dyn NotificationStrategy {
        match self {
            Self::Business(strategy) => strategy,
            Self::Exception(strategy) => strategy,
        }
    }
}

impl NotificationStrategy for SelectedStrategy<'_> {
    fn kind(&self) -> NotificationKind {
        self.as_strategy().kind()
    }

    fn addressing(&self) -> &Addressing {
        self.as_strategy().addressing()
    }

    fn set_addressing(&mut self, addressing: Addressing) {
        self.as_strategy_mut().set_addressing(addressing);
    }

    fn build_body(&mut self) -> Result<(), NotificationError> {
        self.as_strategy_mut().build_body()
    }

    fn body(&self) -> Option<&str> {
        self.as_strategy().body()
    }

    fn style(&self) -> NotificationStyle {
        self.as_strategy().style()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    fn populated_source() -> MessageContentSource {
        let mut source = MessageContentSource::new();
        source.set_statements(vec!["Business Email Notification.".to_string()]);
        source.set_captured_fault("Exception Message Notification");
        source
    }

    #[rstest]
    #[case(NotificationKind::Business, "Business Email Notification.", NotificationStyle::Business)]
    #[case(
        NotificationKind::Exception,
        "Exception Message Notification",
        NotificationStyle::Exception
    )]
    fn 通知種別ごとに本文とスタイルが決まる(
        #[case] kind: NotificationKind,
        #[case] expected_body: &str,
        #[case] expected_style: NotificationStyle,
    ) {
        let source = populated_source();
        let mut strategy = SelectedStrategy::for_kind(kind, &source);

        strategy.build_body().unwrap();

        assert_eq!(strategy.body(), Some(expected_body));
        assert_eq!(strategy.style(), expected_style);
    }

    #[test]
    fn すべての通知種別が自身を担当する実装に対応する() {
        let source = populated_source();

        for kind in NotificationKind::iter() {
            let strategy = SelectedStrategy::for_kind(kind, &source);
            assert_eq!(strategy.kind(), kind);
        }
    }

    #[test]
    fn 通知種別ごとに異なる本文になる() {
        let source = populated_source();

        let bodies: Vec<String> = NotificationKind::iter()
            .map(|kind| {
                let mut strategy = SelectedStrategy::for_kind(kind, &source);
                strategy.build_body().unwrap();
                strategy.body().unwrap().to_string()
            })
            .collect();

        assert_ne!(bodies[0], bodies[1]);
    }

    #[test]
    fn 生成直後は本文が未生成でスタイルはneutral() {
        let source = populated_source();
        let strategy = SelectedStrategy::for_kind(NotificationKind::Business, &source);

        assert_eq!(strategy.body(), None);
        assert_eq!(strategy.style(), NotificationStyle::Neutral);
        assert_eq!(strategy.addressing(), &Addressing::default());
    }

    #[test]
    fn set_addressingで宛先を置き換えられる() {
        let source = populated_source();
        let mut strategy = SelectedStrategy::for_kind(NotificationKind::Exception, &source);

        strategy.set_addressing(Addressing::new(
            "alerts@example.com",
            "ops@example.com",
            "relay.example.com",
        ));

        assert_eq!(strategy.addressing().to, "ops@example.com");
        assert_eq!(strategy.addressing().relay, "relay.example.com");
    }
}
