//! 例外通知の Strategy
//!
//! 捕捉した障害のメッセージを本文にする。

use crate::{
    content_source::MessageContentSource,
    notification::{Addressing, NotificationError, NotificationKind, NotificationStyle},
    strategy::NotificationStrategy,
};

/// 例外通知
#[derive(Debug)]
pub struct ExceptionNotificationStrategy<'a> {
    source:     &'a MessageContentSource,
    addressing: Addressing,
    body:       Option<String>,
    style:      NotificationStyle,
}

impl<'a> ExceptionNotificationStrategy<'a> {
    pub fn new(source: &'a MessageContentSource) -> Self {
        Self {
            source,
            addressing: Addressing::default(),
            body: None,
            style: NotificationStyle::Neutral,
        }
    }
}

impl NotificationStrategy for ExceptionNotificationStrategy<'_> {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Exception
    }

    fn addressing(&self) -> &Addressing {
        &self.addressing
    }

    fn set_addressing(&mut self, addressing: Addressing) {
        self.addressing = addressing;
    }

    fn build_body(&mut self) -> Result<(), NotificationError> {
        let fault = self
            .source
            .captured_fault()
            .ok_or(NotificationError::MissingFault)?;

        self.style = NotificationStyle::Exception;
        self.body = Some(fault.message());
        Ok(())
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn style(&self) -> NotificationStyle {
        self.style
    }
}
