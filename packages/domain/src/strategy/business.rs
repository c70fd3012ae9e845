//! ビジネス通知の Strategy
//!
//! ステートメントの先頭を本文にする。

use crate::{
    content_source::MessageContentSource,
    notification::{Addressing, NotificationError, NotificationKind, NotificationStyle},
    strategy::NotificationStrategy,
};

/// ビジネス通知
#[derive(Debug)]
pub struct BusinessNotificationStrategy<'a> {
    source:     &'a MessageContentSource,
    addressing: Addressing,
    body:       Option<String>,
    style:      NotificationStyle,
}

impl<'a> BusinessNotificationStrategy<'a> {
    pub fn new(source: &'a MessageContentSource) -> Self {
        Self {
            source,
            addressing: Addressing::default(),
            body: None,
            style: NotificationStyle::Neutral,
        }
    }
}

impl NotificationStrategy for BusinessNotificationStrategy<'_> {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Business
    }

    fn addressing(&self) -> &Addressing {
        &self.addressing
    }

    fn set_addressing(&mut self, addressing: Addressing) {
        self.addressing = addressing;
    }

    fn build_body(&mut self) -> Result<(), NotificationError> {
        let first = self
            .source
            .statements()
            .first()
            .ok_or(NotificationError::EmptyStatements)?;

        self.style = NotificationStyle::Business;
        self.body = Some(first.clone());
        Ok(())
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn style(&self) -> NotificationStyle {
        self.style
    }
}
