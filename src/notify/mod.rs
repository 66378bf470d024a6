//! Notification and chat sink.
//!
//! User-visible feedback leaves the engine through [`Notifier`]: plain
//! notices (info, warning, error) and a structured announcement when a card
//! is moved to the discard, addressed to game masters only.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-visible message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Who may read an announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    GameMasters,
}

/// Chat announcement that a card changed pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMovedAnnouncement {
    pub card_name: String,
    pub img: String,
    pub destination: String,
    pub audience: Audience,
}

impl CardMovedAnnouncement {
    /// Rendered chat text.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} was sent to {}.", self.card_name, self.destination)
    }
}

/// Host collaborator receiving user-visible messages.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn announce(&mut self, announcement: CardMovedAnnouncement);

    fn info(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    fn warn(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        });
    }

    fn error(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }
}

/// Notifier that records everything it receives.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    pub notices: Vec<Notice>,
    pub announcements: Vec<CardMovedAnnouncement>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of one level, oldest first.
    pub fn messages(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.as_str())
            .collect()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
        self.announcements.clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn announce(&mut self, announcement: CardMovedAnnouncement) {
        self.announcements.push(announcement);
    }
}
