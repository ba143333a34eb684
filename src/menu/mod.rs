//! Reaction-driven menus bound to posted messages.
//!
//! A menu only ever sees a [`MenuSurface`]: something that can post, edit and delete
//! messages, put reaction markers on them and wait for a user to react. The serenity
//! implementation lives in `discord_helpers`.

use std::time::Duration;

use serenity::all::{MessageId, UserId};
use serenity::async_trait;
use thiserror::Error;
use tokio::time::Instant;

use crate::hey;

mod deletable;
mod pages;

#[cfg(test)]
pub(crate) mod testing;

pub use deletable::DeletableMenu;
pub use pages::{MenuState, PageCursor, PageMenu};

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Symbols a user can react with to drive a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Delete,
    Confirm,
}

impl Control {
    pub fn symbol(self) -> &'static str {
        match self {
            Control::Previous => "\u{25C0}\u{FE0F}",
            Control::Next => "\u{25B6}\u{FE0F}",
            Control::Delete => "\u{1F5D1}\u{FE0F}",
            Control::Confirm => "\u{2705}",
        }
    }

    /// Clients do not always send the variation selector, so it is ignored.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let bare = symbol.trim_end_matches(VARIATION_SELECTOR);
        [
            Control::Previous,
            Control::Next,
            Control::Delete,
            Control::Confirm,
        ]
        .into_iter()
        .find(|control| control.symbol().trim_end_matches(VARIATION_SELECTOR) == bare)
    }
}

/// A reaction someone added to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub message: MessageId,
    pub user: Option<UserId>,
    pub emoji: String,
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("missing permissions: {0}")]
    Forbidden(String),
    #[error("{0}")]
    Failed(String),
}

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Deleted,
    TimedOut,
    Failed,
}

#[async_trait]
pub trait MenuSurface: Send + Sync {
    type Page: Send + Sync;

    async fn send(&self, page: &Self::Page) -> Result<MessageId, SurfaceError>;

    async fn edit(&self, message: MessageId, page: &Self::Page) -> Result<(), SurfaceError>;

    async fn delete(&self, message: MessageId) -> Result<(), SurfaceError>;

    async fn add_marker(&self, message: MessageId, symbol: &str) -> Result<(), SurfaceError>;

    /// `None` removes the bot's own marker.
    async fn remove_marker(
        &self,
        message: MessageId,
        symbol: &str,
        user: Option<UserId>,
    ) -> Result<(), SurfaceError>;

    async fn clear_markers(&self, message: MessageId) -> Result<(), SurfaceError>;

    /// Waits for the next reaction added to `message`, `None` once `timeout` passes.
    async fn await_reaction(&self, message: MessageId, timeout: Duration) -> Option<ReactionEvent>;
}

/// Waits for `invoker` to react to `message` with one of `controls`.
///
/// Everything else is skipped without moving the deadline, which is fixed when the wait begins.
pub(crate) async fn next_control<S: MenuSurface + ?Sized>(
    surface: &S,
    message: MessageId,
    invoker: UserId,
    controls: &[Control],
    timeout: Duration,
) -> Option<(Control, ReactionEvent)> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return None;
        }

        let event = surface.await_reaction(message, remaining).await?;
        if event.message != message || event.user != Some(invoker) {
            continue;
        }
        match Control::from_symbol(&event.emoji) {
            Some(control) if controls.contains(&control) => return Some((control, event)),
            _ => continue,
        }
    }
}

/// Takes the controls off a message whose session is over.
///
/// The bot's own markers go first so they disappear even when clearing everyone's
/// reactions is not allowed. Failures are logged and otherwise ignored.
pub(crate) async fn strip_markers<S: MenuSurface + ?Sized>(
    surface: &S,
    message: MessageId,
    controls: &[Control],
) {
    for control in controls {
        if let Err(e) = surface.remove_marker(message, control.symbol(), None).await {
            hey!("Could not remove {} from message {}: {}", control.symbol(), message, e);
        }
    }
    if let Err(e) = surface.clear_markers(message).await {
        hey!("Could not clear reactions on message {}: {}", message, e);
    }
}
