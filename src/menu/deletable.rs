use std::time::Duration;

use serenity::all::{MessageId, UserId};

use super::{next_control, strip_markers, Control, MenuOutcome, MenuSurface, SurfaceError};
use crate::hey;

const DELETABLE_CONTROLS: [Control; 2] = [Control::Confirm, Control::Delete];

/// One or more posted messages the invoking user can throw away again.
///
/// The controls sit on the last message. Confirming only takes the controls away; the
/// session keeps listening until it times out, so a delete mark added by hand still works.
pub struct DeletableMenu<S: MenuSurface> {
    surface: S,
    invoker: UserId,
    messages: Vec<MessageId>,
    timeout: Duration,
    dismissed: bool,
    closed: bool,
}

impl<S: MenuSurface> DeletableMenu<S> {
    /// Posts every page as its own message.
    pub async fn open(
        surface: S,
        invoker: UserId,
        pages: &[S::Page],
        timeout: Duration,
    ) -> Result<Self, SurfaceError> {
        if pages.is_empty() {
            return Err(SurfaceError::Failed("nothing to post".to_string()));
        }

        let mut messages = Vec::with_capacity(pages.len());
        for page in pages {
            messages.push(surface.send(page).await?);
        }

        let menu = Self {
            surface,
            invoker,
            messages,
            timeout,
            dismissed: false,
            closed: false,
        };
        let last = menu.last_message();
        for control in DELETABLE_CONTROLS {
            if let Err(e) = menu.surface.add_marker(last, control.symbol()).await {
                hey!("Failed to add {} to message {}: {}", control.symbol(), last, e);
            }
        }

        Ok(menu)
    }

    pub fn messages(&self) -> &[MessageId] {
        &self.messages
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    fn last_message(&self) -> MessageId {
        // open() never builds a menu without messages
        self.messages[self.messages.len() - 1]
    }

    pub async fn run(&mut self) -> MenuOutcome {
        let last = self.last_message();
        while !self.closed {
            let Some((control, _)) =
                next_control(&self.surface, last, self.invoker, &DELETABLE_CONTROLS, self.timeout).await
            else {
                strip_markers(&self.surface, last, &DELETABLE_CONTROLS).await;
                self.closed = true;
                return MenuOutcome::TimedOut;
            };

            match control {
                Control::Confirm => {
                    if let Err(e) = self.surface.clear_markers(last).await {
                        hey!("Could not clear reactions on message {}: {}", last, e);
                    }
                    self.dismissed = true;
                }
                Control::Delete => {
                    for message in &self.messages {
                        if let Err(e) = self.surface.delete(*message).await {
                            hey!("Failed to delete message {}: {}", message, e);
                        }
                    }
                    self.closed = true;
                }
                Control::Next | Control::Previous => {}
            }
        }

        MenuOutcome::Deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::{Call, ScriptedSurface};

    const INVOKER: u64 = 11;

    fn embeds(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("part {}", i)).collect()
    }

    #[tokio::test]
    async fn controls_go_on_the_last_message_only() {
        let surface = ScriptedSurface::new();
        let menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(2), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let [first, last] = menu.messages() else {
            panic!("expected two messages");
        };

        assert_eq!(
            surface.calls(),
            vec![
                Call::Send(*first, "part 0".to_string()),
                Call::Send(*last, "part 1".to_string()),
                Call::AddMarker(*last, Control::Confirm.symbol().to_string()),
                Call::AddMarker(*last, Control::Delete.symbol().to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn delete_removes_every_message() {
        let surface = ScriptedSurface::new();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(2), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let messages = menu.messages().to_vec();
        surface.push(messages[1].get(), INVOKER, Control::Delete.symbol());

        let outcome = menu.run().await;

        assert_eq!(outcome, MenuOutcome::Deleted);
        assert!(menu.is_closed());
        assert_eq!(surface.deleted(), messages);
    }

    #[tokio::test]
    async fn delete_on_an_earlier_message_is_ignored() {
        let surface = ScriptedSurface::new();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(2), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let first = menu.messages()[0];
        surface.push(first.get(), INVOKER, Control::Delete.symbol());

        assert_eq!(menu.run().await, MenuOutcome::TimedOut);
        assert!(surface.deleted().is_empty());
    }

    #[tokio::test]
    async fn confirm_clears_controls_and_keeps_messages() {
        let surface = ScriptedSurface::new();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(1), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let id = menu.messages()[0];
        surface.push(id.get(), INVOKER, Control::Confirm.symbol());

        let outcome = menu.run().await;

        assert!(menu.is_dismissed());
        assert_eq!(outcome, MenuOutcome::TimedOut);
        assert!(surface.deleted().is_empty());
        let clears = surface
            .calls()
            .into_iter()
            .filter(|c| *c == Call::ClearMarkers(id))
            .count();
        // once for the confirm, once when the session runs out
        assert_eq!(clears, 2);
    }

    #[tokio::test]
    async fn delete_still_works_after_confirm() {
        let surface = ScriptedSurface::new();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(1), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let id = menu.messages()[0];
        surface.push(id.get(), INVOKER, Control::Confirm.symbol());
        surface.push(id.get(), INVOKER, Control::Delete.symbol());

        assert_eq!(menu.run().await, MenuOutcome::Deleted);
        assert_eq!(surface.deleted(), vec![id]);
    }

    #[tokio::test]
    async fn other_users_cannot_delete() {
        let surface = ScriptedSurface::new();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(2), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let last = menu.messages()[1];
        surface.push(last.get(), INVOKER + 1, Control::Delete.symbol());

        assert_eq!(menu.run().await, MenuOutcome::TimedOut);
        assert!(surface.deleted().is_empty());
    }

    #[tokio::test]
    async fn timeout_without_permissions_still_closes() {
        let surface = ScriptedSurface::without_manage_messages();
        let mut menu = DeletableMenu::open(surface.clone(), UserId::new(INVOKER), &embeds(2), Duration::from_secs(60))
            .await
            .expect("menu opens");
        let last = menu.messages()[1];

        assert_eq!(menu.run().await, MenuOutcome::TimedOut);
        assert!(menu.is_closed());
        assert!(surface.deleted().is_empty());
        assert_eq!(surface.calls().last(), Some(&Call::ClearMarkers(last)));
    }
}
