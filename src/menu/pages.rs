use std::time::Duration;

use serenity::all::{MessageId, UserId};

use super::{next_control, strip_markers, Control, MenuOutcome, MenuSurface, ReactionEvent, SurfaceError};
use crate::hey;

const PAGE_CONTROLS: [Control; 3] = [Control::Previous, Control::Next, Control::Delete];

/// Position within `len` pages. Both directions wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
    len: usize,
}

impl PageCursor {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Active(usize),
    Closed,
}

/// Flips one message through pre-rendered pages for the user who asked for them.
pub struct PageMenu<S: MenuSurface> {
    surface: S,
    invoker: UserId,
    message: MessageId,
    pages: Vec<S::Page>,
    cursor: PageCursor,
    timeout: Duration,
    closed: bool,
}

impl<S: MenuSurface> PageMenu<S> {
    /// Posts the first page and puts the controls under it.
    pub async fn open(
        surface: S,
        invoker: UserId,
        pages: Vec<S::Page>,
        timeout: Duration,
    ) -> Result<Self, SurfaceError> {
        let Some(first) = pages.first() else {
            return Err(SurfaceError::Failed("a page menu needs at least one page".to_string()));
        };
        let message = surface.send(first).await?;

        for control in PAGE_CONTROLS {
            if let Err(e) = surface.add_marker(message, control.symbol()).await {
                hey!("Failed to add {} to message {}: {}", control.symbol(), message, e);
            }
        }

        let cursor = PageCursor::new(pages.len());
        Ok(Self {
            surface,
            invoker,
            message,
            pages,
            cursor,
            timeout,
            closed: false,
        })
    }

    pub fn message(&self) -> MessageId {
        self.message
    }

    pub fn state(&self) -> MenuState {
        if self.closed {
            MenuState::Closed
        } else {
            MenuState::Active(self.cursor.index())
        }
    }

    /// Handles reactions until the message is deleted or left alone for too long.
    pub async fn run(&mut self) -> MenuOutcome {
        while !self.closed {
            let Some((control, event)) = next_control(
                &self.surface,
                self.message,
                self.invoker,
                &PAGE_CONTROLS,
                self.timeout,
            )
            .await
            else {
                self.close().await;
                return MenuOutcome::TimedOut;
            };

            match control {
                Control::Next | Control::Previous => {
                    if let Err(e) = self.flip(control, &event).await {
                        hey!("Page menu on message {} stopped: {}", self.message, e);
                        self.close().await;
                        return MenuOutcome::Failed;
                    }
                }
                Control::Delete => {
                    if let Err(e) = self.surface.delete(self.message).await {
                        hey!("Failed to delete message {}: {}", self.message, e);
                    }
                    self.closed = true;
                }
                Control::Confirm => {}
            }
        }

        MenuOutcome::Deleted
    }

    async fn flip(&mut self, control: Control, event: &ReactionEvent) -> Result<(), SurfaceError> {
        let index = if control == Control::Previous {
            self.cursor.previous()
        } else {
            self.cursor.next()
        };

        self.surface.edit(self.message, &self.pages[index]).await?;

        // hand the control back to the user
        if let Err(e) = self
            .surface
            .remove_marker(self.message, &event.emoji, event.user)
            .await
        {
            hey!("Could not remove a reaction from message {}: {}", self.message, e);
        }
        Ok(())
    }

    async fn close(&mut self) {
        strip_markers(&self.surface, self.message, &PAGE_CONTROLS).await;
        self.closed = true;
    }
}
