// In-memory surface that records what a menu did and replays scripted reactions.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serenity::all::{MessageId, UserId};
use serenity::async_trait;

use super::{MenuSurface, ReactionEvent, SurfaceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Send(MessageId, String),
    Edit(MessageId, String),
    Delete(MessageId),
    AddMarker(MessageId, String),
    RemoveMarker(MessageId, String, Option<UserId>),
    ClearMarkers(MessageId),
}

#[derive(Default)]
pub(crate) struct ScriptedSurface {
    events: Mutex<VecDeque<ReactionEvent>>,
    calls: Mutex<Vec<Call>>,
    last_id: AtomicU64,
    forbid_clearing: bool,
}

impl ScriptedSurface {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every attempt to remove or clear markers fails with a permission error.
    pub(crate) fn without_manage_messages() -> Arc<Self> {
        Arc::new(Self {
            forbid_clearing: true,
            ..Self::default()
        })
    }

    pub(crate) fn push(&self, message: u64, user: u64, emoji: &str) {
        self.events
            .lock()
            .expect("events lock")
            .push_back(ReactionEvent {
                message: MessageId::new(message),
                user: Some(UserId::new(user)),
                emoji: emoji.to_string(),
            });
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Edit(_, page) => Some(page),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn deleted(&self) -> Vec<MessageId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl MenuSurface for Arc<ScriptedSurface> {
    type Page = String;

    async fn send(&self, page: &String) -> Result<MessageId, SurfaceError> {
        let id = MessageId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.record(Call::Send(id, page.clone()));
        Ok(id)
    }

    async fn edit(&self, message: MessageId, page: &String) -> Result<(), SurfaceError> {
        self.record(Call::Edit(message, page.clone()));
        Ok(())
    }

    async fn delete(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.record(Call::Delete(message));
        Ok(())
    }

    async fn add_marker(&self, message: MessageId, symbol: &str) -> Result<(), SurfaceError> {
        self.record(Call::AddMarker(message, symbol.to_string()));
        Ok(())
    }

    async fn remove_marker(
        &self,
        message: MessageId,
        symbol: &str,
        user: Option<UserId>,
    ) -> Result<(), SurfaceError> {
        self.record(Call::RemoveMarker(message, symbol.to_string(), user));
        if self.forbid_clearing && user.is_some() {
            return Err(SurfaceError::Forbidden("Manage Messages".to_string()));
        }
        Ok(())
    }

    async fn clear_markers(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.record(Call::ClearMarkers(message));
        if self.forbid_clearing {
            return Err(SurfaceError::Forbidden("Manage Messages".to_string()));
        }
        Ok(())
    }

    async fn await_reaction(&self, _message: MessageId, _timeout: Duration) -> Option<ReactionEvent> {
        self.events.lock().expect("events lock").pop_front()
    }
}
