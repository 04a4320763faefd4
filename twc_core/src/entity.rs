//! Entity state reporting.
//!
//! The host owns the poll loop and the state display; the calendar entity hands
//! it a fresh [`EntityState`] through a [`StatePublisher`] after every
//! successful rebuild.

use std::collections::HashMap;

use serde_json::Value;

use crate::calendar::CalendarEvent;

/// Snapshot of the calendar entity's externally visible state.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    /// The next upcoming event, if any.
    pub event: Option<CalendarEvent>,
    /// Attributes exposed alongside the state: `{"events": <full list>}`.
    pub attributes: HashMap<String, Value>,
}

/// Receiver for state-changed notifications.
pub trait StatePublisher {
    fn state_changed(&self, unique_id: &str, state: EntityState);
}

/// Publisher which logs state changes, for hosts without a state store.
#[derive(Debug, Default)]
pub struct LogPublisher;

impl StatePublisher for LogPublisher {
    fn state_changed(&self, unique_id: &str, state: EntityState) {
        tracing::debug!(
            entity = unique_id,
            next = state.event.as_ref().map(|event| event.summary.as_str()),
            "state changed"
        );
    }
}
