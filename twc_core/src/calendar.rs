//! The calendar entity: raw pickup records become upcoming calendar events.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::config::ConfigEntry;
use crate::coordinator::PickupCoordinator;
use crate::entity::{EntityState, StatePublisher};
use crate::{Error, Result};

/// Pickup date format used by the upstream feed.
static FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Local time of day at which a pickup window opens.
const PICKUP_START_HOUR: u32 = 8;

/// Length of a pickup window in hours.
const PICKUP_WINDOW_HOURS: i64 = 8;

/// One scheduled pickup window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Calendar entity for one pickup location.
///
/// Bound to the coordinator holding the raw plan; the list of upcoming events
/// is owned by the entity and rebuilt in full on every refresh.
pub struct WastePlanCalendar {
    coordinator: Arc<PickupCoordinator>,
    publisher: Box<dyn StatePublisher + Send + Sync>,
    unique_id: String,
    name: String,
    location: String,
    events: Vec<CalendarEvent>,
}

impl WastePlanCalendar {
    pub fn new(
        coordinator: Arc<PickupCoordinator>,
        entry: &ConfigEntry,
        publisher: Box<dyn StatePublisher + Send + Sync>,
    ) -> Self {
        Self {
            coordinator,
            publisher,
            unique_id: entry.location_id.clone(),
            name: entry.calendar_name.clone(),
            location: entry.location_name.clone(),
            events: Vec::new(),
        }
    }

    /// The next upcoming event, or `None` when no pickups lie ahead.
    pub fn event(&self) -> Option<&CalendarEvent> {
        self.events.first()
    }

    /// All upcoming events, in the order yielded by the source.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The attribute map exposed alongside the entity state.
    pub fn extra_state_attributes(&self) -> HashMap<String, Value> {
        HashMap::from([(String::from("events"), serde_json::json!(self.events))])
    }

    /// Invoked by the host once when the entity is added; runs the first rebuild.
    pub fn attach(&mut self) -> Result<()> {
        self.handle_coordinator_update()
    }

    /// Handle updated data from the coordinator.
    ///
    /// Clears the held events and rebuilds them from the cached plan, dropping
    /// pickups dated before today. A record that fails to convert aborts the
    /// whole refresh: the list stays empty and no state is published, so the
    /// host keeps displaying the last published state.
    pub fn handle_coordinator_update(&mut self) -> Result<()> {
        self.events.clear();
        let plan = self.coordinator.plan().ok_or(Error::PlanUnavailable)?;
        let today = Local::now().date_naive();
        let mut events = Vec::new();
        for pickup in &plan.calendar {
            let pickup_date = NaiveDateTime::parse_from_str(&pickup.date, FORMAT)
                .map_err(|source| Error::InvalidPickupDate {
                    value: pickup.date.clone(),
                    source,
                })?
                .date();
            if pickup_date < today {
                continue;
            }
            let start = pickup_date
                .and_hms_opt(PICKUP_START_HOUR, 0, 0)
                .and_then(|start| start.and_local_timezone(Local).earliest())
                .ok_or_else(|| Error::LocalTime {
                    value: pickup.date.clone(),
                })?;
            events.push(CalendarEvent {
                summary: pickup.fraction.clone(),
                start,
                end: start + Duration::hours(PICKUP_WINDOW_HOURS),
            });
        }
        self.events = events;
        tracing::debug!(
            entity = %self.unique_id,
            events = self.events.len(),
            "rebuilt pickup events"
        );
        self.publisher.state_changed(
            &self.unique_id,
            EntityState {
                event: self.events.first().cloned(),
                attributes: self.extra_state_attributes(),
            },
        );
        Ok(())
    }
}
