//! Host-persisted configuration identifying a pickup location.

/// Configuration entry for one pickup location.
///
/// The values are opaque pass-through strings supplied by the host; nothing
/// here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Unique id of the entity, the pickup location id at trv.no.
    pub location_id: String,
    /// Display name of the calendar.
    pub calendar_name: String,
    /// Human-readable location label.
    pub location_name: String,
}

impl ConfigEntry {
    pub fn new(
        location_id: impl Into<String>,
        calendar_name: impl Into<String>,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            calendar_name: calendar_name.into(),
            location_name: location_name.into(),
        }
    }
}
