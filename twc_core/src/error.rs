use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while fetching or rebuilding the pickup calendar.
#[derive(Debug, Error)]
pub enum Error {
    /// A pickup record carried a date string that does not match
    /// `YYYY-MM-DDTHH:MM:SS`. Aborts the whole refresh.
    #[error("invalid pickup date {value:?}")]
    InvalidPickupDate {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },
    /// The forced pickup time does not exist in the local timezone.
    #[error("pickup time of {value:?} does not exist in the local timezone")]
    LocalTime { value: String },
    /// A rebuild was requested before the coordinator cached any plan.
    #[error("no waste plan has been fetched yet")]
    PlanUnavailable,
    #[error("failed to fetch the waste plan")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to decode the waste plan")]
    Decode(#[from] serde_json::Error),
}
