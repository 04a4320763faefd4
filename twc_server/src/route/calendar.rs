pub mod food;
pub mod paper;
pub mod plastic;
pub mod residual;

use std::sync::Arc;

use axum::{
    extract::Query,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use twc_core::{
    calendar::WastePlanCalendar,
    config::ConfigEntry,
    coordinator::PickupCoordinator,
    entity::LogPublisher,
    ical::generator::Emitter,
    ics::{self, FractionBitmask},
};

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    location_id: String,
    #[serde(default = "default_calendar_name")]
    calendar_name: String,
    #[serde(default)]
    location_name: String,
    #[serde(default)]
    exclude_residual: bool,
    #[serde(default)]
    exclude_paper: bool,
    #[serde(default)]
    exclude_plastic: bool,
    #[serde(default)]
    exclude_food: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationQueryParams {
    location_id: String,
    #[serde(default = "default_calendar_name")]
    calendar_name: String,
    #[serde(default)]
    location_name: String,
}

fn default_calendar_name() -> String {
    String::from("Wasteplan")
}

impl From<&QueryParams> for LocationQueryParams {
    fn from(value: &QueryParams) -> Self {
        Self {
            location_id: value.location_id.clone(),
            calendar_name: value.calendar_name.clone(),
            location_name: value.location_name.clone(),
        }
    }
}

impl From<&QueryParams> for FractionBitmask {
    fn from(value: &QueryParams) -> Self {
        let mut fraction_bitmask = FractionBitmask::none();
        if value.exclude_residual {
            fraction_bitmask |= FractionBitmask::Residual;
        }
        if value.exclude_paper {
            fraction_bitmask |= FractionBitmask::Paper;
        }
        if value.exclude_plastic {
            fraction_bitmask |= FractionBitmask::Plastic;
        }
        if value.exclude_food {
            fraction_bitmask |= FractionBitmask::Food;
        }
        fraction_bitmask
    }
}

pub async fn handle(
    location_query_params: &LocationQueryParams,
    excluded_fractions: FractionBitmask,
) -> Result<Response, (StatusCode, String)> {
    let entry = ConfigEntry::new(
        &location_query_params.location_id,
        &location_query_params.calendar_name,
        &location_query_params.location_name,
    );
    let coordinator = Arc::new(PickupCoordinator::new(&entry.location_id));
    coordinator.refresh().await.map_err(internal_error)?;
    let mut calendar_entity = WastePlanCalendar::new(coordinator, &entry, Box::new(LogPublisher));
    calendar_entity.attach().map_err(internal_error)?;
    let calendar = ics::get_calendar(&calendar_entity, excluded_fractions);
    let response = ([(CONTENT_TYPE, "text/calendar")], calendar.generate()).into_response();
    Ok(response)
}

fn internal_error(err: twc_core::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Handle calendar requests.
///
/// The `location_id` must be given in the query string.
pub async fn handler(
    Query(query_params): Query<QueryParams>,
) -> Result<Response, (StatusCode, String)> {
    let response = handle(
        &LocationQueryParams::from(&query_params),
        FractionBitmask::from(&query_params),
    )
    .await?;
    Ok(response)
}
