use axum::{extract::Query, http::StatusCode, response::Response};
use twc_core::ics::FractionBitmask;

use crate::route::calendar::{handle, LocationQueryParams};

pub async fn handler(
    Query(location_query_params): Query<LocationQueryParams>,
) -> Result<Response, (StatusCode, String)> {
    handle(&location_query_params, FractionBitmask::InvertedResidual).await
}
