//! This client fetches the pickup schedule for a location and parses it into a waste plan.

use serde::Deserialize;

use crate::Result;

static URL: &str = "https://trv.no/wp-json/wasteplan/v2/calendar";

/// The pickup schedule as returned by the official API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WastePlan {
    pub calendar: Vec<Pickup>,
}

/// One scheduled pickup.
///
/// The date stays unparsed here; the calendar entity owns date handling and its
/// failure mode. Unknown payload fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pickup {
    /// Pickup date in the format `YYYY-MM-DDTHH:MM:SS`.
    #[serde(rename = "dato")]
    pub date: String,
    /// Waste fraction label, e.g. "Restavfall".
    #[serde(rename = "fraksjon")]
    pub fraction: String,
}

/// Get the waste plan for a specific pickup location.
pub async fn get(client: &reqwest::Client, location_id: &str) -> Result<WastePlan> {
    let response = get_response(client, location_id).await?;
    let plan = parse(&response.text().await?)?;
    Ok(plan)
}

/// Get the waste plan response from the official server.
async fn get_response(client: &reqwest::Client, location_id: &str) -> Result<reqwest::Response> {
    let response = client
        .get(format!("{URL}/{location_id}"))
        .send()
        .await?
        .error_for_status()?;
    Ok(response)
}

/// Parse the official JSON payload to extract the waste plan.
fn parse(json: &str) -> Result<WastePlan> {
    let plan = serde_json::from_str(json)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use crate::wasteplan_client::{get, parse, Pickup, WastePlan};

    fn get_test_plan() -> WastePlan {
        let pickup = |date: &str, fraction: &str| Pickup {
            date: String::from(date),
            fraction: String::from(fraction),
        };
        WastePlan {
            calendar: vec![
                pickup("2023-07-04T00:00:00", "Restavfall"),
                pickup("2023-07-04T00:00:00", "Matavfall"),
                pickup("2023-07-11T00:00:00", "Papir"),
                pickup("2023-07-18T00:00:00", "Restavfall"),
                pickup("2023-07-25T00:00:00", "Plastemballasje"),
                pickup("2023-08-01T00:00:00", "Restavfall"),
            ],
        }
    }

    /// Test whether requests can be sent and the resulting plan contains something.
    ///
    /// This is an online test!
    #[tokio::test]
    async fn test_get() {
        let client = reqwest::Client::new();
        let plan = get(&client, "5010").await.unwrap();
        assert!(plan.calendar.len() > 0);
    }

    /// Test whether the payload is parsed correctly.
    ///
    /// This test is offline.
    #[test]
    fn test_parse() {
        let json = include_str!("wasteplan_client/tests/wasteplan.json");
        let parsed = parse(json).unwrap();
        let expected = get_test_plan();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse("[]").is_err());
        assert!(parse("{}").is_err());
    }
}
