//! Fetching and caching of the raw waste plan.

use std::sync::RwLock;

use crate::wasteplan_client::{self, WastePlan};
use crate::Result;

/// Fetches the waste plan for one location and caches it for its subscribers.
///
/// The coordinator schedules nothing itself: the host drives
/// [`refresh`](Self::refresh) and afterwards invokes
/// `handle_coordinator_update` on the entities bound to it, one at a time.
#[derive(Debug)]
pub struct PickupCoordinator {
    client: reqwest::Client,
    location_id: String,
    plan: RwLock<Option<WastePlan>>,
}

impl PickupCoordinator {
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            location_id: location_id.into(),
            plan: RwLock::new(None),
        }
    }

    /// Fetch the plan from the official server and replace the cache.
    pub async fn refresh(&self) -> Result<()> {
        let plan = wasteplan_client::get(&self.client, &self.location_id).await?;
        tracing::debug!(
            location = %self.location_id,
            pickups = plan.calendar.len(),
            "refreshed waste plan"
        );
        self.set_plan(plan);
        Ok(())
    }

    /// Replace the cached plan without fetching.
    ///
    /// Hosts that obtain the payload through other means push it in here.
    pub fn set_plan(&self, plan: WastePlan) {
        *self.plan.write().expect("plan cache poisoned") = Some(plan);
    }

    /// The most recently cached plan, or `None` before the first refresh.
    pub fn plan(&self) -> Option<WastePlan> {
        self.plan.read().expect("plan cache poisoned").clone()
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }
}

#[cfg(test)]
mod tests {
    use crate::wasteplan_client::{Pickup, WastePlan};

    use super::PickupCoordinator;

    #[test]
    fn test_plan_is_empty_until_set() {
        let coordinator = PickupCoordinator::new("5010");
        assert!(coordinator.plan().is_none());
        assert_eq!(coordinator.location_id(), "5010");
    }

    #[test]
    fn test_set_plan_replaces_cache() {
        let coordinator = PickupCoordinator::new("5010");
        coordinator.set_plan(WastePlan { calendar: vec![] });
        assert_eq!(coordinator.plan(), Some(WastePlan { calendar: vec![] }));
        coordinator.set_plan(WastePlan {
            calendar: vec![Pickup {
                date: String::from("2099-01-05T00:00:00"),
                fraction: String::from("Papir"),
            }],
        });
        assert_eq!(coordinator.plan().unwrap().calendar.len(), 1);
    }
}
