use std::{env::current_dir, fs::write, sync::Arc};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use twc_core::{
    calendar::WastePlanCalendar,
    config::ConfigEntry,
    coordinator::PickupCoordinator,
    entity::LogPublisher,
    ical::generator::Emitter,
    ics::{self, FractionBitmask},
};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the pickup location id at trv.no
    pub location_id: String,
    /// display name of the calendar
    #[arg(long, default_value = "Wasteplan")]
    pub calendar_name: String,
    /// human-readable location label
    #[arg(long, default_value = "")]
    pub location_name: String,
    /// exclude residual waste pickups
    #[arg(long)]
    pub exclude_residual: bool,
    /// exclude paper pickups
    #[arg(long)]
    pub exclude_paper: bool,
    /// exclude plastic packaging pickups
    #[arg(long)]
    pub exclude_plastic: bool,
    /// exclude food waste pickups
    #[arg(long)]
    pub exclude_food: bool,
}

impl From<&Arguments> for FractionBitmask {
    fn from(value: &Arguments) -> Self {
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

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Arguments::parse();
    let entry = ConfigEntry::new(&args.location_id, &args.calendar_name, &args.location_name);
    let coordinator = Arc::new(PickupCoordinator::new(&entry.location_id));
    coordinator.refresh().await?;
    let mut calendar_entity = WastePlanCalendar::new(coordinator, &entry, Box::new(LogPublisher));
    calendar_entity.attach()?;
    let calendar = ics::get_calendar(&calendar_entity, FractionBitmask::from(&args));
    let mut path = current_dir()?;
    path.push("wasteplan.ics");
    write(path, calendar.generate())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use twc_core::ics::FractionBitmask;

    use crate::Arguments;

    fn arguments() -> Arguments {
        Arguments {
            location_id: String::from("5010"),
            calendar_name: String::from("Wasteplan"),
            location_name: String::from(""),
            exclude_residual: false,
            exclude_paper: false,
            exclude_plastic: false,
            exclude_food: false,
        }
    }

    #[test]
    fn test_from_arguments_for_fraction_bitmask() {
        let args = arguments();
        assert_eq!(FractionBitmask::from(&args), FractionBitmask::none());
        let args = Arguments {
            exclude_residual: true,
            ..arguments()
        };
        assert_eq!(FractionBitmask::from(&args), FractionBitmask::Residual);
        let args = Arguments {
            exclude_paper: true,
            exclude_plastic: true,
            exclude_food: true,
            ..arguments()
        };
        assert_eq!(
            FractionBitmask::from(&args),
            FractionBitmask::Paper
                .or(FractionBitmask::Plastic)
                .or(FractionBitmask::Food)
        );
    }
}
