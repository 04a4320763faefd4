//! iCalendar rendering of the rebuilt pickup events.

use bitmask_enum::bitmask;
use chrono::{DateTime, Local};
use ical::{
    generator::{IcalCalendar, IcalCalendarBuilder, IcalEvent, IcalEventBuilder, Property},
    ical_property,
};
use regex::Regex;

use crate::calendar::{CalendarEvent, WastePlanCalendar};

static PROD_ID: [&str; 2] = ["Wasteplan", "trv.no"];
static TIMEZONE: &str = "Europe/Oslo";
static FORMAT: &str = "%Y%m%dT%H%M%S";

static LABEL_RESIDUAL: &str = "Restavfall";
static LABEL_PAPER: &str = "Papir";
static LABEL_PLASTIC: &str = "Plastemballasje";
static LABEL_FOOD: &str = "Matavfall";

#[bitmask]
#[bitmask_config(inverted_flags)]
pub enum FractionBitmask {
    Residual,
    Paper,
    Plastic,
    Food,
}

/// Build the calendar from the entity's upcoming events.
pub fn get_calendar(
    calendar_entity: &WastePlanCalendar,
    excluded_fractions: FractionBitmask,
) -> IcalCalendar {
    let changed = Local::now().format(FORMAT).to_string();
    let prod_id_label = match excluded_fractions {
        FractionBitmask::InvertedResidual => Some(String::from(LABEL_RESIDUAL)),
        FractionBitmask::InvertedPaper => Some(String::from(LABEL_PAPER)),
        FractionBitmask::InvertedPlastic => Some(String::from(LABEL_PLASTIC)),
        FractionBitmask::InvertedFood => Some(String::from(LABEL_FOOD)),
        _ => None,
    };
    let mut calendar = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid(prod_id(prod_id_label))
        .build();
    calendar
        .properties
        .push(ical_property!("X-WR-CALNAME", calendar_entity.name()));
    for event in calendar_entity.events() {
        if is_excluded(&event.summary, excluded_fractions) {
            continue;
        }
        calendar.events.push(get_event(calendar_entity, event, &changed));
    }
    calendar
}

/// Check whether an event's fraction label is excluded.
fn is_excluded(summary: &str, excluded_fractions: FractionBitmask) -> bool {
    [
        (LABEL_RESIDUAL, FractionBitmask::Residual),
        (LABEL_PAPER, FractionBitmask::Paper),
        (LABEL_PLASTIC, FractionBitmask::Plastic),
        (LABEL_FOOD, FractionBitmask::Food),
    ]
    .into_iter()
    .any(|(label, fraction)| excluded_fractions.contains(fraction) && summary.contains(label))
}

/// Build one VEVENT spanning the pickup window.
fn get_event(
    calendar_entity: &WastePlanCalendar,
    event: &CalendarEvent,
    changed: &str,
) -> IcalEvent {
    IcalEventBuilder::tzid(TIMEZONE)
        .uid(uid(calendar_entity.unique_id(), &event.summary, &event.start))
        .changed(changed)
        .start(event.start.format(FORMAT).to_string())
        .end(event.end.format(FORMAT).to_string())
        .set(ical_property!("SUMMARY", &event.summary))
        .set(ical_property!("LOCATION", calendar_entity.location()))
        .set(ical_property!("TRANSP", "TRANSPARENT"))
        .build()
}

fn prod_id(label: Option<String>) -> String {
    let mut parts = vec![String::from("-")];
    if let Some(label) = label {
        parts.push(label);
    }
    parts.extend(PROD_ID.into_iter().map(String::from));
    parts.join("//")
}

/// Get a unique id for one pickup window at a specific location.
///
/// Changing this function is a breaking change!
fn uid(location_id: &str, summary: &str, start: &DateTime<Local>) -> String {
    let whitespace_regex = Regex::new(r"\s+").unwrap();
    let whitespace_rep = "-";
    let location_id = whitespace_regex.replace_all(location_id, whitespace_rep);
    let summary = whitespace_regex.replace_all(summary, whitespace_rep);
    format!(
        "Wasteplan_{location_id}_{summary}_{}@trv.no",
        start.format("%Y%m%d")
    )
}
