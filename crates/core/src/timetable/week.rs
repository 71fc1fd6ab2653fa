//! Weekly view builder.
//!
//! Groups a class's slots into the canonical per-day shape returned to the
//! admin UI: exactly five buckets in fixed Monday-to-Friday order, each
//! sorted by start time and then period number.

use std::collections::HashMap;

use crate::models::timetable::{DaySchedule, SlotView};
use crate::models::weekday::{Weekday, WEEK};

/// Groups slots by day into the canonical weekly shape.
///
/// Input order is irrelevant. Slots whose persisted day name does not
/// resolve to a teaching day are silently dropped.
pub fn group_week(slots: Vec<SlotView>) -> Vec<DaySchedule> {
    let mut buckets: HashMap<Weekday, Vec<SlotView>> =
        WEEK.iter().map(|day| (*day, Vec::new())).collect();

    for slot in slots {
        let Some(day) = Weekday::from_name(&slot.day) else {
            continue;
        };
        if let Some(bucket) = buckets.get_mut(&day) {
            bucket.push(slot);
        }
    }

    WEEK.iter()
        .map(|day| {
            let mut day_slots = buckets.remove(day).unwrap_or_default();
            day_slots.sort_by(|a, b| {
                a.start_time
                    .cmp(&b.start_time)
                    .then(a.period_no.cmp(&b.period_no))
            });
            DaySchedule {
                day: day.name().to_string(),
                day_of_week: day.number(),
                slots: day_slots,
            }
        })
        .collect()
}
