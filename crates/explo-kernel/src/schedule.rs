//! Campaign calendar.

use explo_model::{Date, Schedule, ScheduleParameters, ScheduleStage};
use time::Duration;

/// Whole days needed to drill `metres` at `metres_per_day`.
pub fn drilling_days(metres: f64, metres_per_day: f64) -> u32 {
    (metres / metres_per_day).ceil() as u32
}

fn stage(start: Date, days: u32) -> ScheduleStage {
    // Date arithmetic only fails past year 9999; saturate there.
    let end = start
        .checked_add(Duration::days(i64::from(days)))
        .unwrap_or(Date::MAX);
    ScheduleStage { days, start, end }
}

/// Lay out mobilization, then the initial phase, then the detailed phase.
///
/// Each stage starts on the date the previous one ends.
pub fn schedule(initial_metres: f64, detailed_metres: f64, params: &ScheduleParameters) -> Schedule {
    let mobilization = stage(params.start_date, params.mobilization_days);
    let phase1 = stage(
        mobilization.end,
        drilling_days(initial_metres, params.metres_per_day),
    );
    let phase2 = stage(
        phase1.end,
        drilling_days(detailed_metres, params.metres_per_day),
    );

    Schedule {
        total_days: mobilization
            .days
            .saturating_add(phase1.days)
            .saturating_add(phase2.days),
        mobilization,
        phase1,
        phase2,
    }
}
