use chrono::{Datelike, Months, NaiveDateTime};

/// Moves `instant` back by whole calendar months.
///
/// The day of month is clamped when the target month is shorter, so
/// March 31 minus one month is the last day of February. Returns `None`
/// only when the result would fall outside chrono's supported range.
pub fn months_before(instant: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    instant.checked_sub_months(Months::new(months))
}

/// Short month label used on chart axes, e.g. `Oct 2026`.
pub fn month_label(instant: NaiveDateTime) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let month = MONTHS
        .get(instant.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {}", month, instant.year())
}
