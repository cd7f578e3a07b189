//! Range filtering and chart shaping for the snapshot history.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::snapshot_model::{ChartPoint, Snapshot};
use crate::errors::{Error, ValidationError};
use crate::utils::time_utils::{month_label, months_before};

/// How far back the trend chart looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "2Y")]
    TwoYears,
    #[default]
    All,
}

impl TimeRange {
    /// Window length in calendar months. `None` means unbounded.
    pub const fn months(&self) -> Option<u32> {
        match self {
            TimeRange::SixMonths => Some(6),
            TimeRange::OneYear => Some(12),
            TimeRange::TwoYears => Some(24),
            TimeRange::All => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
            TimeRange::TwoYears => "2Y",
            TimeRange::All => "All",
        }
    }

    /// Earliest timestamp still inside the window ending at `now`.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        self.months().and_then(|m| months_before(now, m))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6M" => Ok(TimeRange::SixMonths),
            "1Y" => Ok(TimeRange::OneYear),
            "2Y" => Ok(TimeRange::TwoYears),
            "All" => Ok(TimeRange::All),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown time range '{}'",
                other
            )))),
        }
    }
}

/// Keeps snapshots created at or after `now - range`. Order is preserved.
pub fn filter_by_range(
    snapshots: Vec<Snapshot>,
    range: TimeRange,
    now: NaiveDateTime,
) -> Vec<Snapshot> {
    match range.cutoff(now) {
        Some(cutoff) => snapshots
            .into_iter()
            .filter(|s| s.created_at >= cutoff)
            .collect(),
        None => snapshots,
    }
}

/// Chart points in time-axis order, given snapshots newest first.
pub fn chart_points(snapshots: &[Snapshot]) -> Vec<ChartPoint> {
    snapshots
        .iter()
        .rev()
        .map(|s| ChartPoint {
            date: month_label(s.created_at),
            value: s.networth,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn snapshot(id: &str, created_at: NaiveDateTime, networth: Decimal) -> Snapshot {
        Snapshot {
            id: id.to_string(),
            user_id: "u1".to_string(),
            assets: networth,
            liabilities: Decimal::ZERO,
            networth,
            created_at,
        }
    }

    #[test]
    fn parses_wire_values() {
        assert_eq!("6M".parse::<TimeRange>().unwrap(), TimeRange::SixMonths);
        assert_eq!("1Y".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert_eq!("2Y".parse::<TimeRange>().unwrap(), TimeRange::TwoYears);
        assert_eq!("All".parse::<TimeRange>().unwrap(), TimeRange::All);
        assert!("3M".parse::<TimeRange>().is_err());
        assert!("all".parse::<TimeRange>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&TimeRange::SixMonths).unwrap(), "\"6M\"");
        let parsed: TimeRange = serde_json::from_str("\"2Y\"").unwrap();
        assert_eq!(parsed, TimeRange::TwoYears);
    }

    #[test]
    fn six_month_window_is_inclusive() {
        let now = at(2026, 10, 19);
        let snapshots = vec![
            snapshot("c", at(2026, 10, 1), dec!(3)),
            snapshot("b", at(2026, 4, 19), dec!(2)),
            snapshot("a", at(2026, 4, 18), dec!(1)),
        ];

        let kept = filter_by_range(snapshots, TimeRange::SixMonths, now);

        let ids: Vec<&str> = kept.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn window_clamps_to_end_of_shorter_month() {
        let now = at(2026, 8, 31);
        let snapshots = vec![
            snapshot("in", at(2026, 2, 28), dec!(1)),
            snapshot("out", at(2026, 2, 27), dec!(1)),
        ];

        let kept = filter_by_range(snapshots, TimeRange::SixMonths, now);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "in");
    }

    #[test]
    fn all_keeps_everything() {
        let now = at(2026, 10, 19);
        let snapshots = vec![
            snapshot("new", at(2026, 10, 1), dec!(1)),
            snapshot("old", at(2001, 1, 1), dec!(1)),
        ];

        assert_eq!(filter_by_range(snapshots, TimeRange::All, now).len(), 2);
    }

    #[test]
    fn two_year_window() {
        let now = at(2026, 10, 19);
        let snapshots = vec![
            snapshot("a", at(2025, 1, 1), dec!(1)),
            snapshot("b", at(2024, 10, 19), dec!(1)),
            snapshot("c", at(2024, 10, 18), dec!(1)),
        ];

        let kept = filter_by_range(snapshots, TimeRange::TwoYears, now);

        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn chart_points_are_oldest_first() {
        let snapshots = vec![
            snapshot("b", at(2026, 10, 2), dec!(600)),
            snapshot("a", at(2026, 9, 2), dec!(-50.5)),
        ];

        let points = chart_points(&snapshots);

        assert_eq!(
            points,
            vec![
                ChartPoint {
                    date: "Sep 2026".to_string(),
                    value: dec!(-50.5),
                },
                ChartPoint {
                    date: "Oct 2026".to_string(),
                    value: dec!(600),
                },
            ]
        );
    }
}
