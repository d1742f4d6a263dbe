//! Windows a timetable and its ticks to the visible domain.

use super::time_domain::Domain;
use crate::series::{Timetable, TimetableRow};
use serde::Serialize;
use shared::TimeMs;
use std::collections::BTreeSet;

/// What a renderer receives for one domain.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct View {
    pub timetable: Timetable,
    pub ticks: Vec<TimeMs>,
}

/// Ticks strictly inside the domain; ticks on either edge would overlap the axis bounds.
pub fn visible_ticks(ticks: &BTreeSet<TimeMs>, domain: Domain) -> Vec<TimeMs> {
    ticks
        .iter()
        .copied()
        .filter(|tick| domain.contains_strictly(*tick))
        .collect()
}

/// A row is visible when the start or the end of its interval lies in the domain.
///
/// A row whose interval strictly contains the domain matches neither and is dropped.
// TODO: switch to an overlap test once the chart renders rows clipped at the domain edges.
pub fn row_visible(row: &TimetableRow, domain: Domain) -> bool {
    domain.contains(row.start) || domain.contains(row.end)
}

pub fn visible_rows(timetable: &Timetable, domain: Domain) -> Timetable {
    Timetable::from_sorted_rows(
        timetable
            .rows()
            .iter()
            .filter(|row| row_visible(row, domain))
            .cloned()
            .collect(),
    )
}

pub fn apply(timetable: &Timetable, ticks: &BTreeSet<TimeMs>, domain: Domain) -> View {
    View {
        timetable: visible_rows(timetable, domain),
        ticks: visible_ticks(ticks, domain),
    }
}
