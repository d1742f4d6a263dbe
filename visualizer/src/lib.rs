//! Core of the PhaseWave benchmark viewer.
//!
//! Raw [`shared::StatSample`]s are grouped into phase instances, merged into a timetable keyed by
//! interval boundaries, and windowed to the domain chosen through drag-to-zoom gestures.
//! [`ChartSession`] ties the pieces together for a UI or CLI driver.

pub mod chart_session;
pub mod error;
pub mod format_utils;
pub mod panel;
pub mod series;
pub mod timeline;

pub use chart_session::ChartSession;
pub use error::ChartError;
pub use format_utils::{format_clock, format_nanos_as_millis};
pub use panel::{ChartPanel, ColumnLayout, LegendEntry, LegendKind, THROUGHPUT_LEGEND_LABEL, build_panel, build_panels};
pub use series::{ColumnKey, PhaseInstance, StatAccessor, Timetable, TimetableRow};
pub use timeline::{Domain, ZoomController, ZoomOutcome, ZoomState};
