//! Shaping of raw samples into chart series: grouping, timetable, transition ticks.

pub mod sample_grouper;
pub mod stat_accessor;
pub mod timetable;
pub mod transition_ticks;

pub use sample_grouper::{PhaseInstance, group_phase_instances};
pub use stat_accessor::{StatAccessor, accessors_from_config, default_accessors};
pub use timetable::{ColumnKey, Timetable, TimetableRow};
pub use transition_ticks::transition_ticks;
