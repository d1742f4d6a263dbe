//! Timeline domain: visible interval, full range, zoom gestures, windowing and caching.

pub mod maximum_timeline_range;
pub mod time_domain;
pub mod timeline_cache;
pub mod view_filter;
pub mod zoom_controller;

pub use maximum_timeline_range::full_domain;
pub use time_domain::Domain;
pub use timeline_cache::{CacheKey, CacheStatistics, TimelineCache};
pub use view_filter::View;
pub use zoom_controller::{ZoomController, ZoomGesture, ZoomOutcome, ZoomState};
