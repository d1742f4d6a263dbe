//! Chart state for one loaded sample set: zoom controller plus memoized panels.
//!
//! The UI layer forwards pointer gestures to the `on_*` methods. Those calls arrive one at a
//! time from the UI event source, so the session holds plain owned state and no locks.

use crate::error::ChartError;
use crate::panel::{ChartPanel, build_panels};
use crate::series::{StatAccessor, accessors_from_config, default_accessors};
use crate::timeline::{CacheKey, CacheStatistics, Domain, TimelineCache, ZoomController, ZoomOutcome, full_domain};
use shared::{ChartSection, StatSample, TimeMs};

#[derive(Debug)]
pub struct ChartSession {
    samples: Vec<StatSample>,
    samples_version: u64,
    accessors: Vec<StatAccessor>,
    zoom: Option<ZoomController>,
    cache: TimelineCache<Vec<ChartPanel>>,
}

impl ChartSession {
    pub fn new(accessors: Vec<StatAccessor>) -> Self {
        Self {
            samples: Vec::new(),
            samples_version: 0,
            accessors,
            zoom: None,
            cache: TimelineCache::new(),
        }
    }

    pub fn with_config(chart: &ChartSection) -> Result<Self, ChartError> {
        Ok(Self::new(accessors_from_config(chart)?))
    }

    /// Replaces the sample set. A changed full range resets the zoom.
    pub fn load(&mut self, samples: Vec<StatSample>) {
        let inverted = samples.iter().filter(|s| s.end_time < s.start_time).count();
        if inverted > 0 {
            log::warn!("{inverted} samples end before they start");
        }

        self.samples = samples;
        self.samples_version += 1;
        self.cache.invalidate_samples(self.samples_version);

        self.zoom = match (full_domain(&self.samples), self.zoom.take()) {
            (Some(full), Some(mut zoom)) => {
                zoom.rebase(full);
                Some(zoom)
            }
            (Some(full), None) => Some(ZoomController::new(full)),
            (None, _) => None,
        };
        log::debug!(
            "loaded {} samples (version {}), full domain {:?}",
            self.samples.len(),
            self.samples_version,
            self.full_domain()
        );
    }

    pub fn samples(&self) -> &[StatSample] {
        &self.samples
    }

    pub fn accessors(&self) -> &[StatAccessor] {
        &self.accessors
    }

    pub fn zoom(&self) -> Option<&ZoomController> {
        self.zoom.as_ref()
    }

    /// Visible domain; `None` until samples are loaded.
    pub fn domain(&self) -> Option<Domain> {
        self.zoom.as_ref().map(ZoomController::domain)
    }

    pub fn full_domain(&self) -> Option<Domain> {
        self.zoom.as_ref().map(ZoomController::full_domain)
    }

    pub fn selection(&self) -> Option<Domain> {
        self.zoom.as_ref().and_then(ZoomController::selection)
    }

    pub fn on_press(&mut self, at: Option<TimeMs>) {
        if let Some(zoom) = &mut self.zoom {
            zoom.press(at);
        }
    }

    pub fn on_move(&mut self, at: Option<TimeMs>) {
        if let Some(zoom) = &mut self.zoom {
            zoom.move_to(at);
        }
    }

    pub fn on_release(&mut self) -> ZoomOutcome {
        self.zoom.as_mut().map_or(ZoomOutcome::Ignored, ZoomController::release)
    }

    pub fn on_pointer_leave(&mut self) {
        if let Some(zoom) = &mut self.zoom {
            zoom.pointer_left();
        }
    }

    pub fn on_reset_gesture(&mut self) {
        if let Some(zoom) = &mut self.zoom {
            zoom.reset();
        }
    }

    /// Convenience for drivers without a pointer: press, move and release in one call.
    pub fn zoom_to(&mut self, domain: Domain) -> ZoomOutcome {
        self.on_press(Some(domain.lo));
        self.on_move(Some(domain.hi));
        self.on_release()
    }

    /// Panels for the current domain, recomputed only when samples or domain changed.
    pub fn panels(&mut self) -> &[ChartPanel] {
        let Some(domain) = self.domain() else {
            return &[];
        };
        let key = CacheKey {
            samples_version: self.samples_version,
            domain,
        };
        let samples = &self.samples;
        let accessors = &self.accessors;
        self.cache
            .get_or_compute(key, || build_panels(samples, accessors, domain))
    }

    pub fn cache_statistics(&self) -> CacheStatistics {
        self.cache.statistics()
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new(default_accessors())
    }
}
