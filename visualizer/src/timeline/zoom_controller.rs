//! Drag-to-zoom state machine.
//!
//! A press starts a gesture, moves update its moving anchor, and a release either turns the
//! gesture into the new visible domain or drops it. A reset returns to the full domain from
//! any state.

use super::time_domain::Domain;
use shared::TimeMs;

/// Anchors of an in-progress drag. `None` means the pointer had no resolvable time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomGesture {
    pub anchor_start: Option<TimeMs>,
    pub anchor_current: Option<TimeMs>,
}

impl ZoomGesture {
    fn pressed_at(at: Option<TimeMs>) -> Self {
        Self {
            anchor_start: at,
            anchor_current: at,
        }
    }

    /// Normalized interval between both anchors, if both are known.
    pub fn selection(&self) -> Option<Domain> {
        Some(Domain::new(self.anchor_start?, self.anchor_current?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomState {
    #[default]
    Idle,
    Dragging(ZoomGesture),
}

/// What a release did to the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    Applied(Domain),
    /// Anchors missing or equal.
    Degenerate,
    /// Selection lies entirely outside the full domain.
    OutOfRange,
    /// No gesture was in progress.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomController {
    full_domain: Domain,
    domain: Domain,
    state: ZoomState,
}

impl ZoomController {
    pub fn new(full_domain: Domain) -> Self {
        Self {
            full_domain,
            domain: full_domain,
            state: ZoomState::Idle,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn full_domain(&self) -> Domain {
        self.full_domain
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ZoomState::Dragging(_))
    }

    pub fn is_zoomed(&self) -> bool {
        self.domain != self.full_domain
    }

    /// Interval to shade while dragging.
    pub fn selection(&self) -> Option<Domain> {
        match self.state {
            ZoomState::Dragging(gesture) => gesture.selection(),
            ZoomState::Idle => None,
        }
    }

    /// Starts a gesture. A press while already dragging restarts it.
    pub fn press(&mut self, at: Option<TimeMs>) {
        if self.is_dragging() {
            log::trace!("zoom press while dragging, restarting gesture");
        }
        self.state = ZoomState::Dragging(ZoomGesture::pressed_at(at));
    }

    /// Updates the moving anchor. A move without a time keeps the previous anchor.
    pub fn move_to(&mut self, at: Option<TimeMs>) {
        if let ZoomState::Dragging(gesture) = &mut self.state {
            if let Some(at) = at {
                gesture.anchor_current = Some(at);
            }
        }
    }

    pub fn release(&mut self) -> ZoomOutcome {
        let ZoomState::Dragging(gesture) = std::mem::take(&mut self.state) else {
            return ZoomOutcome::Ignored;
        };
        let outcome = match gesture.selection() {
            None => ZoomOutcome::Degenerate,
            Some(selection) if selection.is_point() => ZoomOutcome::Degenerate,
            Some(selection) if !selection.intersects(self.full_domain) => ZoomOutcome::OutOfRange,
            Some(selection) => {
                self.domain = selection;
                ZoomOutcome::Applied(selection)
            }
        };
        match outcome {
            ZoomOutcome::Applied(domain) => log::debug!("zoomed to {domain}"),
            other => log::debug!("zoom gesture discarded: {other:?}"),
        }
        outcome
    }

    /// Pointer left the plotting surface mid-drag: drop the gesture, keep the domain.
    pub fn pointer_left(&mut self) {
        if self.is_dragging() {
            log::debug!("zoom gesture abandoned on pointer leave");
        }
        self.state = ZoomState::Idle;
    }

    pub fn reset(&mut self) {
        self.state = ZoomState::Idle;
        self.domain = self.full_domain;
        log::debug!("zoom reset to {}", self.full_domain);
    }

    /// Adopts the full domain of a new data load. A changed range also resets the zoom.
    pub fn rebase(&mut self, full_domain: Domain) {
        if full_domain != self.full_domain {
            self.full_domain = full_domain;
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ZoomController {
        ZoomController::new(Domain::from_millis(0, 1_000))
    }

    fn drag(controller: &mut ZoomController, from: u64, to: u64) -> ZoomOutcome {
        controller.press(Some(TimeMs(from)));
        controller.move_to(Some(TimeMs(to)));
        controller.release()
    }

    #[test]
    fn starts_at_full_domain() {
        let c = controller();
        assert_eq!(c.domain(), Domain::from_millis(0, 1_000));
        assert_eq!(c.state(), ZoomState::Idle);
        assert!(!c.is_zoomed());
    }

    #[test]
    fn forward_drag_zooms() {
        let mut c = controller();
        assert_eq!(drag(&mut c, 10, 50), ZoomOutcome::Applied(Domain::from_millis(10, 50)));
        assert_eq!(c.domain(), Domain::from_millis(10, 50));
        assert_eq!(c.state(), ZoomState::Idle);
    }

    #[test]
    fn backward_drag_is_normalized() {
        let mut c = controller();
        drag(&mut c, 50, 10);
        assert_eq!(c.domain(), Domain::from_millis(10, 50));
    }

    #[test]
    fn zero_width_drag_keeps_domain() {
        let mut c = controller();
        assert_eq!(drag(&mut c, 10, 10), ZoomOutcome::Degenerate);
        assert_eq!(c.domain(), Domain::from_millis(0, 1_000));
        assert_eq!(c.state(), ZoomState::Idle);
    }

    #[test]
    fn press_without_time_is_degenerate() {
        let mut c = controller();
        c.press(None);
        c.move_to(Some(TimeMs(400)));
        assert_eq!(c.release(), ZoomOutcome::Degenerate);
        assert!(!c.is_zoomed());
    }

    #[test]
    fn move_without_time_holds_previous_anchor() {
        let mut c = controller();
        c.press(Some(TimeMs(100)));
        c.move_to(Some(TimeMs(300)));
        c.move_to(None);
        assert_eq!(c.selection(), Some(Domain::from_millis(100, 300)));
        assert_eq!(c.release(), ZoomOutcome::Applied(Domain::from_millis(100, 300)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut c = controller();
        c.move_to(Some(TimeMs(10)));
        assert_eq!(c.release(), ZoomOutcome::Ignored);
        assert!(!c.is_zoomed());
    }

    #[test]
    fn selection_outside_full_domain_is_discarded() {
        let mut c = controller();
        assert_eq!(drag(&mut c, 2_000, 3_000), ZoomOutcome::OutOfRange);
        assert!(!c.is_zoomed());
    }

    #[test]
    fn reset_restores_full_domain_and_drops_gesture() {
        let mut c = controller();
        drag(&mut c, 100, 200);
        c.press(Some(TimeMs(120)));
        c.reset();

        assert_eq!(c.domain(), Domain::from_millis(0, 1_000));
        assert_eq!(c.state(), ZoomState::Idle);
        assert_eq!(c.release(), ZoomOutcome::Ignored);
    }

    #[test]
    fn nested_zoom_replaces_domain() {
        let mut c = controller();
        drag(&mut c, 100, 900);
        drag(&mut c, 200, 300);
        assert_eq!(c.domain(), Domain::from_millis(200, 300));
    }

    #[test]
    fn pointer_leave_abandons_gesture() {
        let mut c = controller();
        c.press(Some(TimeMs(100)));
        c.move_to(Some(TimeMs(500)));
        c.pointer_left();

        assert_eq!(c.state(), ZoomState::Idle);
        assert!(!c.is_zoomed());
    }

    #[test]
    fn rebase_resets_only_when_range_changes() {
        let mut c = controller();
        drag(&mut c, 100, 200);

        c.rebase(Domain::from_millis(0, 1_000));
        assert_eq!(c.domain(), Domain::from_millis(100, 200));

        c.rebase(Domain::from_millis(0, 2_000));
        assert_eq!(c.domain(), Domain::from_millis(0, 2_000));
    }
}
