use egui::{Pos2, pos2};

/// Where a raw pointer event came from.
///
/// Touch contacts carry the platform contact id so that only the first
/// active contact drives a gesture; extra fingers are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Begin,
    Move,
    End,
}

/// A device-level pointer event, in device (window) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct RawPointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub device_pos: Pos2,
}

/// A routed gesture event, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Begin(Pos2),
    Move(Pos2),
    End,
}

/// Normalizes heterogeneous pointer sources into one ordered stream of
/// begin/move/end events.
///
/// Rules:
/// - positions are translated by the configured surface origin;
/// - `Move`/`End` without a preceding `Begin` are dropped;
/// - a second `Begin` while a gesture is active is ignored, from any source;
/// - during a touch gesture only the contact that began it is tracked, and
///   mouse events are ignored until it ends (and vice versa).
#[derive(Debug, Default)]
pub struct InputRouter {
    origin: Pos2,
    active: Option<PointerSource>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device-coordinate origin of the surface's top-left corner.
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// True while a gesture is between `Begin` and `End`.
    pub fn gesture_active(&self) -> bool {
        self.active.is_some()
    }

    /// Route one raw event, returning the surface-local gesture event it
    /// maps to, or `None` when the event is dropped.
    pub fn route(&mut self, raw: RawPointerEvent) -> Option<PointerEvent> {
        let local = pos2(
            raw.device_pos.x - self.origin.x,
            raw.device_pos.y - self.origin.y,
        );
        match raw.phase {
            PointerPhase::Begin => {
                if self.active.is_some() {
                    return None;
                }
                self.active = Some(raw.source);
                Some(PointerEvent::Begin(local))
            }
            PointerPhase::Move => {
                if self.active == Some(raw.source) {
                    Some(PointerEvent::Move(local))
                } else {
                    None
                }
            }
            PointerPhase::End => {
                if self.active == Some(raw.source) {
                    self.active = None;
                    Some(PointerEvent::End)
                } else {
                    None
                }
            }
        }
    }

    /// Forget any active gesture without emitting an `End`.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: PointerSource, phase: PointerPhase, x: f32, y: f32) -> RawPointerEvent {
        RawPointerEvent {
            source,
            phase,
            device_pos: pos2(x, y),
        }
    }

    #[test]
    fn translates_to_surface_local_coordinates() {
        let mut router = InputRouter::new();
        router.set_origin(pos2(20.0, 30.0));
        let event = router.route(raw(PointerSource::Mouse, PointerPhase::Begin, 25.0, 40.0));
        assert_eq!(event, Some(PointerEvent::Begin(pos2(5.0, 10.0))));
    }

    #[test]
    fn drops_move_before_begin() {
        let mut router = InputRouter::new();
        assert_eq!(
            router.route(raw(PointerSource::Mouse, PointerPhase::Move, 1.0, 1.0)),
            None
        );
        assert_eq!(
            router.route(raw(PointerSource::Mouse, PointerPhase::End, 1.0, 1.0)),
            None
        );
    }

    #[test]
    fn second_begin_is_ignored() {
        let mut router = InputRouter::new();
        assert!(
            router
                .route(raw(PointerSource::Mouse, PointerPhase::Begin, 1.0, 1.0))
                .is_some()
        );
        assert_eq!(
            router.route(raw(PointerSource::Mouse, PointerPhase::Begin, 2.0, 2.0)),
            None
        );
        // The original gesture is still the active one.
        assert!(
            router
                .route(raw(PointerSource::Mouse, PointerPhase::Move, 3.0, 3.0))
                .is_some()
        );
    }

    #[test]
    fn only_first_touch_contact_is_tracked() {
        let mut router = InputRouter::new();
        assert!(
            router
                .route(raw(PointerSource::Touch(7), PointerPhase::Begin, 1.0, 1.0))
                .is_some()
        );
        // A second finger lands: ignored entirely.
        assert_eq!(
            router.route(raw(PointerSource::Touch(8), PointerPhase::Begin, 5.0, 5.0)),
            None
        );
        assert_eq!(
            router.route(raw(PointerSource::Touch(8), PointerPhase::Move, 6.0, 6.0)),
            None
        );
        assert_eq!(
            router.route(raw(PointerSource::Touch(8), PointerPhase::End, 6.0, 6.0)),
            None
        );
        // The first finger still drives the gesture.
        assert_eq!(
            router.route(raw(PointerSource::Touch(7), PointerPhase::Move, 2.0, 2.0)),
            Some(PointerEvent::Move(pos2(2.0, 2.0)))
        );
        assert_eq!(
            router.route(raw(PointerSource::Touch(7), PointerPhase::End, 2.0, 2.0)),
            Some(PointerEvent::End)
        );
    }

    #[test]
    fn mouse_ignored_during_touch_gesture() {
        let mut router = InputRouter::new();
        assert!(
            router
                .route(raw(PointerSource::Touch(1), PointerPhase::Begin, 1.0, 1.0))
                .is_some()
        );
        assert_eq!(
            router.route(raw(PointerSource::Mouse, PointerPhase::Move, 2.0, 2.0)),
            None
        );
        assert_eq!(
            router.route(raw(PointerSource::Mouse, PointerPhase::End, 2.0, 2.0)),
            None
        );
    }
}
