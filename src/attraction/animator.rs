use bevy::math::Vec2;

use super::{
    falloff::{SMOOTHING, attraction_offset, smooth_toward},
    lifecycle::{AnimatorState, FrameSchedule, Lifecycle},
    pointer::PointerTracker,
    record::{AttractionHandle, AttractionOptions, AttractionRecord},
    registry::{AttractionRegistry, Occupancy},
};

/// What the animator needs from a rendering backend
///
/// The backend owns the elements; the animator only reads positions and
/// writes a visual offset.
pub trait TargetSurface<T> {
    /// Current on-screen centre of the element, or `None` if it no longer exists
    fn bounds_center(&self, target: &T) -> Option<Vec2>;

    /// Render the element displaced by `offset` (screen units) from its layout position
    fn apply_offset(&mut self, target: &T, offset: Vec2);
}

/// Outcome of one frame step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// False when no frame was scheduled (animator idle)
    pub ran: bool,
    pub applied: usize,
    /// Records whose element no longer resolved
    pub skipped: usize,
}

/// The attraction service: registry, pointer tracker and frame loop
///
/// Constructed once by whoever composes the app and shared by reference.
/// Registry non-empty <=> tracker subscribed <=> frame scheduled.
#[derive(Debug)]
pub struct MagneticField<T> {
    registry: AttractionRegistry<T>,
    tracker: PointerTracker,
    lifecycle: Lifecycle,
    schedule: FrameSchedule,
}

impl<T> Default for MagneticField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MagneticField<T> {
    pub fn new() -> Self {
        Self {
            registry: AttractionRegistry::new(),
            tracker: PointerTracker::new(),
            lifecycle: Lifecycle::default(),
            schedule: FrameSchedule::default(),
        }
    }

    /// Opt an element in. Starts the animator if this is the first record.
    pub fn register(&mut self, target: T, options: AttractionOptions) -> AttractionHandle {
        let (handle, occupancy) = self.registry.register(target, options);
        log::debug!(
            "registered attraction {:?} ({} active)",
            handle,
            self.registry.len()
        );

        if occupancy == Occupancy::BecameActive {
            self.lifecycle.start(&mut self.tracker, &mut self.schedule);
        }
        handle
    }

    /// Opt an element out. Unknown handles are ignored.
    /// Stops the animator once the last record is gone.
    pub fn unregister(&mut self, handle: AttractionHandle) {
        if self.registry.unregister(handle) == Occupancy::BecameEmpty {
            self.lifecycle.stop(&mut self.tracker, &mut self.schedule);
        }
    }

    /// Raw pointer move. Dropped while the animator is idle.
    pub fn pointer_moved(&mut self, position: Vec2) -> bool {
        self.tracker.on_pointer_move(position)
    }

    /// Run the scheduled frame, if any, against `surface`
    pub fn frame<S: TargetSurface<T>>(&mut self, surface: &mut S) -> FrameReport {
        if self.schedule.take().is_none() {
            return FrameReport::default();
        }

        let pointer = self.tracker.position();
        let mut report = FrameReport {
            ran: true,
            ..FrameReport::default()
        };

        for record in self.registry.records_mut() {
            let Some(center) = surface.bounds_center(&record.target) else {
                report.skipped += 1;
                continue;
            };

            record.target_offset = match pointer {
                Some(pointer) => {
                    attraction_offset(pointer, center, record.strength, record.radius)
                }
                None => Vec2::ZERO,
            };
            record.current_offset =
                smooth_toward(record.current_offset, record.target_offset, SMOOTHING);

            surface.apply_offset(&record.target, record.current_offset);
            report.applied += 1;
        }

        // Reschedule on completion, not on a fixed interval
        if self.is_running() {
            self.schedule.schedule();
        }
        report
    }

    pub fn state(&self) -> AnimatorState {
        self.lifecycle.state()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.state() == AnimatorState::Running
    }

    pub fn record(&self, handle: AttractionHandle) -> Option<&AttractionRecord<T>> {
        self.registry.get(handle)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
impl<T> MagneticField<T> {
    pub fn is_frame_scheduled(&self) -> bool {
        self.schedule.is_scheduled()
    }

    pub fn is_pointer_subscribed(&self) -> bool {
        self.tracker.is_subscribed()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.tracker.position()
    }

    pub fn contains(&self, handle: AttractionHandle) -> bool {
        self.registry.contains(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const EPS: f32 = 1e-5;

    /// In-memory stand-in for a rendering backend
    #[derive(Default)]
    struct FakeSurface {
        centers: HashMap<u32, Vec2>,
        applied: HashMap<u32, Vec2>,
    }

    impl FakeSurface {
        fn with(elements: &[(u32, Vec2)]) -> Self {
            Self {
                centers: elements.iter().copied().collect(),
                applied: HashMap::new(),
            }
        }
    }

    impl TargetSurface<u32> for FakeSurface {
        fn bounds_center(&self, target: &u32) -> Option<Vec2> {
            self.centers.get(target).copied()
        }

        fn apply_offset(&mut self, target: &u32, offset: Vec2) {
            self.applied.insert(*target, offset);
        }
    }

    fn assert_invariant(field: &MagneticField<u32>) {
        let active = !field.is_empty();
        assert_eq!(field.is_running(), active);
        assert_eq!(field.is_pointer_subscribed(), active);
        assert_eq!(field.is_frame_scheduled(), active);
    }

    #[test]
    fn test_concrete_frame() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(1, Vec2::new(100.0, 100.0))]);

        let handle = field.register(1, AttractionOptions::default());
        field.pointer_moved(Vec2::new(150.0, 100.0));

        let report = field.frame(&mut surface);
        assert!(report.ran);
        assert_eq!(report.applied, 1);

        let record = field.record(handle).unwrap();
        assert!((record.target_offset.x - 7.5).abs() < EPS);
        assert!((record.current_offset.x - 1.125).abs() < EPS);
        assert!((surface.applied[&1].x - 1.125).abs() < EPS);
        assert_eq!(surface.applied[&1].y, 0.0);
    }

    #[test]
    fn test_register_unregister_leaves_idle() {
        let mut field = MagneticField::new();
        assert_invariant(&field);

        let handle = field.register(1, AttractionOptions::default());
        assert_invariant(&field);
        assert!(field.pointer_moved(Vec2::new(10.0, 10.0)));

        field.unregister(handle);
        assert_invariant(&field);
        assert_eq!(field.state(), AnimatorState::Idle);

        // No pointer writes land after shutdown
        assert!(!field.pointer_moved(Vec2::new(500.0, 500.0)));
        assert_eq!(field.pointer(), Some(Vec2::new(10.0, 10.0)));

        // And no frame runs
        let mut surface = FakeSurface::with(&[(1, Vec2::ZERO)]);
        assert!(!field.frame(&mut surface).ran);
        assert!(surface.applied.is_empty());
    }

    #[test]
    fn test_invariant_across_sequence() {
        let mut field = MagneticField::new();
        let a = field.register(1, AttractionOptions::default());
        let b = field.register(2, AttractionOptions::default());
        assert_invariant(&field);

        field.unregister(a);
        assert_invariant(&field);
        field.unregister(a);
        assert_invariant(&field);
        field.unregister(b);
        assert_invariant(&field);

        field.register(3, AttractionOptions::default());
        assert_invariant(&field);
    }

    #[test]
    fn test_double_unregister_keeps_others() {
        let mut field = MagneticField::new();
        let a = field.register(1, AttractionOptions::default());
        let b = field.register(2, AttractionOptions::default());

        field.unregister(a);
        field.unregister(a);
        field.unregister(AttractionHandle(12345));

        assert!(field.contains(b));
        assert!(field.is_running());
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_frame_reschedules_itself() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(1, Vec2::ZERO)]);
        field.register(1, AttractionOptions::default());

        for _ in 0..5 {
            assert!(field.frame(&mut surface).ran);
            assert!(field.is_frame_scheduled());
        }
    }

    #[test]
    fn test_missing_element_is_skipped() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(2, Vec2::new(100.0, 100.0))]);

        field.register(1, AttractionOptions::default());
        let live = field.register(2, AttractionOptions::default());
        field.pointer_moved(Vec2::new(150.0, 100.0));

        let report = field.frame(&mut surface);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.applied, 1);
        assert!(!surface.applied.contains_key(&1));
        assert!(field.record(live).unwrap().current_offset.x > 0.0);
    }

    #[test]
    fn test_no_pointer_yet_means_no_pull() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(1, Vec2::ZERO)]);
        let handle = field.register(1, AttractionOptions::default());

        field.frame(&mut surface);
        assert_eq!(field.record(handle).unwrap().current_offset, Vec2::ZERO);
        assert_eq!(surface.applied[&1], Vec2::ZERO);
    }

    #[test]
    fn test_only_larger_radius_reacts() {
        let mut field = MagneticField::new();
        let center = Vec2::new(200.0, 200.0);
        let mut surface = FakeSurface::with(&[(1, center), (2, center)]);

        let small = field.register(1, AttractionOptions::new(0.3, 50.0));
        let large = field.register(2, AttractionOptions::new(0.3, 150.0));

        // 100px away: outside the small radius, inside the large one
        field.pointer_moved(Vec2::new(300.0, 200.0));
        field.frame(&mut surface);

        assert_eq!(field.record(small).unwrap().target_offset, Vec2::ZERO);
        assert_eq!(surface.applied[&1], Vec2::ZERO);
        assert!(field.record(large).unwrap().target_offset.x > 0.0);
        assert!(surface.applied[&2].x > 0.0);
    }

    #[test]
    fn test_offset_relaxes_when_pointer_leaves() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(1, Vec2::ZERO)]);
        let handle = field.register(1, AttractionOptions::default());

        field.pointer_moved(Vec2::new(50.0, 0.0));
        for _ in 0..10 {
            field.frame(&mut surface);
        }
        let pulled = field.record(handle).unwrap().current_offset.x;
        assert!(pulled > 0.0);

        field.pointer_moved(Vec2::new(1000.0, 0.0));
        field.frame(&mut surface);
        let record = field.record(handle).unwrap();
        assert_eq!(record.target_offset, Vec2::ZERO);
        assert!((record.current_offset.x - pulled * 0.85).abs() < EPS);
    }

    #[test]
    fn test_element_moving_is_tracked_each_frame() {
        let mut field = MagneticField::new();
        let mut surface = FakeSurface::with(&[(1, Vec2::new(100.0, 100.0))]);
        let handle = field.register(1, AttractionOptions::default());
        field.pointer_moved(Vec2::new(150.0, 100.0));

        field.frame(&mut surface);
        assert!(field.record(handle).unwrap().target_offset.x > 0.0);

        // Scrolled out from under the pointer
        surface.centers.insert(1, Vec2::new(100.0, 400.0));
        field.frame(&mut surface);
        assert_eq!(field.record(handle).unwrap().target_offset, Vec2::ZERO);
    }
}
