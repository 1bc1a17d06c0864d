use bevy::math::Vec2;

/// Last known pointer position in screen coordinates
///
/// Only accepts writes while subscribed; the lifecycle controller flips
/// the subscription together with the frame loop.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    position: Option<Vec2>,
    subscribed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    #[cfg(test)]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Raw move notification. Last write wins, no filtering.
    /// Returns false (and drops the sample) when not subscribed.
    pub fn on_pointer_move(&mut self, position: Vec2) -> bool {
        if !self.subscribed {
            return false;
        }
        self.position = Some(position);
        true
    }

    /// `None` until the first move is seen while subscribed
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut tracker = PointerTracker::new();
        tracker.subscribe();

        assert!(tracker.on_pointer_move(Vec2::new(1.0, 2.0)));
        assert!(tracker.on_pointer_move(Vec2::new(3.0, 4.0)));
        assert_eq!(tracker.position(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_no_writes_while_unsubscribed() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.on_pointer_move(Vec2::ONE));
        assert_eq!(tracker.position(), None);

        tracker.subscribe();
        tracker.on_pointer_move(Vec2::new(5.0, 5.0));
        tracker.unsubscribe();

        assert!(!tracker.on_pointer_move(Vec2::new(9.0, 9.0)));
        assert_eq!(tracker.position(), Some(Vec2::new(5.0, 5.0)));
    }
}
