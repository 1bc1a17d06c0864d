use super::pointer::PointerTracker;

/// Whether the pointer subscription and frame loop are live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimatorState {
    #[default]
    Idle,
    Running,
}

/// Token for one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket(pub u64);

/// Cancellable repeating frame task
///
/// Holds at most one pending ticket. A frame takes the ticket, does its
/// work, then reschedules; cancelling drops whatever is pending.
#[derive(Debug, Default)]
pub struct FrameSchedule {
    pending: Option<FrameTicket>,
    next_ticket: u64,
}

impl FrameSchedule {
    pub fn schedule(&mut self) -> FrameTicket {
        let ticket = FrameTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        ticket
    }

    pub fn take(&mut self) -> Option<FrameTicket> {
        self.pending.take()
    }

    pub fn cancel(&mut self) -> Option<FrameTicket> {
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

/// Idle/Running state machine driven by the registry crossing zero
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: AnimatorState,
}

impl Lifecycle {
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Idle -> Running: subscribe to pointer moves, then kick off the first frame
    pub fn start(&mut self, tracker: &mut PointerTracker, schedule: &mut FrameSchedule) -> bool {
        if self.state == AnimatorState::Running {
            return false;
        }
        tracker.subscribe();
        schedule.schedule();
        self.state = AnimatorState::Running;
        log::debug!("attraction animator started");
        true
    }

    /// Running -> Idle: cancel the pending frame, then drop the subscription
    pub fn stop(&mut self, tracker: &mut PointerTracker, schedule: &mut FrameSchedule) -> bool {
        if self.state == AnimatorState::Idle {
            return false;
        }
        schedule.cancel();
        tracker.unsubscribe();
        self.state = AnimatorState::Idle;
        log::debug!("attraction animator stopped");
        true
    }
}
