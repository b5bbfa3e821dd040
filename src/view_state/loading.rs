use std::time::Duration;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2_500);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum GatePhase {
    Pending,
    Open,
    Cancelled,
}

/// One-shot splash gate. Starts closed (loading) and opens once `delay` has
/// elapsed. Opening is reported exactly once; a cancelled gate never opens.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    delay: Duration,
    elapsed: Duration,
    phase: GatePhase,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            phase: GatePhase::Pending,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_loading(&self) -> bool {
        self.phase != GatePhase::Open
    }

    pub fn is_pending(&self) -> bool {
        self.phase == GatePhase::Pending
    }

    /// Time still to wait before the gate opens, or `None` when it has
    /// already opened or been cancelled.
    pub fn remaining(&self) -> Option<Duration> {
        self.is_pending()
            .then(|| self.delay.saturating_sub(self.elapsed))
    }

    /// Returns `true` only on the call that opens the gate.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.phase != GatePhase::Pending {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed < self.delay {
            return false;
        }

        self.phase = GatePhase::Open;
        true
    }

    pub fn cancel(&mut self) {
        if self.phase == GatePhase::Pending {
            self.phase = GatePhase::Cancelled;
        }
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_exactly_once_after_delay() {
        let mut gate = LoadingGate::default();
        assert!(gate.is_loading());

        assert!(!gate.advance(Duration::from_millis(2_499)));
        assert!(gate.is_loading());

        assert!(gate.advance(Duration::from_millis(1)));
        assert!(!gate.is_loading());

        assert!(!gate.advance(Duration::from_millis(2_500)));
        assert!(!gate.is_loading());
    }

    #[test]
    fn a_second_full_delay_does_not_fire_again() {
        let mut gate = LoadingGate::new(Duration::from_millis(100));
        let fired = (0..3)
            .filter(|_| gate.advance(Duration::from_millis(100)))
            .count();

        assert_eq!(fired, 1);
    }

    #[test]
    fn cancelled_gate_never_opens() {
        let mut gate = LoadingGate::new(Duration::from_millis(100));
        gate.advance(Duration::from_millis(50));
        gate.cancel();

        assert!(!gate.advance(Duration::from_millis(500)));
        assert!(gate.is_loading());
        assert_eq!(gate.remaining(), None);
    }

    #[test]
    fn remaining_counts_down() {
        let mut gate = LoadingGate::new(Duration::from_millis(300));
        gate.advance(Duration::from_millis(120));

        assert_eq!(gate.remaining(), Some(Duration::from_millis(180)));
    }

    #[test]
    fn cancel_after_open_keeps_it_open() {
        let mut gate = LoadingGate::new(Duration::ZERO);
        assert!(gate.advance(Duration::ZERO));
        gate.cancel();

        assert!(!gate.is_loading());
    }
}
