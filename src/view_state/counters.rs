use std::time::Duration;

pub const DEFAULT_COUNTER_START_DELAY: Duration = Duration::from_millis(1_000);
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_millis(2_000);
pub const DEFAULT_COUNTER_TICK: Duration = Duration::from_millis(50);

pub const DEFAULT_COUNTER_TARGETS: CounterValues = CounterValues {
    projects: 10,
    experience: 1,
    technologies: 12,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CounterKind {
    Projects,
    Experience,
    Technologies,
}

impl CounterKind {
    pub const ALL: [CounterKind; 3] = [Self::Projects, Self::Experience, Self::Technologies];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Technologies => "technologies",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Experience => "Years Experience",
            Self::Technologies => "Technologies",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CounterValues {
    pub projects: u32,
    pub experience: u32,
    pub technologies: u32,
}

impl CounterValues {
    pub fn get(&self, kind: CounterKind) -> u32 {
        match kind {
            CounterKind::Projects => self.projects,
            CounterKind::Experience => self.experience,
            CounterKind::Technologies => self.technologies,
        }
    }

    pub fn set(&mut self, kind: CounterKind, value: u32) {
        match kind {
            CounterKind::Projects => self.projects = value,
            CounterKind::Experience => self.experience = value,
            CounterKind::Technologies => self.technologies = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CounterTiming {
    pub duration: Duration,
    pub tick: Duration,
}

impl CounterTiming {
    /// Number of ticks a counter needs to reach its target. Never zero.
    pub fn total_ticks(&self) -> u32 {
        let tick = self.tick.as_millis();
        if tick == 0 {
            return 1;
        }

        let ticks = self.duration.as_millis().div_ceil(tick);
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_COUNTER_DURATION,
            tick: DEFAULT_COUNTER_TICK,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationPhase {
    Idle,
    Running,
    Completed,
}

#[derive(Clone, Debug)]
struct CounterTrack {
    kind: CounterKind,
    target: u32,
    ticks: u32,
    total_ticks: u32,
    value: u32,
    phase: AnimationPhase,
}

impl CounterTrack {
    fn step(&mut self) {
        if self.phase != AnimationPhase::Running {
            return;
        }

        self.ticks = self.ticks.saturating_add(1);
        // floor(target * ticks / total) is the running sum of target/total
        // increments without accumulated float error.
        let next = u64::from(self.target) * u64::from(self.ticks) / u64::from(self.total_ticks);
        self.value = next.min(u64::from(self.target)) as u32;

        if self.value >= self.target {
            self.value = self.target;
            self.phase = AnimationPhase::Completed;
        }
    }
}

/// Drives every counter from zero to its target. Each counter has its own
/// `Idle -> Running -> Completed` phase and is stepped independently.
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    tracks: Vec<CounterTrack>,
    timing: CounterTiming,
    started: bool,
    cancelled: bool,
}

impl CounterAnimator {
    pub fn new(targets: CounterValues, timing: CounterTiming) -> Self {
        let total_ticks = timing.total_ticks();
        let tracks = CounterKind::ALL
            .into_iter()
            .map(|kind| CounterTrack {
                kind,
                target: targets.get(kind),
                ticks: 0,
                total_ticks,
                value: 0,
                phase: AnimationPhase::Idle,
            })
            .collect();

        Self {
            tracks,
            timing,
            started: false,
            cancelled: false,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.timing.tick
    }

    /// Moves every counter to `Running`. Only the first call has an effect;
    /// later calls return `false` so callers never schedule a second driver.
    pub fn start(&mut self) -> bool {
        if self.started || self.cancelled {
            return false;
        }

        self.started = true;
        for track in &mut self.tracks {
            track.phase = AnimationPhase::Running;
        }
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled
            && self
                .tracks
                .iter()
                .any(|track| track.phase == AnimationPhase::Running)
    }

    pub fn is_complete(&self) -> bool {
        self.started
            && self
                .tracks
                .iter()
                .all(|track| track.phase == AnimationPhase::Completed)
    }

    pub fn phase(&self, kind: CounterKind) -> AnimationPhase {
        self.tracks
            .iter()
            .find(|track| track.kind == kind)
            .map(|track| track.phase)
            .unwrap_or(AnimationPhase::Idle)
    }

    pub fn values(&self) -> CounterValues {
        let mut values = CounterValues::default();
        for track in &self.tracks {
            values.set(track.kind, track.value);
        }
        values
    }

    /// Advances every running counter by one tick and returns the new
    /// values. Returns `None` once nothing is running.
    pub fn tick(&mut self) -> Option<CounterValues> {
        if !self.is_running() {
            return None;
        }

        for track in &mut self.tracks {
            track.step();
        }
        Some(self.values())
    }

    /// Freezes all counters at their current values.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_TARGETS, CounterTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_collecting(animator: &mut CounterAnimator) -> Vec<CounterValues> {
        let mut emitted = Vec::new();
        while let Some(values) = animator.tick() {
            emitted.push(values);
            assert!(emitted.len() <= 100_000, "animation never completed");
        }
        emitted
    }

    #[test]
    fn default_targets_finish_exactly_after_full_duration() {
        let mut animator = CounterAnimator::default();
        assert!(animator.start());

        let emitted = run_collecting(&mut animator);

        assert_eq!(emitted.len(), 40);
        assert_eq!(emitted.last(), Some(&DEFAULT_COUNTER_TARGETS));
        for values in &emitted {
            for kind in CounterKind::ALL {
                assert!(values.get(kind) <= DEFAULT_COUNTER_TARGETS.get(kind));
            }
        }
        assert!(animator.is_complete());
    }

    #[test]
    fn values_never_decrease_and_never_overshoot() {
        let timings = [
            CounterTiming::default(),
            CounterTiming {
                duration: Duration::from_millis(1_000),
                tick: Duration::from_millis(30),
            },
            CounterTiming {
                duration: Duration::from_millis(70),
                tick: Duration::from_millis(100),
            },
        ];

        for timing in timings {
            for target in [0, 1, 3, 7, 12, 99, 1_000] {
                let targets = CounterValues {
                    projects: target,
                    experience: target / 2,
                    technologies: target + 5,
                };
                let mut animator = CounterAnimator::new(targets, timing);
                animator.start();

                let mut previous = CounterValues::default();
                for values in run_collecting(&mut animator) {
                    for kind in CounterKind::ALL {
                        assert!(values.get(kind) >= previous.get(kind));
                        assert!(values.get(kind) <= targets.get(kind));
                    }
                    previous = values;
                }
                assert_eq!(animator.values(), targets);
            }
        }
    }

    #[test]
    fn second_start_does_not_double_the_pace() {
        let mut animator = CounterAnimator::default();
        assert!(animator.start());
        animator.tick();
        let after_one = animator.values();

        assert!(!animator.start());
        assert_eq!(animator.values(), after_one);

        let emitted = run_collecting(&mut animator);
        assert_eq!(emitted.len(), 39);
    }

    #[test]
    fn idle_animator_does_not_tick() {
        let mut animator = CounterAnimator::default();

        assert_eq!(animator.tick(), None);
        assert_eq!(animator.values(), CounterValues::default());
        assert_eq!(animator.phase(CounterKind::Projects), AnimationPhase::Idle);
    }

    #[test]
    fn finished_counter_does_not_stop_the_others() {
        let targets = CounterValues {
            projects: 0,
            experience: 1,
            technologies: 12,
        };
        let mut animator = CounterAnimator::new(targets, CounterTiming::default());
        animator.start();
        animator.tick();

        assert_eq!(animator.phase(CounterKind::Projects), AnimationPhase::Completed);
        assert_eq!(animator.phase(CounterKind::Technologies), AnimationPhase::Running);
        assert!(animator.is_running());

        run_collecting(&mut animator);
        assert_eq!(animator.values(), targets);
    }

    #[test]
    fn cancel_freezes_values() {
        let mut animator = CounterAnimator::default();
        animator.start();
        for _ in 0..10 {
            animator.tick();
        }
        let frozen = animator.values();
        animator.cancel();

        assert_eq!(animator.tick(), None);
        assert_eq!(animator.values(), frozen);
        assert!(!animator.is_complete());
        assert!(!animator.start());
    }

    #[test]
    fn zero_targets_complete_on_the_first_tick() {
        let mut animator = CounterAnimator::new(CounterValues::default(), CounterTiming::default());
        assert!(animator.start());

        assert_eq!(animator.tick(), Some(CounterValues::default()));
        assert!(animator.is_complete());
        assert!(!animator.is_running());
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn zero_tick_interval_completes_in_one_step() {
        let timing = CounterTiming {
            duration: Duration::from_millis(2_000),
            tick: Duration::ZERO,
        };
        assert_eq!(timing.total_ticks(), 1);

        let mut animator = CounterAnimator::new(DEFAULT_COUNTER_TARGETS, timing);
        animator.start();

        assert_eq!(animator.tick(), Some(DEFAULT_COUNTER_TARGETS));
        assert_eq!(animator.tick(), None);
    }
}
