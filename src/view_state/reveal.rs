use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Observation settings for a reveal-on-scroll block. `delay_ms` only delays
/// the entry transition; observation starts immediately.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub delay_ms: u32,
}

impl RevealOptions {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            delay_ms: 0,
        }
    }
}

/// One-way visibility flag: false until the first visible observation,
/// then true for good.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }

        self.revealed = true;
        true
    }
}

/// Releases a registration when dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn empty() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// A source of visibility events for one element.
pub trait VisibilityFeed {
    fn subscribe(&self, options: &RevealOptions, sink: Box<dyn FnMut(bool)>) -> Subscription;
}

struct TrackerState {
    latch: RevealLatch,
    subscription: Option<Subscription>,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

/// Latches the first visible event from a feed and calls `on_reveal` once.
///
/// The feed subscription is released as soon as the latch flips, and in any
/// case when the tracker is dropped; no callback runs after that.
pub struct RevealTracker {
    state: Rc<RefCell<TrackerState>>,
}

impl RevealTracker {
    pub fn attach(
        feed: &impl VisibilityFeed,
        options: &RevealOptions,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(TrackerState {
            latch: RevealLatch::default(),
            subscription: None,
            on_reveal: Some(Box::new(on_reveal)),
        }));

        let weak = Rc::downgrade(&state);
        let subscription = feed.subscribe(options, Box::new(move |visible| {
            Self::deliver(&weak, visible);
        }));

        let mut current = state.borrow_mut();
        if !current.latch.is_revealed() {
            current.subscription = Some(subscription);
        }
        drop(current);

        Self { state }
    }

    pub fn is_revealed(&self) -> bool {
        self.state.borrow().latch.is_revealed()
    }

    fn deliver(state: &Weak<RefCell<TrackerState>>, visible: bool) {
        let Some(state) = state.upgrade() else {
            return;
        };

        let (on_reveal, subscription) = {
            let Ok(mut current) = state.try_borrow_mut() else {
                return;
            };
            if !current.latch.observe(visible) {
                return;
            }
            (current.on_reveal.take(), current.subscription.take())
        };

        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
        drop(subscription);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeFeed;
    use super::*;
    use std::cell::Cell;

    fn counting_tracker(feed: &FakeFeed) -> (RevealTracker, Rc<Cell<u32>>) {
        let reveals = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reveals);
        let tracker = RevealTracker::attach(feed, &RevealOptions::default(), move || {
            counter.set(counter.get() + 1);
        });
        (tracker, reveals)
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        for visible in [false, true, false, false] {
            assert!(!latch.observe(visible));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn first_visible_event_reveals_once() {
        let feed = FakeFeed::default();
        let (tracker, reveals) = counting_tracker(&feed);

        feed.emit(false);
        assert!(!tracker.is_revealed());

        feed.emit(true);
        feed.emit(false);
        feed.emit(true);

        assert!(tracker.is_revealed());
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn subscription_released_after_reveal() {
        let feed = FakeFeed::default();
        let (_tracker, _) = counting_tracker(&feed);
        assert_eq!(feed.subscriber_count(), 1);

        feed.emit(true);

        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn dropped_tracker_stops_listening() {
        let feed = FakeFeed::default();
        let (tracker, reveals) = counting_tracker(&feed);
        drop(tracker);

        feed.emit(true);

        assert_eq!(feed.subscriber_count(), 0);
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn trackers_are_independent() {
        let first_feed = FakeFeed::default();
        let second_feed = FakeFeed::default();
        let (first, _) = counting_tracker(&first_feed);
        let (second, _) = counting_tracker(&second_feed);

        first_feed.emit(true);

        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }

    #[test]
    fn options_reach_the_feed() {
        let feed = FakeFeed::default();
        let _tracker = RevealTracker::attach(&feed, &RevealOptions::with_delay(20), || {});

        let options = feed.last_options().expect("subscribed");
        assert_eq!(options.delay_ms, 20);
        assert_eq!(options.threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(options.root_margin, DEFAULT_REVEAL_ROOT_MARGIN);
    }
}
