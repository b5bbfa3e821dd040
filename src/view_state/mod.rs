//! Page-level view state and the timers, observers and scroll tracking that
//! drive it. Nothing in here touches the DOM; the browser side feeds events
//! in and renders `PageState` out.

pub mod counters;
pub mod form;
pub mod loading;
pub mod reveal;
pub mod scroll_spy;
pub mod section;

use std::time::Duration;

use counters::{CounterTiming, CounterValues, DEFAULT_COUNTER_START_DELAY};
use form::{FormDraft, FormField, SubmitStatus};
use loading::DEFAULT_LOADING_DELAY;
use scroll_spy::DEFAULT_SCROLL_LOOKAHEAD;
use section::SectionId;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute on the document root.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph and accessible label for the button that leaves this theme.
    pub fn toggle_button(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("☾", "Switch to dark mode"),
            Self::Dark => ("☀", "Switch to light mode"),
        }
    }
}

/// Top-level view the router is showing: the single-page home view, or any
/// other path (blog index, articles, not-found).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RouteKind {
    #[default]
    Home,
    SubPage,
}

impl RouteKind {
    pub fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewTiming {
    pub loading_delay: Duration,
    pub counter_start_delay: Duration,
    pub counter: CounterTiming,
    pub scroll_lookahead: f64,
}

impl Default for ViewTiming {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            counter_start_delay: DEFAULT_COUNTER_START_DELAY,
            counter: CounterTiming::default(),
            scroll_lookahead: DEFAULT_SCROLL_LOOKAHEAD,
        }
    }
}

/// Moves the viewport to a section. Returns `false` when the section is not
/// in the document.
pub trait SectionScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    SectionChanged(SectionId),
    ToggleTheme,
    LoadingFinished,
    CountersUpdated(CounterValues),
    FormEdited(FormField, String),
    SubmissionStarted,
    SubmissionSucceeded,
    SubmissionFailed(String),
    RouteChanged(RouteKind),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ScrollRequest {
    pub action: PageAction,
    /// `false` when the section element was missing and nothing scrolled.
    pub found: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PageState {
    pub menu_open: bool,
    pub active_section: SectionId,
    pub theme: Theme,
    pub loading: bool,
    pub counters: CounterValues,
    pub form: FormDraft,
    pub submit_status: SubmitStatus,
    pub route: RouteKind,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(RouteKind::default())
    }
}

impl PageState {
    pub fn new(route: RouteKind) -> Self {
        Self {
            menu_open: false,
            active_section: SectionId::default(),
            theme: Theme::default(),
            loading: true,
            counters: CounterValues::default(),
            form: FormDraft::default(),
            submit_status: SubmitStatus::Idle,
            route,
        }
    }

    /// Scroll tracking only runs on the home view once the splash is gone.
    pub fn scroll_spy_active(&self) -> bool {
        self.route.is_home() && !self.loading
    }

    pub fn counters_active(&self) -> bool {
        self.route.is_home() && !self.loading
    }

    /// Scrolls to `section` if it is in the document. The mobile menu closes
    /// either way.
    pub fn scroll_to_section(section: SectionId, scroller: &impl SectionScroller) -> ScrollRequest {
        ScrollRequest {
            action: PageAction::CloseMenu,
            found: scroller.scroll_into_view(section),
        }
    }

    /// Applies `action` and reports whether anything changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            PageAction::CloseMenu => replace(&mut self.menu_open, false),
            PageAction::SectionChanged(section) => replace(&mut self.active_section, section),
            PageAction::ToggleTheme => {
                self.theme = self.theme.opposite();
                true
            }
            PageAction::LoadingFinished => replace(&mut self.loading, false),
            PageAction::CountersUpdated(values) => replace(&mut self.counters, values),
            PageAction::FormEdited(field, value) => {
                if self.submit_status.is_submitting() {
                    return false;
                }
                let before = self.form.clone();
                self.form.set(field, value);
                self.form != before
            }
            PageAction::SubmissionStarted => {
                if self.submit_status.is_submitting() {
                    return false;
                }
                self.submit_status = SubmitStatus::Submitting;
                true
            }
            PageAction::SubmissionSucceeded => {
                self.form = FormDraft::default();
                self.submit_status = SubmitStatus::Sent;
                true
            }
            PageAction::SubmissionFailed(reason) => {
                self.submit_status = SubmitStatus::Failed(reason);
                true
            }
            PageAction::RouteChanged(route) => {
                let closed = replace(&mut self.menu_open, false);
                replace(&mut self.route, route) || closed
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingScroller {
        present: Vec<SectionId>,
        requests: RefCell<Vec<SectionId>>,
    }

    impl SectionScroller for RecordingScroller {
        fn scroll_into_view(&self, section: SectionId) -> bool {
            self.requests.borrow_mut().push(section);
            self.present.contains(&section)
        }
    }

    fn scroller(present: &[SectionId]) -> RecordingScroller {
        RecordingScroller {
            present: present.to_vec(),
            requests: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn starts_loading_on_home_with_dark_theme() {
        let state = PageState::default();

        assert!(state.loading);
        assert_eq!(state.active_section, SectionId::Home);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.scroll_spy_active());
        assert!(!state.counters_active());
    }

    #[test]
    fn loading_finishes_once() {
        let mut state = PageState::default();

        assert!(state.apply(PageAction::LoadingFinished));
        assert!(!state.apply(PageAction::LoadingFinished));
        assert!(state.scroll_spy_active());
        assert!(state.counters_active());
    }

    #[test]
    fn scroll_to_section_closes_menu_and_scrolls() {
        let mut state = PageState::default();
        state.apply(PageAction::ToggleMenu);
        let scroller = scroller(&[SectionId::Contact]);

        let request = PageState::scroll_to_section(SectionId::Contact, &scroller);
        assert!(request.found);
        state.apply(request.action);

        assert!(!state.menu_open);
        assert_eq!(*scroller.requests.borrow(), vec![SectionId::Contact]);
    }

    #[test]
    fn scroll_to_missing_section_only_closes_the_menu() {
        let mut state = PageState::default();
        let before = state.clone();
        state.apply(PageAction::ToggleMenu);

        let request = PageState::scroll_to_section(SectionId::Skills, &scroller(&[]));
        assert!(!request.found);
        state.apply(request.action);

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_button_describes_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_button().1, "Switch to light mode");
        assert_eq!(Theme::Light.toggle_button().1, "Switch to dark mode");
        assert_eq!(Theme::Light.opposite().attribute(), "dark");
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn theme_toggle_only_flips_theme() {
        let mut state = PageState::default();
        let before = state.clone();

        state.apply(PageAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(PageState { theme: Theme::Dark, ..state.clone() }, before);

        state.apply(PageAction::ToggleTheme);
        assert_eq!(state, before);
    }

    #[test]
    fn blog_route_suspends_spy_and_counters() {
        let mut state = PageState::default();
        state.apply(PageAction::LoadingFinished);
        state.apply(PageAction::ToggleMenu);

        assert!(state.apply(PageAction::RouteChanged(RouteKind::SubPage)));
        assert!(!state.scroll_spy_active());
        assert!(!state.counters_active());
        assert!(!state.menu_open);

        state.apply(PageAction::RouteChanged(RouteKind::Home));
        assert!(state.scroll_spy_active());
    }

    #[test]
    fn failed_submission_keeps_the_draft() {
        let mut state = PageState::default();
        state.apply(PageAction::FormEdited(FormField::Name, "Ada".to_string()));
        state.apply(PageAction::SubmissionStarted);
        state.apply(PageAction::SubmissionFailed("relay unavailable".to_string()));

        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.submit_status.message(), Some("relay unavailable"));
    }

    #[test]
    fn successful_submission_clears_the_draft() {
        let mut state = PageState::default();
        state.apply(PageAction::FormEdited(FormField::Message, "Hi".to_string()));
        state.apply(PageAction::SubmissionStarted);
        state.apply(PageAction::SubmissionSucceeded);

        assert!(state.form.is_empty());
        assert_eq!(state.submit_status, SubmitStatus::Sent);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = PageState::default();
        state.apply(PageAction::FormEdited(FormField::Name, "Ada".to_string()));
        state.apply(PageAction::SubmissionStarted);

        assert!(!state.apply(PageAction::FormEdited(FormField::Name, "Bob".to_string())));
        assert!(!state.apply(PageAction::SubmissionStarted));
        assert_eq!(state.form.name, "Ada");
    }

    #[test]
    fn repeated_section_is_not_a_change() {
        let mut state = PageState::default();

        assert!(state.apply(PageAction::SectionChanged(SectionId::About)));
        assert!(!state.apply(PageAction::SectionChanged(SectionId::About)));
    }
}
