use std::{cell::RefCell, rc::Rc, time::Duration};

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::{Array, Function, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, Window,
};
use yew::prelude::*;

use super::{log_client_event, PageContext};
use crate::logging::LogLevel;
use crate::view_state::{
    counters::{CounterAnimator, DEFAULT_COUNTER_TARGETS},
    loading::LoadingGate,
    reveal::{RevealOptions, RevealTracker, Subscription, VisibilityFeed},
    scroll_spy::{ScrollSpy, SectionBounds, SectionLayout},
    section::SectionId,
    PageAction, SectionScroller, Theme, ViewTiming,
};

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Measures section elements straight from the live document.
pub struct DocumentLayout {
    document: Document,
}

impl DocumentLayout {
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl SectionLayout for DocumentLayout {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.as_str()))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

fn set_theme_attribute(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.attribute());
    }
}

fn motion_reduced(window: &Window) -> bool {
    matches!(
        window.match_media("(prefers-reduced-motion: reduce)"),
        Ok(Some(query)) if query.matches()
    )
}

/// Swaps the theme inside `document.startViewTransition`. Returns `false`
/// when no transition was started.
fn transition_theme(theme: Theme) -> bool {
    let Some(window) = window() else {
        return false;
    };
    if motion_reduced(&window) {
        return false;
    }
    let Some(document) = window.document().map(JsValue::from) else {
        return false;
    };

    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(start) = start else {
        return false;
    };

    let swap = Closure::once_into_js(move || set_theme_attribute(theme));
    start.call1(&document, &swap).is_ok()
}

/// Mirrors `theme` onto the document root. The first value is applied
/// directly; later changes animate when the browser allows it.
#[hook]
pub fn use_theme_attribute(theme: Theme) {
    let applied = use_mut_ref(|| false);

    use_effect_with(theme, move |&theme| {
        let animate = std::mem::replace(&mut *applied.borrow_mut(), true);
        if !(animate && transition_theme(theme)) {
            set_theme_attribute(theme);
        }
        || ()
    });
}

/// Opens the splash gate once per mount. Unmounting first cancels the timer.
#[hook]
pub fn use_loading_gate(page: PageContext, delay: Duration) {
    let gate = use_mut_ref(|| LoadingGate::new(delay));

    use_effect_with((), move |_| {
        let remaining = gate.borrow().remaining();
        let timeout = remaining.map(|remaining| {
            let gate = Rc::clone(&gate);
            Timeout::new(millis(remaining), move || {
                if gate.borrow_mut().advance(remaining) {
                    log_client_event(
                        LogLevel::Info,
                        "loading_gate_opened",
                        json!({ "delay_ms": millis(delay) }),
                    );
                    page.dispatch(PageAction::LoadingFinished);
                }
            })
        });

        move || {
            drop(timeout);
            gate.borrow_mut().cancel();
        }
    });
}

/// Runs the hero counters while the home view is showing. The animator
/// survives route changes, so leaving and returning resumes rather than
/// restarts it; the tick driver itself only exists while the view is active.
#[hook]
pub fn use_counter_animation(page: PageContext, timing: ViewTiming) {
    let animator = use_mut_ref(|| CounterAnimator::new(DEFAULT_COUNTER_TARGETS, timing.counter));
    let active = page.counters_active();
    let complete = animator.borrow().is_complete();

    use_effect_with((active, complete), move |&(active, complete)| {
        let driver: Rc<RefCell<Option<Interval>>> = Rc::default();
        let mut start_delay = None;

        if active && !complete {
            let tick = millis(animator.borrow().tick_interval());
            let begin = {
                let animator = Rc::clone(&animator);
                let driver = Rc::clone(&driver);
                move || {
                    let ticker = Rc::clone(&driver);
                    let interval = Interval::new(tick, move || {
                        let (values, finished) = {
                            let mut animator = animator.borrow_mut();
                            let Some(values) = animator.tick() else {
                                return;
                            };
                            (values, animator.is_complete())
                        };

                        page.dispatch(PageAction::CountersUpdated(values));
                        if finished {
                            // An unchanged final update does not re-render.
                            let finished_driver = ticker.borrow_mut().take();
                            drop(finished_driver);
                            log_client_event(
                                LogLevel::Info,
                                "counters_completed",
                                json!({
                                    "projects": values.projects,
                                    "experience": values.experience,
                                    "technologies": values.technologies,
                                }),
                            );
                        }
                    });
                    *driver.borrow_mut() = Some(interval);
                }
            };

            if animator.borrow().is_started() {
                begin();
            } else {
                let animator = Rc::clone(&animator);
                let start_after = timing.counter_start_delay;
                start_delay = Some(Timeout::new(millis(start_after), move || {
                    if animator.borrow_mut().start() {
                        log_client_event(
                            LogLevel::Info,
                            "counters_started",
                            json!({ "start_delay_ms": millis(start_after), "tick_ms": tick }),
                        );
                        begin();
                    }
                }));
            }
        }

        move || {
            drop(start_delay);
            driver.borrow_mut().take();
        }
    });
}

/// Publishes the section under the probe line on every scroll while the home
/// view is active, plus once when tracking starts.
#[hook]
pub fn use_scroll_spy(page: PageContext, lookahead: f64) {
    let spy = use_mut_ref(|| ScrollSpy::new(SectionId::ALL.to_vec(), lookahead));
    let active = page.scroll_spy_active();

    use_effect_with(active, move |&active| {
        let listener = window().filter(|_| active).map(|target| {
            let evaluate = move || {
                let (Some(window), Some(layout)) = (window(), DocumentLayout::current()) else {
                    return;
                };
                let offset = window.scroll_y().unwrap_or(0.0);
                let changed = spy.borrow_mut().evaluate(offset, &layout);

                if let Some(section) = changed {
                    log_client_event(
                        LogLevel::Debug,
                        "section_changed",
                        json!({ "section": section.as_str(), "scroll_y": offset }),
                    );
                    page.dispatch(PageAction::SectionChanged(section));
                }
            };

            evaluate();
            EventListener::new(&target, "scroll", move |_| evaluate())
        });

        move || drop(listener)
    });
}

/// Visibility events for one element, backed by `IntersectionObserver`.
struct IntersectionFeed {
    element: Element,
}

impl VisibilityFeed for IntersectionFeed {
    fn subscribe(&self, options: &RevealOptions, sink: Box<dyn FnMut(bool)>) -> Subscription {
        let sink = Rc::new(RefCell::new(sink));

        let callback = {
            let sink = Rc::clone(&sink);
            Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        (sink.borrow_mut())(entry.is_intersecting());
                    }
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            // Without observer support the content would stay hidden forever.
            (sink.borrow_mut())(true);
            return Subscription::empty();
        };

        observer.observe(&self.element);
        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

/// Returns whether the referenced block has entered the viewport at least once.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let tracker = node.cast::<Element>().map(|element| {
                let feed = IntersectionFeed { element };
                RevealTracker::attach(&feed, &options, move || {
                    log_client_event(LogLevel::Debug, "section_revealed", json!({}));
                    revealed.set(true);
                })
            });

            move || drop(tracker)
        });
    }

    *revealed
}
