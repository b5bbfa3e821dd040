mod blog;
mod contact;
mod hooks;
mod sections;

use std::rc::Rc;

use serde_json::Value;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::logging::{self, LogLevel};
use crate::view_state::{PageAction, PageState, RouteKind, ViewTiming};
use blog::{BlogArticle, BlogIndex, NotFound};
use hooks::{use_counter_animation, use_loading_gate, use_scroll_spy, use_theme_attribute};
use sections::{Footer, Header, HomePage, LoadingScreen};

const CLIENT_LOG_LEVEL: LogLevel = if cfg!(debug_assertions) {
    LogLevel::Debug
} else {
    LogLevel::Info
};

pub(crate) fn log_client_event(level: LogLevel, event: &str, fields: Value) {
    logging::log_event(CLIENT_LOG_LEVEL, level, event, fields);
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    BlogIndex,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn kind(&self) -> RouteKind {
        match self {
            Self::Home => RouteKind::Home,
            Self::BlogIndex | Self::BlogPost { .. } | Self::NotFound => RouteKind::SubPage,
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub type PageContext = UseReducerHandle<PageState>;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::BlogIndex => html! { <BlogIndex /> },
        Route::BlogPost { slug } => html! { <BlogArticle slug={slug} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let kind = use_route::<Route>()
        .unwrap_or(Route::NotFound)
        .kind();
    let timing = ViewTiming::default();
    let page = use_reducer(move || PageState::new(kind));

    {
        let page = page.clone();
        use_effect_with(kind, move |&kind| {
            page.dispatch(PageAction::RouteChanged(kind));
            if !kind.is_home() {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        });
    }

    use_theme_attribute(page.theme);
    use_loading_gate(page.clone(), timing.loading_delay);
    use_counter_animation(page.clone(), timing);
    use_scroll_spy(page.clone(), timing.scroll_lookahead);

    html! {
        <ContextProvider<PageContext> context={page.clone()}>
            if page.loading {
                <LoadingScreen />
            } else {
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <Header />
                <main id="content">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            }
        </ContextProvider<PageContext>>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
