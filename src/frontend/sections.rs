use serde_json::json;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::contact::Contact;
use super::hooks::{use_reveal, DocumentScroller};
use super::{log_client_event, PageContext, Route};
use crate::content::data::{
    ABOUT, BLOG_POSTS, EDUCATION, EXPERIENCE, FOOTER_TECH, PROFILE, PROJECTS, SKILLS,
};
use crate::content::{
    filter_projects, filter_skills, LinkState, Project, ProjectKind, ProjectTab, SkillCategory,
};
use crate::logging::LogLevel;
use crate::view_state::{
    counters::CounterKind, reveal::RevealOptions, section::SectionId, PageAction, PageState,
};

const TEASER_POSTS: usize = 3;

fn scroll_callback(page: &PageContext, section: SectionId) -> Callback<MouseEvent> {
    let page = page.clone();
    Callback::from(move |_| {
        let request = PageState::scroll_to_section(section, &DocumentScroller);
        if !request.found {
            log_client_event(
                LogLevel::Debug,
                "section_missing",
                json!({ "section": section.as_str() }),
            );
        }
        page.dispatch(request.action);
    })
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::with_delay(props.delay_ms));
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("is-revealed"))}
            style={style}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-mark" aria-hidden="true">{PROFILE.initials}</div>
            <p class="loading-name">{PROFILE.name}</p>
            <div class="loading-bar" aria-hidden="true"><span /></div>
            <span class="sr-only">{"Loading portfolio"}</span>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let Some(page) = use_context::<PageContext>() else {
        return Html::default();
    };

    let on_toggle_menu = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(PageAction::ToggleMenu))
    };
    let on_toggle_theme = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(PageAction::ToggleTheme))
    };

    let (theme_icon, theme_label) = page.theme.toggle_button();

    let nav = if page.route.is_home() {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                let active = page.active_section == section;
                html! {
                    <li>
                        <button
                            type="button"
                            class={classes!("nav-link", active.then_some("is-active"))}
                            aria-current={active.then_some("location")}
                            onclick={scroll_callback(&page, section)}
                        >
                            {section.label()}
                        </button>
                    </li>
                }
            })
            .collect::<Html>()
    } else {
        let close_menu = {
            let page = page.clone();
            Callback::from(move |_| page.dispatch(PageAction::CloseMenu))
        };
        html! {
            <>
                <li onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes={classes!("nav-link")}>{"Home"}</Link<Route>>
                </li>
                <li onclick={close_menu}>
                    <Link<Route> to={Route::BlogIndex} classes={classes!("nav-link")}>{"Blog"}</Link<Route>>
                </li>
            </>
        }
    };

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes={classes!("brand")}>{PROFILE.initials}</Link<Route>>
            <nav
                id="site-nav"
                class={classes!("site-nav", page.menu_open.then_some("is-open"))}
                aria-label="Primary"
            >
                <ul>{nav}</ul>
            </nav>
            <div class="header-actions">
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={theme_label}
                    aria-pressed={page.theme.is_dark().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span aria-hidden="true">{theme_icon}</span>
                </button>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-controls="site-nav"
                    aria-expanded={page.menu_open.to_string()}
                    aria-label={if page.menu_open { "Close menu" } else { "Open menu" }}
                    onclick={on_toggle_menu}
                >
                    <span aria-hidden="true">{if page.menu_open { "✕" } else { "☰" }}</span>
                </button>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let Some(page) = use_context::<PageContext>() else {
        return Html::default();
    };

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-avatar" aria-hidden="true">{PROFILE.initials}</div>
            <h1>{"Hi, I'm "}<span class="accent">{PROFILE.name}</span></h1>
            <p class="hero-headline">{PROFILE.headline}</p>
            <p class="muted">{PROFILE.summary}</p>
            <div class="hero-actions">
                <button
                    type="button"
                    class="button primary"
                    onclick={scroll_callback(&page, SectionId::Projects)}
                >
                    {"View My Work"}
                </button>
                <button
                    type="button"
                    class="button"
                    onclick={scroll_callback(&page, SectionId::Contact)}
                >
                    {"Get In Touch"}
                </button>
            </div>
            <dl class="hero-stats">
                {for CounterKind::ALL.into_iter().map(|kind| html! {
                    <div class="stat">
                        <dt class="muted">{kind.label()}</dt>
                        <dd class="stat-value">{format!("{}+", page.counters.get(kind))}</dd>
                    </div>
                })}
            </dl>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="section-block" aria-labelledby="about-heading">
            <h2 id="about-heading">{"About Me"}</h2>
            {for ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> })}
            <h3>{"Education"}</h3>
            <ul class="row-list">
                {for EDUCATION.iter().map(|education| html! {
                    <li>
                        <strong>{education.degree}</strong>
                        <span class="muted">
                            {format!(" · {} · {} · {}", education.institution, education.period, education.location)}
                        </span>
                    </li>
                })}
            </ul>
            <p class="muted">{format!("Based in {}", PROFILE.location)}</p>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    html! {
        <section id={SectionId::Experience.as_str()} class="section-block" aria-labelledby="experience-heading">
            <h2 id="experience-heading">{"Experience"}</h2>
            {for EXPERIENCE.iter().map(|entry| html! {
                <article class="card">
                    <h3>{entry.title}</h3>
                    <p class="accent">{entry.company}</p>
                    <p class="muted">{format!("{} · {}", entry.period, entry.location)}</p>
                    <ul>
                        {for entry.achievements.iter().map(|item| html! { <li>{*item}</li> })}
                    </ul>
                </article>
            })}
        </section>
    }
}

fn project_link(state: LinkState, label: &'static str) -> Html {
    match (state.url(), state.unavailable_label()) {
        (Some(url), _) => html! { <ExternalLink href={url} label={label} class="button" /> },
        (None, Some(reason)) => html! {
            <span class="button is-disabled" aria-disabled="true">{reason}</span>
        },
        (None, None) => Html::default(),
    }
}

fn project_card(project: &Project) -> Html {
    let role = match project.kind {
        ProjectKind::Professional { company, role } => html! {
            <p class="accent">{format!("{role} · {company}")}</p>
        },
        ProjectKind::Personal => Html::default(),
    };

    html! {
        <article class="card project-card">
            <div class="project-icon" aria-hidden="true">{project.icon}</div>
            <h3>{project.title}</h3>
            {role}
            <p class="muted">{project.timeline.label()}</p>
            <p>{project.description}</p>
            <ul class="highlights">
                {for project.highlights.iter().map(|item| html! { <li>{*item}</li> })}
            </ul>
            <ul class="tag-list">
                {for project.tech.iter().map(|tech| html! { <li class="tag">{*tech}</li> })}
            </ul>
            <div class="project-links">
                {project_link(project.live, "Live Demo")}
                {project_link(project.source, "Source")}
            </div>
        </article>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let tab = use_state(ProjectTab::default);
    let visible = filter_projects(PROJECTS, *tab);

    let tabs = ProjectTab::ALL.into_iter().map(|candidate| {
        let selected = *tab == candidate;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_| tab.set(candidate))
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", selected.then_some("is-active"))}
                aria-selected={selected.to_string()}
                onclick={onclick}
            >
                {candidate.label()}
            </button>
        }
    });

    html! {
        <section id={SectionId::Projects.as_str()} class="section-block" aria-labelledby="projects-heading">
            <h2 id="projects-heading">{"Projects"}</h2>
            <div class="tabs" role="tablist">{for tabs}</div>
            if visible.is_empty() {
                <p class="empty-state">{"No projects in this category yet."}</p>
            } else {
                <div class="card-grid">
                    {for visible.into_iter().map(project_card)}
                </div>
            }
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let query = use_state(String::new);
    let category = use_state(|| None::<SkillCategory>);
    let visible = filter_skills(SKILLS, &query, *category);

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let filter_button = |candidate: Option<SkillCategory>| {
        let selected = *category == candidate;
        let label = candidate.map_or("All", SkillCategory::label);
        let onclick = {
            let category = category.clone();
            Callback::from(move |_| category.set(candidate))
        };
        html! {
            <button
                type="button"
                class={classes!("tab", selected.then_some("is-active"))}
                aria-pressed={selected.to_string()}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <section id={SectionId::Skills.as_str()} class="section-block" aria-labelledby="skills-heading">
            <h2 id="skills-heading">{"Skills"}</h2>
            <label class="search">
                <span class="sr-only">{"Search skills"}</span>
                <input
                    type="search"
                    placeholder="Search skills or tags..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </label>
            <div class="tabs">
                {filter_button(None)}
                {for SkillCategory::ALL.into_iter().map(|candidate| filter_button(Some(candidate)))}
            </div>
            if visible.is_empty() {
                <p class="empty-state">{"No skills match your search."}</p>
            } else {
                <div class="card-grid">
                    {for visible.into_iter().map(|skill| html! {
                        <article class="card skill-card" data-category={skill.category.as_str()}>
                            <h3>{skill.name}</h3>
                            <p class="muted">{skill.description}</p>
                            <ul class="tag-list">
                                {for skill.tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> })}
                            </ul>
                        </article>
                    })}
                </div>
            }
        </section>
    }
}

#[function_component(BlogTeaser)]
fn blog_teaser() -> Html {
    html! {
        <section id={SectionId::Blog.as_str()} class="section-block" aria-labelledby="blog-heading">
            <h2 id="blog-heading">{"Latest Posts"}</h2>
            <div class="card-grid">
                {for BLOG_POSTS.iter().take(TEASER_POSTS).map(|post| html! {
                    <article class="card">
                        <p class="muted">{format!("{} · {}", post.display_date(), post.read_time)}</p>
                        <h3>
                            <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                {post.title}
                            </Link<Route>>
                        </h3>
                        <p>{post.excerpt}</p>
                    </article>
                })}
            </div>
            <Link<Route> to={Route::BlogIndex} classes={classes!("button")}>{"View All Posts"}</Link<Route>>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let Some(page) = use_context::<PageContext>() else {
        return Html::default();
    };

    let links = if page.route.is_home() {
        [SectionId::Home, SectionId::About, SectionId::Projects, SectionId::Contact]
            .into_iter()
            .map(|section| html! {
                <li>
                    <button type="button" class="link" onclick={scroll_callback(&page, section)}>
                        {section.label()}
                    </button>
                </li>
            })
            .collect::<Html>()
    } else {
        html! {
            <>
                <li><Link<Route> to={Route::Home} classes={classes!("link")}>{"Home"}</Link<Route>></li>
                <li><Link<Route> to={Route::BlogIndex} classes={classes!("link")}>{"Blog"}</Link<Route>></li>
            </>
        }
    };

    html! {
        <Reveal delay_ms={20}>
            <footer class="site-footer">
                <div>
                    <p class="brand">{PROFILE.name}</p>
                    <p class="muted">{PROFILE.headline}</p>
                </div>
                <ul class="row-list">{links}</ul>
                <ul class="row-list">
                    <li><ExternalLink href={PROFILE.github} label="GitHub" /></li>
                    <li><ExternalLink href={PROFILE.linkedin} label="LinkedIn" /></li>
                    <li><a class="link" href={format!("mailto:{}", PROFILE.email)}>{"Email"}</a></li>
                </ul>
                <p class="muted">{format!("Built with {}", FOOTER_TECH.join(", "))}</p>
            </footer>
        </Reveal>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Reveal><About /></Reveal>
            <Reveal delay_ms={20}><Experience /></Reveal>
            <Reveal delay_ms={20}><Projects /></Reveal>
            <Skills />
            <Reveal><BlogTeaser /></Reveal>
            <Reveal><Contact /></Reveal>
        </>
    }
}
