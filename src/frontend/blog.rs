use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::content::{data::BLOG_POSTS, find_post, BlogPost};

fn post_meta(post: &BlogPost) -> Html {
    html! {
        <p class="muted">
            {post.display_date()}
            {" · "}
            {post.read_time}
            if let Some(author) = post.author {
                {format!(" · {author}")}
            }
        </p>
    }
}

fn tag_list(tags: &[&'static str]) -> Html {
    html! {
        <ul class="tag-list">
            {for tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> })}
        </ul>
    }
}

#[function_component(BlogIndex)]
pub fn blog_index() -> Html {
    html! {
        <section class="section-block blog-index" aria-labelledby="blog-index-heading">
            <Link<Route> to={Route::Home} classes={classes!("link", "back-link")}>{"← Back to Home"}</Link<Route>>
            <h1 id="blog-index-heading">{"Blog"}</h1>
            <p class="muted">{"Notes on web development, tooling and the projects I work on."}</p>
            if BLOG_POSTS.is_empty() {
                <p class="empty-state">{"No posts yet. Check back soon."}</p>
            } else {
                <div class="card-grid">
                    {for BLOG_POSTS.iter().map(|post| html! {
                        <article class="card">
                            if let Some(cover) = post.cover_image {
                                <img class="card-cover" src={cover} alt="" loading="lazy" />
                            }
                            {post_meta(post)}
                            <h2>
                                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                    {post.title}
                                </Link<Route>>
                            </h2>
                            <p>{post.excerpt}</p>
                            {tag_list(post.tags)}
                        </article>
                    })}
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogArticleProps {
    pub slug: String,
}

#[function_component(BlogArticle)]
pub fn blog_article(props: &BlogArticleProps) -> Html {
    let Some(post) = find_post(BLOG_POSTS, &props.slug) else {
        return html! {
            <section class="section-block not-found">
                <h1>{"Post not found"}</h1>
                <p class="muted">{"The article you are looking for does not exist or has moved."}</p>
                <Link<Route> to={Route::BlogIndex} classes={classes!("button")}>{"Back to Blog"}</Link<Route>>
            </section>
        };
    };

    html! {
        <article class="section-block blog-article">
            <Link<Route> to={Route::BlogIndex} classes={classes!("link", "back-link")}>{"← Back to Blog"}</Link<Route>>
            <h1>{post.title}</h1>
            {post_meta(post)}
            {tag_list(post.tags)}
            if let Some(cover) = post.cover_image {
                <img class="article-cover" src={cover} alt={post.title} />
            }
            {for post.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> })}
        </article>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section-block not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"There is nothing at this address."}</p>
            <Link<Route> to={Route::Home} classes={classes!("button")}>{"Go Home"}</Link<Route>>
        </section>
    }
}
