use gloo_net::http::Request;
use serde_json::json;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{log_client_event, PageContext};
use crate::content::data::PROFILE;
use crate::logging::LogLevel;
use crate::view_state::{
    form::{ContactSubmission, FormField, SubmitStatus},
    section::SectionId,
    PageAction,
};

/// Relay that forwards contact messages by email. Override at build time.
const FORM_RELAY_ENDPOINT: &str = match option_env!("FORM_RELAY_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://formsubmit.co/ajax/thanseerjelani@gmail.com",
};

const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("form relay unreachable: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("form relay rejected the message with status {0}")]
    Rejected(u16),
}

async fn send_submission(submission: &ContactSubmission) -> Result<(), RelayError> {
    let response = Request::post(FORM_RELAY_ENDPOINT)
        .header("Accept", "application/json")
        .json(submission)?
        .send()
        .await?;

    if !response.ok() {
        return Err(RelayError::Rejected(response.status()));
    }
    Ok(())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let Some(page) = use_context::<PageContext>() else {
        return Html::default();
    };
    let submitting = page.submit_status.is_submitting();

    let edit = |field: FormField| {
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                FormField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            page.dispatch(PageAction::FormEdited(field, value));
        })
    };

    let on_attachment = {
        let page = page.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name())
                .unwrap_or_default();
            page.dispatch(PageAction::FormEdited(FormField::Attachment, name));
        })
    };

    let onsubmit = {
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if page.submit_status.is_submitting() {
                return;
            }

            let submission = match page.form.submission() {
                Ok(submission) => submission,
                Err(error) => {
                    page.dispatch(PageAction::SubmissionFailed(format!(
                        "Please check the form: {error}."
                    )));
                    return;
                }
            };

            page.dispatch(PageAction::SubmissionStarted);
            let page = page.clone();
            spawn_local(async move {
                match send_submission(&submission).await {
                    Ok(()) => page.dispatch(PageAction::SubmissionSucceeded),
                    Err(error) => {
                        log_client_event(
                            LogLevel::Warn,
                            "contact_submit_failed",
                            json!({ "error": error.to_string() }),
                        );
                        page.dispatch(PageAction::SubmissionFailed(
                            SUBMIT_FAILED_MESSAGE.to_string(),
                        ));
                    }
                }
            });
        })
    };

    let status = page.submit_status.message().map(|message| {
        let tone = match page.submit_status {
            SubmitStatus::Failed(_) => "is-error",
            _ => "is-success",
        };
        html! { <p class={classes!("form-status", tone)} role="status">{message.to_string()}</p> }
    });

    html! {
        <section id={SectionId::Contact.as_str()} class="section-block" aria-labelledby="contact-heading">
            <h2 id="contact-heading">{"Get In Touch"}</h2>
            <div class="contact-layout">
                <ul class="row-list contact-details">
                    <li>
                        <span class="muted">{"Email"}</span>
                        <a class="link" href={format!("mailto:{}", PROFILE.email)}>{PROFILE.email}</a>
                    </li>
                    <li>
                        <span class="muted">{"Phone"}</span>
                        <a class="link" href={format!("tel:{}", PROFILE.phone)}>{PROFILE.phone}</a>
                    </li>
                    <li><span class="muted">{"Location"}</span>{PROFILE.location}</li>
                </ul>

                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <label>
                        {"Name"}
                        <input
                            type="text"
                            name="name"
                            required=true
                            disabled={submitting}
                            value={page.form.name.clone()}
                            oninput={edit(FormField::Name)}
                        />
                    </label>
                    <label>
                        {"Email"}
                        <input
                            type="email"
                            name="email"
                            required=true
                            disabled={submitting}
                            value={page.form.email.clone()}
                            oninput={edit(FormField::Email)}
                        />
                    </label>
                    <label>
                        {"Phone (optional)"}
                        <input
                            type="tel"
                            name="phone"
                            disabled={submitting}
                            value={page.form.phone.clone().unwrap_or_default()}
                            oninput={edit(FormField::Phone)}
                        />
                    </label>
                    <label>
                        {"Message"}
                        <textarea
                            name="message"
                            rows="5"
                            required=true
                            disabled={submitting}
                            value={page.form.message.clone()}
                            oninput={edit(FormField::Message)}
                        />
                    </label>
                    <label>
                        {"Attachment (optional)"}
                        <input type="file" name="attachment" disabled={submitting} onchange={on_attachment} />
                    </label>
                    if let Some(name) = page.form.attachment.clone() {
                        <p class="muted">{format!("Attached: {name}")}</p>
                    }
                    <button type="submit" class="button primary" disabled={submitting}>
                        {if submitting { "Sending..." } else { "Send Message" }}
                    </button>
                    {status}
                </form>
            </div>
        </section>
    }
}
