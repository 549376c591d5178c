//! Client-side contact form: per-field validation with real-time feedback, and a
//! simulated submission behind a fixed delay. Nothing ever leaves the browser; the only
//! user-visible error path on the whole page lives here.

mod validate;

use gloo_timers::{callback::Timeout, future::TimeoutFuture};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::util::{self, InsertAt};

/// Simulated network delay before a submission "completes".
const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long the inline success or error notice stays on screen.
const NOTICE_MS: u32 = 5_000;

/// Submission rejected by the simulated backend. Kept so the inline error path stays
/// exercised when a real backend lands here.
#[derive(Debug, Error)]
#[error("submission rejected")]
pub struct SubmitError;

/// Values gathered from the form at submit time.
#[derive(Debug)]
struct FormFields {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

/// Wire the contact form if it is present on this page.
pub fn mount(document: &Document) {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    bind_live_validation(document);

    let document = document.clone();
    util::listen(&form.clone(), "submit", move |event| {
        event.prevent_default();

        let document = document.clone();
        let form = form.clone();
        spawn_local(async move { handle_submit(&document, &form).await });
    });
}

fn bind_live_validation(document: &Document) {
    bind_field(document, "name", validate::name);
    bind_field(document, "email", validate::email);
    bind_field(document, "phone", validate::phone);
    bind_phone_filter(document);
}

/// Validate a field on every keystroke and when focus leaves it.
fn bind_field(document: &Document, id: &'static str, validator: Validator) {
    let Some(field) = document.get_element_by_id(id) else {
        return;
    };

    for event_type in ["input", "blur"] {
        let document = document.clone();
        util::listen(&field, event_type, move |_| {
            apply_validation(&document, id, validator(&field_value(&document, id)));
        });
    }
}

/// Keep the phone field digits-only and capped as the user types.
fn bind_phone_filter(document: &Document) {
    let Some(field) = document
        .get_element_by_id("phone")
        .and_then(|field| field.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let input = field.clone();
    util::listen(&field, "input", move |_| {
        let sanitized = validate::sanitize_phone(&input.value());
        if sanitized != input.value() {
            input.set_value(&sanitized);
        }
    });
}

type Validator = fn(&str) -> Result<(), &'static str>;

/// Run every validator, surfacing each field's message, and report whether the form as
/// a whole may be submitted.
fn validate_form(document: &Document) -> bool {
    const CHECKS: [(&str, Validator); 5] = [
        ("name", validate::name),
        ("email", validate::email),
        ("subject", validate::subject),
        ("message", validate::message),
        ("phone", validate::phone),
    ];

    let mut valid = true;

    for (field_id, validator) in CHECKS {
        let outcome = validator(&field_value(document, field_id));
        if outcome.is_err() {
            valid = false;
        }
        apply_validation(document, field_id, outcome);
    }

    valid
}

async fn handle_submit(document: &Document, form: &HtmlFormElement) {
    clear_all_errors(document);

    if !validate_form(document) {
        return;
    }

    let fields = FormFields {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        phone: field_value(document, "phone"),
        subject: field_value(document, "subject"),
        message: field_value(document, "message"),
    };

    let submit = form
        .query_selector(".submit-btn")
        .ok()
        .flatten()
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());

    if let Some(button) = &submit {
        button.set_disabled(true);
        button.set_text_content(Some("Sending..."));
    }

    match simulate_submission(fields).await {
        Ok(()) => {
            show_notice(
                document,
                form,
                "Message sent successfully! We'll get back to you within 24 hours.",
                false,
            );
            form.reset();
        }
        Err(error) => {
            tracing::error!(%error, "form submission failed");
            show_notice(
                document,
                form,
                "An error occurred while sending your message. Please try again.",
                true,
            );
        }
    }

    // Whatever happened, the form ends up editable again.
    if let Some(button) = &submit {
        button.set_disabled(false);
        button.set_text_content(Some("Send Message"));
    }
}

/// Simulated submission: a fixed delay, a log line, then success.
async fn simulate_submission(fields: FormFields) -> Result<(), SubmitError> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;

    tracing::info!(?fields, "contact form submitted");

    Ok(())
}

/// Inline notice inserted right after the submit control; removes itself after a fixed
/// dwell time.
fn show_notice(document: &Document, form: &HtmlFormElement, text: &str, is_error: bool) {
    let Ok(notice) = document.create_element("div") else {
        return;
    };

    notice.set_class_name(if is_error {
        "success-message error"
    } else {
        "success-message"
    });
    notice.set_id(if is_error {
        "error-notification"
    } else {
        "success-notification"
    });
    notice.set_text_content(Some(text));

    let insert_at = form
        .query_selector(".submit-btn")
        .ok()
        .flatten()
        .and_then(|button| InsertAt::after(&button))
        .unwrap_or_else(|| InsertAt::append(form));

    if let Err(error) = insert_at.insert(&notice) {
        tracing::error!(?error, "failed to show form notice");
        return;
    }

    Timeout::new(NOTICE_MS, move || notice.remove()).forget();
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }

    String::new()
}

fn apply_validation(document: &Document, field_id: &str, outcome: Result<(), &'static str>) {
    match outcome {
        Ok(()) => hide_error(document, field_id),
        Err(message) => show_error(document, field_id, message),
    }
}

fn show_error(document: &Document, field_id: &str, message: &str) {
    let Some(element) = document.get_element_by_id(&format!("{field_id}-error")) else {
        return;
    };

    element.set_text_content(Some(message));

    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", "block");
    }
}

fn hide_error(document: &Document, field_id: &str) {
    let Some(element) = document.get_element_by_id(&format!("{field_id}-error")) else {
        return;
    };

    element.set_text_content(Some(""));

    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", "none");
    }
}

fn clear_all_errors(document: &Document) {
    let Ok(elements) = document.query_selector_all(".error-message") else {
        return;
    };

    for index in 0..elements.length() {
        let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        element.set_text_content(Some(""));
        let _ = element.style().set_property("display", "none");
    }
}
