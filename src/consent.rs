//! Cookie consent banner backed by persistent local storage. Two states: hidden (flag
//! already persisted, or banner not yet shown) and shown. The only transition back to
//! hidden is explicit acceptance, which persists the flag for the whole browser
//! profile; clearing the flag externally plus a full reload is the only way to see the
//! banner again.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Storage};

use crate::util;

/// Local storage key holding the consent flag. The stored value is the literal string
/// `"true"`; anything else counts as no consent.
pub const STORAGE_KEY: &str = "cookiesAccepted";

/// Delay before the banner slides in on first visit.
const SHOW_DELAY_MS: u32 = 1_000;

/// Duration of the hide animation before the element is dropped from the document.
const FADE_MS: u32 = 500;

/// Dwell time of the acceptance toast.
const TOAST_MS: u32 = 3_000;
const TOAST_SLIDE_MS: u32 = 300;

pub struct ConsentBanner;

impl ConsentBanner {
    /// Wire the banner if its markup is present. Pages without the banner are left
    /// alone.
    pub fn mount(document: &Document) {
        let bar = document.get_element_by_id("cookie-bar");
        let accept = document.get_element_by_id("accept-cookies");

        let (Some(bar), Some(accept)) = (bar, accept) else {
            return;
        };

        if !Self::accepted() {
            let bar = bar.clone();
            Timeout::new(SHOW_DELAY_MS, move || {
                let _ = bar.class_list().add_1("show");
            })
            .forget();
        }

        {
            let document = document.clone();
            let bar = bar.clone();
            util::listen(&accept, "click", move |_| Self::accept(&document, &bar));
        }

        if let Some(customize) = document.get_element_by_id("customize-cookies") {
            util::listen(&customize, "click", move |_| {
                if let Err(error) = util::window().location().set_href("prin-cookies.html") {
                    tracing::error!(?error, "failed to open cookie settings");
                }
            });
        }
    }

    /// Whether consent has already been persisted for this browser profile.
    pub fn accepted() -> bool {
        storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .is_some_and(|value| value == "true")
    }

    /// Persist the flag, fade the banner out, drop it from the document, and confirm
    /// with a transient toast.
    fn accept(document: &Document, bar: &Element) {
        match storage() {
            Some(storage) => {
                if let Err(error) = storage.set_item(STORAGE_KEY, "true") {
                    tracing::error!(?error, "failed to persist consent flag");
                }
            }
            None => tracing::warn!("local storage unavailable, consent will not persist"),
        }

        let _ = bar.class_list().remove_1("show");

        {
            let bar = bar.clone();
            Timeout::new(FADE_MS, move || bar.remove()).forget();
        }

        show_acceptance_toast(document);
    }
}

fn storage() -> Option<Storage> {
    util::window().local_storage().ok().flatten()
}

fn show_acceptance_toast(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };

    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name("cookie-toast");
    toast.set_text_content(Some(
        "Cookies successfully enabled! Enjoy your gaming experience.",
    ));

    if body.append_child(&toast).is_err() {
        return;
    }

    // Slide in on the next tick, slide out after the dwell time, then drop the element.
    {
        let toast = toast.clone();
        Timeout::new(100, move || {
            let _ = toast.class_list().add_1("visible");
        })
        .forget();
    }

    Timeout::new(TOAST_MS, move || {
        let _ = toast.class_list().remove_1("visible");

        Timeout::new(TOAST_SLIDE_MS, move || toast.remove()).forget();
    })
    .forget();
}
