//! Page chrome: mobile navigation, scroll effects, smooth-scroll anchors, and the game
//! control popups. [`bind_mobile_menu`] and [`set_current_year`] run as post-render
//! hooks of the header and footer sections; everything else binds once composition has
//! finished and the full markup exists.

use std::{cell::Cell, rc::Rc};

use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::util;

/// Bind every chrome behavior that depends on composed markup.
pub fn init(document: &Document) {
    init_scroll_animations(document);
    init_smooth_scroll(document);
    init_header_scroll_effect(document);
    init_game_controls(document);
}

/// Wire the mobile menu toggle inside the freshly injected header. Opening the menu
/// locks page scroll at the current position; closing restores it.
pub fn bind_mobile_menu(document: &Document) {
    let toggle = document.query_selector(".mobile-menu-toggle").ok().flatten();
    let menu = document.query_selector(".nav-menu").ok().flatten();

    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return;
    };

    let saved_scroll = Rc::new(Cell::new(0.0));

    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let saved_scroll = Rc::clone(&saved_scroll);
        util::listen(&toggle.clone(), "click", move |_| {
            if toggle.class_list().contains("active") {
                close_menu(&toggle, &menu, &saved_scroll);
            } else {
                let _ = toggle.class_list().add_1("active");
                let _ = menu.class_list().add_1("active");
                lock_scroll(&saved_scroll);
            }
        });
    }

    // A tap on any nav link closes the menu before the page scrolls.
    if let Ok(links) = menu.query_selector_all("a") {
        for index in 0..links.length() {
            let Some(link) = links.item(index) else {
                continue;
            };

            let toggle = toggle.clone();
            let menu = menu.clone();
            let saved_scroll = Rc::clone(&saved_scroll);
            util::listen(&link, "click", move |_| {
                close_menu(&toggle, &menu, &saved_scroll);
            });
        }
    }

    // A click on the menu backdrop itself (not one of its children) also closes it.
    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let saved_scroll = Rc::clone(&saved_scroll);
        util::listen(&menu.clone(), "click", move |event| {
            let clicked_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target == menu);

            if clicked_backdrop {
                close_menu(&toggle, &menu, &saved_scroll);
            }
        });
    }
}

fn close_menu(toggle: &Element, menu: &Element, saved_scroll: &Cell<f64>) {
    let _ = toggle.class_list().remove_1("active");
    let _ = menu.class_list().remove_1("active");
    unlock_scroll(saved_scroll);
}

fn lock_scroll(saved_scroll: &Cell<f64>) {
    let window = util::window();
    let document = util::document();
    let position = window.scroll_y().unwrap_or_default();

    saved_scroll.set(position);

    if let Some(body) = document.body() {
        // Pin the body at the saved offset so position:fixed does not jump to the top.
        let _ = body.style().set_property("top", &format!("-{position}px"));
        let _ = body.class_list().add_1("body-no-scroll");
    }
    if let Some(root) = document.document_element() {
        let _ = root.class_list().add_1("body-no-scroll");
    }
}

fn unlock_scroll(saved_scroll: &Cell<f64>) {
    let window = util::window();
    let document = util::document();

    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("body-no-scroll");
        let _ = body.style().remove_property("top");
    }
    if let Some(root) = document.document_element() {
        let _ = root.class_list().remove_1("body-no-scroll");
    }

    window.scroll_to_with_x_and_y(0.0, saved_scroll.get());
    saved_scroll.set(0.0);
}

/// Write the current year into the footer. Runs as the footer section's post-render
/// hook, so the target span exists whether the fragment or the fallback rendered.
pub fn set_current_year(document: &Document) {
    let Some(element) = document.get_element_by_id("current-year") else {
        return;
    };

    element.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
}

/// Fade sections and cards in as they scroll into view.
fn init_scroll_animations(document: &Document) {
    let callback: Function = Closure::<dyn Fn(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };

            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("fade-in-up");
            }
        }
    })
    .into_js_value()
    .unchecked_into();

    let mut options = IntersectionObserverInit::new();
    options
        .threshold(&JsValue::from_f64(0.1))
        .root_margin("0px 0px -50px 0px");

    let Ok(observer) = IntersectionObserver::new_with_options(&callback, &options) else {
        return;
    };

    let Ok(elements) = document
        .query_selector_all(".section, .feature-card, .instruction-card, .review-card, .news-card")
    else {
        return;
    };

    for index in 0..elements.length() {
        if let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&element);
        }
    }
}

/// Smooth-scroll same-page anchor links to their target section.
fn init_smooth_scroll(document: &Document) {
    let Ok(anchors) = document.query_selector_all(r##"a[href^="#"]"##) else {
        return;
    };

    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        let document = document.clone();
        let element = anchor.clone();
        util::listen(&anchor, "click", move |event| {
            event.prevent_default();

            let Some(href) = element.get_attribute("href") else {
                return;
            };

            if let Ok(Some(target)) = document.query_selector(&href) {
                let mut options = ScrollIntoViewOptions::new();
                options
                    .behavior(ScrollBehavior::Smooth)
                    .block(ScrollLogicalPosition::Start);

                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Give the fixed header a translucent backdrop once the page has scrolled past it.
fn init_header_scroll_effect(document: &Document) {
    let document = document.clone();

    util::listen(&util::window(), "scroll", move |_| {
        let Some(header) = document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let style = header.style();
        if util::window().scroll_y().unwrap_or_default() > 100.0 {
            let _ = style.set_property("background", "rgba(255, 255, 255, 0.95)");
            let _ = style.set_property("backdrop-filter", "blur(10px)");
        } else {
            let _ = style.set_property("background", "var(--white)");
            let _ = style.set_property("backdrop-filter", "none");
        }
    });
}

/// Wire the game control buttons: fullscreen toggle plus the instructions and high
/// score popups.
fn init_game_controls(document: &Document) {
    let Ok(buttons) = document.query_selector_all(".control-btn") else {
        return;
    };

    for index in 0..buttons.length() {
        let Some(button) = buttons.item(index) else {
            continue;
        };

        let document = document.clone();
        let label_source = button.clone();
        util::listen(&button, "click", move |_| {
            let action = label_source
                .text_content()
                .unwrap_or_default()
                .trim()
                .to_lowercase();

            match action.as_str() {
                "fullscreen" => toggle_fullscreen(&document),
                "instructions" => show_instructions(),
                "high scores" => show_high_scores(),
                _ => {}
            }
        });
    }
}

/// Request fullscreen for the embedded game iframe.
fn toggle_fullscreen(document: &Document) {
    let Ok(Some(frame)) = document.query_selector(".game-frame iframe") else {
        return;
    };

    if let Err(error) = frame.request_fullscreen() {
        tracing::warn!(?error, "fullscreen request rejected");
    }
}

fn show_instructions() {
    let _ = util::window().alert_with_message(
        "Game Instructions:\n\n\
         \u{2022} Use Arrow Keys or WASD to move\n\
         \u{2022} Press Spacebar to jump\n\
         \u{2022} Collect beautiful items to increase charisma\n\
         \u{2022} Avoid ugly clothes and obstacles\n\
         \u{2022} Gain companions to help you progress",
    );
}

fn show_high_scores() {
    let _ = util::window().alert_with_message(
        "High Scores:\n\n\
         \u{1F3C6} Princess Emma: 15,420 points\n\
         \u{1F948} Gaming Queen: 14,890 points\n\
         \u{1F949} Adventure Lover: 14,230 points\n\n\
         Can you beat these scores?",
    );
}
