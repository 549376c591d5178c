//! Browser-side behavior tests. Run with `wasm-pack test --headless --chrome` (or any
//! wasm-bindgen-test runner); the harness serves no `parts/` fragments, so every
//! composer fetch exercises the fallback path.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use princess_site::{
    compose, consent::ConsentBanner, contact, data::NewsItem, data::Review, data::ReviewStats,
    reviews, Category, Composer, DetailOverlay, FetchError, NewsData, NewsLoader, Section,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// Get or create a container div with the given id, emptied.
fn ensure_container(id: &str) -> Element {
    let document = document();

    if let Some(existing) = document.get_element_by_id(id) {
        existing.set_inner_html("");
        return existing;
    }

    let element = document.create_element("div").unwrap();
    element.set_id(id);
    body().append_child(&element).unwrap();
    element
}

fn item(title: &str, image: Option<&str>) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        excerpt: format!("{title} excerpt"),
        date: "December 20, 2024".to_string(),
        image: image.map(str::to_string),
    }
}

const HERO: Section = Section {
    container_id: "hero-placeholder",
    source_url: "parts/hero.html",
    post_render: None,
};

#[wasm_bindgen_test]
fn successful_fetch_renders_the_body_verbatim() {
    let document = document();
    let container = ensure_container("hero-placeholder");

    compose::render(
        &document,
        &container,
        Ok("<p>fresh markup</p>".to_string()),
        &HERO,
    );

    assert_eq!(container.inner_html(), "<p>fresh markup</p>");
}

#[wasm_bindgen_test]
fn failed_fetch_renders_the_section_fallback() {
    let document = document();
    let container = ensure_container("hero-placeholder");

    compose::render(
        &document,
        &container,
        Err(FetchError::Status(404)),
        &HERO,
    );

    assert!(container.inner_html().contains("Welcome to Princess Run 3D"));
}

fn flag_body(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("hook-ran");
    }
}

#[wasm_bindgen_test]
fn post_render_hook_fires_synchronously_after_injection() {
    const HOOKED: Section = Section {
        container_id: "hook-placeholder",
        source_url: "parts/hook.html",
        post_render: Some(flag_body),
    };

    let document = document();
    let container = ensure_container("hook-placeholder");

    compose::render(&document, &container, Ok("<p>x</p>".to_string()), &HOOKED);

    assert!(body().class_list().contains("hook-ran"));
    let _ = body().class_list().remove_1("hook-ran");
}

#[wasm_bindgen_test]
async fn composition_survives_missing_fragments_and_containers() {
    let document = document();

    // Only two of the ten declared containers exist; the rest are silently skipped,
    // and every fetch 404s into its fallback.
    let header = ensure_container("header-placeholder");
    let hero = ensure_container("hero-placeholder");

    Composer::new(&document).compose().await;

    assert!(header.inner_html().contains("Princess Run 3D"));
    assert!(hero.inner_html().contains("Welcome to Princess Run 3D"));

    // The final layout pass measured the rendered header.
    let padding = body().style().get_property_value("padding-top").unwrap();
    assert!(padding.ends_with("px"));
}

#[wasm_bindgen_test]
fn overlay_is_a_singleton() {
    let document = document();
    let overlay = DetailOverlay::new(&document);

    overlay.open("First", "first excerpt", "December 19, 2024");
    overlay.open("Second", "second excerpt", "December 20, 2024");

    let modals = document.query_selector_all(".news-modal").unwrap();
    assert_eq!(modals.length(), 1);
    assert!(overlay.is_open());
    // The surviving modal is the most recently opened one.
    assert!(modals
        .item(0)
        .unwrap()
        .text_content()
        .unwrap()
        .contains("Second"));

    overlay.close();
    assert!(!overlay.is_open());
    assert_eq!(document.query_selector_all(".news-modal").unwrap().length(), 0);
}

#[wasm_bindgen_test]
fn load_more_paginates_without_duplicates_and_disables_on_exhaustion() {
    let document = document();

    let updates_grid = ensure_container("updates-grid");
    let diaries_grid = ensure_container("diaries-grid");

    let button = document.create_element("button").unwrap();
    button.set_class_name("load-more-btn");
    button
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .dataset()
        .set("category", "updates")
        .unwrap();
    button.set_text_content(Some("Load More"));
    body().append_child(&button).unwrap();

    let data = NewsData {
        updates: vec![item("one", None), item("two", None), item("three", None)],
        diaries: vec![item("diary", Some("pict/a.jpg"))],
    };

    let loader = NewsLoader::with_data(&document, data);
    loader.render_initial();
    loader.bind_controls();

    assert_eq!(updates_grid.query_selector_all(".news-card").unwrap().length(), 2);
    // The early diary entry carries an image, so it gets the image layout.
    assert_eq!(diaries_grid.query_selector_all(".with-image").unwrap().length(), 1);

    loader.load_more(Category::Updates);

    let cards = updates_grid.query_selector_all(".news-card").unwrap();
    assert_eq!(cards.length(), 3);

    let button = button.dyn_into::<HtmlButtonElement>().unwrap();
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap(), "No More Items");

    // Further calls change nothing.
    loader.load_more(Category::Updates);
    assert_eq!(updates_grid.query_selector_all(".news-card").unwrap().length(), 3);

    button.remove();
}

#[wasm_bindgen_test]
fn review_cards_render_one_star_glyph_per_rating_point() {
    let document = document();

    let grid = document.create_element("div").unwrap();
    grid.set_class_name("reviews-grid");
    body().append_child(&grid).unwrap();

    let stats = document.create_element("div").unwrap();
    stats.set_class_name("reviews-stats");
    body().append_child(&stats).unwrap();

    reviews::render(
        &document,
        &[Review {
            name: "Sarah".to_string(),
            rating: 4,
            text: "So much fun".to_string(),
            date: "December 20, 2024".to_string(),
        }],
        Some(&ReviewStats {
            average_rating: 4.8,
            active_players: "10,000+".to_string(),
            games_played: "1M+".to_string(),
        }),
    );

    assert_eq!(grid.query_selector_all(".star").unwrap().length(), 4);
    assert!(stats.text_content().unwrap().contains("4.8"));

    grid.remove();
    stats.remove();
}

#[wasm_bindgen_test]
async fn consent_banner_shows_accepts_and_persists() {
    let document = document();
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("cookiesAccepted").unwrap();

    let bar = ensure_container("cookie-bar");
    let accept = document.create_element("button").unwrap();
    accept.set_id("accept-cookies");
    bar.append_child(&accept).unwrap();

    ConsentBanner::mount(&document);

    assert!(!bar.class_list().contains("show"));
    TimeoutFuture::new(1_100).await;
    assert!(bar.class_list().contains("show"));

    accept.dyn_ref::<HtmlElement>().unwrap().click();

    assert_eq!(
        storage.get_item("cookiesAccepted").unwrap().as_deref(),
        Some("true")
    );
    assert!(ConsentBanner::accepted());

    TimeoutFuture::new(600).await;
    assert!(document.get_element_by_id("cookie-bar").is_none());
}

#[wasm_bindgen_test]
async fn consent_banner_never_shows_once_accepted() {
    let document = document();
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item("cookiesAccepted", "true").unwrap();

    let bar = ensure_container("cookie-bar");
    let accept = document.create_element("button").unwrap();
    accept.set_id("accept-cookies");
    bar.append_child(&accept).unwrap();

    ConsentBanner::mount(&document);

    TimeoutFuture::new(1_200).await;
    assert!(!bar.class_list().contains("show"));

    bar.remove();
    storage.remove_item("cookiesAccepted").unwrap();
}

#[wasm_bindgen_test]
async fn contact_form_validates_then_submits_and_resets() {
    let document = document();
    let form = ensure_container("contact-form");

    // ensure_container builds a div; the contact module expects a real form element.
    form.remove();
    let form = document.create_element("form").unwrap();
    form.set_id("contact-form");
    form.set_inner_html(
        r#"
        <input id="name" type="text">
        <div id="name-error" class="error-message"></div>
        <input id="email" type="email">
        <div id="email-error" class="error-message"></div>
        <input id="phone" type="text">
        <div id="phone-error" class="error-message"></div>
        <select id="subject">
            <option value=""></option>
            <option value="support">Support</option>
        </select>
        <div id="subject-error" class="error-message"></div>
        <textarea id="message"></textarea>
        <div id="message-error" class="error-message"></div>
        <button type="submit" class="submit-btn">Send Message</button>
        "#,
    );
    body().append_child(&form).unwrap();

    contact::mount(&document);

    // Submitting empty shows the name error and never reaches the simulated send. The
    // handler runs as a spawned task, so yield before asserting.
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    TimeoutFuture::new(50).await;

    let name_error = document.get_element_by_id("name-error").unwrap();
    assert_eq!(name_error.text_content().unwrap(), "Name is required");
    assert!(document.get_element_by_id("success-notification").is_none());

    // Fill everything in and submit for real.
    let set = |id: &str, value: &str| {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.set_value(value));
    };
    set("name", "Mary Jane");
    set("email", "mary@example.com");
    set("phone", "4477151123");
    document
        .get_element_by_id("subject")
        .unwrap()
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .unwrap()
        .set_value("support");
    document
        .get_element_by_id("message")
        .unwrap()
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .unwrap()
        .set_value("Hello there");

    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    TimeoutFuture::new(1_700).await;

    assert!(document.get_element_by_id("success-notification").is_some());
    assert_eq!(
        document
            .get_element_by_id("name")
            .unwrap()
            .dyn_ref::<HtmlInputElement>()
            .unwrap()
            .value(),
        ""
    );

    form.remove();
}
