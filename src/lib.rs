//! Client-side page shell for the Princess Run 3D promotional site.
//!
//! The page is assembled at load time from separately fetched HTML fragments: the
//! [`compose::Composer`] fills each placeholder container in a fixed order, falling
//! back to embedded markup when a fetch fails. The news and review renderers then fill
//! their grids from a shared JSON document, and the remaining components (consent
//! banner, contact form, page chrome) bind independently. Every component is
//! constructed exactly once, here, at startup.

pub mod chrome;
pub mod compose;
pub mod consent;
pub mod contact;
pub mod data;
pub mod error;
pub mod fetch;
pub mod news;
pub mod reviews;
mod util;

pub use compose::{Composer, Section, SECTIONS};
pub use consent::ConsentBanner;
pub use data::{Category, NewsData, SiteData, DATA_URL};
pub use error::FetchError;
pub use news::{DetailOverlay, NewsLoader, PAGE_SIZE};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Route panics to console.error and tracing output to the console.
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    tracing_wasm::set_as_global_default();

    let document = util::document();

    // Components with static markup bind immediately.
    ConsentBanner::mount(&document);
    contact::mount(&document);

    // Everything that depends on composed markup runs after the composer has filled
    // the placeholders, so nothing below polls or sleeps waiting for elements.
    spawn_local(async move {
        Composer::new(&document).compose().await;

        chrome::init(&document);

        NewsLoader::start(&document).await;
        reviews::start(&document).await;
    });

    Ok(())
}
