//! Assembles the page from separately fetched HTML fragments. Each declared section is
//! fetched and rendered in order, substituting its own fallback markup on failure; a
//! failure in one section never blocks the ones after it.

pub mod fallback;
mod section;

pub use section::{PostRenderFn, Section, SECTIONS};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::{error::FetchError, fetch};

/// Orchestrates one fetch-and-render cycle per declared section, strictly in order. The
/// sequence is awaited, not parallel, so later hooks never race earlier DOM mutations
/// they depend on (the body offset reads the rendered header's height).
pub struct Composer {
    document: Document,
    sections: &'static [Section],
}

impl Composer {
    /// Create a composer over the fixed declared section list.
    pub fn new(document: &Document) -> Self {
        Self::with_sections(document, &SECTIONS)
    }

    /// Create a composer over an explicit section list.
    pub fn with_sections(document: &Document, sections: &'static [Section]) -> Self {
        Self {
            document: document.clone(),
            sections,
        }
    }

    /// Run every section to completion, then adjust the body offset for the fixed
    /// header. Section failures are absorbed into their fallbacks; nothing here aborts
    /// the page.
    pub async fn compose(&self) {
        for section in self.sections {
            self.load_section(section).await;
        }

        self.adjust_body_padding();
    }

    async fn load_section(&self, section: &Section) {
        let Some(container) = self.document.get_element_by_id(section.container_id) else {
            // The page legitimately omits this section.
            tracing::debug!(section = section.container_id, "container absent, skipping");
            return;
        };

        let outcome = fetch::fetch_text(section.source_url).await;

        render(&self.document, &container, outcome, section);
    }

    /// Pad the body by the rendered header's height so the fixed header never overlaps
    /// content.
    fn adjust_body_padding(&self) {
        let header = self
            .document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|header| header.dyn_into::<HtmlElement>().ok());

        let (Some(header), Some(body)) = (header, self.document.body()) else {
            return;
        };

        if let Err(error) = body
            .style()
            .set_property("padding-top", &format!("{}px", header.offset_height()))
        {
            tracing::error!(?error, "failed to offset body for fixed header");
        }
    }
}

/// Inject the fetch outcome into a container, falling back to the section's own markup
/// on failure, then signal the section's post-render hook. Mutates exactly this
/// container's subtree and nothing else.
pub fn render(
    document: &Document,
    container: &Element,
    outcome: Result<String, FetchError>,
    section: &Section,
) {
    match outcome {
        Ok(html) => container.set_inner_html(&html),
        Err(error) => {
            tracing::warn!(
                section = section.container_id,
                %error,
                "fragment fetch failed, rendering fallback",
            );
            container.set_inner_html(section.fallback());
        }
    }

    if let Some(hook) = section.post_render {
        hook(document);
    }
}
