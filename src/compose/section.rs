use web_sys::Document;

use super::fallback;
use crate::chrome;

/// Hook invoked synchronously after a section's markup has been injected. Runs whether
/// the markup came from the fetch or the fallback, so it can rely on the section's
/// elements existing either way.
pub type PostRenderFn = fn(&Document);

/// Descriptor for one composable page section. Created once at startup from the fixed
/// declared list; immutable; never persisted.
pub struct Section {
    /// Id of the placeholder container the fragment is injected into.
    pub container_id: &'static str,

    /// Relative path of the static HTML fragment.
    pub source_url: &'static str,

    /// Optional hook to run once the markup is in place.
    pub post_render: Option<PostRenderFn>,
}

impl Section {
    /// The fallback markup owned by this section.
    pub fn fallback(&self) -> &'static str {
        fallback::template(self.container_id).unwrap_or_default()
    }
}

/// The fixed, ordered list of sections composed at startup. Processed exactly once per
/// page load, in this order, each independently succeeding or falling back.
pub const SECTIONS: [Section; 10] = [
    Section {
        container_id: "header-placeholder",
        source_url: "parts/header.html",
        post_render: Some(chrome::bind_mobile_menu),
    },
    Section {
        container_id: "hero-placeholder",
        source_url: "parts/hero.html",
        post_render: None,
    },
    Section {
        container_id: "game-placeholder",
        source_url: "parts/game.html",
        post_render: None,
    },
    Section {
        container_id: "features-placeholder",
        source_url: "parts/features.html",
        post_render: None,
    },
    Section {
        container_id: "how-to-play-placeholder",
        source_url: "parts/how-to-play.html",
        post_render: None,
    },
    Section {
        container_id: "field-description-placeholder",
        source_url: "parts/field-description.html",
        post_render: None,
    },
    Section {
        container_id: "reviews-placeholder",
        source_url: "parts/reviews.html",
        post_render: None,
    },
    Section {
        container_id: "news-section-placeholder",
        source_url: "parts/news-section.html",
        post_render: None,
    },
    Section {
        container_id: "additional-section-placeholder",
        source_url: "parts/additional-section.html",
        post_render: None,
    },
    Section {
        container_id: "footer-placeholder",
        source_url: "parts/footer.html",
        post_render: Some(chrome::set_current_year),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_section_owns_a_fallback() {
        for section in &SECTIONS {
            assert!(
                !section.fallback().is_empty(),
                "section {} has no fallback template",
                section.container_id
            );
        }
    }

    #[test]
    fn declared_order_starts_with_header_and_ends_with_footer() {
        assert_eq!(SECTIONS[0].container_id, "header-placeholder");
        assert_eq!(SECTIONS[SECTIONS.len() - 1].container_id, "footer-placeholder");
    }
}
