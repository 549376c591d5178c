//! Markup builders for news cards. Pure string construction so the layout rules stay
//! testable off the DOM.

use crate::data::NewsItem;

/// An item carrying an image within the first two positions of its category renders the
/// image-augmented layout; everything else renders text-only. Fixed structural rule, not
/// configurable.
pub fn uses_image_layout(item: &NewsItem, index: usize) -> bool {
    item.image.is_some() && index < 2
}

/// Class list for a news card at the given category position.
pub fn card_class(item: &NewsItem, index: usize) -> &'static str {
    if uses_image_layout(item, index) {
        "news-card with-image"
    } else {
        "news-card"
    }
}

/// Inner markup for a news card at the given category position.
pub fn card_html(item: &NewsItem, index: usize) -> String {
    if uses_image_layout(item, index) {
        let image = item.image.as_deref().unwrap_or_default();

        format!(
            r##"
            <div class="news-image">
                <img src="{image}" alt="{title}">
            </div>
            <div class="news-content">
                <h4 class="news-title">{title}</h4>
                <p class="news-excerpt">{excerpt}</p>
                <div class="news-meta">
                    <span class="news-date">{date}</span>
                    <a href="#" class="read-more-btn">Read More</a>
                </div>
            </div>
            "##,
            title = item.title,
            excerpt = item.excerpt,
            date = item.date,
        )
    } else {
        format!(
            r##"
            <h4 class="news-title">{title}</h4>
            <p class="news-excerpt">{excerpt}</p>
            <div class="news-meta">
                <span class="news-date">{date}</span>
                <a href="#" class="read-more-btn">Read More</a>
            </div>
            "##,
            title = item.title,
            excerpt = item.excerpt,
            date = item.date,
        )
    }
}

/// Card written into a grid when news content cannot be rendered at all.
pub fn error_card_html(title: &str, excerpt: &str) -> String {
    format!(
        r#"
        <div class="news-card">
            <h4 class="news-title">{title}</h4>
            <p class="news-excerpt">{excerpt}</p>
        </div>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(image: Option<&str>) -> NewsItem {
        NewsItem {
            title: "Title".to_string(),
            excerpt: "Excerpt".to_string(),
            date: "December 20, 2024".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn image_layout_only_for_early_items_with_images() {
        assert!(uses_image_layout(&item(Some("pict/a.jpg")), 0));
        assert!(uses_image_layout(&item(Some("pict/a.jpg")), 1));
        assert!(!uses_image_layout(&item(Some("pict/a.jpg")), 2));
        assert!(!uses_image_layout(&item(None), 0));
    }

    #[test]
    fn image_card_embeds_the_image_once() {
        let html = card_html(&item(Some("pict/a.jpg")), 0);

        assert_eq!(html.matches("news-image").count(), 1);
        assert!(html.contains(r#"src="pict/a.jpg""#));
        assert!(html.contains("read-more-btn"));
    }

    #[test]
    fn text_card_has_no_image_markup() {
        let html = card_html(&item(Some("pict/a.jpg")), 3);

        assert!(!html.contains("news-image"));
        assert!(html.contains("Title"));
    }
}
