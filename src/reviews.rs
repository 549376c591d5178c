//! Renders player reviews and their aggregate stats from the shared JSON document. A
//! single pass over the loaded data; nothing here is paginated or mutated afterwards.

use web_sys::Document;

use crate::{
    data::{Review, ReviewStats, SiteData, DATA_URL},
    fetch,
};

/// Fetch the document and render the reviews grid and stat tiles. If the document is
/// unavailable the static markup already in the page is left untouched.
pub async fn start(document: &Document) {
    match fetch::fetch_json::<SiteData>(DATA_URL).await {
        Ok(data) => render(document, &data.reviews, data.review_stats.as_ref()),
        Err(error) => {
            tracing::error!(%error, "failed to load reviews data");
        }
    }
}

/// Replace the reviews grid with one card per review and fill the stat tiles. Stats are
/// display-only pass-through; when absent they are logged and omitted.
pub fn render(document: &Document, reviews: &[Review], stats: Option<&ReviewStats>) {
    match document.query_selector(".reviews-grid").ok().flatten() {
        Some(grid) => {
            grid.set_inner_html("");

            for (index, review) in reviews.iter().enumerate() {
                let built = crate::util::create_fragment_element(
                    document,
                    "div",
                    "review-card",
                    &review_card_html(review, index + 1),
                );

                match built {
                    Ok(card) => {
                        if let Err(error) = grid.append_child(&card) {
                            tracing::error!(?error, "failed to append review card");
                        }
                    }
                    Err(error) => tracing::error!(?error, "failed to build review card"),
                }
            }
        }
        None => tracing::error!("reviews grid not found"),
    }

    let stats_container = document.query_selector(".reviews-stats").ok().flatten();
    match (stats_container, stats) {
        (Some(container), Some(stats)) => container.set_inner_html(&stats_html(stats)),
        _ => tracing::warn!("review stats missing, omitting stat tiles"),
    }
}

/// One star glyph per rating point, each wrapped in its own span.
fn stars(rating: u8) -> String {
    (0..rating)
        .map(|_| r#"<span class="star">&#11088;</span>"#)
        .collect()
}

/// Inner markup for a review card. `avatar_index` is the 1-based position used to pick
/// the avatar background.
fn review_card_html(review: &Review, avatar_index: usize) -> String {
    format!(
        r#"
        <div class="review-header">
            <div class="review-avatar avatar-{avatar_index}">
                <svg viewBox="0 0 24 24">
                    <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 3c1.66 0 3 1.34 3 3s-1.34 3-3 3-3-1.34-3-3 1.34-3 3-3zm0 14.2c-2.5 0-4.71-1.28-6-3.22.03-1.99 4-3.08 6-3.08 1.99 0 5.97 1.09 6 3.08-1.29 1.94-3.5 3.22-6 3.22z" />
                </svg>
            </div>
            <div class="review-info">
                <h4>{name}</h4>
                <div class="review-rating">{stars}</div>
            </div>
        </div>
        <p class="review-text">"{text}"</p>
        <div class="review-date">{date}</div>
        "#,
        name = review.name,
        stars = stars(review.rating),
        text = review.text,
        date = review.date,
    )
}

/// Markup for the three aggregate stat tiles. Values pass through verbatim.
fn stats_html(stats: &ReviewStats) -> String {
    format!(
        r#"
        <div class="review-stat">
            <div class="stat-icon">&#11088;</div>
            <div class="stat-value">{average_rating}</div>
            <div class="stat-label">Average Rating</div>
        </div>
        <div class="review-stat">
            <div class="stat-icon">&#128101;</div>
            <div class="stat-value">{active_players}</div>
            <div class="stat-label">Active Players</div>
        </div>
        <div class="review-stat">
            <div class="stat-icon">&#127918;</div>
            <div class="stat-value">{games_played}</div>
            <div class="stat-label">Games Played</div>
        </div>
        "#,
        average_rating = stats.average_rating,
        active_players = stats.active_players,
        games_played = stats.games_played,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            name: "Sarah".to_string(),
            rating,
            text: "So much fun".to_string(),
            date: "December 20, 2024".to_string(),
        }
    }

    #[test]
    fn rating_renders_exactly_that_many_stars() {
        let html = review_card_html(&review(4), 1);

        assert_eq!(html.matches("&#11088;").count(), 4);
        assert_eq!(html.matches(r#"<span class="star">"#).count(), 4);
    }

    #[test]
    fn avatar_index_lands_in_the_class_list() {
        let html = review_card_html(&review(5), 3);

        assert!(html.contains("avatar-3"));
    }

    #[test]
    fn stats_pass_through_verbatim() {
        let html = stats_html(&ReviewStats {
            average_rating: 4.8,
            active_players: "10,000+".to_string(),
            games_played: "1M+".to_string(),
        });

        assert!(html.contains("4.8"));
        assert!(html.contains("10,000+"));
        assert!(html.contains("1M+"));
    }
}
