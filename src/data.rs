use serde::Deserialize;

/// Relative path of the JSON document backing the news and review sections.
pub const DATA_URL: &str = "data.json";

/// The full `data.json` document. Loaded once per page load and treated as read-only
/// afterwards; items have no identity beyond their array position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub news: NewsData,

    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Aggregate display stats. Optional: reviews rendering logs and omits the stats
    /// tiles when absent.
    #[serde(default)]
    pub review_stats: Option<ReviewStats>,
}

/// News items grouped by category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsData {
    #[serde(default)]
    pub updates: Vec<NewsItem>,

    #[serde(default)]
    pub diaries: Vec<NewsItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub excerpt: String,
    pub date: String,

    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub name: String,

    /// Star rating, 1 to 5.
    pub rating: u8,

    pub text: String,
    pub date: String,
}

/// Aggregate review stats, rendered verbatim into the stat tiles.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewStats {
    pub average_rating: f64,
    pub active_players: String,
    pub games_played: String,
}

/// A news category, keyed to the `<category>-grid` container and the matching
/// `data-category` attribute on its "load more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Updates,
    Diaries,
}

impl Category {
    /// Every category, in the order the grids appear on the page.
    pub const ALL: [Category; 2] = [Category::Updates, Category::Diaries];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Updates => "updates",
            Category::Diaries => "diaries",
        }
    }

    /// Parse the value of a `data-category` attribute.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "updates" => Some(Category::Updates),
            "diaries" => Some(Category::Diaries),
            _ => None,
        }
    }
}

impl NewsData {
    pub fn category(&self, category: Category) -> &[NewsItem] {
        match category {
            Category::Updates => &self.updates,
            Category::Diaries => &self.diaries,
        }
    }

    /// Hard-coded data set substituted when `data.json` is unavailable or malformed.
    pub fn fallback() -> Self {
        Self {
            updates: vec![
                NewsItem {
                    title: "Game Maintenance".to_string(),
                    excerpt: "Scheduled maintenance to improve server performance and game stability.".to_string(),
                    date: "December 22, 2024".to_string(),
                    image: None,
                },
                NewsItem {
                    title: "Bug Fixes".to_string(),
                    excerpt: "Fixed several minor bugs reported by our community players.".to_string(),
                    date: "December 21, 2024".to_string(),
                    image: None,
                },
            ],
            diaries: vec![
                NewsItem {
                    title: "Adventure in the Crystal Caves".to_string(),
                    excerpt: "Explore the mysterious depths of the Crystal Caves and discover hidden treasures.".to_string(),
                    date: "December 20, 2024".to_string(),
                    image: Some("pict/princess-new1.jpg".to_string()),
                },
                NewsItem {
                    title: "Royal Palace Secrets".to_string(),
                    excerpt: "Uncover the ancient secrets hidden within the walls of the Royal Palace.".to_string(),
                    date: "December 19, 2024".to_string(),
                    image: Some("pict/princess-new2.jpg".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_parses() {
        let data: SiteData = serde_json::from_str(
            r#"{
                "news": {
                    "updates": [{"title": "t", "excerpt": "e", "date": "d"}],
                    "diaries": [{"title": "t", "excerpt": "e", "date": "d", "image": "pict/a.jpg"}]
                },
                "reviews": [{"name": "Sarah", "rating": 5, "text": "fun", "date": "d"}],
                "review_stats": {"average_rating": 4.8, "active_players": "10K+", "games_played": "1M+"}
            }"#,
        )
        .unwrap();

        assert_eq!(data.news.updates.len(), 1);
        assert!(data.news.updates[0].image.is_none());
        assert_eq!(data.news.diaries[0].image.as_deref(), Some("pict/a.jpg"));
        assert_eq!(data.reviews[0].rating, 5);
        assert_eq!(data.review_stats.unwrap().average_rating, 4.8);
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let data: SiteData = serde_json::from_str("{}").unwrap();

        assert!(data.news.updates.is_empty());
        assert!(data.news.diaries.is_empty());
        assert!(data.reviews.is_empty());
        assert!(data.review_stats.is_none());
    }

    #[test]
    fn fallback_data_has_a_full_page_per_category() {
        let fallback = NewsData::fallback();

        assert_eq!(fallback.updates.len(), 2);
        assert_eq!(fallback.diaries.len(), 2);
        // The diary entries carry images so the image-augmented layout is exercised even
        // offline.
        assert!(fallback.diaries.iter().all(|item| item.image.is_some()));
    }

    #[test]
    fn category_attribute_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("unknown"), None);
    }
}
