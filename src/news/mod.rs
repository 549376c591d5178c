//! Paginated renderer for the news grids. One `data.json` fetch per page load; the
//! document is read-only afterwards and pagination only ever moves forward.

mod card;
mod cursor;
mod overlay;

pub use overlay::DetailOverlay;

use std::{cell::RefCell, ops::Range, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::{
    data::{Category, NewsData, NewsItem, SiteData, DATA_URL},
    fetch, util,
};
use cursor::{page_slice, Cursor};

/// Items rendered per page per category.
pub const PAGE_SIZE: usize = 2;

/// Renders and paginates the news grids, and owns the shared [`DetailOverlay`] the
/// cards open into.
pub struct NewsLoader {
    document: Document,
    data: NewsData,
    cursor: RefCell<Cursor>,
    overlay: Rc<DetailOverlay>,
}

impl NewsLoader {
    /// Fetch the news document and bring up the grids. A missing or malformed document
    /// degrades to the hard-coded fallback data set.
    pub async fn start(document: &Document) {
        let data = match fetch::fetch_json::<SiteData>(DATA_URL).await {
            Ok(data) => data.news,
            Err(error) => {
                tracing::warn!(%error, "news document unavailable, using fallback data");
                NewsData::fallback()
            }
        };

        let loader = Self::with_data(document, data);
        loader.render_initial();
        loader.bind_controls();
    }

    /// Build a loader over an already loaded document.
    pub fn with_data(document: &Document, data: NewsData) -> Rc<Self> {
        Rc::new(Self {
            document: document.clone(),
            data,
            cursor: RefCell::new(Cursor::new(PAGE_SIZE)),
            overlay: DetailOverlay::new(document),
        })
    }

    /// Render the first page of every category, replacing whatever the grids held. A
    /// category with no items at all gets a single unavailable-content card.
    pub fn render_initial(&self) {
        for category in Category::ALL {
            let Some(grid) = self.grid(category) else {
                continue;
            };

            grid.set_inner_html("");

            if self.data.category(category).is_empty() {
                grid.set_inner_html(&card::error_card_html(
                    "Content Unavailable",
                    "We're working to restore this content. Please check back later.",
                ));
                continue;
            }

            let range = self.cursor.borrow().initial_range();
            self.append_cards(&grid, category, range);
        }
    }

    /// Append the next page for a category, advancing the cursor. An empty next slice
    /// permanently disables the category's control instead. Synchronous over the
    /// preloaded document, so overlapping invocations cannot interleave.
    pub fn load_more(&self, category: Category) {
        let items = self.data.category(category);
        let range = self.cursor.borrow().next_range(category);
        let slice = page_slice(items, range.clone());

        if slice.is_empty() {
            self.disable_control(category);
            return;
        }

        let Some(grid) = self.grid(category) else {
            tracing::error!(category = category.as_str(), "news grid missing");
            return;
        };

        self.append_cards(&grid, category, range);
        self.cursor.borrow_mut().advance(category);

        // Disable as soon as the final page is on screen rather than waiting for an
        // empty click.
        if self.cursor.borrow().shown(category) >= items.len() {
            self.disable_control(category);
        }
    }

    /// Bind every "load more" control to the category named by its `data-category`
    /// attribute.
    pub fn bind_controls(self: &Rc<Self>) {
        let Ok(buttons) = self.document.query_selector_all(".load-more-btn") else {
            return;
        };

        for index in 0..buttons.length() {
            let Some(button) = buttons.item(index) else {
                continue;
            };

            let Some(category) = button
                .dyn_ref::<HtmlElement>()
                .and_then(|button| button.dataset().get("category"))
                .and_then(|value| Category::parse(&value))
            else {
                continue;
            };

            let loader = Rc::clone(self);
            util::listen(&button, "click", move |_| loader.load_more(category));
        }
    }

    fn append_cards(&self, grid: &Element, category: Category, range: Range<usize>) {
        let items = page_slice(self.data.category(category), range.clone());

        for (offset, item) in items.iter().enumerate() {
            // Layout depends on the absolute position within the category, not the
            // position within this page.
            let index = range.start + offset;

            let built = util::create_fragment_element(
                &self.document,
                "div",
                card::card_class(item, index),
                &card::card_html(item, index),
            );

            match built {
                Ok(element) => {
                    self.bind_read_more(&element, item);

                    if let Err(error) = grid.append_child(&element) {
                        tracing::error!(?error, "failed to append news card");
                    }
                }
                Err(error) => tracing::error!(?error, "failed to build news card"),
            }
        }
    }

    /// Wire the card's "Read More" control to the shared overlay. The callback is
    /// attached at render time carrying the card's own fields; there is no
    /// document-wide delegation.
    fn bind_read_more(&self, element: &Element, item: &NewsItem) {
        let Ok(Some(button)) = element.query_selector(".read-more-btn") else {
            return;
        };

        let overlay = Rc::clone(&self.overlay);
        let title = item.title.clone();
        let excerpt = item.excerpt.clone();
        let date = item.date.clone();

        util::listen(&button, "click", move |event| {
            event.prevent_default();
            overlay.open(&title, &excerpt, &date);
        });
    }

    fn grid(&self, category: Category) -> Option<Element> {
        self.document
            .get_element_by_id(&format!("{}-grid", category.as_str()))
    }

    /// Permanently disable a category's "load more" control and label it as exhausted.
    /// Only a full page reload brings it back.
    fn disable_control(&self, category: Category) {
        let selector = format!(r#".load-more-btn[data-category="{}"]"#, category.as_str());

        let Ok(Some(button)) = self.document.query_selector(&selector) else {
            return;
        };

        button.set_text_content(Some("No More Items"));

        if let Ok(button) = button.dyn_into::<HtmlButtonElement>() {
            button.set_disabled(true);
            let _ = button.style().set_property("opacity", "0.6");
        }
    }
}
