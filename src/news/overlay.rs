use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::util;

/// Transient modal showing a news card's full detail. At most one overlay exists at a
/// time: opening while one is mounted closes the old one first.
pub struct DetailOverlay {
    document: Document,

    /// The currently mounted modal, if any.
    active: RefCell<Option<Element>>,
}

impl DetailOverlay {
    /// Create a new overlay controller with nothing mounted.
    pub fn new(document: &Document) -> Rc<Self> {
        Rc::new(Self {
            document: document.clone(),
            active: RefCell::new(None),
        })
    }

    /// Build a modal for the given card fields and mount it on the body. Dismissal is
    /// wired to the close control and to clicks on the dimmed backdrop outside the
    /// content box. No keyboard dismissal.
    pub fn open(self: &Rc<Self>, title: &str, excerpt: &str, date: &str) {
        self.close();

        let modal = match util::create_fragment_element(
            &self.document,
            "div",
            "news-modal",
            &modal_html(title, excerpt, date),
        ) {
            Ok(modal) => modal,
            Err(error) => {
                tracing::error!(?error, "failed to build detail overlay");
                return;
            }
        };

        if let Ok(Some(close)) = modal.query_selector(".close-modal") {
            let overlay = Rc::clone(self);
            util::listen(&close, "click", move |_| overlay.close());
        }

        {
            let overlay = Rc::clone(self);
            let backdrop = modal.clone();
            util::listen(&modal, "click", move |event| {
                let outside_content = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|target| target == backdrop);

                if outside_content {
                    overlay.close();
                }
            });
        }

        let Some(body) = self.document.body() else {
            return;
        };

        if let Err(error) = body.append_child(&modal) {
            tracing::error!(?error, "failed to mount detail overlay");
            return;
        }

        *self.active.borrow_mut() = Some(modal);
    }

    /// Remove the mounted modal, if any.
    pub fn close(&self) {
        if let Some(modal) = self.active.borrow_mut().take() {
            modal.remove();
        }
    }

    /// Whether a modal is currently mounted.
    pub fn is_open(&self) -> bool {
        self.active.borrow().is_some()
    }
}

fn modal_html(title: &str, excerpt: &str, date: &str) -> String {
    format!(
        r#"
        <div class="news-modal-content">
            <div class="news-modal-header">
                <h3>{title}</h3>
                <button class="close-modal">&times;</button>
            </div>
            <div class="news-modal-body">
                <p class="news-date">{date}</p>
                <p class="news-excerpt">{excerpt}</p>
                <div class="news-full-content">
                    <p>This is the full content for "{title}". In a real application, this would contain the complete article text, images, and additional details.</p>
                    <p>You can customize this section to show the actual full content from your data source.</p>
                </div>
            </div>
        </div>
        "#,
    )
}
