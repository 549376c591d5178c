use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node as WsNode, Window};

/// Returns the global [`Window`]. The crate only ever runs inside a browser page, so a
/// missing window is a broken host contract rather than a recoverable failure.
pub fn window() -> Window {
    web_sys::window().expect("no global `window` exists")
}

/// Returns the page [`Document`].
pub fn document() -> Document {
    window().document().expect("window to have a document")
}

/// Create a new element with the provided class and inner markup. Content rendered through
/// here always ends up inside a container this crate owns, never in a sibling's subtree.
pub fn create_fragment_element(
    document: &Document,
    kind: &str,
    class_name: &str,
    html: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(kind)?;
    element.set_class_name(class_name);
    element.set_inner_html(html);
    Ok(element)
}

/// Expresses an insertion point relative to a [`web_sys::Node`] in the DOM. Used when a
/// transient element (a notice, a modal) must land somewhere more specific than the end of
/// a container.
#[derive(Clone)]
pub struct InsertAt {
    /// The parent to insert the [`web_sys::Node`] within.
    parent: WsNode,

    /// An optional anchor. If provided, the node is inserted before the anchor, otherwise
    /// it is appended to the parent.
    anchor: Option<WsNode>,
}

impl InsertAt {
    /// Create an insertion point at the end of a parent.
    pub fn append<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
            anchor: None,
        }
    }

    /// Create an insertion point immediately after a mounted sibling. Returns [`None`] if
    /// the sibling is not currently mounted.
    pub fn after<N>(sibling: &N) -> Option<Self>
    where
        N: AsRef<WsNode>,
    {
        let sibling = sibling.as_ref();

        Some(Self {
            parent: sibling.parent_node()?,
            anchor: sibling.next_sibling(),
        })
    }

    /// Insert the provided [`web_sys::Node`] at this point.
    pub fn insert<N>(&self, node: &N) -> Result<(), JsValue>
    where
        N: AsRef<WsNode>,
    {
        self.parent
            .insert_before(node.as_ref(), self.anchor.as_ref())
            .map(|_| ())
    }
}
