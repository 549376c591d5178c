mod dom;
mod events;

pub use dom::*;
pub use events::*;
