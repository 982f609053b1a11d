// Page Renderer: content store + owner profile -> element tree -> HTML.
// Builders live in page.rs; html.rs owns escaping and serialization.

pub mod handlers;
pub mod html;
pub mod links;
pub mod markdown;
pub mod node;
pub mod page;
pub mod section;
pub mod style;

pub use page::{build_page, ContactView, PageContext};
