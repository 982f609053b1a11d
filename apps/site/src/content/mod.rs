// Content Store: the owner's portfolio content, held in memory.
// Seeded once at startup; mutated only through the debug-mode content API.

pub mod handlers;
pub mod seed;
pub mod store;

pub use store::{ContentSnapshot, ContentStore};
