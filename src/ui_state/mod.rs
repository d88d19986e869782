//! UI state that persists between views.
//!
//! - [`KeyValueStore`]: the injected storage capability
//! - [`MemoryStore`]: an in-memory store
//! - [`SidebarState`]: which sidebar submenu is open

mod sidebar;
mod store;

pub use sidebar::{SidebarState, OPEN_SUBMENU_KEY};
pub use store::{KeyValueStore, MemoryStore};
