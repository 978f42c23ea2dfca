pub mod context;
pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStore;

pub use context::{SessionContext, SessionStore};
pub use models::Session;
