pub mod cache;
pub mod config;
pub mod session;
pub mod time;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use cache::{Mutation, QueryCache, QueryFamily, QueryKey};
pub use config::FinancioConfig;
pub use session::{platform_store, SessionStore, StoredSession};
