pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiFlavor, LibraryConfig};
pub use models::{Book, Loan, LoanStatus, User, PLACEHOLDER_COVER};
pub use session::{KeyValueStore, Session, StorageError};
