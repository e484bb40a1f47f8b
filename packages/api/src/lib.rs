//! # API crate: the client's gateway to the lending backend
//!
//! Every request the UI makes goes through [`Gateway`]. The crate hides which
//! backend convention is deployed: operations are named ([`Operation`]) and
//! resolved to a method and path by the configured [`store::ApiFlavor`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | [`Gateway`]: the never-failing [`Gateway::request`] plus typed operations |
//! | [`endpoints`] | Operation → endpoint table for both backend flavors |
//! | [`forms`] | Request payloads and client-side validation |
//! | [`transport`] | [`Transport`] trait and the `reqwest`-backed [`HttpTransport`] |
//! | [`error`] | [`ApiError`], the user-facing failure taxonomy |
//!
//! [`StubTransport`] is a scripted transport for tests in this and dependent crates.

pub mod endpoints;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod transport;

mod stub;

pub use endpoints::Operation;
pub use error::ApiError;
pub use forms::{CatalogQuery, Credentials, NewBook, Registration, Upload, UploadFile};
pub use gateway::{Gateway, Payload, Reply};
pub use stub::StubTransport;
pub use transport::{HttpTransport, Transport};

pub use store::{ApiFlavor, Book, Loan, User};
