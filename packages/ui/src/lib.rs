//! Screens, components and client state of the Bookflix web client.
//!
//! [`ClientProvider`] owns the state every view reads: configuration, the
//! backend gateway, the session, the visible [`Screen`] and the toasts. The
//! view-model modules ([`screen`], [`catalog`], [`loans`], [`toast`]) hold the
//! display rules as plain functions so they can be tested without a DOM.

mod client;
pub use client::{
    page_origin, use_config, use_gateway, AppGateway, AppSession, AppStore, ClientProvider,
};

mod session;
pub use session::{shows_admin_button, use_session};

pub mod screen;
pub use screen::{use_router, Nav, Router, Screen};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastLevel, ToastStack, Toasts};

pub mod catalog;
pub use catalog::{load_catalog, CardAction, CardState, MutationOutcome, Row, RowKind};

pub mod loans;
pub use loans::LoanRow;

mod navbar;
pub use navbar::Navbar;

mod book_card;
pub use book_card::{BookCard, BookRow};

mod add_book_form;
pub use add_book_form::AddBookForm;

mod upload_form;
pub use upload_form::UploadForm;

pub mod views;

#[cfg(test)]
mod scenarios;
