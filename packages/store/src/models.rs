//! # Domain models for users, books and loans
//!
//! Defines the records the client receives from the lending backend. They are
//! `Serialize + Deserialize` so they can be decoded from API responses and, for
//! [`User`], written to and read back from browser storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated account. Held by [`crate::Session`]; serialized with the backend's field names (`nome`, `ehAdmin`) so the persisted record matches what the server sends. |
//! | [`Book`] | One catalog entry. Accepts both backend shapes (`title` or `titulo`, `author` or `autor`) and tolerates missing optional columns. |
//! | [`Loan`] | One row of the loan history shown to administrators. |
//! | [`LoanStatus`] | Open/closed state derived from [`Loan::return_date`]. |
//!
//! Books and loans are always snapshots: the client never patches them locally,
//! it re-fetches after every mutation.

use serde::{Deserialize, Serialize};

/// Cover shown when a book has no `cover_url`.
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/128x196?text=Capa";

/// An authenticated account as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Only the root-relative backend reports this; absent means not an admin.
    #[serde(rename = "ehAdmin", default)]
    pub is_admin: bool,
}

/// A lendable book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "autor")]
    pub author: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// `0` when lent out, `1` otherwise. Missing means available.
    #[serde(default, rename = "is_available")]
    pub availability: Option<u8>,
    #[serde(default, rename = "nome_quem_emprestou")]
    pub borrower: Option<String>,
    #[serde(default)]
    pub loan_date: Option<String>,
    /// Stored file name for uploaded books.
    #[serde(default)]
    pub filename: Option<String>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.availability != Some(0)
    }

    /// Cover URL, or `placeholder` when the book has none.
    pub fn cover<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.cover_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => placeholder,
        }
    }

    /// Name of whoever currently holds the book, when the backend reports it.
    pub fn borrower_name(&self) -> Option<&str> {
        self.borrower.as_deref().filter(|name| !name.trim().is_empty())
    }

    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// When the book was lent, for books in the user's own list.
    pub fn lent_since(&self) -> Option<&str> {
        self.loan_date.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn author_or_unknown(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or("Desconhecido")
    }
}

/// One entry of the loan history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub title: String,
    pub nome_usuario: String,
    pub loan_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
}

/// Whether a loan has been closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanStatus {
    Borrowed,
    Returned,
}

impl LoanStatus {
    pub fn label(self) -> &'static str {
        match self {
            LoanStatus::Borrowed => "Emprestado",
            LoanStatus::Returned => "Devolvido",
        }
    }

    /// Class name the stylesheet colors (green for returned, red for open).
    pub fn class(self) -> &'static str {
        match self {
            LoanStatus::Borrowed => "status-borrowed",
            LoanStatus::Returned => "status-returned",
        }
    }
}

impl Loan {
    pub fn status(&self) -> LoanStatus {
        match self.return_date.as_deref() {
            Some(date) if !date.is_empty() => LoanStatus::Returned,
            _ => LoanStatus::Borrowed,
        }
    }

    /// Return date for display, `-` while the loan is open.
    pub fn return_date_or_dash(&self) -> &str {
        match self.return_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => "-",
        }
    }
}
