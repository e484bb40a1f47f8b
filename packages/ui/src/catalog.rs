//! # Catalog view-model
//!
//! Turns backend lists into the rows and cards the library screen renders.
//! Nothing here touches the DOM, so every display rule is a plain function:
//!
//! | Item | Rule |
//! |------|------|
//! | [`Row::build`] | an empty personal row is dropped; an empty catalog row is kept and shows an empty-state |
//! | [`CardState::of`] | personal rows hold the user's books; catalog books are available or lent |
//! | [`CardAction::for_book`] | lent books in the catalog get a badge, never a borrow button |
//! | [`load_catalog`] | personal row first, then the catalog; any failure fails the whole load |
//! | [`MutationOutcome::of`] | a finished borrow/return reloads on success, otherwise only notifies |
//!
//! Cards never change state locally. Every borrow or return is followed by a
//! fresh [`load_catalog`].

use api::{ApiError, CatalogQuery, Gateway, Operation, Transport};
use store::{ApiFlavor, Book, User};

pub const MY_BOOKS_TITLE: &str = "Meus Livros Alugados";
pub const CATALOG_TITLE: &str = "Catálogo Disponível";
pub const EMPTY_ROW: &str = "Nenhum livro encontrado.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Books lent to the current user.
    Personal,
    /// The whole catalog.
    Catalog,
}

/// A titled strip of book cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub title: String,
    pub kind: RowKind,
    pub books: Vec<Book>,
}

impl Row {
    /// `None` for a personal row without books.
    pub fn build(title: &str, kind: RowKind, books: Vec<Book>) -> Option<Row> {
        if books.is_empty() && kind == RowKind::Personal {
            return None;
        }
        Some(Row {
            title: title.to_string(),
            kind,
            books,
        })
    }
}

/// Where a card stands, as far as the last fetch knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Available,
    /// Lent out, seen from the general catalog (possibly to the current user).
    Lent,
    /// In the current user's personal row.
    Mine,
}

impl CardState {
    pub fn of(book: &Book, kind: RowKind) -> Self {
        match kind {
            RowKind::Personal => CardState::Mine,
            RowKind::Catalog if book.is_available() => CardState::Available,
            RowKind::Catalog => CardState::Lent,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardState::Available => "cartao-poster",
            CardState::Lent => "cartao-poster indisponivel",
            CardState::Mine => "cartao-poster meu",
        }
    }
}

/// The affordance rendered under a cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Borrow,
    Return,
    /// Informational badge naming the borrower when known.
    Unavailable { borrower: Option<String> },
}

impl CardAction {
    pub fn for_book(book: &Book, kind: RowKind) -> Self {
        match CardState::of(book, kind) {
            CardState::Mine => CardAction::Return,
            CardState::Available => CardAction::Borrow,
            CardState::Lent => CardAction::Unavailable {
                borrower: book.borrower_name().map(str::to_string),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            CardAction::Borrow => "Pegar Emprestado".to_string(),
            CardAction::Return => "Devolver".to_string(),
            CardAction::Unavailable {
                borrower: Some(name),
            } => format!("Com {name}"),
            CardAction::Unavailable { borrower: None } => "Indisponível".to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CardAction::Borrow => "botao-acao btn-pegar",
            CardAction::Return => "botao-acao btn-devolver",
            CardAction::Unavailable { .. } => "badge-indisponivel",
        }
    }

    pub fn is_button(&self) -> bool {
        !matches!(self, CardAction::Unavailable { .. })
    }
}

/// What a card does once its borrow or return call has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Refetch every row.
    Reload,
    /// Leave the rows alone and show the message.
    Notify(String),
}

impl MutationOutcome {
    pub fn of(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => MutationOutcome::Reload,
            Err(e) => MutationOutcome::Notify(e.to_string()),
        }
    }
}

/// Fetch every row of the library screen for `user`.
///
/// Backends without a personal-loans endpoint only get the catalog row. When
/// the backend ignores the free-text search the catalog is filtered here.
pub async fn load_catalog<T: Transport>(
    gateway: &Gateway<T>,
    user: &User,
    query: &CatalogQuery,
) -> Result<Vec<Row>, ApiError> {
    let mut rows = Vec::new();

    if gateway.supports(Operation::ListMyLoans) {
        let mine = gateway.list_my_loans(user.id).await?;
        rows.extend(Row::build(MY_BOOKS_TITLE, RowKind::Personal, mine));
    }

    let mut books = gateway.list_catalog(query).await?;
    if gateway.flavor() == ApiFlavor::Root {
        books.retain(|book| query.matches(book));
    }
    rows.extend(Row::build(CATALOG_TITLE, RowKind::Catalog, books));

    tracing::debug!(rows = rows.len(), "catalog loaded");
    Ok(rows)
}
