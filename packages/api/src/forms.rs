//! Request payloads and their client-side validation.
//!
//! Each form validates before anything is sent: a blank required field yields
//! [`ApiError::Validation`] and the gateway returns without touching the network.

use serde_json::{json, Value};
use store::{ApiFlavor, Book};

use crate::error::ApiError;
use crate::transport::FormPart;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            senha: senha.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if blank(&self.email) || blank(&self.senha) {
            return Err(ApiError::missing_fields());
        }
        Ok(())
    }

    pub(crate) fn to_json(&self) -> Value {
        json!({ "email": self.email.trim(), "senha": self.senha })
    }
}

/// Registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registration {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ApiError> {
        if blank(&self.nome) || blank(&self.email) || blank(&self.senha) {
            return Err(ApiError::missing_fields());
        }
        Ok(())
    }

    pub(crate) fn to_json(&self) -> Value {
        json!({
            "nome": self.nome.trim(),
            "email": self.email.trim(),
            "senha": self.senha,
        })
    }
}

/// Admin form for adding a book to the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewBook {
    pub titulo: String,
    pub autor: String,
    pub categoria: String,
    /// Optional; the backend substitutes a placeholder when blank.
    pub capa_url: String,
}

impl NewBook {
    pub fn validate(&self) -> Result<(), ApiError> {
        if blank(&self.titulo) || blank(&self.autor) || blank(&self.categoria) {
            return Err(ApiError::missing_fields());
        }
        Ok(())
    }

    pub(crate) fn to_json(&self) -> Value {
        json!({
            "titulo": self.titulo.trim(),
            "autor": self.autor.trim(),
            "categoria": self.categoria.trim(),
            "capaUrl": self.capa_url.trim(),
        })
    }
}

/// A selected file for [`Upload`].
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Book file upload form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Upload {
    pub titulo: String,
    pub autor: String,
    pub arquivo: Option<UploadFile>,
}

impl Upload {
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.arquivo {
            Some(file) if !file.name.is_empty() => Ok(()),
            _ => Err(ApiError::Validation("Selecione um arquivo!".to_string())),
        }
    }

    pub(crate) fn to_parts(&self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::Text {
                name: "titulo".to_string(),
                value: self.titulo.trim().to_string(),
            },
            FormPart::Text {
                name: "autor".to_string(),
                value: self.autor.trim().to_string(),
            },
        ];
        if let Some(file) = &self.arquivo {
            parts.push(FormPart::File {
                name: "arquivo".to_string(),
                file_name: file.name.clone(),
                bytes: file.bytes.clone(),
            });
        }
        parts
    }
}

/// Filters for the catalog listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogQuery {
    /// Free-text search over title and author.
    pub search: Option<String>,
    /// Category filter.
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            category: None,
        }
    }

    /// Query parameters for `flavor`.
    ///
    /// Both backends receive `q`; only the root backend filters by `categoria`.
    pub(crate) fn to_query(&self, flavor: ApiFlavor) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(text) = nonblank(&self.search) {
            query.push(("q".to_string(), text));
        }
        if flavor == ApiFlavor::Root {
            if let Some(category) = nonblank(&self.category) {
                query.push(("categoria".to_string(), category));
            }
        }
        query
    }

    /// Whether `book` matches the free-text search (case-insensitive, title
    /// or author). Used where the backend ignores `q`.
    pub fn matches(&self, book: &Book) -> bool {
        let Some(text) = nonblank(&self.search) else {
            return true;
        };
        let needle = text.to_lowercase();
        book.title.to_lowercase().contains(&needle)
            || book
                .author
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&needle))
    }
}

fn nonblank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials() {
        assert!(Credentials::new("a@b.com", "   ").validate().is_err());
        assert!(Credentials::new("", "x").validate().is_err());
        assert!(Credentials::new("a@b.com", "x").validate().is_ok());
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let mut form = Registration {
            nome: "A".to_string(),
            email: "a@b.com".to_string(),
            senha: String::new(),
        };
        assert_eq!(form.validate(), Err(ApiError::missing_fields()));
        form.senha = "secret".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_new_book_cover_is_optional() {
        let form = NewBook {
            titulo: "Duna".to_string(),
            autor: "Frank Herbert".to_string(),
            categoria: "Ficção".to_string(),
            capa_url: String::new(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.to_json()["capaUrl"], "");
    }

    #[test]
    fn test_upload_requires_file() {
        let mut form = Upload {
            titulo: "Livro".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ApiError::Validation("Selecione um arquivo!".to_string()))
        );
        form.arquivo = Some(UploadFile {
            name: "livro.pdf".to_string(),
            bytes: vec![1, 2, 3],
        });
        assert!(form.validate().is_ok());
        assert_eq!(form.to_parts().len(), 3);
    }

    #[test]
    fn test_query_per_flavor() {
        let query = CatalogQuery {
            search: Some(" hobbit ".to_string()),
            category: Some("Aventura".to_string()),
        };
        assert_eq!(
            query.to_query(ApiFlavor::Prefixed),
            vec![("q".to_string(), "hobbit".to_string())]
        );
        assert_eq!(
            query.to_query(ApiFlavor::Root),
            vec![
                ("q".to_string(), "hobbit".to_string()),
                ("categoria".to_string(), "Aventura".to_string()),
            ]
        );
        assert!(CatalogQuery::default().to_query(ApiFlavor::Root).is_empty());
    }

    #[test]
    fn test_matches_title_or_author() {
        let book: Book = serde_json::from_value(json!({
            "id": 1, "title": "O Hobbit", "author": "J.R.R. Tolkien"
        }))
        .unwrap();
        assert!(CatalogQuery::search("hobbit").matches(&book));
        assert!(CatalogQuery::search("TOLKIEN").matches(&book));
        assert!(!CatalogQuery::search("orwell").matches(&book));
        assert!(CatalogQuery::search("  ").matches(&book));
    }
}
