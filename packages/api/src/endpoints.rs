//! Endpoint table: which HTTP method and path each [`Operation`] maps to in
//! each [`ApiFlavor`].
//!
//! | Operation | `Root` | `Prefixed` |
//! |-----------|--------|------------|
//! | Login | `POST /entrar` | `POST /api/login` |
//! | Register | `POST /cadastrar` | `POST /api/register` |
//! | Logout | - | `POST /api/logout` |
//! | ListCatalog | `GET /livros` | `GET /api/books` |
//! | ListMyLoans | `GET /meus-emprestimos` | - |
//! | Borrow | `POST /emprestar` | - |
//! | Return | `POST /devolver` | - |
//! | AdminLoans | `GET /admin/emprestimos` | - |
//! | AddBook | `POST /admin/adicionar-livro` | - |
//! | Upload | - | `POST /api/upload` |

use std::fmt;

use store::ApiFlavor;

use crate::transport::Method;

/// A named backend operation, independent of its URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    Logout,
    ListCatalog,
    ListMyLoans,
    Borrow,
    Return,
    AdminLoans,
    AddBook,
    Upload,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::Logout => "logout",
            Operation::ListCatalog => "list catalog",
            Operation::ListMyLoans => "list my loans",
            Operation::Borrow => "borrow",
            Operation::Return => "return",
            Operation::AdminLoans => "admin loans",
            Operation::AddBook => "add book",
            Operation::Upload => "upload",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

const fn get(path: &'static str) -> Option<Endpoint> {
    Some(Endpoint {
        method: Method::Get,
        path,
    })
}

const fn post(path: &'static str) -> Option<Endpoint> {
    Some(Endpoint {
        method: Method::Post,
        path,
    })
}

/// Resolve `operation` for `flavor`; `None` when that backend lacks it.
pub fn endpoint(flavor: ApiFlavor, operation: Operation) -> Option<Endpoint> {
    use Operation::*;
    match flavor {
        ApiFlavor::Root => match operation {
            Login => post("/entrar"),
            Register => post("/cadastrar"),
            ListCatalog => get("/livros"),
            ListMyLoans => get("/meus-emprestimos"),
            Borrow => post("/emprestar"),
            Return => post("/devolver"),
            AdminLoans => get("/admin/emprestimos"),
            AddBook => post("/admin/adicionar-livro"),
            Logout | Upload => None,
        },
        ApiFlavor::Prefixed => match operation {
            Login => post("/api/login"),
            Register => post("/api/register"),
            Logout => post("/api/logout"),
            ListCatalog => get("/api/books"),
            Upload => post("/api/upload"),
            ListMyLoans | Borrow | Return | AdminLoans | AddBook => None,
        },
    }
}

/// Path under which uploaded files are served.
pub const UPLOADS_PATH: &str = "/uploads/";
