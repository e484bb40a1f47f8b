mod login;
pub use login::LoginView;

mod register;
pub use register::{RegisterView, REGISTERED};

mod library;
pub use library::LibraryView;

mod admin;
pub use admin::{AdminTable, AdminView};
