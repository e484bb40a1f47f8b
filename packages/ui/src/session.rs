use dioxus::prelude::*;
use store::User;

use crate::client::AppSession;

/// Get the session signal provided by [`crate::ClientProvider`].
/// Updates when the user logs in or out.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Whether the header offers the admin area to `user`.
pub fn shows_admin_button(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.is_admin)
}
