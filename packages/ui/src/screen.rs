//! Which screen is visible.
//!
//! Exactly one [`Screen`] is shown at a time. Transitions are driven by
//! [`Nav`] events and the session: without a user only the login and register
//! screens are reachable, and only admins reach [`Screen::Admin`]. There is no
//! history stack and nothing is encoded in the URL.

use dioxus::prelude::*;

use crate::client::AppSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Library,
    Admin,
}

/// UI events that move between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    ShowRegister,
    ShowLogin,
    LoggedIn,
    LoggedOut,
    OpenAdmin,
    BackToLibrary,
}

impl Screen {
    /// Screen shown at startup.
    pub fn initial(authenticated: bool) -> Self {
        if authenticated {
            Screen::Library
        } else {
            Screen::Login
        }
    }

    /// Screens reachable without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }

    pub fn next(self, nav: Nav, authenticated: bool, admin: bool) -> Self {
        if nav == Nav::LoggedOut {
            return Screen::Login;
        }

        if !authenticated {
            return match nav {
                Nav::ShowRegister => Screen::Register,
                Nav::ShowLogin => Screen::Login,
                _ if self == Screen::Register => Screen::Register,
                _ => Screen::Login,
            };
        }

        let here = if self.is_public() { Screen::Library } else { self };
        match nav {
            Nav::LoggedIn | Nav::BackToLibrary => Screen::Library,
            Nav::OpenAdmin if admin => Screen::Admin,
            _ => here,
        }
    }
}

/// Handle for reading and changing the current screen.
#[derive(Clone, Copy)]
pub struct Router {
    screen: Signal<Screen>,
    session: Signal<AppSession>,
}

impl Router {
    pub fn current(&self) -> Screen {
        *self.screen.read()
    }

    pub fn go(&mut self, nav: Nav) {
        let (authenticated, admin) = {
            let session = self.session.peek();
            (session.is_authenticated(), session.is_admin())
        };
        let from = *self.screen.peek();
        let to = from.next(nav, authenticated, admin);
        if from != to {
            tracing::debug!(?from, ?to, ?nav, "screen change");
            self.screen.set(to);
        }
    }
}

pub fn use_router() -> Router {
    Router {
        screen: use_context::<Signal<Screen>>(),
        session: use_context::<Signal<AppSession>>(),
    }
}
