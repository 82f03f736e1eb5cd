//! Navigation-related state types.
//!
//! This module contains enums for the current view, the focused login form
//! control, and the header navigation entries.

use crate::form::FieldKind;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Login,
    Home,
}

/// Specifying the focusable controls of the login form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Email,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Email,
        }
    }

    pub fn previous(self) -> Focus {
        match self {
            Focus::Email => Focus::Submit,
            Focus::Password => Focus::Email,
            Focus::Submit => Focus::Password,
        }
    }

    /// The field behind this control, if it is an input.
    ///
    pub fn field(self) -> Option<FieldKind> {
        match self {
            Focus::Email => Some(FieldKind::Email),
            Focus::Password => Some(FieldKind::Password),
            Focus::Submit => None,
        }
    }
}

/// Header navigation entries, only available with an active session.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavItem {
    Users,
    Admin,
    Logout,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Users, NavItem::Admin, NavItem::Logout];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Users => "Users",
            NavItem::Admin => "Admin",
            NavItem::Logout => "Logout",
        }
    }

    pub fn next(self) -> NavItem {
        match self {
            NavItem::Users => NavItem::Admin,
            NavItem::Admin => NavItem::Logout,
            NavItem::Logout => NavItem::Users,
        }
    }

    pub fn previous(self) -> NavItem {
        match self {
            NavItem::Users => NavItem::Logout,
            NavItem::Admin => NavItem::Users,
            NavItem::Logout => NavItem::Admin,
        }
    }
}
