// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! User route table
//!
//! A static, ordered list of `(pattern, handler, name)` records. The dispatch
//! layer in [`crate::api`] mounts every entry under the configured prefix;
//! other parts of the system use the symbolic names for reverse lookup.

use std::fmt;

/// How a handler is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// Local class-based view
    Class,
    /// Local function view
    Function,
    /// Capability imported from an external library
    External,
}

/// Opaque identifier of a handler bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerId {
    UserRegister,
    UserLogin,
    TokenRefresh,
    UserProfile,
    UserUpdate,
}

impl HandlerId {
    pub const fn kind(self) -> HandlerKind {
        match self {
            HandlerId::UserLogin => HandlerKind::Function,
            HandlerId::TokenRefresh => HandlerKind::External,
            HandlerId::UserRegister | HandlerId::UserProfile | HandlerId::UserUpdate => {
                HandlerKind::Class
            }
        }
    }

    pub const fn is_external(self) -> bool {
        matches!(self.kind(), HandlerKind::External)
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandlerId::UserRegister => "user_register",
            HandlerId::UserLogin => "user_login",
            HandlerId::TokenRefresh => "token_refresh",
            HandlerId::UserProfile => "user_profile",
            HandlerId::UserUpdate => "user_update",
        };
        f.write_str(name)
    }
}

/// A single route binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path suffix without a leading slash, e.g. `token/refresh/`
    pub pattern: &'static str,
    pub handler: HandlerId,
    /// Symbolic name used for reverse lookup
    pub name: &'static str,
}

impl RouteEntry {
    pub const fn new(pattern: &'static str, handler: HandlerId, name: &'static str) -> Self {
        RouteEntry {
            pattern,
            handler,
            name,
        }
    }

    /// Full path of this entry when mounted under `prefix`.
    ///
    /// `prefix` is expected in normalised form (see
    /// [`crate::config::normalize_prefix`]); an empty prefix mounts at the root.
    pub fn mounted_path(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.pattern)
    }
}

/// Ordered, read-only collection of route entries.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

static USER_ROUTE_ENTRIES: [RouteEntry; 5] = [
    RouteEntry::new("register/", HandlerId::UserRegister, "user-register"),
    RouteEntry::new("login/", HandlerId::UserLogin, "user-login"),
    RouteEntry::new("token/refresh/", HandlerId::TokenRefresh, "token-refresh"),
    RouteEntry::new("profile/", HandlerId::UserProfile, "user-profile"),
    RouteEntry::new("update/", HandlerId::UserUpdate, "user-update"),
];

/// The user route table, initialised once and never mutated.
pub static USER_ROUTES: RouteTable = RouteTable::new(&USER_ROUTE_ENTRIES);

impl RouteTable {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        RouteTable { entries }
    }

    /// Entries in registration order
    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path suffix registered under `name`
    pub fn reverse(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.pattern)
    }

    /// Full mounted path registered under `name`
    pub fn reverse_with_prefix(&self, prefix: &str, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.mounted_path(prefix))
    }

    /// First entry, in registration order, whose suffix equals `path`.
    /// A leading slash on `path` is ignored.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteEntry> {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.entries.iter().find(|entry| entry.pattern == path)
    }

    /// Entry bound to `handler`
    pub fn find(&self, handler: HandlerId) -> Option<&'static RouteEntry> {
        self.entries.iter().find(|entry| entry.handler == handler)
    }
}
