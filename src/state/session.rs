//! Signed-in user display state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;

/// Label shown when no usable identity record is cached.
pub const FALLBACK_USER_LABEL: &str = "Unidentified user";

/// Header identity shown next to the logout button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// First name of the cached user, if one was found.
    pub first_name: Option<String>,
}

impl SessionState {
    pub fn from_record(record: Option<&UserRecord>) -> Self {
        let first_name = record
            .and_then(|r| r.name.as_deref())
            .and_then(|name| name.split_whitespace().next())
            .map(str::to_owned);
        Self { first_name }
    }

    /// Greeting rendered in the header.
    pub fn label(&self) -> String {
        self.first_name
            .as_deref()
            .map_or_else(|| FALLBACK_USER_LABEL.to_owned(), |first| format!("Hello, {first}"))
    }
}
