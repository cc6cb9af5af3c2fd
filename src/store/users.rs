use crate::store::tracker::TaskList;
use rand::Rng;
use std::collections::HashMap;

/// Users and their sessions. A user is created lazily on first login; a
/// session lives until explicit logout or process exit. Several sessions may
/// point at the same username.
#[derive(Default)]
pub struct UserStore {
    users: HashMap<String, TaskList>,
    sessions: HashMap<String, String>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for the given username, creating the user's task list
    /// if this is their first login. An empty username is rejected.
    pub fn login(&mut self, username: &str) -> Option<String> {
        if username.is_empty() {
            return None;
        }
        self.users
            .entry(username.to_string())
            .or_insert_with(TaskList::new);

        let token = new_token();
        self.sessions.insert(token.clone(), username.to_string());
        Some(token)
    }

    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.sessions.get(token).map(String::as_str)
    }

    /// Removing an unknown token is a no-op.
    pub fn logout(&mut self, token: &str) {
        self.sessions.remove(token);
    }

    pub fn tasks(&self, username: &str) -> Option<&TaskList> {
        self.users.get(username)
    }

    pub fn tasks_mut(&mut self, username: &str) -> Option<&mut TaskList> {
        self.users.get_mut(username)
    }

    #[cfg(test)]
    fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// 32 lowercase hex chars from the thread RNG. Not cryptographic; collision
/// risk is accepted for this trust-free demo.
fn new_token() -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut rng = rand::rng();
    (0..32)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_logins_yield_distinct_tokens_for_the_same_user() {
        let mut store = UserStore::new();
        let first = store.login("alice").unwrap();
        let second = store.login("alice").unwrap();
        assert_ne!(first, second);
        assert_eq!(store.resolve(&first), Some("alice"));
        assert_eq!(store.resolve(&second), Some("alice"));
    }

    #[test]
    fn empty_username_is_rejected() {
        let mut store = UserStore::new();
        assert!(store.login("").is_none());
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn tokens_are_32_lowercase_hex_chars() {
        let token = new_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn logout_of_unknown_token_is_a_noop() {
        let mut store = UserStore::new();
        store.login("alice").unwrap();
        store.logout("not-a-token");
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn logout_destroys_the_session_but_not_the_user() {
        let mut store = UserStore::new();
        let token = store.login("alice").unwrap();
        store.logout(&token);
        assert_eq!(store.resolve(&token), None);
        assert!(store.tasks("alice").is_some());
    }

    #[test]
    fn unknown_token_resolves_to_no_user() {
        let store = UserStore::new();
        assert_eq!(store.resolve("deadbeef"), None);
    }
}
