pub mod api;
pub mod item;
pub mod tracker;
pub mod users;

use api::ApiStore;
use users::UserStore;

/// All mutable application state. The server owns exactly one of these
/// behind a single mutex; each dispatch is one read-modify-write under it.
#[derive(Default)]
pub struct AppState {
    pub users: UserStore,
    pub api: ApiStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            users: UserStore::new(),
            api: ApiStore::new(),
        }
    }
}
