pub mod api;
pub mod pages;

use crate::http::request::HttpRequest;
use crate::http::response::Response;
use crate::store::AppState;

/// Route one parsed request. The HTML facade and the JSON facade live side
/// by side; anything unmatched is the empty-body 404.
pub fn dispatch(req: &HttpRequest, state: &mut AppState) -> Response {
    let (path, query) = match req.path.split_once('?') {
        Some((p, q)) => (p, q),
        None => (req.path.as_str(), ""),
    };

    match (req.method.as_str(), path) {
        ("GET", "/") => pages::index(req, &state.users),
        ("POST", "/login") => pages::login(req, &mut state.users),
        ("POST", "/logout") => pages::logout(req, &mut state.users),
        ("POST", "/add") => pages::add(req, &mut state.users),
        ("POST", "/done") => pages::done(req, &mut state.users),
        ("GET", "/api/items") => api::list(query, &state.api),
        ("POST", "/api/items") => api::create(req, &mut state.api),
        ("PATCH", p) if p.starts_with("/api/items/") => api::patch(p, req, &mut state.api),
        ("DELETE", p) if p.starts_with("/api/items/") => api::delete(p, &mut state.api),
        _ => Response::not_found(),
    }
}
