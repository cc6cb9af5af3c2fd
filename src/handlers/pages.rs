//! The HTML-form facade: login/logout, the task list page, add and
//! mark-done. Mutations without a resolvable session silently no-op and
//! redirect; there is no 401/403 on this surface.

use crate::http::cookie::cookie;
use crate::http::form;
use crate::http::request::HttpRequest;
use crate::http::response::Response;
use crate::pages;
use crate::store::item::{self, Category};
use crate::store::users::UserStore;
use chrono::Local;
use tracing::debug;

const SESSION_COOKIE: &str = "session";

fn current_user(req: &HttpRequest, users: &UserStore) -> Option<String> {
    let token = cookie(&req.headers, SESSION_COOKIE)?;
    users.resolve(&token).map(str::to_string)
}

/// `GET /`: the login page for anonymous visitors, the task list otherwise.
pub fn index(req: &HttpRequest, users: &UserStore) -> Response {
    match current_user(req, users) {
        Some(username) => {
            let now = Local::now();
            let rows: Vec<_> = users
                .tasks(&username)
                .map(|list| {
                    list.active()
                        .map(|task| (task.clone(), task.urgency(now)))
                        .collect()
                })
                .unwrap_or_default();
            Response::html(pages::tasks_page(&username, &rows))
        }
        None => Response::html(pages::login_page()),
    }
}

/// `POST /login`: a non-empty `username` gets a fresh session cookie;
/// an empty one redirects with no cookie at all.
pub fn login(req: &HttpRequest, users: &mut UserStore) -> Response {
    let body = String::from_utf8_lossy(&req.body);
    let username = form::field(&body, "username").unwrap_or_default();
    match users.login(&username) {
        Some(token) => {
            debug!(username = %username, "login");
            Response::see_other().with_cookie(&format!("session={token}; Path=/; HttpOnly"))
        }
        None => Response::see_other(),
    }
}

/// `POST /logout`: drop the session if one is presented, clear the cookie
/// either way.
pub fn logout(req: &HttpRequest, users: &mut UserStore) -> Response {
    if let Some(token) = cookie(&req.headers, SESSION_COOKIE) {
        users.logout(&token);
    }
    Response::see_other().with_cookie("session=; Path=/; HttpOnly; Max-Age=0")
}

/// `POST /add`: append a pending task. A malformed due date silently
/// becomes "now" (due immediately) rather than rejecting the request.
pub fn add(req: &HttpRequest, users: &mut UserStore) -> Response {
    if let Some(username) = current_user(req, users)
        && let Some(list) = users.tasks_mut(&username)
    {
        let body = String::from_utf8_lossy(&req.body).into_owned();
        let title = form::field(&body, "title").unwrap_or_default();
        let description = form::field(&body, "description").unwrap_or_default();
        let category = Category::parse(&form::field(&body, "category").unwrap_or_default());
        let due = form::field(&body, "dueDate")
            .and_then(|d| item::parse_due_date(&d))
            .unwrap_or_else(Local::now);
        list.add(title, description, category, due);
    }
    Response::see_other()
}

/// `POST /done`: remove the matching task. Unknown or unparseable ids
/// change nothing; the client is redirected regardless.
pub fn done(req: &HttpRequest, users: &mut UserStore) -> Response {
    if let Some(username) = current_user(req, users)
        && let Some(list) = users.tasks_mut(&username)
    {
        let body = String::from_utf8_lossy(&req.body);
        if let Some(id) = form::field(&body, "id").and_then(|s| s.parse().ok())
            && !list.mark_done(id)
        {
            debug!(id, "mark-done on unknown id");
        }
    }
    Response::see_other()
}
