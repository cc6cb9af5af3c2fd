//! The JSON facade under `/api/items`. Independent of the HTML flow: global
//! item ids, integer user ids, ISO due-date strings, no sessions.

use crate::http::form;
use crate::http::request::HttpRequest;
use crate::http::response::Response;
use crate::store::api::ApiStore;
use crate::store::item::Category;
use chrono::Local;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewItem {
    user_id: i64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    due_date: String,
}

#[derive(Deserialize)]
struct PatchBody {
    #[serde(default)]
    status: String,
}

/// `GET /api/items?userId=<int>`
pub fn list(query: &str, store: &ApiStore) -> Response {
    let Some(raw) = form::field(query, "userId") else {
        return Response::json(400, &json!({"error": "userId required"}));
    };
    let Ok(user_id) = raw.parse::<i64>() else {
        return Response::json(400, &json!({"error": "invalid userId"}));
    };
    let now = Local::now();
    let items: Vec<Value> = store.list(user_id).map(|item| item.to_json(now)).collect();
    Response::json(200, &Value::Array(items))
}

/// `POST /api/items`
pub fn create(req: &HttpRequest, store: &mut ApiStore) -> Response {
    let new: NewItem = match serde_json::from_slice(&req.body) {
        Ok(n) => n,
        Err(_) => return Response::json(400, &json!({"error": "invalid JSON"})),
    };
    let item = store.create(
        new.user_id,
        new.title,
        new.description,
        Category::parse(&new.category),
        new.due_date,
    );
    Response::json(201, &item.to_json(Local::now()))
}

/// `PATCH /api/items/{id}`: `"Done"` deletes the item (204); any other
/// status resets it to pending and echoes it back.
pub fn patch(path: &str, req: &HttpRequest, store: &mut ApiStore) -> Response {
    let Some(id) = item_id(path) else {
        return Response::not_found();
    };
    let body: PatchBody = match serde_json::from_slice(&req.body) {
        Ok(b) => b,
        Err(_) => return Response::json(400, &json!({"error": "invalid JSON"})),
    };
    if body.status == "Done" {
        if store.mark_done(id) {
            Response::no_content()
        } else {
            Response::json(404, &json!({"error": "not found"}))
        }
    } else {
        match store.reset_pending(id) {
            Some(item) => Response::json(200, &item.to_json(Local::now())),
            None => Response::json(404, &json!({"error": "not found"})),
        }
    }
}

/// `DELETE /api/items/{id}`
pub fn delete(path: &str, store: &mut ApiStore) -> Response {
    let Some(id) = item_id(path) else {
        return Response::not_found();
    };
    if store.delete(id) {
        Response::no_content()
    } else {
        Response::json(404, &json!({"error": "not found"}))
    }
}

/// Digits-only id segment; anything else is a route miss.
fn item_id(path: &str) -> Option<i64> {
    let segment = path.strip_prefix("/api/items/")?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
