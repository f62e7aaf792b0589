//! Route handlers organized by resource, plus the endpoint table
//!
//! `endpoints()` is the single source of truth for what the server answers.
//! `build_router` folds it into an axum `Router`.

use std::sync::Arc;

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{on, MethodFilter, MethodRouter};
use serde::Serialize;

use crate::http::server::AppState;

pub mod accounts;
pub mod categories;
pub mod root;
pub mod todo_lists;

/// `{message}` acknowledgement for update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One (method, path) pair and the handler serving it
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub summary: &'static str,
    pub(crate) handler: MethodRouter<Arc<AppState>>,
}

impl Endpoint {
    /// The handler only answers `method`; other methods on the path get 405.
    fn new<H, T>(method: Method, path: &'static str, summary: &'static str, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        let filter = MethodFilter::try_from(method.clone())
            .expect("endpoint table only uses routable methods");

        Self {
            method,
            path,
            summary,
            handler: on(filter, handler),
        }
    }
}

/// The full endpoint table, in registration order.
pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(Method::GET, "/", "greeting", root::hello),
        // Todo app
        Endpoint::new(
            Method::GET,
            "/categories",
            "list categories",
            categories::list_categories,
        ),
        Endpoint::new(
            Method::GET,
            "/category/{id}",
            "get a category",
            categories::get_category,
        ),
        Endpoint::new(
            Method::GET,
            "/todo_lists",
            "list todo lists",
            todo_lists::list_todo_lists,
        ),
        Endpoint::new(
            Method::GET,
            "/todo_list/{id}",
            "get a todo list",
            todo_lists::get_todo_list,
        ),
        Endpoint::new(
            Method::POST,
            "/todo_list",
            "create a todo list",
            todo_lists::create_todo_list,
        ),
        Endpoint::new(
            Method::PATCH,
            "/todo_list",
            "overwrite a todo list",
            todo_lists::update_todo_list,
        ),
        // Marketplace
        Endpoint::new(Method::GET, "/buyers", "list buyers", accounts::list_buyers),
        Endpoint::new(Method::POST, "/buyers", "create a buyer", accounts::create_buyer),
        Endpoint::new(
            Method::DELETE,
            "/buyers/{id}",
            "delete a buyer",
            accounts::delete_buyer,
        ),
        Endpoint::new(Method::GET, "/sellers", "list sellers", accounts::list_sellers),
        Endpoint::new(
            Method::POST,
            "/sellers",
            "create a seller",
            accounts::create_seller,
        ),
        Endpoint::new(
            Method::DELETE,
            "/sellers/{id}",
            "delete a seller",
            accounts::delete_seller,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_route_once() {
        let table: Vec<_> = endpoints()
            .into_iter()
            .map(|e| format!("{} {}", e.method, e.path))
            .collect();

        assert_eq!(
            table,
            [
                "GET /",
                "GET /categories",
                "GET /category/{id}",
                "GET /todo_lists",
                "GET /todo_list/{id}",
                "POST /todo_list",
                "PATCH /todo_list",
                "GET /buyers",
                "POST /buyers",
                "DELETE /buyers/{id}",
                "GET /sellers",
                "POST /sellers",
                "DELETE /sellers/{id}",
            ]
        );
    }

    #[test]
    fn every_method_is_routable() {
        for endpoint in endpoints() {
            assert!(MethodFilter::try_from(endpoint.method.clone()).is_ok());
        }
    }

    #[test]
    fn no_category_or_todo_list_deletes() {
        assert!(!endpoints().iter().any(|e| e.method == Method::DELETE
            && (e.path.starts_with("/category") || e.path.starts_with("/todo_list"))));
    }
}
