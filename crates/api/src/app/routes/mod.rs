use axum::Router;
use axum::routing::{delete, get, patch, post};

pub mod auth;
pub mod books;
pub mod cart;
pub mod categories;
pub mod system;

/// Routes reachable without a session token.
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/jwt", post(auth::issue_token))
        .route("/logout", post(auth::logout))
        .route("/categories", get(categories::list_categories))
        .route("/category/:name", get(books::books_by_category))
}

/// Routes gated by the token middleware.
///
/// DELETE and PATCH on `/cart/:key` read the parameter differently (entry
/// id vs. book name), so they share one registered path and each handler
/// interprets the segment itself.
pub fn protected_router() -> Router {
    Router::new()
        .route("/addbooks", post(books::add_book))
        .route("/allbooks", get(books::all_books))
        .route("/book/:id", get(books::get_book).put(books::replace_book))
        .route("/borrow/:id", patch(books::borrow_book))
        .route("/cart", post(cart::add_entry).get(cart::list_entries))
        .route(
            "/cart/:key",
            delete(cart::remove_entry).patch(cart::set_quantity),
        )
}
