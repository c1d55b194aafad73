use axum::{
    Router,
    routing::{get, post},
};
use storage::SharedStore;

use super::handlers::{list_fighters, select_fighters};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/select_fighters/:weight_class", post(select_fighters))
        .route("/fighters/:weight_class", get(list_fighters))
}
