use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::list_fights;

pub fn routes() -> Router<SharedStore> {
    Router::new().route("/fights", get(list_fights))
}
