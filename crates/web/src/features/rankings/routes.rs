use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::{get_division_ranking, get_ranking_table};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/rankings", get(get_ranking_table))
        .route("/rankings/:division", get(get_division_ranking))
}
