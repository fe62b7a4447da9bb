//! Room Rates API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/room-rates | GET | List documents |
//! | /api/room-rates | POST | Create a document |
//! | /api/room-rates/{year} | GET | Read one year |
//! | /api/room-rates/{year} | PUT | Update one year |
//! | /api/room-rates/{year} | DELETE | Delete one year |
//! | /api/room-rates/{year}/grid | GET | Merged-cell grid as JSON |
//! | /api/room-rates/{year}/table | GET | Rendered HTML table |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/room-rates", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{year}",
            get(handler::get_by_year)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{year}/grid", get(handler::grid))
        .route("/{year}/table", get(handler::table))
}
