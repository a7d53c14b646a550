//! Web layer serving plans to the presentation layer.
//!
//! Handlers contain no decision logic: they translate query parameters
//! into planner calls and domain results into JSON DTOs. Map rendering,
//! marker styling and route animation all happen client-side, out of
//! scope here.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
