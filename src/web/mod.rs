//! Presentation layer: embedded form page plus the plan-generation API.

mod page;
pub mod render;
mod routes;

pub use routes::{AppState, plan_routes};
