use crate::state::AppState;
use axum::Router;

mod dto;
mod error;
pub mod handlers;
pub mod password;
pub mod repo;
mod repo_types;
pub mod views;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::page_routes())
        .merge(handlers::form_routes())
}
