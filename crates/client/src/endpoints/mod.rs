//! REST API endpoint implementations.

mod auth;
mod request;
mod search;

pub use auth::{get_login_configuration, login_user};
pub use request::send_request;
pub use search::search_file_events;
