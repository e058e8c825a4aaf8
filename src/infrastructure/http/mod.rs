//! HTTP Layer - RESTful API
//!
//! 统一响应格式 `{errno, error, data}`，业务错误返回 HTTP 200

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::{AppState, DEFAULT_MAX_UPLOAD_SIZE};
