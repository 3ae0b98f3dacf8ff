//! API Gateway handler and response mapping

pub mod handler;
pub mod response;

pub use handler::function_handler;
