//! 工具模块

mod logging;
mod text;

pub use logging::init_tracing;
pub use text::{generate_request_id, mask_api_key, truncate};
