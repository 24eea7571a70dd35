pub mod error;
pub mod result;
pub mod url_path;

pub use result::{ApiResult, Result};
