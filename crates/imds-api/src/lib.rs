mod error;
pub use error::ApiError;

mod http;
pub use http::HttpApi;

mod render;
pub use render::{TTL_HEADER, render};
