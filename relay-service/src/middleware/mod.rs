pub mod shared_secret;

pub use shared_secret::{shared_secret_middleware, SHARED_SECRET_HEADER};
