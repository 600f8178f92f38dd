//! Application-level helpers shared by the server.

mod shutdown;
mod url;

pub use self::url::{target_host, validate_and_normalize_url};
pub use shutdown::shutdown_signal;
