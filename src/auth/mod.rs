pub mod extractor;
pub mod jwt;
pub mod password;
pub mod rate_limit;

pub use extractor::AuthUser;
