pub mod api;
pub mod config;
pub mod connectivity;
pub mod documents;
pub mod error;
pub mod questions;

#[cfg(test)]
mod tests;

pub const BACKEND_HOSTNAME: &str = "localhost";
pub const BACKEND_PORT: u16 = 8000;
pub const DEFAULT_BASE_URL: &str =
    const_format::concatcp!("http://", BACKEND_HOSTNAME, ":", BACKEND_PORT);
