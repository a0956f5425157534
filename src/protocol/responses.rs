//! Response formatting
//!
//! Status codes mirror their HTTP equivalents so operators can read
//! transcripts at a glance.

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const FORBIDDEN: u16 = 403;
pub const INTERNAL_ERROR: u16 = 500;

/// Format a response status line
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\r\n", code, message)
}
