//! Reusable UI components.

pub mod protected_route;
pub mod session_header;
