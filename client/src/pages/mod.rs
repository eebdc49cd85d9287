//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Login pages own the credential-establishing flows. Every other page is
//! mounted behind `ProtectedRoute` by the router and assumes the gate passed.

pub mod admin;
pub mod federated;
pub mod home;
pub mod login;
pub mod profile;
pub mod staff;
