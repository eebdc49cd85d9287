//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls; the session crate decides what their
//! responses mean for the stored credential.

pub mod api;
