//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` bundles the long-lived store/gate/signal handles; `auth` is the
//! reactive snapshot components render from.

pub mod auth;
pub mod session;
