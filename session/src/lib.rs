//! Client-side session handling for the Bloom flower subscription app.
//!
//! This crate owns the browser-independent half of authentication: where the
//! bearer token and user profile are persisted, how the token's claims are
//! read, and how a protected route decides between rendering and sending the
//! user back to the login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate plugs a `localStorage` backend into [`SessionStorage`]
//! and drives [`SessionGate`] from its `ProtectedRoute` component. Everything
//! here is advisory UX: the backend authorizes every sensitive request on its
//! own, so nothing in this crate is a security boundary.

pub mod claims;
pub mod config;
pub mod gate;
pub mod login;
pub mod profile;
pub mod role;
pub mod signal;
pub mod storage;
pub mod store;

pub use claims::{Claims, ClaimsError, decode_claims};
pub use config::SessionConfig;
pub use gate::{DenyReason, GateState, SessionGate};
pub use login::{LoginError, LoginKind};
pub use profile::Profile;
pub use role::{Role, RouteRequirement};
pub use signal::{LoginInFlight, LoginSignal};
pub use storage::{MemoryStorage, SessionStorage, StorageError};
pub use store::CredentialStore;
