//! Maquette - a mock asset-management API server
//!
//! Maquette serves the backend contract a frontend needs while the real
//! backend does not exist yet:
//! - Auth endpoints (login, register) issuing fabricated sessions
//! - Asset endpoints (list, create) returning canned records
//! - Permissive CORS with preflight short-circuiting
//! - A uniform error envelope with environment-gated diagnostics
//!
//! The mock behaviour lives behind collaborator traits so a real user
//! store, token issuer, or object-storage client can be swapped in without
//! touching the HTTP layer.

pub mod api;
pub mod assets;
pub mod auth;
pub mod config;
pub mod error;
pub mod ident;
pub mod types;

pub use error::{Error, Result};
