//! Core components of the `yfinq` client.
//!
//! This module contains the foundational building blocks of the library,
//! including:
//! - The main [`YqClient`] and its builder.
//! - The primary [`YqError`] type and its [`ErrorKind`] classification.
//! - The generic result cursor [`Iter`].
//! - Internal request, networking, and authentication plumbing.

/// The main client (`YqClient`), builder, and session handling.
pub mod client;
/// The primary error type (`YqError`) for the crate.
pub mod error;
/// The generic single-pass result cursor (`Iter`).
pub mod iter;
pub(crate) mod quotes;
pub(crate) mod request;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::YqClient`
pub use client::{YqClient, YqClientBuilder};
pub use error::{ErrorKind, YqError};
pub use iter::Iter;
pub use quotes::ListParams;
