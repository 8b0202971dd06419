//! # stash-auth
//!
//! Authentication for Stash: basic-auth credential verification against
//! stored password digests, and opaque session tokens backed by the TTL
//! cache.

pub mod credentials;
pub mod password;
pub mod session;

pub use credentials::CredentialVerifier;
pub use password::PasswordDigest;
pub use session::SessionManager;
