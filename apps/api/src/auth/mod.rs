// Mock authentication: any well-formed credentials are accepted. A new email
// gets a random user id; later logins with the same email and role reuse it.
// Sessions live in Redis, keyed by an opaque token.

pub mod extractor;
pub mod handlers;
pub mod repository;
pub mod session;
pub mod validation;

pub use extractor::{AuthUser, OptionalAuthUser};
