//! Authentication implementations.

mod directory;

pub use directory::{Credential, StaticUserDirectory};
