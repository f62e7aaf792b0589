//! Domain value types shared by the repositories

pub mod lenient;
pub mod password;

pub use password::{PasswordDigest, PasswordError};
