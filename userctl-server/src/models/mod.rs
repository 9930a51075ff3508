//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{NewUser, User, UserFields, UserId};
pub use validation::ValidationError;
