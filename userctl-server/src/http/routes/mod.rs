//! Route handlers organized by resource

pub mod index;
pub mod users;
