//! Contact submission write path: parse the raw body, validate it into a
//! [`crate::models::NewContact`], then hand it to the store.

pub mod parser;
pub mod pipeline;
pub mod validate;
