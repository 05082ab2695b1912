//! Actions run by the binary

pub mod list;
