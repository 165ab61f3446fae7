//! One module per public operation, all implemented on [`crate::Vidra`].

mod search;
mod streams;
mod suggestions;
mod trending;
