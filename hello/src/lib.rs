//! Prints a quotation obtained from a pluggable provider.
//!
//! [`QuoteSource`] is the provider capability; [`GoProverb`] is the provider
//! the `hello` binary uses, and [`print_quote`] writes one line to any writer.

mod quote;

pub use quote::{GoProverb, QuoteSource, print_quote};
