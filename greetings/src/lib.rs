//! Greeting messages for named people.
//!
//! The crate turns a name into a short welcome line picked at random from a
//! fixed set of shapes, either for a single name or for a whole list of names
//! at once.
//!
//! The main entry point is [`Greeter`], which owns the source of randomness
//! used to pick a shape. The public modules [`pick`] and [`template`] expose the
//! selection capability and the shapes themselves, so callers can plug in
//! their own generator or inspect which shape produced a greeting.

mod error;
mod greeter;
pub mod pick;
pub mod template;

pub use error::GreetingError;
pub use greeter::{Greeter, GreetingTable};
pub use template::Template;
