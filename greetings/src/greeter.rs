use crate::error::GreetingError;
use crate::pick::{self, Pick};
use crate::template::Template;
use rand::rngs::StdRng;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Greetings keyed by the name they were generated for.
pub type GreetingTable = HashMap<String, String>;

/// Produces greeting messages, picking a shape from [`Template::ALL`] for each one.
///
/// The greeter owns its source of randomness; see [`Default`] for the
/// time-seeded generator used out of the box.
///
/// Example
/// ```
/// use greetings::Greeter;
/// let mut greeter = Greeter::default();
/// let message = greeter.hello("Gladys").unwrap();
/// assert!(message.contains("Gladys"));
/// ```
pub struct Greeter<P: Pick = StdRng> {
    picker: P,
}

impl<P: Pick> Greeter<P> {
    /// Create a greeter drawing its choices from `picker`.
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Return a greeting for `name`.
    ///
    /// Fails with [`GreetingError::EmptyName`] when `name` is empty.
    pub fn hello(&mut self, name: &str) -> Result<String, GreetingError> {
        if name.is_empty() {
            debug!("rejecting empty name");
            return Err(GreetingError::EmptyName);
        }
        let template = Template::ALL[self.picker.pick(Template::ALL.len())];
        trace!(%template, "generated greeting for {name}");
        Ok(template.render(name))
    }

    /// Return a table mapping each of `names` to a greeting.
    ///
    /// Names are handled in order. The first empty name aborts the whole call and
    /// nothing generated so far is returned. A repeated name keeps the greeting
    /// generated for its last occurrence.
    pub fn hellos<S: AsRef<str>>(&mut self, names: &[S]) -> Result<GreetingTable, GreetingError> {
        let mut messages = GreetingTable::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let message = self.hello(name)?;
            messages.insert(name.to_owned(), message);
        }
        Ok(messages)
    }
}

impl Default for Greeter {
    /// Create a greeter backed by [`pick::time_seeded`].
    fn default() -> Self {
        Self::new(pick::time_seeded())
    }
}
