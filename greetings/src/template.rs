use std::fmt;

/// One of the fixed greeting shapes a name can be substituted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `Hi, {name}. Welcome!`
    Welcome,
    /// `Great to see you, {name}!`
    GreatToSee,
    /// `Hail, {name}! Well met!`
    Hail,
}

impl Template {
    /// The full template set, in selection order.
    pub const ALL: [Template; 3] = [Template::Welcome, Template::GreatToSee, Template::Hail];

    /// Substitute `name` into this shape.
    pub fn render(self, name: &str) -> String {
        match self {
            Template::Welcome => format!("Hi, {name}. Welcome!"),
            Template::GreatToSee => format!("Great to see you, {name}!"),
            Template::Hail => format!("Hail, {name}! Well met!"),
        }
    }

    /// Find the shape that produced `greeting`, if any.
    pub fn matching(greeting: &str) -> Option<Template> {
        Self::ALL.into_iter().find(|t| t.fits(greeting))
    }

    fn fits(self, greeting: &str) -> bool {
        let (prefix, suffix) = self.affixes();
        greeting.len() > prefix.len() + suffix.len()
            && greeting.starts_with(prefix)
            && greeting.ends_with(suffix)
    }

    fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Template::Welcome => ("Hi, ", ". Welcome!"),
            Template::GreatToSee => ("Great to see you, ", "!"),
            Template::Hail => ("Hail, ", "! Well met!"),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Template::Welcome => "welcome",
            Template::GreatToSee => "great-to-see",
            Template::Hail => "hail",
        };
        f.write_str(s)
    }
}
