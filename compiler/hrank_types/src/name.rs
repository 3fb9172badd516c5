//! Variable and constant names.
//!
//! Names are shared, immutable strings. Type trees clone them freely: two
//! occurrences of a variable are the same logical variable exactly when
//! their names are equal.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An immutable, cheaply clonable name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: impl AsRef<str>) -> Self {
        Name(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(Arc::from(name))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// Source of generated variable names.
///
/// Produces `$0`, `$1`, ... in order. The type parser rejects variables
/// starting with `$`, so a supply never collides with names parsed from
/// source. Types built in code must keep to the same rule, or start from
/// [`NameSupply::avoiding`].
/// Each unifier owns its own supply; names only need to be unique within
/// one unification problem.
#[derive(Clone, Debug, Default)]
pub struct NameSupply {
    next: u32,
}

impl NameSupply {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn starting_at(next: u32) -> Self {
        NameSupply { next }
    }

    /// Produce the next unused name.
    pub fn fresh(&mut self) -> Name {
        let name = Name::from(format!("${}", self.next));
        self.next += 1;
        name
    }

    /// Number of names handed out so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_is_monotonic() {
        let mut supply = NameSupply::new();
        assert_eq!(supply.fresh().as_str(), "$0");
        assert_eq!(supply.fresh().as_str(), "$1");
        assert_eq!(supply.issued(), 2);
    }

    #[test]
    fn names_compare_by_content() {
        assert_eq!(Name::new("a"), Name::from(String::from("a")));
        assert!(Name::new("t10") < Name::new("t2"));
    }
}
