use std::collections::BTreeSet;

/// Set of top-level field names to ignore during a comparison.
///
/// Built from an ordered list; order and duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions<'a> {
    names: BTreeSet<&'a str>,
}

impl<'a> Exclusions<'a> {
    pub fn new(names: &[&'a str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
        }
    }

    pub fn insert(&mut self, name: &'a str) {
        self.names.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in the set that are not in `fields`, in sorted order.
    pub fn unknown_in<'s>(
        &'s self,
        fields: &'s [&'static str],
    ) -> impl Iterator<Item = &'a str> + 's {
        self.names
            .iter()
            .copied()
            .filter(move |name| !fields.iter().any(|field| field == name))
    }
}

impl<'a> FromIterator<&'a str> for Exclusions<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
