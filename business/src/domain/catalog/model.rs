/// One selectable entry of an option list.
///
/// `id` is the identifier the backend sent alongside the name, when it sent
/// one. Without it the entry is identified by its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientOption {
    pub id: Option<i64>,
    pub name: String,
}

impl IngredientOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// Id sent to the backend when a name is not part of its option list.
pub const UNKNOWN_OPTION_ID: i64 = 0;

/// Ordered, read-only list of options fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<IngredientOption>,
}

impl OptionSet {
    pub fn new(entries: Vec<IngredientOption>) -> Self {
        Self { entries }
    }

    /// Builds a set from bare names, identified by position only.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names.into_iter().map(IngredientOption::new).collect(),
        }
    }

    pub fn entries(&self) -> &[IngredientOption] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn get(&self, index: usize) -> Option<&IngredientOption> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Resolves a name to the id used by the lookup endpoint.
    ///
    /// The first entry with that name wins. Its explicit id is used when
    /// present, otherwise its 1-based position. Unknown names resolve to
    /// [`UNKNOWN_OPTION_ID`] and are still sent to the backend.
    pub fn resolve_id(&self, name: &str) -> i64 {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|index| self.entries[index].id.unwrap_or(index as i64 + 1))
            .unwrap_or(UNKNOWN_OPTION_ID)
    }
}

/// The three option lists shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSets {
    pub vegetables: OptionSet,
    pub proteins: OptionSet,
    pub flavors: OptionSet,
}

impl OptionSets {
    pub fn is_empty(&self) -> bool {
        self.vegetables.is_empty() && self.proteins.is_empty() && self.flavors.is_empty()
    }

    /// True when every list has at least one entry to pick from.
    pub fn is_complete(&self) -> bool {
        !self.vegetables.is_empty() && !self.proteins.is_empty() && !self.flavors.is_empty()
    }
}
