use super::errors::SelectionError;

/// The three independently selectable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionField {
    Vegetable,
    Protein,
    Flavor,
}

impl SelectionField {
    pub const ALL: [SelectionField; 3] = [
        SelectionField::Vegetable,
        SelectionField::Protein,
        SelectionField::Flavor,
    ];
}

impl std::fmt::Display for SelectionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionField::Vegetable => write!(f, "vegetable"),
            SelectionField::Protein => write!(f, "protein"),
            SelectionField::Flavor => write!(f, "flavor"),
        }
    }
}

impl std::str::FromStr for SelectionField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetable" => Ok(SelectionField::Vegetable),
            "protein" => Ok(SelectionField::Protein),
            "flavor" => Ok(SelectionField::Flavor),
            other => Err(SelectionError::InvalidField(other.to_string())),
        }
    }
}

/// The user's current choice. Values are not checked against the option
/// lists; an empty string counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub vegetable: Option<String>,
    pub protein: Option<String>,
    pub flavor: Option<String>,
}

impl Selection {
    pub fn new(
        vegetable: impl Into<String>,
        protein: impl Into<String>,
        flavor: impl Into<String>,
    ) -> Self {
        Self::default()
            .with(SelectionField::Vegetable, vegetable)
            .with(SelectionField::Protein, protein)
            .with(SelectionField::Flavor, flavor)
    }

    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::Vegetable => self.vegetable.as_deref(),
            SelectionField::Protein => self.protein.as_deref(),
            SelectionField::Flavor => self.flavor.as_deref(),
        }
    }

    /// Returns a copy with exactly one field overwritten.
    pub fn with(mut self, field: SelectionField, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = (!value.is_empty()).then_some(value);
        match field {
            SelectionField::Vegetable => self.vegetable = value,
            SelectionField::Protein => self.protein = value,
            SelectionField::Flavor => self.flavor = value,
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        self.vegetable.is_some() && self.protein.is_some() && self.flavor.is_some()
    }
}
