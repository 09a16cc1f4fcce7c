/// A recipe matched by the backend, with its community vote counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub context: String,
    pub likes: u32,
    pub dislikes: u32,
}

/// Ids sent to the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeQuery {
    pub veg_id: i64,
    pub protein_id: i64,
    pub flavor_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Like,
    Dislike,
}

impl std::fmt::Display for VoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteKind::Like => write!(f, "like"),
            VoteKind::Dislike => write!(f, "dislike"),
        }
    }
}

impl Recipe {
    /// Overwrites the count for `kind` with the server's value.
    pub fn with_count(mut self, kind: VoteKind, count: u32) -> Self {
        match kind {
            VoteKind::Like => self.likes = count,
            VoteKind::Dislike => self.dislikes = count,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: "R000001".to_string(),
            name: "Garlic spinach with egg".to_string(),
            context: "Stir fry the spinach, then fold in the egg.".to_string(),
            likes: 3,
            dislikes: 1,
        }
    }

    #[test]
    fn should_overwrite_only_likes() {
        let updated = recipe().with_count(VoteKind::Like, 7);

        assert_eq!(updated.likes, 7);
        assert_eq!(updated.dislikes, 1);
        assert_eq!(updated.name, "Garlic spinach with egg");
    }

    #[test]
    fn should_overwrite_only_dislikes() {
        let updated = recipe().with_count(VoteKind::Dislike, 0);

        assert_eq!(updated.likes, 3);
        assert_eq!(updated.dislikes, 0);
    }
}
