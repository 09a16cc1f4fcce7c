use rand::Rng;

use crate::domain::catalog::model::{OptionSet, OptionSets};

use super::model::Selection;

fn pick<R: Rng + ?Sized>(set: &OptionSet, rng: &mut R) -> Option<String> {
    if set.is_empty() {
        return None;
    }
    let index = rng.random_range(0..set.len());
    set.get(index).map(|entry| entry.name.clone())
}

/// Picks one entry per list, uniformly over indices and independently.
///
/// Returns `None` when any list is empty, so a random selection never holds
/// a value that is not part of the current options.
pub fn random_selection<R: Rng + ?Sized>(options: &OptionSets, rng: &mut R) -> Option<Selection> {
    Some(Selection {
        vegetable: Some(pick(&options.vegetables, rng)?),
        protein: Some(pick(&options.proteins, rng)?),
        flavor: Some(pick(&options.flavors, rng)?),
    })
}
