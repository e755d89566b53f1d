//! Name pool oracle and random name helpers.

use super::RandomSource;

/// Draws made by [`pick_name_excluding`] before it falls back to a scan.
pub const MAX_NAME_ATTEMPTS: usize = 16;

/// Read-only access to the pool of character names.
pub trait NameOracle: Send + Sync {
    fn names(&self) -> &[String];

    fn names_count(&self) -> usize {
        self.names().len()
    }
}

/// Uniformly pick one name. `None` when the pool is empty.
pub fn pick_name<'a>(names: &'a [String], rng: &mut dyn RandomSource) -> Option<&'a str> {
    if names.is_empty() {
        return None;
    }
    Some(names[rng.index(names.len())].as_str())
}

/// Pick a name different from `excluded`.
///
/// Draws up to [`MAX_NAME_ATTEMPTS`] times, then returns the first other name
/// found by scanning the pool. `None` when every name equals `excluded`.
pub fn pick_name_excluding<'a>(
    names: &'a [String],
    excluded: &str,
    rng: &mut dyn RandomSource,
) -> Option<&'a str> {
    if names.is_empty() {
        return None;
    }

    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = names[rng.index(names.len())].as_str();
        if candidate != excluded {
            return Some(candidate);
        }
    }

    names
        .iter()
        .map(String::as_str)
        .find(|name| *name != excluded)
}

/// Draw `count` names.
///
/// With `allow_duplicates` every draw is independent. Without it the names
/// are sampled without replacement; asking for more than the pool holds
/// returns the whole pool in its stored order.
pub fn sample_names(
    names: &[String],
    count: usize,
    allow_duplicates: bool,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    if allow_duplicates {
        return (0..count)
            .map(|_| names[rng.index(names.len())].clone())
            .collect();
    }

    if count > names.len() {
        return names.to_vec();
    }

    // partial Fisher-Yates over indices
    let mut indices: Vec<usize> = (0..names.len()).collect();
    for i in 0..count {
        let j = i + rng.index(indices.len() - i);
        indices.swap(i, j);
    }
    indices[..count]
        .iter()
        .map(|&i| names[i].clone())
        .collect()
}
