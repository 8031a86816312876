//! Set combination rules used by the facade

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Union `current` with `new_elements`, bounded by `cap`
///
/// When the union stays below `cap` it is returned. Otherwise the result is
/// exactly `new_elements`: older history is dropped wholesale rather than
/// trimmed, so the stored set never reaches `cap` through accumulation alone.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use wikiprefs::bounded_union;
///
/// let current: BTreeSet<i64> = (0..255).collect();
/// let new: BTreeSet<i64> = (1000..1005).collect();
/// assert_eq!(bounded_union(current, &new, 256), new);
/// ```
pub fn bounded_union<E: Ord + Clone>(
    mut current: BTreeSet<E>,
    new_elements: &BTreeSet<E>,
    cap: usize,
) -> BTreeSet<E> {
    current.extend(new_elements.iter().cloned());
    if current.len() < cap {
        current
    } else {
        new_elements.clone()
    }
}

/// Ordered, de-duplicated union: `primary` in its own order, then every
/// element of `secondary` not yet seen, in `secondary`'s order
pub fn ordered_union<T, I, J>(primary: I, secondary: J) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    primary
        .into_iter()
        .chain(secondary)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
