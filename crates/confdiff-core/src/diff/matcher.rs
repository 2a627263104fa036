//! Multi-strategy entity matching.
//!
//! Pairs same-kind entities between snapshot A and snapshot B using three
//! key strategies in strict priority: string identifier, numeric key,
//! name. Identifiers are authoritative when present; numeric keys are
//! stable within one export lineage but can be reassigned across
//! independently-seeded configurations; names are the last resort for
//! objects that were recreated under a new identifier.

use std::collections::HashMap;

/// Candidate match keys for one entity. Blank strings count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchKeys<'a> {
    /// String identifier from the export
    pub id: Option<&'a str>,
    /// Numeric key (0 is a valid key, not an absent one)
    pub numeric: Option<i64>,
    /// Name fallback
    pub name: Option<&'a str>,
}

/// Exposes the candidate keys the matcher strategies use.
pub trait MatchKeyed {
    fn match_keys(&self) -> MatchKeys<'_>;
}

impl<T: MatchKeyed> MatchKeyed for &T {
    fn match_keys(&self) -> MatchKeys<'_> {
        (**self).match_keys()
    }
}

/// Outcome of matching two same-kind entity slices.
#[derive(Debug)]
pub struct MatchOutcome<'a, T> {
    /// Pairs judged to be the same object (A side, B side)
    pub matched: Vec<(&'a T, &'a T)>,
    /// A entities with no B counterpart (removed)
    pub only_in_a: Vec<&'a T>,
    /// B entities with no A counterpart (added)
    pub only_in_b: Vec<&'a T>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Match the entities of slice A against slice B.
///
/// Per A entity the strategies run in strict priority and the first hit
/// wins. When two B entities share a key, the later one holds the lookup
/// slot; key collisions are not errors. A B entity may satisfy more than
/// one A entity. The claimed markers (indexed into B, so two B entities
/// with equal field values stay distinguishable) only determine which B
/// entities are left over as added.
pub fn match_entities<'a, T: MatchKeyed>(a: &'a [T], b: &'a [T]) -> MatchOutcome<'a, T> {
    let mut by_id: HashMap<&str, usize> = HashMap::new();
    let mut by_numeric: HashMap<i64, usize> = HashMap::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for (index, entity) in b.iter().enumerate() {
        let keys = entity.match_keys();
        if let Some(id) = non_blank(keys.id) {
            by_id.insert(id, index);
        }
        if let Some(numeric) = keys.numeric {
            by_numeric.insert(numeric, index);
        }
        if let Some(name) = non_blank(keys.name) {
            by_name.insert(name, index);
        }
    }

    let mut claimed = vec![false; b.len()];
    let mut matched = Vec::new();
    let mut only_in_a = Vec::new();

    for entity in a {
        let keys = entity.match_keys();
        let hit = non_blank(keys.id)
            .and_then(|id| by_id.get(id))
            .or_else(|| keys.numeric.and_then(|numeric| by_numeric.get(&numeric)))
            .or_else(|| non_blank(keys.name).and_then(|name| by_name.get(name)));

        match hit {
            Some(&index) => {
                claimed[index] = true;
                matched.push((entity, &b[index]));
            }
            None => only_in_a.push(entity),
        }
    }

    let only_in_b = b
        .iter()
        .enumerate()
        .filter(|(index, _)| !claimed[*index])
        .map(|(_, entity)| entity)
        .collect();

    MatchOutcome {
        matched,
        only_in_a,
        only_in_b,
    }
}
