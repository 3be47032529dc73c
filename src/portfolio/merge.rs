//! Merging freshly proposed records into an existing collection.

use std::collections::HashSet;

use crate::core::UseCaseRecord;

/// Outcome of a merge, for callers that want to report what happened.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    pub use_cases: Vec<UseCaseRecord>,
    pub added: usize,
    pub skipped: Vec<String>,
}

/// Append candidates whose name is not already taken.
///
/// Names are compared case-insensitively. A candidate is also dropped when an
/// earlier candidate in the same batch claimed its name. Existing records are
/// returned untouched and in their original order.
pub fn merge_use_cases<I>(existing: &[UseCaseRecord], candidates: I) -> MergeOutcome
where
    I: IntoIterator<Item = UseCaseRecord>,
{
    let mut taken: HashSet<String> = existing.iter().map(UseCaseRecord::name_key).collect();
    let mut use_cases = existing.to_vec();
    let mut skipped = Vec::new();

    for candidate in candidates {
        if taken.insert(candidate.name_key()) {
            use_cases.push(candidate);
        } else {
            skipped.push(candidate.name);
        }
    }

    MergeOutcome {
        added: use_cases.len() - existing.len(),
        use_cases,
        skipped,
    }
}

pub fn merge_candidates<I>(existing: &[UseCaseRecord], candidates: I) -> Vec<UseCaseRecord>
where
    I: IntoIterator<Item = UseCaseRecord>,
{
    merge_use_cases(existing, candidates).use_cases
}
