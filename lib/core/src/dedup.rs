//! Duplicate detection over a batch of candidates.
//!
//! Three independent keyings are checked in fixed precedence: shared email,
//! identical normalized resume content, then shared name+email pair. Within
//! a group the first candidate in input order is kept; later members are
//! reported once, tagged with the first criterion that caught them.

use ahash::AHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

use crate::candidate::{Candidate, DuplicateKind, DuplicateRecord};
use crate::hash::content_hash;

/// Placeholder the info extractor emits when a resume has no email.
/// Candidates carrying it never count as duplicates of each other by email.
pub const EMAIL_SENTINEL: &str = "no email found";

/// Outcome of duplicate detection: survivors in input order plus one audit
/// record per removed candidate.
#[derive(Debug, Clone, Default)]
pub struct DedupResult {
    pub unique: Vec<Candidate>,
    pub duplicates: Vec<DuplicateRecord>,
}

/// Split a candidate batch into unique survivors and a duplicate report.
///
/// Structurally invalid records (blank id, name, email, or text) are
/// dropped up front and appear in neither output. Each duplicate id
/// appears exactly once in the report even when several criteria match.
#[must_use]
pub fn detect(candidates: &[Candidate]) -> DedupResult {
    let valid: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| {
            let ok = c.is_valid();
            if !ok {
                debug!(id = %c.id, "dropping structurally invalid candidate");
            }
            ok
        })
        .collect();

    let mut marked = vec![false; valid.len()];
    let mut duplicates = Vec::new();

    // Fixed criterion precedence: email, then content, then name+email.
    mark_groups(
        &valid,
        &mut marked,
        &mut duplicates,
        DuplicateKind::EmailDuplicate,
        |c| {
            let email = c.normalized_email();
            (!email.is_empty() && email != EMAIL_SENTINEL).then_some(email)
        },
    );
    mark_groups(
        &valid,
        &mut marked,
        &mut duplicates,
        DuplicateKind::ContentDuplicate,
        |c| Some(content_hash(&c.text)),
    );
    mark_groups(
        &valid,
        &mut marked,
        &mut duplicates,
        DuplicateKind::NameEmailDuplicate,
        |c| Some(format!("{}|{}", c.normalized_name(), c.normalized_email())),
    );

    let unique = valid
        .iter()
        .zip(&marked)
        .filter(|(_, dup)| !**dup)
        .map(|(c, _)| (*c).clone())
        .collect();

    DedupResult { unique, duplicates }
}

/// Group candidates by one key; mark everything after the first member of
/// each group as a duplicate, unless an earlier criterion already did.
fn mark_groups<F>(
    valid: &[&Candidate],
    marked: &mut [bool],
    duplicates: &mut Vec<DuplicateRecord>,
    kind: DuplicateKind,
    key_fn: F,
) where
    F: Fn(&Candidate) -> Option<String>,
{
    let mut first_seen: AHashMap<String, usize> = AHashMap::new();

    for (idx, &candidate) in valid.iter().enumerate() {
        let Some(key) = key_fn(candidate) else {
            continue;
        };

        match first_seen.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
            Entry::Occupied(slot) => {
                let kept_idx = *slot.get();
                if marked[idx] {
                    continue;
                }
                marked[idx] = true;
                debug!(
                    id = %candidate.id,
                    kept = %valid[kept_idx].id,
                    criterion = %kind,
                    "marking duplicate candidate"
                );
                duplicates.push(DuplicateRecord {
                    kind,
                    candidate_id: candidate.id.clone(),
                    name: candidate.name.clone(),
                    email: candidate.email.clone(),
                    reason: reason(kind, &valid[kept_idx].id),
                });
            }
        }
    }
}

fn reason(kind: DuplicateKind, kept_id: &str) -> String {
    match kind {
        DuplicateKind::EmailDuplicate => format!("Same email as candidate {kept_id}"),
        DuplicateKind::ContentDuplicate => {
            format!("Same resume content as candidate {kept_id}")
        }
        DuplicateKind::NameEmailDuplicate => {
            format!("Same name and email as candidate {kept_id}")
        }
    }
}
