//! Merge a [`FrequencyCorpus`] into a jyutping table.

use crate::corpus::FrequencyCorpus;
use libtable_core::Table;
use tracing::{debug, info};

/// Counts of what [`merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Zero weights replaced by a corpus frequency.
    pub backfilled: usize,
    /// New tone-letter entries inserted.
    pub added: usize,
}

/// Backfill missing frequencies and add tone-letter keys.
///
/// Only records whose `(toneless, character)` is already in `table` are
/// considered. For those:
/// - a weight of 0 is replaced by a nonzero corpus frequency, a nonzero
///   weight is never overridden;
/// - when the tone-letter key extends the toneless key and is not in the
///   table yet, it is inserted with the (possibly just updated) weight.
///
/// The toneless entry is always kept so typing without tones still finds an
/// exact match.
pub fn merge(table: &mut Table, corpus: &FrequencyCorpus) -> MergeStats {
    let mut stats = MergeStats::default();
    for rec in corpus.iter() {
        let Some(current) = table.get(&rec.toneless, &rec.character) else {
            continue;
        };

        let mut weight = current;
        if current == 0 && rec.frequency > 0 {
            debug!(
                "adding frequency {} {} {} -> {}",
                rec.toneless, rec.character, current, rec.frequency
            );
            table.set_weight(&rec.toneless, &rec.character, rec.frequency);
            weight = rec.frequency;
            stats.backfilled += 1;
        }

        if rec.tone_letters != rec.toneless
            && rec.tone_letters.starts_with(rec.toneless.as_str())
            && !table.contains(&rec.tone_letters, &rec.character)
        {
            debug!(
                "adding tone {} {} -> {} -> {}",
                rec.toneless, rec.character, rec.jyutping, rec.tone_letters
            );
            table.insert(rec.tone_letters.as_str(), rec.character.as_str(), weight);
            stats.added += 1;
        }
    }
    info!(
        "merged corpus: {} frequencies backfilled, {} tone keys added",
        stats.backfilled, stats.added
    );
    stats
}
