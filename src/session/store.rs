//! Hand-off seam to the roster/match store.
//!
//! The engine owns no file format. Whatever keeps match history implements
//! `MatchStore`; `InMemoryStore` backs tests and short-lived sessions.
//! Roster rules (who may play whom, what counts for standings) belong to the
//! store's owner, so `InMemoryStore` accepts every record as given.

use rustc_hash::FxHashMap;

use super::error::SessionResult;
use super::summary::MatchRecord;

/// Accepts finished matches.
pub trait MatchStore {
    /// Append one record.
    fn append(&mut self, record: MatchRecord) -> SessionResult<()>;
}

/// Store that keeps records in memory, indexed by week.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: Vec<MatchRecord>,
    by_week: FxHashMap<u32, Vec<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Records for one week, in insertion order.
    pub fn for_week(&self, week: u32) -> impl Iterator<Item = &MatchRecord> {
        self.by_week
            .get(&week)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchStore for InMemoryStore {
    fn append(&mut self, record: MatchRecord) -> SessionResult<()> {
        let index = self.records.len();
        if let Some(week) = record.week {
            self.by_week.entry(week).or_default().push(index);
        }
        self.records.push(record);
        Ok(())
    }
}
