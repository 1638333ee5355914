//! Append-only command log with a replay cursor.

use termfolio_types::Payload;

/// One committed command and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    /// The normalized input line.
    pub input: String,
    pub output: Payload,
}

/// What a recall step wants written into the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Nothing to do; the buffer is left alone.
    Unchanged,
    /// Replace the buffer with this text.
    Load(String),
    /// Navigation left the log; empty the buffer.
    Exit,
}

/// Session history. Index 0 is the oldest record.
///
/// The cursor is `None` while the user types freely (idle) and
/// `Some(i)` while replaying record `i` (browsing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<HistoryRecord>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return to idle.
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
        self.cursor = None;
    }

    /// Drop every record and return to idle.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = None;
    }

    /// Return to idle without touching the records.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Step toward older records, saturating at the oldest.
    pub fn recall_older(&mut self) -> Recall {
        let Some(last) = self.records.len().checked_sub(1) else {
            return Recall::Unchanged;
        };
        let idx = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.load(idx)
    }

    /// Step toward newer records; past the newest, return to idle.
    pub fn recall_newer(&mut self) -> Recall {
        let Some(i) = self.cursor else {
            return Recall::Unchanged;
        };
        let next = i + 1;
        if next >= self.records.len() {
            self.cursor = None;
            return Recall::Exit;
        }
        self.load(next)
    }

    fn load(&mut self, idx: usize) -> Recall {
        self.cursor = Some(idx);
        log::debug!("History recall #{idx}");
        Recall::Load(self.records[idx].input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(input: &str) -> HistoryRecord {
        HistoryRecord {
            input: input.to_string(),
            output: Payload::text(""),
        }
    }

    fn history(inputs: &[&str]) -> History {
        let mut h = History::new();
        for i in inputs {
            h.push(rec(i));
        }
        h
    }

    #[test]
    fn older_on_empty_is_noop() {
        let mut h = History::new();
        assert_eq!(h.recall_older(), Recall::Unchanged);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn newer_while_idle_is_noop() {
        let mut h = history(&["a"]);
        assert_eq!(h.recall_newer(), Recall::Unchanged);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn older_starts_at_newest() {
        let mut h = history(&["a", "b", "c"]);
        assert_eq!(h.recall_older(), Recall::Load("c".into()));
        assert_eq!(h.cursor(), Some(2));
        assert_eq!(h.recall_older(), Recall::Load("b".into()));
        assert_eq!(h.recall_older(), Recall::Load("a".into()));
    }

    #[test]
    fn older_saturates_at_zero() {
        let mut h = history(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_older(), Recall::Load("a".into()));
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn newer_walks_forward_then_exits() {
        let mut h = history(&["a", "b", "c"]);
        h.recall_older();
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), Recall::Load("b".into()));
        assert_eq!(h.recall_newer(), Recall::Load("c".into()));
        assert_eq!(h.recall_newer(), Recall::Exit);
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_newer(), Recall::Unchanged);
    }

    #[test]
    fn push_resets_cursor() {
        let mut h = history(&["a"]);
        h.recall_older();
        h.push(rec("b"));
        assert_eq!(h.cursor(), None);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn clear_empties_log() {
        let mut h = history(&["a", "b"]);
        h.recall_older();
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_older(), Recall::Unchanged);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn older_k_times_lands_on_saturated_index(len in 1usize..20, k in 1usize..40) {
                let mut h = History::new();
                for i in 0..len {
                    h.push(rec(&format!("cmd{i}")));
                }
                for _ in 0..k {
                    h.recall_older();
                }
                let expected = (len - 1).saturating_sub(k - 1);
                prop_assert_eq!(h.cursor(), Some(expected));
            }
        }
    }
}
