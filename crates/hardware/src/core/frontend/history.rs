//! Fetch transaction history ledger.
//!
//! The ledger remembers the last three fetch transactions: the address each
//! request was issued for, the address the memory subsystem reported back,
//! and the precomputed sequential successor of the returned word. The reuse
//! decision reads it; the clocked commit replaces it wholesale once per
//! cycle. There is no partial-update path.

use crate::common::constants::HISTORY_DEPTH;

/// One slot of the fetch ledger.
///
/// A slot is opened when a request is accepted and completed when its
/// response is observed. Until then (and after a reset or a redirect) the
/// `ignore` flag keeps the slot out of every reuse and prediction check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The address the fetch request was issued for (possibly itself a
    /// prediction).
    pub requested_addr: u64,
    /// The address the memory subsystem reports the returned data
    /// corresponds to.
    pub response_addr: u64,
    /// `response_addr` advanced by the width of the instruction beginning in
    /// the low half of the returned word, wrapped to the address width.
    pub sequential_next: u64,
    /// True while this slot's data must not be used: no response observed
    /// yet, or the slot was superseded before being consumed.
    pub ignore: bool,
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self {
            requested_addr: 0,
            response_addr: 0,
            sequential_next: 0,
            ignore: true,
        }
    }
}

/// Fixed-depth shift history of fetch transactions, newest first.
///
/// Slot 0 is the most recent transaction. The ledger is a plain value type:
/// the decision logic mutates a working copy and the predictor commits the
/// whole copy at the clock edge, so committed state is always replaced
/// atomically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchHistory {
    slots: [HistoryEntry; HISTORY_DEPTH],
}

impl FetchHistory {
    /// Read-only view of the slots, newest first.
    #[inline(always)]
    pub const fn slots(&self) -> &[HistoryEntry; HISTORY_DEPTH] {
        &self.slots
    }

    /// Opens a new slot for an accepted request, shifting the ledger.
    ///
    /// The oldest slot falls off. The new slot stays ignored until its
    /// response is recorded.
    pub fn push_request(&mut self, addr: u64) {
        for k in (1..HISTORY_DEPTH).rev() {
            self.slots[k] = self.slots[k - 1];
        }
        self.slots[0] = HistoryEntry {
            requested_addr: addr,
            ..HistoryEntry::default()
        };
    }

    /// Folds an arriving response into the newest slot whose request matches.
    ///
    /// Responses are matched by `requested_addr`; a response that matches no
    /// slot belongs to a request already superseded by a redirect, and is
    /// dropped.
    ///
    /// # Arguments
    ///
    /// * `addr` - The response address reported by the memory subsystem.
    /// * `sequential_next` - The precomputed sequential successor of the word.
    ///
    /// # Returns
    ///
    /// Whether a slot matched and was completed.
    pub fn record_response(&mut self, addr: u64, sequential_next: u64) -> bool {
        for slot in &mut self.slots {
            if slot.requested_addr == addr {
                slot.response_addr = addr;
                slot.sequential_next = sequential_next;
                slot.ignore = false;
                return true;
            }
        }
        false
    }

    /// Clears every slot still awaiting its response.
    ///
    /// Used on a redirect: in-flight requests are wrong-path, and their
    /// responses must not be folded in when they eventually arrive.
    pub fn discard_pending(&mut self) {
        for slot in &mut self.slots {
            if slot.ignore {
                *slot = HistoryEntry::default();
            }
        }
    }

    /// The newest slot with an observed response, if any.
    ///
    /// This is the only slot reuse decisions may consult: a merely
    /// outstanding address never grounds a reuse.
    pub fn latest_observed(&self) -> Option<&HistoryEntry> {
        self.slots.iter().find(|slot| !slot.ignore)
    }

    /// Index of the oldest observed slot whose response address equals
    /// `addr`.
    ///
    /// The executor consumes from the old end of the fetch stream, so
    /// prediction matching starts there and walks newer.
    pub fn observed_match(&self, addr: u64) -> Option<usize> {
        (0..HISTORY_DEPTH)
            .rev()
            .find(|&k| !self.slots[k].ignore && self.slots[k].response_addr == addr)
    }

    /// Whether any slot is still awaiting a response for `addr`.
    pub fn pending_match(&self, addr: u64) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.ignore && slot.requested_addr == addr)
    }
}
