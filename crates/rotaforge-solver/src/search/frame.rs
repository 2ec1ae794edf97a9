//! Explicit-stack frames for the backtracking search.
//!
//! One frame per decided (block, resident) pair. A frame remembers the
//! candidate order computed on entry, how far through it the search has
//! gone, and the decision currently applied to the state so it can be
//! undone exactly.

use rotaforge_core::ServiceIndex;

use crate::ordering::BlockResident;

/// Decision a frame has applied to the schedule state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// The pair was fixed before search began; nothing to undo.
    Preassigned,
    Service(ServiceIndex),
    Free,
}

#[derive(Debug)]
pub(crate) struct Frame {
    pub(crate) pair: BlockResident,
    candidates: Vec<ServiceIndex>,
    cursor: usize,
    fallback_tried: bool,
    preassigned: bool,
    decision: Option<Decision>,
}

impl Frame {
    /// Frame for a pair that still needs a decision.
    pub(crate) fn open(pair: BlockResident, candidates: Vec<ServiceIndex>) -> Self {
        Self {
            pair,
            candidates,
            cursor: 0,
            fallback_tried: false,
            preassigned: false,
            decision: None,
        }
    }

    /// Frame for a pair fixed by the pre-pass. It yields one no-op decision.
    pub(crate) fn preassigned(pair: BlockResident) -> Self {
        Self {
            pair,
            candidates: Vec::new(),
            cursor: 0,
            fallback_tried: true,
            preassigned: true,
            decision: None,
        }
    }

    #[inline]
    pub(crate) fn is_preassigned(&self) -> bool {
        self.preassigned
    }

    /// Removes and returns the applied decision.
    #[inline]
    pub(crate) fn take_decision(&mut self) -> Option<Decision> {
        self.decision.take()
    }

    #[inline]
    pub(crate) fn set_decision(&mut self, decision: Decision) {
        self.decision = Some(decision);
    }

    /// Next untried candidate service.
    pub(crate) fn next_candidate(&mut self) -> Option<ServiceIndex> {
        let candidate = self.candidates.get(self.cursor).copied();
        if candidate.is_some() {
            self.cursor += 1;
        }
        candidate
    }

    /// Returns true exactly once: the first time the free-block fallback is considered.
    pub(crate) fn claim_fallback(&mut self) -> bool {
        !std::mem::replace(&mut self.fallback_tried, true)
    }
}
