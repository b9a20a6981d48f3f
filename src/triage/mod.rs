// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triage engine for the insight deck.
//!
//! One [`Deck`] (tiers + reveal flag) is shared by two traversal overlays:
//! the cursor-driven stack mode and the skip-set list mode. The overlays
//! keep independent histories on purpose: skipping in the list does not
//! move the stack cursor, and vice versa. Invalid operations are typed
//! rejections that leave all state untouched; nothing here panics.

pub mod focus;
pub mod gesture;
pub mod list;
pub mod stack;

use std::fmt;

use smallvec::SmallVec;

use crate::model::{AnalysisResult, Deck, DeckError, Insight, InsightId};

pub use focus::DetailFocus;
pub use gesture::{
    classify_release, dismisses_detail, DETAIL_DISMISS_THRESHOLD, SWIPE_DISTANCE_THRESHOLD,
    SWIPE_SPEED_THRESHOLD,
};
pub use list::ListTraversal;
pub use stack::{StackTraversal, LOOKAHEAD_DEPTH};

/// The classified outcome applied to one insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Skip,
    Save,
}

/// Single-slot undo record: the action kind and the affected identifier,
/// consumed atomically when the undo is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoToken {
    kind: Decision,
    insight_id: InsightId,
}

impl UndoToken {
    pub fn new(kind: Decision, insight_id: InsightId) -> Self {
        Self { kind, insight_id }
    }

    pub fn kind(&self) -> Decision {
        self.kind
    }

    pub fn insight_id(&self) -> &InsightId {
        &self.insight_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    NoCurrentInsight,
    UnknownInsight { id: String },
    AlreadySkipped { id: InsightId },
    NotVisible { id: InsightId },
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCurrentInsight => f.write_str("no current insight (cursor is terminal)"),
            Self::UnknownInsight { id } => {
                write!(f, "insight not in the working sequence (id={id})")
            }
            Self::AlreadySkipped { id } => write!(f, "insight already skipped (id={id})"),
            Self::NotVisible { id } => write!(f, "insight not visible (id={id})"),
        }
    }
}

impl std::error::Error for TriageError {}

/// The deck plus both traversal overlays and the shared detail focus.
///
/// This is the engine's whole mutable surface: hosts render from its read
/// methods and mutate only through the operations below, each of which is
/// either applied in full or rejected without effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageDeck {
    deck: Deck,
    stack: StackTraversal,
    list: ListTraversal,
    focus: DetailFocus,
}

impl TriageDeck {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            stack: StackTraversal::new(),
            list: ListTraversal::new(),
            focus: DetailFocus::default(),
        }
    }

    /// Builds a fresh triage session from a completed analysis. A result
    /// with duplicate insight ids is rejected whole; no partial deck.
    pub fn from_analysis(result: &AnalysisResult) -> Result<Self, DeckError> {
        Ok(Self::new(Deck::from_analysis(result)?))
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    // ---- shared tier state ----

    /// Reveals the secondary tier for both modes. Monotonic and idempotent;
    /// never resets the cursor or reorders decided insights.
    pub fn reveal_secondary(&mut self) -> bool {
        self.deck.reveal_secondary()
    }

    /// Secondary tier exists and is still hidden.
    pub fn has_more(&self) -> bool {
        self.deck.has_hidden_secondary()
    }

    // ---- stack (cursor) mode ----

    /// Decides the current insight and advances the cursor.
    ///
    /// Post-condition, cursor mode only: `Decision::Save` also opens the
    /// detail focus on the saved insight, so swiping right to save lands the
    /// user in its deep dive. List mode has no such side effect; its
    /// `expand` is always an explicit call.
    pub fn decide(&mut self, decision: Decision) -> Result<InsightId, TriageError> {
        let id = self.stack.decide(&self.deck, decision)?;
        if decision == Decision::Save {
            self.focus.open(id.clone());
        }
        Ok(id)
    }

    /// Reverses the most recent decision, if any. If the undone save had
    /// opened the detail view and it is still focused there, the focus is
    /// closed too: an undone decision leaves no trace.
    pub fn undo(&mut self) -> Option<UndoToken> {
        let token = self.stack.undo()?;
        if self.focus.is(token.insight_id().as_str()) {
            self.focus.close();
        }
        Some(token)
    }

    pub fn current(&self) -> Option<&Insight> {
        self.stack.current(&self.deck)
    }

    pub fn lookahead(&self) -> SmallVec<[&Insight; LOOKAHEAD_DEPTH]> {
        self.stack.lookahead(&self.deck)
    }

    pub fn is_finished(&self) -> bool {
        self.stack.is_finished(&self.deck)
    }

    pub fn cursor(&self) -> usize {
        self.stack.cursor()
    }

    pub fn saved_count(&self) -> usize {
        self.stack.saved().len()
    }

    pub fn stack_skipped_count(&self) -> usize {
        self.stack.skipped().len()
    }

    pub fn saved(&self) -> &[InsightId] {
        self.stack.saved()
    }

    pub fn stack_skipped(&self) -> &[InsightId] {
        self.stack.skipped()
    }

    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    // ---- list (filter) mode ----

    /// Skips an insight out of order. Skipping the currently focused insight
    /// clears the detail focus as a side effect.
    pub fn skip(&mut self, id: &str) -> Result<InsightId, TriageError> {
        let skipped = self.list.skip(&self.deck, id)?;
        if self.focus.is(skipped.as_str()) {
            self.focus.close();
        }
        Ok(skipped)
    }

    pub fn undo_skip(&mut self) -> Option<InsightId> {
        self.list.undo_skip()
    }

    pub fn can_undo_skip(&self) -> bool {
        self.list.can_undo_skip()
    }

    pub fn is_skipped(&self, id: &str) -> bool {
        self.list.is_skipped(id)
    }

    pub fn visible(&self) -> Vec<&Insight> {
        self.list.visible(&self.deck)
    }

    pub fn list_skipped_count(&self) -> usize {
        self.list.skipped_count()
    }

    /// Opens the detail focus from list mode. The insight must be visible
    /// there: present in the working sequence and not skipped. Expanding the
    /// already-focused insight is idempotent; expanding a different one
    /// replaces the focus without an explicit collapse.
    pub fn expand(&mut self, id: &str) -> Result<(), TriageError> {
        let Some(insight) = self.deck.find(id) else {
            return Err(TriageError::UnknownInsight { id: id.to_owned() });
        };
        if self.list.is_skipped(id) {
            return Err(TriageError::NotVisible {
                id: insight.id().clone(),
            });
        }
        let id = insight.id().clone();
        self.focus.open(id);
        Ok(())
    }

    /// Opens the detail focus from stack mode, where validity means presence
    /// in the working sequence (decided insights stay addressable).
    pub fn open_detail(&mut self, id: &str) -> Result<(), TriageError> {
        let Some(insight) = self.deck.find(id) else {
            return Err(TriageError::UnknownInsight { id: id.to_owned() });
        };
        let id = insight.id().clone();
        self.focus.open(id);
        Ok(())
    }

    /// Closes the detail view. Always succeeds; closing nothing is a no-op.
    pub fn close_detail(&mut self) {
        self.focus.close();
    }

    pub fn focused_id(&self) -> Option<&InsightId> {
        self.focus.focused_id()
    }

    pub fn focused(&self) -> Option<&Insight> {
        self.focus.resolve(&self.deck)
    }
}

#[cfg(test)]
mod tests;
