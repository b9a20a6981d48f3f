// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::{Decision, TriageError, UndoToken};
use crate::model::{Deck, Insight, InsightId};

/// Depth of the look-ahead window a front end may render (current card plus
/// two peeking below).
pub const LOOKAHEAD_DEPTH: usize = 3;

/// Cursor-mode traversal over the working sequence.
///
/// Everything before the cursor is decided, the insight at the cursor is
/// current, everything after is pending. The cursor only moves forward,
/// except for the single decrement a stored undo token permits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTraversal {
    cursor: usize,
    saved: Vec<InsightId>,
    skipped: Vec<InsightId>,
    undo: Option<UndoToken>,
}

impl StackTraversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a decision to the current insight and advances the cursor.
    ///
    /// The decision replaces any previously stored undo token; only the most
    /// recent decision is ever reversible. Fails without touching state when
    /// the cursor is terminal.
    pub fn decide(&mut self, deck: &Deck, decision: Decision) -> Result<InsightId, TriageError> {
        let Some(insight) = deck.get(self.cursor) else {
            return Err(TriageError::NoCurrentInsight);
        };
        let id = insight.id().clone();
        match decision {
            Decision::Save => self.saved.push(id.clone()),
            Decision::Skip => self.skipped.push(id.clone()),
        }
        self.undo = Some(UndoToken::new(decision, id.clone()));
        self.cursor += 1;
        Ok(id)
    }

    /// Reverses the most recent decision, consuming the undo token.
    ///
    /// One-shot: a second call without an intervening `decide` is a no-op.
    /// The undone insight leaves whichever save/skip record held it and
    /// becomes current again.
    pub fn undo(&mut self) -> Option<UndoToken> {
        if self.cursor == 0 {
            return None;
        }
        let token = self.undo.take()?;
        self.cursor -= 1;
        let record = match token.kind() {
            Decision::Save => &mut self.saved,
            Decision::Skip => &mut self.skipped,
        };
        if let Some(position) = record.iter().rposition(|id| id == token.insight_id()) {
            record.remove(position);
        }
        Some(token)
    }

    pub fn current<'a>(&self, deck: &'a Deck) -> Option<&'a Insight> {
        deck.get(self.cursor)
    }

    /// The current insight plus up to two pending ones, bounded so a front
    /// end can render a fixed-depth stack without the remaining sequence.
    pub fn lookahead<'a>(&self, deck: &'a Deck) -> SmallVec<[&'a Insight; LOOKAHEAD_DEPTH]> {
        let end = deck.working_len().min(self.cursor + LOOKAHEAD_DEPTH);
        (self.cursor..end).filter_map(|index| deck.get(index)).collect()
    }

    pub fn is_finished(&self, deck: &Deck) -> bool {
        self.cursor >= deck.working_len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn saved(&self) -> &[InsightId] {
        &self.saved
    }

    pub fn skipped(&self) -> &[InsightId] {
        &self.skipped
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some() && self.cursor > 0
    }
}
