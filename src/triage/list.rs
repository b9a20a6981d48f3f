// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::TriageError;
use crate::model::{Deck, Insight, InsightId};

/// Filter-mode traversal: a skip set over the working sequence.
///
/// Insights may be skipped out of order; visible = working sequence minus
/// the skip set, in stable working-sequence order. Only the most recently
/// skipped id is retained for undo, independent of the stack cursor's log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTraversal {
    skipped: BTreeSet<InsightId>,
    last_skipped: Option<InsightId>,
}

impl ListTraversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips an insight present in the working sequence, recording it as the
    /// sole undoable skip. Fails without touching state on an unknown or
    /// already-skipped id.
    pub fn skip(&mut self, deck: &Deck, id: &str) -> Result<InsightId, TriageError> {
        let Some(insight) = deck.find(id) else {
            return Err(TriageError::UnknownInsight { id: id.to_owned() });
        };
        if self.skipped.contains(id) {
            return Err(TriageError::AlreadySkipped {
                id: insight.id().clone(),
            });
        }
        let id = insight.id().clone();
        self.skipped.insert(id.clone());
        self.last_skipped = Some(id.clone());
        Ok(id)
    }

    /// Un-skips the most recently skipped insight, consuming the record.
    /// One-shot, like the stack undo.
    pub fn undo_skip(&mut self) -> Option<InsightId> {
        let id = self.last_skipped.take()?;
        self.skipped.remove(&id);
        Some(id)
    }

    pub fn is_skipped(&self, id: &str) -> bool {
        self.skipped.contains(id)
    }

    pub fn visible<'a>(&self, deck: &'a Deck) -> Vec<&'a Insight> {
        deck.working()
            .filter(|insight| !self.skipped.contains(insight.id().as_str()))
            .collect()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn can_undo_skip(&self) -> bool {
        self.last_skipped.is_some()
    }
}
