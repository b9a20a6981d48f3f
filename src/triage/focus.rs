// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Deck, Insight, InsightId};

/// The single optional "deep dive" focus.
///
/// At most one insight is expanded at a time; opening a new focus silently
/// replaces the previous one and `close` is always a safe no-op. Visibility
/// rules for what may be opened belong to the owning controller, which
/// manages this coordinator alongside the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFocus {
    focused: Option<InsightId>,
}

impl DetailFocus {
    pub fn open(&mut self, id: InsightId) {
        self.focused = Some(id);
    }

    pub fn close(&mut self) {
        self.focused = None;
    }

    pub fn is_open(&self) -> bool {
        self.focused.is_some()
    }

    pub fn focused_id(&self) -> Option<&InsightId> {
        self.focused.as_ref()
    }

    pub fn is(&self, id: &str) -> bool {
        self.focused
            .as_ref()
            .is_some_and(|focused| focused.as_str() == id)
    }

    /// Resolves the focus against the deck for rendering. A missing deep-dive
    /// payload on the resolved insight is not an error; the caller renders a
    /// placeholder.
    pub fn resolve<'a>(&self, deck: &'a Deck) -> Option<&'a Insight> {
        self.focused.as_ref().and_then(|id| deck.find(id.as_str()))
    }
}
