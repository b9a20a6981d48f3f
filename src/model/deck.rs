// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use super::analysis::AnalysisResult;
use super::ids::InsightId;
use super::insight::Insight;

/// The tiered insight sequence a triage session runs against.
///
/// The primary tier is always part of the working sequence; the secondary
/// tier joins it once revealed. Revealing is monotonic: the flag never
/// reverts within a session, so the working sequence only ever grows, and it
/// is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    primary: Vec<Insight>,
    secondary: Vec<Insight>,
    secondary_revealed: bool,
}

impl Deck {
    /// Builds a deck from its two tiers, rejecting duplicate identifiers
    /// across the union. No partial deck is ever constructed.
    pub fn new(primary: Vec<Insight>, secondary: Vec<Insight>) -> Result<Self, DeckError> {
        let mut seen = BTreeSet::<&str>::new();
        for insight in primary.iter().chain(secondary.iter()) {
            if !seen.insert(insight.id().as_str()) {
                return Err(DeckError::DuplicateId {
                    id: insight.id().clone(),
                });
            }
        }
        Ok(Self {
            primary,
            secondary,
            secondary_revealed: false,
        })
    }

    /// Builds the deck from a completed analysis, reading the tiers as-is.
    pub fn from_analysis(result: &AnalysisResult) -> Result<Self, DeckError> {
        Self::new(
            result.top_insights.clone(),
            result.additional_insights.clone(),
        )
    }

    pub fn primary(&self) -> &[Insight] {
        &self.primary
    }

    pub fn secondary(&self) -> &[Insight] {
        &self.secondary
    }

    pub fn secondary_revealed(&self) -> bool {
        self.secondary_revealed
    }

    /// Reveals the secondary tier. Returns `false` (and changes nothing) when
    /// the tier is empty or already revealed; the transition happens at most
    /// once per session.
    pub fn reveal_secondary(&mut self) -> bool {
        if self.secondary_revealed || self.secondary.is_empty() {
            return false;
        }
        self.secondary_revealed = true;
        true
    }

    /// Secondary tier exists and has not been revealed yet.
    pub fn has_hidden_secondary(&self) -> bool {
        !self.secondary_revealed && !self.secondary.is_empty()
    }

    /// The working sequence: primary, then secondary once revealed.
    pub fn working(&self) -> impl Iterator<Item = &Insight> {
        let secondary = if self.secondary_revealed {
            &self.secondary[..]
        } else {
            &[]
        };
        self.primary.iter().chain(secondary.iter())
    }

    pub fn working_len(&self) -> usize {
        self.primary.len()
            + if self.secondary_revealed {
                self.secondary.len()
            } else {
                0
            }
    }

    pub fn get(&self, index: usize) -> Option<&Insight> {
        if index < self.primary.len() {
            return self.primary.get(index);
        }
        if self.secondary_revealed {
            return self.secondary.get(index - self.primary.len());
        }
        None
    }

    /// Looks an id up within the working sequence only; an insight in the
    /// unrevealed secondary tier is not addressable.
    pub fn find(&self, id: &str) -> Option<&Insight> {
        self.working().find(|insight| insight.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Index of `id` within the working sequence.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.working().position(|insight| insight.id().as_str() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    DuplicateId { id: InsightId },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate insight id ({id})"),
        }
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::{Deck, DeckError};
    use crate::model::{Insight, InsightId};

    fn insight(id: &str, rank: u32) -> Insight {
        Insight::new(
            InsightId::new(id).expect("insight id"),
            rank,
            format!("Title {rank}"),
            format!("Point {rank}."),
        )
    }

    #[test]
    fn rejects_duplicate_ids_across_tiers() {
        let result = Deck::new(vec![insight("a", 1)], vec![insight("a", 2)]);
        assert_eq!(
            result,
            Err(DeckError::DuplicateId {
                id: InsightId::new("a").expect("insight id"),
            })
        );
    }

    #[test]
    fn working_sequence_excludes_secondary_until_revealed() {
        let mut deck =
            Deck::new(vec![insight("a", 1), insight("b", 2)], vec![insight("c", 3)]).expect("deck");
        assert_eq!(deck.working_len(), 2);
        assert!(deck.find("c").is_none());
        assert!(deck.has_hidden_secondary());

        assert!(deck.reveal_secondary());
        assert_eq!(deck.working_len(), 3);
        assert_eq!(deck.get(2).map(|i| i.id().as_str()), Some("c"));
        assert!(!deck.has_hidden_secondary());
    }

    #[test]
    fn reveal_is_idempotent_and_skips_empty_secondary() {
        let mut deck = Deck::new(vec![insight("a", 1)], Vec::new()).expect("deck");
        assert!(!deck.reveal_secondary());
        assert!(!deck.secondary_revealed());

        let mut deck = Deck::new(vec![insight("a", 1)], vec![insight("b", 2)]).expect("deck");
        assert!(deck.reveal_secondary());
        assert!(!deck.reveal_secondary());
        let order: Vec<&str> = deck.working().map(|i| i.id().as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn position_tracks_working_order() {
        let mut deck =
            Deck::new(vec![insight("a", 1), insight("b", 2)], vec![insight("c", 3)]).expect("deck");
        assert_eq!(deck.position("b"), Some(1));
        assert_eq!(deck.position("c"), None);
        deck.reveal_secondary();
        assert_eq!(deck.position("c"), Some(2));
    }
}
