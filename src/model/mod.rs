// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model and interchange types.
//!
//! A completed analysis delivers two ranked insight tiers; the deck layers
//! the reveal flag and working-sequence order over them.

pub mod analysis;
pub mod deck;
pub(crate) mod fixtures;
pub mod ids;
pub mod insight;

pub use analysis::{
    error_code, AnalysisResult, AnalysisStatus, ErrorDetail, LeanScore, ScoreBreakdown,
    TranscriptSource, VideoMetadata,
};
pub use deck::{Deck, DeckError};
pub use ids::{Id, IdError, InsightId};
pub use insight::{DeepDive, Insight, LocalContext};
