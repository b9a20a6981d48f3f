// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interchange types for a settled analysis.
//!
//! These mirror the pipeline's response JSON field for field. The core never
//! mutates a result; it only reads the tiers into a deck and the metadata and
//! score into the host's header.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::insight::Insight;

/// Lifecycle of one analysis request as reported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Where the transcript came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptSource {
    YoutubeCaptions,
    WhisperStt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub duration_seconds: u64,
    pub duration_display: String,
    pub transcript_source: TranscriptSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    pub density: u8,
    pub clarity: u8,
    pub originality: u8,
    pub signal_to_noise: u8,
}

/// Content-quality score (0..=100) with a one-line justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LeanScore {
    pub score: u8,
    pub reason: String,
    pub breakdown: Option<ScoreBreakdown>,
}

/// A completed analysis: two ordered insight tiers plus video metadata,
/// summary bullets, and the LeanScore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    pub metadata: VideoMetadata,
    pub summary_bullets: Vec<String>,
    pub lean_score: LeanScore,
    pub top_insights: Vec<Insight>,
    pub additional_insights: Vec<Insight>,
    pub processing_time_ms: u64,
}

/// Upstream failure shape, surfaced to the host verbatim.
///
/// `error_code` is one of the stable tokens in [`error_code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorDetail {
    pub error: String,
    pub error_code: String,
    pub details: Option<String>,
}

impl ErrorDetail {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.error, self.error_code)?;
        if let Some(details) = &self.details {
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}

/// Stable error-code tokens emitted by the pipeline.
pub mod error_code {
    pub const INVALID_URL: &str = "INVALID_URL";
    pub const VIDEO_NOT_FOUND: &str = "VIDEO_NOT_FOUND";
    pub const VIDEO_TOO_LONG: &str = "VIDEO_TOO_LONG";
    pub const TRANSCRIPT_UNAVAILABLE: &str = "TRANSCRIPT_UNAVAILABLE";
    pub const RATE_LIMITED: &str = "RATE_LIMITED";
    pub const PROCESSING_ERROR: &str = "PROCESSING_ERROR";
}

#[cfg(test)]
mod tests {
    use super::{AnalysisResult, AnalysisStatus, ErrorDetail, TranscriptSource};

    #[test]
    fn status_uses_snake_case_tokens() {
        let json = serde_json::to_string(&AnalysisStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
        let source: TranscriptSource =
            serde_json::from_str("\"youtube_captions\"").expect("deserialize");
        assert_eq!(source, TranscriptSource::YoutubeCaptions);
    }

    #[test]
    fn full_result_round_trips() {
        let result = crate::model::fixtures::demo_analysis_result();
        let json = serde_json::to_string(&result).expect("serialize");
        let back: AnalysisResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result);
    }

    #[test]
    fn error_detail_display_includes_code_and_details() {
        let detail = ErrorDetail::new("Could not obtain transcript", "TRANSCRIPT_UNAVAILABLE")
            .with_details("no captions, Whisper unavailable");
        assert_eq!(
            detail.to_string(),
            "Could not obtain transcript [TRANSCRIPT_UNAVAILABLE]: no captions, Whisper unavailable"
        );
    }
}
