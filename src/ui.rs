// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared hand-off state between the background request and the host loop.
//!
//! The request task delivers its settled outcome here; the TUI polls the
//! slot on its event cadence and takes the outcome exactly once. The slot
//! carries terminal states only (success with a full result, or the
//! upstream failure), never a partial deck.

use crate::model::{AnalysisResult, ErrorDetail};

/// What a settled analysis request hands to the host.
pub type AnalysisOutcome = Result<AnalysisResult, ErrorDetail>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisHandoff {
    rev: u64,
    outcome: Option<AnalysisOutcome>,
}

impl AnalysisHandoff {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn has_pending(&self) -> bool {
        self.outcome.is_some()
    }

    /// Publishes a settled outcome, replacing any unconsumed one (a
    /// preempted request's delivery is superseded by the newer request).
    pub fn deliver(&mut self, outcome: AnalysisOutcome) {
        self.outcome = Some(outcome);
        self.rev = self.rev.wrapping_add(1);
    }

    /// Consumes the pending outcome, if any.
    pub fn take(&mut self) -> Option<AnalysisOutcome> {
        self.outcome.take()
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisHandoff;
    use crate::model::fixtures::demo_analysis_failure;

    #[test]
    fn take_consumes_the_outcome_once() {
        let mut handoff = AnalysisHandoff::default();
        assert!(!handoff.has_pending());
        assert!(handoff.take().is_none());

        handoff.deliver(Err(demo_analysis_failure()));
        assert!(handoff.has_pending());
        assert_eq!(handoff.rev(), 1);

        let outcome = handoff.take().expect("outcome");
        assert!(outcome.is_err());
        assert!(handoff.take().is_none());
    }

    #[test]
    fn newer_delivery_supersedes_an_unconsumed_one() {
        let mut handoff = AnalysisHandoff::default();
        handoff.deliver(Err(demo_analysis_failure()));
        handoff.deliver(Ok(crate::model::fixtures::demo_analysis_result()));
        assert_eq!(handoff.rev(), 2);

        let outcome = handoff.take().expect("outcome");
        assert!(outcome.is_ok());
    }
}
