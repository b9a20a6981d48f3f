// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::InsightId;

/// One ranked, self-contained unit of extracted content.
///
/// Insights arrive fully formed from the analysis pipeline and are immutable
/// for the lifetime of a deck; triage only layers skip/save/focus state on
/// top of them. `rank` is 1-based and defines the default order; the featured
/// flag marks membership in the primary ("top") tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Insight {
    #[schemars(with = "String")]
    id: InsightId,
    rank: u32,
    title: String,
    core_point: String,
    supporting_context: Option<String>,
    #[serde(rename = "deep_dive_content")]
    deep_dive: Option<DeepDive>,
    #[serde(rename = "is_top_five")]
    featured: bool,
}

impl Insight {
    pub fn new(
        id: InsightId,
        rank: u32,
        title: impl Into<String>,
        core_point: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rank,
            title: title.into(),
            core_point: core_point.into(),
            supporting_context: None,
            deep_dive: None,
            featured: false,
        }
    }

    pub fn id(&self) -> &InsightId {
        &self.id
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn core_point(&self) -> &str {
        &self.core_point
    }

    pub fn supporting_context(&self) -> Option<&str> {
        self.supporting_context.as_deref()
    }

    pub fn set_supporting_context(&mut self, supporting_context: Option<String>) {
        self.supporting_context = supporting_context;
    }

    pub fn deep_dive(&self) -> Option<&DeepDive> {
        self.deep_dive.as_ref()
    }

    pub fn set_deep_dive(&mut self, deep_dive: Option<DeepDive>) {
        self.deep_dive = deep_dive;
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }
}

/// Extended "deep dive" payload attached to some insights.
///
/// Absence of this payload is normal; a detail view renders a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeepDive {
    extended_explanation: String,
    key_arguments: Vec<String>,
    local_context: LocalContext,
}

impl DeepDive {
    pub fn new(
        extended_explanation: impl Into<String>,
        key_arguments: Vec<String>,
        local_context: LocalContext,
    ) -> Self {
        Self {
            extended_explanation: extended_explanation.into(),
            key_arguments,
            local_context,
        }
    }

    pub fn extended_explanation(&self) -> &str {
        &self.extended_explanation
    }

    pub fn key_arguments(&self) -> &[String] {
        &self.key_arguments
    }

    pub fn local_context(&self) -> &LocalContext {
        &self.local_context
    }
}

/// Transcript context immediately surrounding an insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalContext {
    before: String,
    after: String,
}

impl LocalContext {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }
}

#[cfg(test)]
mod tests {
    use super::{DeepDive, Insight, LocalContext};
    use crate::model::InsightId;

    fn iid(value: &str) -> InsightId {
        InsightId::new(value).expect("insight id")
    }

    #[test]
    fn insight_deserializes_pipeline_field_names() {
        let json = r#"{
            "id": "i-1",
            "rank": 1,
            "title": "Compounding beats intensity",
            "core_point": "Small consistent effort outperforms bursts.",
            "supporting_context": "He repeats this three times in the talk.",
            "deep_dive_content": {
                "extended_explanation": "The speaker frames consistency as an interest rate.",
                "key_arguments": ["Habits compound", "Bursts decay"],
                "local_context": {"before": "...", "after": "..."}
            },
            "is_top_five": true
        }"#;

        let insight: Insight = serde_json::from_str(json).expect("deserialize insight");
        assert_eq!(insight.id().as_str(), "i-1");
        assert_eq!(insight.rank(), 1);
        assert!(insight.is_featured());
        let deep_dive = insight.deep_dive().expect("deep dive");
        assert_eq!(deep_dive.key_arguments().len(), 2);
        assert_eq!(deep_dive.local_context().before(), "...");
    }

    #[test]
    fn insight_without_deep_dive_is_valid() {
        let json = r#"{
            "id": "i-2",
            "rank": 7,
            "title": "A minor aside",
            "core_point": "Not everything earns a deep dive.",
            "supporting_context": null,
            "deep_dive_content": null,
            "is_top_five": false
        }"#;

        let insight: Insight = serde_json::from_str(json).expect("deserialize insight");
        assert!(insight.deep_dive().is_none());
        assert!(insight.supporting_context().is_none());
        assert!(!insight.is_featured());
    }

    #[test]
    fn insight_serializes_back_to_pipeline_names() {
        let mut insight = Insight::new(iid("i-3"), 3, "Title", "Point.");
        insight.set_deep_dive(Some(DeepDive::new(
            "More.",
            vec!["One".to_owned()],
            LocalContext::new("b", "a"),
        )));
        let value = serde_json::to_value(&insight).expect("serialize insight");
        assert!(value.get("deep_dive_content").is_some());
        assert!(value.get("is_top_five").is_some());
        assert!(value.get("deep_dive").is_none());
    }
}
