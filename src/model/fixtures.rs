// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::analysis::{
    error_code, AnalysisResult, AnalysisStatus, ErrorDetail, LeanScore, ScoreBreakdown,
    TranscriptSource, VideoMetadata,
};
use super::ids::InsightId;
use super::insight::{DeepDive, Insight, LocalContext};

fn iid(value: &str) -> InsightId {
    InsightId::new(value).expect("insight id")
}

fn top(id: &str, rank: u32, title: &str, core_point: &str) -> Insight {
    let mut insight = Insight::new(iid(id), rank, title, core_point);
    insight.set_featured(true);
    insight
}

fn additional(id: &str, rank: u32, title: &str, core_point: &str) -> Insight {
    Insight::new(iid(id), rank, title, core_point)
}

/// Built-in demo analysis used by `--demo` and the TUI tests.
pub(crate) fn demo_analysis_result() -> AnalysisResult {
    let mut deep_work = top(
        "demo-1",
        1,
        "Depth is a skill, not a schedule",
        "Long uninterrupted blocks only pay off after the ability to focus has been trained deliberately.",
    );
    deep_work.set_supporting_context(Some(
        "\"You can't just clear your calendar and expect four good hours to appear.\"".to_owned(),
    ));
    deep_work.set_deep_dive(Some(DeepDive::new(
        "The speaker treats concentration like endurance training: capacity grows \
         through progressively longer sessions, and collapses when every pause is \
         filled with novelty. Clearing time without building the capacity produces \
         frustration, not depth.",
        vec![
            "Focus degrades like an untrained muscle when context switching is habitual".to_owned(),
            "Scheduling depth before training it inverts cause and effect".to_owned(),
            "Boredom tolerance is the practical training surface".to_owned(),
        ],
        LocalContext::new(
            "…people block out a deep work morning and then check their phone forty times…",
            "…start with forty-five minutes and extend only when that feels easy…",
        ),
    )));

    let mut metrics = top(
        "demo-2",
        2,
        "Measure inputs you control",
        "Tracking hours of focused practice beats tracking outcomes that lag by months.",
    );
    metrics.set_supporting_context(Some(
        "\"Outcome metrics arrive too late to steer the week.\"".to_owned(),
    ));
    metrics.set_deep_dive(Some(DeepDive::new(
        "Lagging indicators reward anxiety rather than adjustment. The argument is to \
         pick one lead measure per goal, something a single week can move, and let the \
         lagging number merely confirm direction twice a quarter.",
        vec![
            "Lead measures are actionable inside a single week".to_owned(),
            "Lag measures confirm, they do not steer".to_owned(),
        ],
        LocalContext::new(
            "…he contrasts a novelist counting words with one refreshing sales dashboards…",
            "…review the lagging number quarterly, not nightly…",
        ),
    )));

    let mut batching = top(
        "demo-3",
        3,
        "Shallow work wants a container",
        "Email and admin expand to fill any gap, so they get one fixed block instead of ambient access.",
    );
    batching.set_supporting_context(Some(
        "\"Admin is a gas. It compresses fine.\"".to_owned(),
    ));

    let rituals = top(
        "demo-4",
        4,
        "Rituals beat willpower",
        "A fixed startup routine removes the decision cost of beginning hard work.",
    );

    let mut shutdown = top(
        "demo-5",
        5,
        "Open loops tax the evening",
        "An explicit shutdown ritual with a written next step stops work from leaking into rest.",
    );
    shutdown.set_deep_dive(Some(DeepDive::new(
        "Unfinished tasks keep claiming attention until the brain trusts there is a \
         plan. Writing the next concrete step for every open thread, then marking the \
         day closed, is presented as the cheapest reliable way to buy real recovery.",
        vec![
            "Zeigarnik-style intrusions stop when a next step is written down".to_owned(),
            "Recovery quality drives next-day capacity".to_owned(),
        ],
        LocalContext::new(
            "…he describes checking email at 9pm as paying interest on an unclosed day…",
            "…the phrase 'schedule shutdown complete' sounds silly and works anyway…",
        ),
    )));

    AnalysisResult {
        status: AnalysisStatus::Completed,
        metadata: VideoMetadata {
            video_id: "dQw4w9WgXcQ".to_owned(),
            title: "Deep Focus in a Distracted Economy".to_owned(),
            channel_name: "The Long Form".to_owned(),
            duration_seconds: 3725,
            duration_display: "1:02:05".to_owned(),
            transcript_source: TranscriptSource::YoutubeCaptions,
        },
        summary_bullets: vec![
            "Focus is trained capacity, not a calendar artifact".to_owned(),
            "Steer weeks with lead measures, confirm with lag measures".to_owned(),
            "Contain shallow work and close each day explicitly".to_owned(),
        ],
        lean_score: LeanScore {
            score: 78,
            reason: "Dense, structured argument with limited filler and concrete protocols"
                .to_owned(),
            breakdown: Some(ScoreBreakdown {
                density: 82,
                clarity: 85,
                originality: 61,
                signal_to_noise: 84,
            }),
        },
        top_insights: vec![deep_work, metrics, batching, rituals, shutdown],
        additional_insights: vec![
            additional(
                "demo-6",
                6,
                "Visible scoreboards change behavior",
                "A tally of deep hours where you can see it nudges the next scheduling decision.",
            ),
            additional(
                "demo-7",
                7,
                "Say no by default to meetings",
                "Every accepted meeting should displace something named, not something vague.",
            ),
            additional(
                "demo-8",
                8,
                "Tools are culture",
                "Adopting a chat tool quietly rewrites what counts as responsiveness.",
            ),
            additional(
                "demo-9",
                9,
                "Seasonality over streaks",
                "Sustainable output alternates heavy and light seasons instead of maximizing every week.",
            ),
        ],
        processing_time_ms: 48_213,
    }
}

/// Prepared upstream failure used by `--demo-fail`.
pub(crate) fn demo_analysis_failure() -> ErrorDetail {
    ErrorDetail::new(
        "Could not obtain transcript",
        error_code::TRANSCRIPT_UNAVAILABLE,
    )
    .with_details("no captions published and speech-to-text fallback is disabled")
}
