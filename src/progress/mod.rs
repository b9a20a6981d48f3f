// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Simulated progress for the analysis request.
//!
//! The pipeline offers no real progress signal, so the indicator is an
//! estimate: starting a request resets it to `fetching` and a timer walks the
//! remaining phases on a fixed cadence until the request settles or a new
//! start preempts it. A generation token guards every write, so a preempted
//! or canceled timer can never publish a stale phase, and cancellation is
//! safe to repeat after the timer has already finished. None of this touches
//! the real request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Cadence of the simulated phase walk.
pub const STEP_INTERVAL: Duration = Duration::from_secs(5);

/// How long the host keeps the `complete` state on screen before handing the
/// result off.
pub const COMPLETE_HOLD: Duration = Duration::from_millis(500);

/// Coarse phase of the outstanding request, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Fetching,
    Transcript,
    Analyzing,
    Generating,
    Complete,
}

impl ProgressPhase {
    /// Phases the timer walks after the `fetching` baseline.
    const TIMED: [Self; 3] = [Self::Transcript, Self::Analyzing, Self::Generating];

    pub fn percent(self) -> u16 {
        match self {
            Self::Idle | Self::Fetching => 0,
            Self::Transcript => 30,
            Self::Analyzing => 60,
            Self::Generating => 85,
            Self::Complete => 100,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Fetching => "Fetching video details…",
            Self::Transcript => "Pulling the transcript…",
            Self::Analyzing => "Reading between the lines…",
            Self::Generating => "Writing up insights…",
            Self::Complete => "Done",
        }
    }
}

/// One-shot token for the request the simulator is currently estimating.
///
/// Settling consumes the ticket, so a settle can only ever happen once per
/// start; a ticket from a preempted start settles into a no-op.
#[derive(Debug)]
pub struct ProgressTicket {
    token: u64,
}

/// Owns the progress phase for the duration of exactly one outstanding
/// request.
#[derive(Debug)]
pub struct ProgressSimulator {
    runtime: Handle,
    phase: Arc<Mutex<ProgressPhase>>,
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
}

impl ProgressSimulator {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            phase: Arc::new(Mutex::new(ProgressPhase::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    pub fn phase(&self) -> ProgressPhase {
        *lock(&self.phase)
    }

    /// A request is being estimated (started and not yet settled, canceled,
    /// or acknowledged).
    pub fn in_flight(&self) -> bool {
        !matches!(self.phase(), ProgressPhase::Idle | ProgressPhase::Complete)
    }

    /// Starts estimating a new request: invalidates any previous timer,
    /// resets the phase to the `fetching` baseline, and schedules the phase
    /// walk. Returns the ticket the eventual settle must present.
    pub fn start(&mut self) -> ProgressTicket {
        self.invalidate();
        let token = self.generation.load(Ordering::SeqCst);
        *lock(&self.phase) = ProgressPhase::Fetching;

        let phase_slot = Arc::clone(&self.phase);
        let generation = Arc::clone(&self.generation);
        self.timer = Some(self.runtime.spawn(async move {
            let mut timer = interval(STEP_INTERVAL);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of an interval completes immediately.
            timer.tick().await;
            for phase in ProgressPhase::TIMED {
                timer.tick().await;
                let mut slot = lock(&phase_slot);
                if generation.load(Ordering::SeqCst) != token {
                    return;
                }
                *slot = phase;
            }
        }));

        ProgressTicket { token }
    }

    /// The request settled successfully: stop ticking and force `complete`.
    /// The host holds that state for [`COMPLETE_HOLD`] before installing the
    /// result and acknowledging. A stale ticket (preempted start) is a no-op.
    pub fn settle_success(&mut self, ticket: ProgressTicket) {
        if !self.invalidate_if_current(&ticket) {
            return;
        }
        *lock(&self.phase) = ProgressPhase::Complete;
    }

    /// The request failed: stop ticking immediately and unwind to `idle`.
    /// A stale ticket is a no-op.
    pub fn settle_failure(&mut self, ticket: ProgressTicket) {
        if !self.invalidate_if_current(&ticket) {
            return;
        }
        *lock(&self.phase) = ProgressPhase::Idle;
    }

    /// The host has taken the hand-off; return the indicator to `idle`.
    /// Does nothing if a new request already reset the phase.
    pub fn acknowledge(&mut self) {
        let mut slot = lock(&self.phase);
        if *slot == ProgressPhase::Complete {
            *slot = ProgressPhase::Idle;
        }
    }

    /// Cancels any active timer and resets to `idle`. Safe to call multiple
    /// times and after the timer has already finished.
    pub fn cancel(&mut self) {
        self.invalidate();
        *lock(&self.phase) = ProgressPhase::Idle;
    }

    fn invalidate(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn invalidate_if_current(&mut self, ticket: &ProgressTicket) -> bool {
        if ticket.token != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        self.invalidate();
        true
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.invalidate();
    }
}

fn lock(slot: &Mutex<ProgressPhase>) -> MutexGuard<'_, ProgressPhase> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::{ProgressPhase, ProgressSimulator, STEP_INTERVAL};
    use tokio::runtime::Handle;
    use tokio::time::advance;

    async fn settle_runtime() {
        // Let the timer task observe any tick that just fired.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn start_resets_to_the_fetching_baseline() {
        let mut sim = ProgressSimulator::new(Handle::current());
        assert_eq!(sim.phase(), ProgressPhase::Idle);

        let _ticket = sim.start();
        assert_eq!(sim.phase(), ProgressPhase::Fetching);
        assert_eq!(sim.phase().percent(), 0);
        assert!(sim.in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn walks_the_phase_list_on_the_step_interval() {
        let mut sim = ProgressSimulator::new(Handle::current());
        let _ticket = sim.start();
        settle_runtime().await;

        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Transcript);

        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Analyzing);

        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Generating);

        // The walk holds at its last phase until the request settles.
        advance(STEP_INTERVAL).await;
        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Generating);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_unwinds_to_idle_and_stops_the_timer() {
        let mut sim = ProgressSimulator::new(Handle::current());
        let ticket = sim.start();
        settle_runtime().await;

        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Transcript);

        sim.settle_failure(ticket);
        assert_eq!(sim.phase(), ProgressPhase::Idle);

        advance(STEP_INTERVAL).await;
        advance(STEP_INTERVAL).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn success_forces_complete() {
        let mut sim = ProgressSimulator::new(Handle::current());
        let ticket = sim.start();
        settle_runtime().await;

        sim.settle_success(ticket);
        assert_eq!(sim.phase(), ProgressPhase::Complete);
        assert_eq!(sim.phase().percent(), 100);

        sim.acknowledge();
        assert_eq!(sim.phase(), ProgressPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_preempts_the_previous_timer() {
        let mut sim = ProgressSimulator::new(Handle::current());
        let first = sim.start();
        settle_runtime().await;

        advance(STEP_INTERVAL / 2).await;
        settle_runtime().await;
        let _second = sim.start();
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Fetching);

        // The first timer would have fired here; it must be gone.
        advance(STEP_INTERVAL / 2).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Fetching);

        // A settle from the preempted request is a stale no-op.
        sim.settle_success(first);
        assert_eq!(sim.phase(), ProgressPhase::Fetching);

        // The second timer ticks on its own schedule.
        advance(STEP_INTERVAL / 2).await;
        settle_runtime().await;
        assert_eq!(sim.phase(), ProgressPhase::Transcript);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent_even_after_the_timer_finished() {
        let mut sim = ProgressSimulator::new(Handle::current());
        let _ticket = sim.start();
        settle_runtime().await;

        // Let the whole walk finish naturally.
        for _ in 0..4 {
            advance(STEP_INTERVAL).await;
            settle_runtime().await;
        }
        assert_eq!(sim.phase(), ProgressPhase::Generating);

        sim.cancel();
        sim.cancel();
        assert_eq!(sim.phase(), ProgressPhase::Idle);
        assert!(!sim.in_flight());
    }
}
