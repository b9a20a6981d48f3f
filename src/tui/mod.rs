// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive triage shell (ratatui + crossterm): a card stack
//! driven by keys or mouse swipes, a filterable list, the deep-dive overlay,
//! and the simulated progress view while an analysis request is in flight.

use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::model::{fixtures, AnalysisResult, ErrorDetail, TranscriptSource};
use crate::progress::{ProgressPhase, ProgressSimulator, ProgressTicket, COMPLETE_HOLD};
use crate::triage::{classify_release, dismisses_detail, Decision, TriageDeck};
use crate::ui::AnalysisHandoff;

const SAVE_COLOR: Color = Color::LightGreen;
const SKIP_COLOR: Color = Color::LightRed;
const ACCENT_COLOR: Color = Color::Cyan;
const MUTED_COLOR: Color = Color::DarkGray;
const FEATURED_COLOR: Color = Color::Yellow;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅻 🅴 🅰 🅽 🅸 🆃 ";

/// Conversion from terminal cells to gesture units. Cells are roughly twice
/// as tall as wide, so the vertical factor doubles the horizontal one.
const DRAG_UNITS_PER_CELL_X: f32 = 12.0;
const DRAG_UNITS_PER_CELL_Y: f32 = 24.0;

/// How long the demo request "runs" before it settles. Long enough for the
/// progress walk to get past its first phases.
const DEMO_REQUEST_LATENCY: Duration = Duration::from_secs(12);

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_LIFETIME: Duration = Duration::from_secs(2);

/// Where this session's analysis results come from.
#[derive(Debug, Clone)]
pub enum AnalysisSource {
    /// Built-in demo result, delivered through the full request lifecycle.
    Demo,
    /// Demo request that settles with a prepared upstream failure.
    DemoFail,
    /// A completed result loaded by the CLI; installed immediately, and
    /// replayed through the request lifecycle on re-analyze.
    File { result: Box<AnalysisResult> },
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(runtime: Handle, source: AnalysisSource) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(runtime, source);
    app.bootstrap();

    while !app.should_quit {
        app.poll_background();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Stack,
    List,
}

impl ViewMode {
    fn toggle(self) -> Self {
        match self {
            Self::Stack => Self::List,
            Self::List => Self::Stack,
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// A result that settled successfully and is waiting out the brief
/// `complete` hold before it replaces the deck.
#[derive(Debug)]
struct PendingInstall {
    ready_at: Instant,
    result: AnalysisResult,
}

/// Mouse drag in progress: the origin anchors the offset, the last sample
/// anchors the release velocity.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    origin: (u16, u16),
    last: (u16, u16),
    last_at: Instant,
}

#[derive(Debug, Clone, Copy)]
struct DragRelease {
    offset: (f32, f32),
    velocity: (f32, f32),
}

impl DragTracker {
    fn begin(column: u16, row: u16, at: Instant) -> Self {
        Self {
            origin: (column, row),
            last: (column, row),
            last_at: at,
        }
    }

    fn update(&mut self, column: u16, row: u16, at: Instant) {
        self.last = (column, row);
        self.last_at = at;
    }

    fn release(self, column: u16, row: u16, at: Instant) -> DragRelease {
        let offset = (
            (f32::from(column) - f32::from(self.origin.0)) * DRAG_UNITS_PER_CELL_X,
            (f32::from(row) - f32::from(self.origin.1)) * DRAG_UNITS_PER_CELL_Y,
        );
        let dt = at.duration_since(self.last_at).as_secs_f32();
        let velocity = if dt > 0.0 {
            (
                (f32::from(column) - f32::from(self.last.0)) * DRAG_UNITS_PER_CELL_X / dt,
                (f32::from(row) - f32::from(self.last.1)) * DRAG_UNITS_PER_CELL_Y / dt,
            )
        } else {
            (0.0, 0.0)
        };
        DragRelease { offset, velocity }
    }
}

struct App {
    runtime: Handle,
    source: AnalysisSource,
    view: ViewMode,
    triage: Option<TriageDeck>,
    analysis: Option<AnalysisResult>,
    sim: ProgressSimulator,
    ticket: Option<ProgressTicket>,
    handoff: Arc<Mutex<AnalysisHandoff>>,
    request: Option<JoinHandle<()>>,
    pending_install: Option<PendingInstall>,
    last_error: Option<ErrorDetail>,
    list_state: ListState,
    drag: Option<DragTracker>,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(runtime: Handle, source: AnalysisSource) -> Self {
        let sim = ProgressSimulator::new(runtime.clone());
        Self {
            runtime,
            source,
            view: ViewMode::Stack,
            triage: None,
            analysis: None,
            sim,
            ticket: None,
            handoff: Arc::new(Mutex::new(AnalysisHandoff::default())),
            request: None,
            pending_install: None,
            last_error: None,
            list_state: ListState::default(),
            drag: None,
            toast: None,
            show_help: false,
            should_quit: false,
        }
    }

    fn bootstrap(&mut self) {
        match &self.source {
            AnalysisSource::File { result } => {
                let result = (**result).clone();
                self.install(result);
            }
            AnalysisSource::Demo | AnalysisSource::DemoFail => self.start_analysis(),
        }
    }

    /// Launches the stand-in request task and starts the progress estimate.
    /// A request already in flight is preempted: its timer is invalidated
    /// before the new one exists, and its eventual delivery is superseded.
    fn start_analysis(&mut self) {
        if let Some(request) = self.request.take() {
            request.abort();
        }
        self.pending_install = None;
        self.last_error = None;
        self.ticket = Some(self.sim.start());

        let outcome = match &self.source {
            AnalysisSource::Demo => Ok(fixtures::demo_analysis_result()),
            AnalysisSource::DemoFail => Err(fixtures::demo_analysis_failure()),
            AnalysisSource::File { result } => Ok((**result).clone()),
        };
        let handoff = Arc::clone(&self.handoff);
        self.request = Some(self.runtime.spawn(async move {
            tokio::time::sleep(DEMO_REQUEST_LATENCY).await;
            lock(&handoff).deliver(outcome);
        }));
    }

    /// Drains the hand-off slot and advances the install hold. Runs once per
    /// event-loop tick; everything here is synchronous.
    fn poll_background(&mut self) {
        let outcome = lock(&self.handoff).take();
        if let Some(outcome) = outcome {
            match (self.ticket.take(), outcome) {
                (Some(ticket), Ok(result)) => {
                    self.sim.settle_success(ticket);
                    self.pending_install = Some(PendingInstall {
                        ready_at: Instant::now() + COMPLETE_HOLD,
                        result,
                    });
                }
                (Some(ticket), Err(detail)) => {
                    self.sim.settle_failure(ticket);
                    self.set_toast(format!("Analysis failed: {detail}"));
                    self.last_error = Some(detail);
                }
                // A delivery with no outstanding ticket belongs to a
                // preempted request; drop it.
                (None, _) => {}
            }
        }

        if let Some(pending) = self.pending_install.take() {
            if Instant::now() >= pending.ready_at {
                self.install(pending.result);
                self.sim.acknowledge();
            } else {
                self.pending_install = Some(pending);
            }
        }
    }

    /// Replaces the deck with a fresh triage session. A result that fails
    /// deck validation is rejected whole; the previous deck (if any) stays.
    fn install(&mut self, result: AnalysisResult) {
        match TriageDeck::from_analysis(&result) {
            Ok(triage) => {
                self.list_state = ListState::default();
                if !triage.visible().is_empty() {
                    self.list_state.select(Some(0));
                }
                self.triage = Some(triage);
                self.analysis = Some(result);
                self.last_error = None;
            }
            Err(err) => {
                self.set_toast(format!("Rejected analysis result: {err}"));
            }
        }
    }

    fn detail_open(&self) -> bool {
        self.triage
            .as_ref()
            .is_some_and(|triage| triage.focused_id().is_some())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.detail_open() {
            match code {
                KeyCode::Esc => self.close_detail(),
                KeyCode::Char('q') => return true,
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.view = self.view.toggle(),
            KeyCode::Char('a') => {
                self.start_analysis();
                self.set_toast("Analyzing…");
            }
            KeyCode::Char('m') => self.reveal_secondary(),
            _ => match self.view {
                ViewMode::Stack => self.handle_stack_key(code),
                ViewMode::List => self.handle_list_key(code),
            },
        }

        false
    }

    fn handle_stack_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.apply_decision(Decision::Skip),
            KeyCode::Right | KeyCode::Char('l') => self.apply_decision(Decision::Save),
            KeyCode::Char('u') => self.undo_decision(),
            KeyCode::Enter => self.open_current_detail(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.move_list_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_list_selection(-1),
            KeyCode::Char('x') => self.skip_selected(),
            KeyCode::Char('u') => self.undo_list_skip(),
            KeyCode::Enter => self.expand_selected(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag = Some(DragTracker::begin(mouse.column, mouse.row, Instant::now()));
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = &mut self.drag {
                    drag.update(mouse.column, mouse.row, Instant::now());
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(drag) = self.drag.take() else {
                    return;
                };
                let release = drag.release(mouse.column, mouse.row, Instant::now());
                self.handle_drag_release(release);
            }
            _ => {}
        }
    }

    fn handle_drag_release(&mut self, release: DragRelease) {
        if self.detail_open() {
            if dismisses_detail(release.offset) {
                self.close_detail();
            }
            return;
        }
        if self.view == ViewMode::Stack {
            if let Some(decision) = classify_release(release.offset, release.velocity) {
                self.apply_decision(decision);
            }
        }
    }

    fn apply_decision(&mut self, decision: Decision) {
        let message = match self.triage.as_mut() {
            None => "No analysis loaded".to_owned(),
            Some(triage) => match triage.decide(decision) {
                Ok(id) => {
                    let title = triage
                        .deck()
                        .find(id.as_str())
                        .map(|insight| insight.title().to_owned())
                        .unwrap_or_default();
                    match decision {
                        Decision::Save => format!("Saved: {title}"),
                        Decision::Skip => format!("Skipped: {title}"),
                    }
                }
                Err(err) => err.to_string(),
            },
        };
        self.set_toast(message);
    }

    fn undo_decision(&mut self) {
        let message = match self.triage.as_mut() {
            None => "No analysis loaded".to_owned(),
            Some(triage) => match triage.undo() {
                Some(token) => match token.kind() {
                    Decision::Save => format!("Undid save ({})", token.insight_id()),
                    Decision::Skip => format!("Undid skip ({})", token.insight_id()),
                },
                None => "Nothing to undo".to_owned(),
            },
        };
        self.set_toast(message);
    }

    fn reveal_secondary(&mut self) {
        let message = match self.triage.as_mut() {
            None => "No analysis loaded".to_owned(),
            Some(triage) => {
                let hidden = triage.deck().secondary().len();
                if triage.reveal_secondary() {
                    format!("Revealed {hidden} more insights")
                } else {
                    "No more insights to reveal".to_owned()
                }
            }
        };
        self.set_toast(message);
    }

    fn open_current_detail(&mut self) {
        let Some(id) = self
            .triage
            .as_ref()
            .and_then(|triage| triage.current().map(|insight| insight.id().to_string()))
        else {
            self.set_toast("No current insight");
            return;
        };
        let message = match self.triage.as_mut() {
            None => return,
            Some(triage) => match triage.open_detail(&id) {
                Ok(()) => return,
                Err(err) => err.to_string(),
            },
        };
        self.set_toast(message);
    }

    fn close_detail(&mut self) {
        if let Some(triage) = self.triage.as_mut() {
            triage.close_detail();
        }
    }

    fn visible_len(&self) -> usize {
        self.triage
            .as_ref()
            .map(|triage| triage.visible().len())
            .unwrap_or(0)
    }

    fn move_list_selection(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_list_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
        } else if self.list_state.selected().map_or(true, |index| index >= len) {
            self.list_state.select(Some(len - 1));
        }
    }

    fn selected_visible_id(&self) -> Option<String> {
        let triage = self.triage.as_ref()?;
        let visible = triage.visible();
        let index = self.list_state.selected()?;
        visible.get(index).map(|insight| insight.id().to_string())
    }

    fn skip_selected(&mut self) {
        let Some(id) = self.selected_visible_id() else {
            self.set_toast("Nothing selected");
            return;
        };
        let message = match self.triage.as_mut() {
            None => return,
            Some(triage) => match triage.skip(&id) {
                Ok(skipped) => {
                    let title = triage
                        .deck()
                        .find(skipped.as_str())
                        .map(|insight| insight.title().to_owned())
                        .unwrap_or_default();
                    format!("Skipped: {title}")
                }
                Err(err) => err.to_string(),
            },
        };
        self.set_toast(message);
        self.clamp_list_selection();
    }

    fn undo_list_skip(&mut self) {
        let message = match self.triage.as_mut() {
            None => "No analysis loaded".to_owned(),
            Some(triage) => match triage.undo_skip() {
                Some(id) => format!("Restored {id}"),
                None => "Nothing to restore".to_owned(),
            },
        };
        self.set_toast(message);
        self.clamp_list_selection();
    }

    fn expand_selected(&mut self) {
        let Some(id) = self.selected_visible_id() else {
            self.set_toast("Nothing selected");
            return;
        };
        let message = match self.triage.as_mut() {
            None => return,
            Some(triage) => match triage.expand(&id) {
                Ok(()) => return,
                Err(err) => err.to_string(),
            },
        };
        self.set_toast(message);
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_LIFETIME,
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            request.abort();
        }
    }
}

fn lock(handoff: &Mutex<AnalysisHandoff>) -> MutexGuard<'_, AnalysisHandoff> {
    handoff.lock().unwrap_or_else(PoisonError::into_inner)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

// Extracted header/card/list/detail/progress/help rendering helpers.
include!("chrome.rs");
