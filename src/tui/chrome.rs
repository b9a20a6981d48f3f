// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Header/card/list/detail/progress/help rendering helpers used by the TUI.
/// Keeps `tui::mod` focused on app state and event handling.
fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    draw_header(frame, app, header_area);

    let phase = app.sim.phase();
    if phase != ProgressPhase::Idle {
        draw_progress(frame, phase, main_area);
    } else if app.triage.is_some() {
        match app.view {
            ViewMode::Stack => draw_stack(frame, app, main_area),
            ViewMode::List => draw_list(frame, app, main_area),
        }
    } else if app.last_error.is_some() {
        draw_failure(frame, app, main_area);
    } else {
        draw_empty(frame, main_area);
    }

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };
    let status = Paragraph::new(footer_help_line(app, &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.detail_open() {
        render_detail(frame, app, main_area);
    }
    if app.show_help {
        render_help(frame, main_area);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = match &app.analysis {
        Some(analysis) => {
            let meta = &analysis.metadata;
            let source = match meta.transcript_source {
                TranscriptSource::YoutubeCaptions => "captions",
                TranscriptSource::WhisperStt => "whisper",
            };
            vec![
                Line::from(vec![
                    Span::styled(
                        meta.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  ({})", meta.channel_name),
                        Style::default().fg(MUTED_COLOR),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(format!("{} · {} · ", meta.duration_display, source)),
                    Span::styled(
                        format!("LeanScore {}", analysis.lean_score.score),
                        Style::default().fg(ACCENT_COLOR),
                    ),
                    Span::styled(
                        format!(" — {}", analysis.lean_score.reason),
                        Style::default().fg(MUTED_COLOR),
                    ),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No analysis loaded".to_owned(),
            Style::default().fg(MUTED_COLOR),
        ))],
    };

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" LeanIt "));
    frame.render_widget(header, area);
}

fn draw_progress(frame: &mut Frame<'_>, phase: ProgressPhase, area: Rect) {
    let gauge_area = centered_rect(60, 24, area);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Analyzing "))
        .gauge_style(Style::default().fg(ACCENT_COLOR))
        .percent(phase.percent())
        .label(format!("{}% · {}", phase.percent(), phase.message()));
    frame.render_widget(gauge, gauge_area);
}

fn draw_failure(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(detail) = &app.last_error else {
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            detail.error.clone(),
            Style::default().fg(SKIP_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.error_code.clone(),
            Style::default().fg(MUTED_COLOR),
        )),
    ];
    if let Some(details) = &detail.details {
        lines.push(Line::from(""));
        lines.push(Line::from(details.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "a — try again".to_owned(),
        Style::default().fg(ACCENT_COLOR),
    )));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Analysis failed "));
    frame.render_widget(panel, centered_rect(70, 40, area));
}

fn draw_empty(frame: &mut Frame<'_>, area: Rect) {
    let panel = Paragraph::new("Press a to analyze")
        .alignment(Alignment::Center)
        .style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(panel, centered_rect(50, 20, area));
}

fn draw_stack(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(triage) = app.triage.as_ref() else {
        return;
    };

    if triage.is_finished() {
        draw_finished(frame, triage, area);
        return;
    }

    let window = triage.lookahead();
    let card_area = centered_rect(64, 62, area);

    // Peeking cards first, deepest at the back.
    for depth in (1..window.len()).rev() {
        let Some(insight) = window.get(depth) else {
            continue;
        };
        let shifted = shift_rect(card_area, (depth * 2) as u16, depth as u16, area);
        frame.render_widget(Clear, shifted);
        let underlay = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED_COLOR))
            .title(format!(" #{} ", insight.rank()));
        frame.render_widget(underlay, shifted);
    }

    if let Some(insight) = window.first() {
        frame.render_widget(Clear, card_area);
        let mut lines = vec![
            Line::from(Span::styled(
                insight.title().to_owned(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(insight.core_point().to_owned()),
        ];
        if let Some(context) = insight.supporting_context() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                context.to_owned(),
                Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
        if insight.deep_dive().is_some() {
            lines.push(Line::from(Span::styled(
                "▸ deep dive on save".to_owned(),
                Style::default().fg(ACCENT_COLOR),
            )));
        }

        let featured = if insight.is_featured() { " ★" } else { "" };
        let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT_COLOR))
                .title(format!(" #{}{featured} ", insight.rank())),
        );
        frame.render_widget(card, card_area);
    }

    let remaining = triage.deck().working_len().saturating_sub(triage.cursor());
    let mut counts = vec![
        Span::styled(
            format!("Saved {}", triage.saved_count()),
            Style::default().fg(SAVE_COLOR),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("Skipped {}", triage.stack_skipped_count()),
            Style::default().fg(SKIP_COLOR),
        ),
        Span::raw(" · "),
        Span::raw(format!("{remaining} left")),
    ];
    if triage.has_more() {
        counts.push(Span::styled(
            format!("  (m — +{} more)", triage.deck().secondary().len()),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    if area.height > 0 {
        let counts_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let counts_line = Paragraph::new(Line::from(counts)).alignment(Alignment::Center);
        frame.render_widget(counts_line, counts_area);
    }
}

fn draw_finished(frame: &mut Frame<'_>, triage: &TriageDeck, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "All caught up!".to_owned(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("Saved {}", triage.saved_count()),
                Style::default().fg(SAVE_COLOR),
            ),
            Span::raw(" · "),
            Span::styled(
                format!("Skipped {}", triage.stack_skipped_count()),
                Style::default().fg(SKIP_COLOR),
            ),
        ]),
        Line::from(""),
    ];
    if triage.has_more() {
        lines.push(Line::from(Span::styled(
            format!("m — show {} more insights", triage.deck().secondary().len()),
            Style::default().fg(ACCENT_COLOR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "a — analyze another video".to_owned(),
            Style::default().fg(MUTED_COLOR),
        )));
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, centered_rect(54, 40, area));
}

fn draw_list(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let (items, title, hint) = match app.triage.as_ref() {
        None => return,
        Some(triage) => {
            let visible = triage.visible();
            let items: Vec<ListItem<'static>> = visible
                .iter()
                .map(|insight| {
                    let featured = if insight.is_featured() { "★ " } else { "  " };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>2} ", insight.rank()),
                            Style::default().fg(MUTED_COLOR),
                        ),
                        Span::styled(featured.to_owned(), Style::default().fg(FEATURED_COLOR)),
                        Span::raw(insight.title().to_owned()),
                        Span::styled(
                            format!("  — {}", truncate(insight.core_point(), 56)),
                            Style::default().fg(MUTED_COLOR),
                        ),
                    ]))
                })
                .collect();
            let title = format!(
                " Insights ({} shown · {} skipped) ",
                visible.len(),
                triage.list_skipped_count()
            );
            let hint = if triage.has_more() {
                Some(format!(
                    "m — show {} more insights",
                    triage.deck().secondary().len()
                ))
            } else {
                None
            };
            (items, title, hint)
        }
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let list_area = layout[0];
    let hint_area = layout[1];

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, list_area, &mut app.list_state);

    if let Some(hint) = hint {
        let hint_line = Paragraph::new(Span::styled(hint, Style::default().fg(ACCENT_COLOR)))
            .alignment(Alignment::Center);
        frame.render_widget(hint_line, hint_area);
    }
}

fn render_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(triage) = app.triage.as_ref() else {
        return;
    };
    let Some(insight) = triage.focused() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            insight.title().to_owned(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("rank #{}", insight.rank()),
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(""),
    ];

    match insight.deep_dive() {
        Some(dive) => {
            lines.push(Line::from(dive.extended_explanation().to_owned()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Key arguments".to_owned(),
                Style::default().fg(ACCENT_COLOR),
            )));
            for argument in dive.key_arguments() {
                lines.push(Line::from(format!("• {argument}")));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Context".to_owned(),
                Style::default().fg(ACCENT_COLOR),
            )));
            lines.push(Line::from(Span::styled(
                format!("… {}", dive.local_context().before()),
                Style::default().fg(MUTED_COLOR),
            )));
            lines.push(Line::from(Span::styled(
                format!("{} …", dive.local_context().after()),
                Style::default().fg(MUTED_COLOR),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Deep dive not available for this insight.".to_owned(),
                Style::default().fg(MUTED_COLOR),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc — close · drag down — dismiss".to_owned(),
        Style::default().fg(MUTED_COLOR),
    )));

    let overlay_area = centered_rect(78, 78, area);
    frame.render_widget(Clear, overlay_area);
    let overlay = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_COLOR))
            .title(" Deep dive "),
    );
    frame.render_widget(overlay, overlay_area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let help_area = centered_rect(62, 70, area);
    frame.render_widget(Clear, help_area);

    let key_style = Style::default().fg(FOOTER_KEY_COLOR);
    let header_style = Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);
    let key_col_width = "←/h, →/l".len();

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("?", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("q", "Quit", key_col_width, key_style));
    lines.push(help_kv("Tab", "Switch stack/list view", key_col_width, key_style));
    lines.push(help_kv("a", "Analyze (again)", key_col_width, key_style));
    lines.push(help_kv("m", "Show more insights", key_col_width, key_style));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("--- Stack ---", header_style)));
    lines.push(help_kv("←/h, →/l", "Skip / save the top card", key_col_width, key_style));
    lines.push(help_kv("drag", "Swipe left/right to decide", key_col_width, key_style));
    lines.push(help_kv("u", "Undo the last decision", key_col_width, key_style));
    lines.push(help_kv("Enter", "Open the deep dive", key_col_width, key_style));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("--- List ---", header_style)));
    lines.push(help_kv("j/k, ↑/↓", "Move selection", key_col_width, key_style));
    lines.push(help_kv("x", "Skip the selected insight", key_col_width, key_style));
    lines.push(help_kv("u", "Restore the last skip", key_col_width, key_style));
    lines.push(help_kv("Enter", "Expand the deep dive", key_col_width, key_style));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("--- Detail ---", header_style)));
    lines.push(help_kv("Esc", "Close", key_col_width, key_style));
    lines.push(help_kv("drag ↓", "Dismiss", key_col_width, key_style));

    let help = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default().borders(Borders::ALL).title(" Help "),
    );
    frame.render_widget(help, help_area);
}

fn help_kv(key: &str, description: &str, key_col_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<key_col_width$}  "), key_style),
        Span::raw(description.to_owned()),
    ])
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    push_footer_entry(&mut spans, "VIEW", "⇥");
    match app.view {
        ViewMode::Stack => {
            push_footer_entry(&mut spans, "SKIP", "←");
            push_footer_entry(&mut spans, "SAVE", "→");
            push_footer_entry(&mut spans, "UNDO", "u");
            push_footer_entry(&mut spans, "DIVE", "⏎");
        }
        ViewMode::List => {
            push_footer_entry(&mut spans, "MOVE", "j/k");
            push_footer_entry(&mut spans, "SKIP", "x");
            push_footer_entry(&mut spans, "UNDO", "u");
            push_footer_entry(&mut spans, "OPEN", "⏎");
        }
    }
    push_footer_entry(&mut spans, "MORE", "m");
    push_footer_entry(&mut spans, "HELP", "?");
    push_footer_entry(&mut spans, "QUIT", "q");

    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str) {
    spans.push(Span::styled(
        format!("{label} "),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        format!("{key}  "),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

/// Shifts a rect down-right, clamped to stay inside `bounds`.
fn shift_rect(rect: Rect, dx: u16, dy: u16, bounds: Rect) -> Rect {
    let x = rect.x.saturating_add(dx);
    let y = rect.y.saturating_add(dy);
    let width = rect
        .width
        .min(bounds.x.saturating_add(bounds.width).saturating_sub(x));
    let height = rect
        .height
        .min(bounds.y.saturating_add(bounds.height).saturating_sub(y));
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
