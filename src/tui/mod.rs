// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive editor/tone-matrix shell (ratatui + crossterm).
//! The event loop is synchronous; rewrite calls run on worker threads and
//! report back through an mpsc channel drained once per tick, so every state
//! mutation happens on the UI thread via the controller.

use std::error::Error;
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::model::{tone_catalog, tone_for_cell, KnobCell, ToneSpec};
use crate::ops::{RewriteTicket, ToneController};
use crate::provider::{Rewrite, RewriteError, RewriteProvider};

mod theme;


const POLL_INTERVAL: Duration = Duration::from_millis(250);
const SIDEBAR_WIDTH: u16 = 36;

type RewriteResult = (RewriteTicket, Result<Rewrite, RewriteError>);

/// Runs the interactive terminal UI until the user quits.
pub fn run(
    controller: ToneController,
    provider: Arc<dyn RewriteProvider>,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(controller, provider);

    while !app.should_quit {
        app.pump_results();
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// RAII wrapper around raw mode + the alternate screen.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<(), Box<dyn Error>> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Editor,
    Matrix,
}

struct App {
    controller: ToneController,
    provider: Arc<dyn RewriteProvider>,
    catalog: Vec<ToneSpec>,
    focus: Focus,
    should_quit: bool,
    results_tx: mpsc::Sender<RewriteResult>,
    results_rx: mpsc::Receiver<RewriteResult>,
}

impl App {
    fn new(controller: ToneController, provider: Arc<dyn RewriteProvider>) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            controller,
            provider,
            catalog: tone_catalog(),
            focus: Focus::Editor,
            should_quit: false,
            results_tx,
            results_rx,
        }
    }

    /// Folds any completed rewrites into the controller. Stale tickets fall
    /// out as no-ops inside `finish_apply`.
    fn pump_results(&mut self) {
        while let Ok((ticket, outcome)) = self.results_rx.try_recv() {
            self.controller.finish_apply(ticket, outcome);
        }
    }

    fn start_apply(&mut self, tone: ToneSpec) {
        let Some(ticket) = self.controller.begin_apply(&tone) else {
            return;
        };

        let provider = Arc::clone(&self.provider);
        let results_tx = self.results_tx.clone();
        let request = ticket.request().clone();
        std::thread::spawn(move || {
            let outcome = provider.rewrite(&request);
            let _ = results_tx.send((ticket, outcome));
        });
    }

    fn apply_knob_tone(&mut self) {
        if let Some(tone) = tone_for_cell(self.controller.state().knob()) {
            self.start_apply(tone);
        }
    }

    fn apply_preset(&mut self, index: usize) {
        if let Some(tone) = self.catalog.get(index).cloned() {
            self.start_apply(tone);
        }
    }

    fn draft_editable(&self) -> bool {
        self.controller.state().log().is_empty()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('z') => self.controller.undo(),
                KeyCode::Char('y') => self.controller.redo(),
                KeyCode::Char('r') => self.controller.reset(),
                KeyCode::Char('n') => self.controller.reset_all(),
                KeyCode::Char('b') => self.controller.hide_bottom_bar(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.controller.stop(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Editor => Focus::Matrix,
                    Focus::Matrix => Focus::Editor,
                };
            }
            _ => match self.focus {
                Focus::Editor => self.handle_editor_key(key),
                Focus::Matrix => self.handle_matrix_key(key),
            },
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if !self.draft_editable() {
            return;
        }
        let draft = self.controller.state().draft_text();
        match key.code {
            KeyCode::Char(c) => {
                let mut text = draft.to_owned();
                text.push(c);
                self.controller.update_text(text);
            }
            KeyCode::Enter => {
                let mut text = draft.to_owned();
                text.push('\n');
                self.controller.update_text(text);
            }
            KeyCode::Backspace => {
                let mut text = draft.to_owned();
                text.pop();
                self.controller.update_text(text);
            }
            _ => {}
        }
    }

    fn handle_matrix_key(&mut self, key: KeyEvent) {
        let knob = self.controller.state().knob();
        match key.code {
            KeyCode::Up => self.controller.set_knob(knob.step(-1, 0)),
            KeyCode::Down => self.controller.set_knob(knob.step(1, 0)),
            KeyCode::Left => self.controller.set_knob(knob.step(0, -1)),
            KeyCode::Right => self.controller.set_knob(knob.step(0, 1)),
            KeyCode::Enter => self.apply_knob_tone(),
            KeyCode::Char(c @ '1'..='4') => {
                self.apply_preset(c as usize - '1' as usize);
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.size();
    let state = app.controller.state();

    let (main_area, footer_area) = if state.bottom_bar_visible() {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (layout[0], Some(layout[1]))
    } else {
        (area, None)
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
        .split(main_area);

    draw_editor(frame, columns[0], app);
    draw_sidebar(frame, columns[1], app);

    if let Some(footer_area) = footer_area {
        draw_footer(frame, footer_area);
    }
}

fn draw_editor(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.controller.state();
    let title = if app.draft_editable() {
        "Editor"
    } else {
        "Editor (read-only while history exists)"
    };
    let border_color = if app.focus == Focus::Editor {
        theme::FOCUS_COLOR
    } else {
        theme::PANEL_COLOR
    };

    let paragraph = Paragraph::new(state.current_text().to_owned())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_sidebar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    draw_matrix(frame, rows[0], app);
    draw_presets(frame, rows[1], app);
    draw_status(frame, rows[2], app);
}

fn draw_matrix(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let knob = app.controller.state().knob();
    let border_color = if app.focus == Focus::Matrix {
        theme::FOCUS_COLOR
    } else {
        theme::PANEL_COLOR
    };

    let axis = Style::default().fg(theme::AXIS_LABEL_COLOR);
    let mut lines = vec![Line::styled("        Professional", axis)];
    for row in 0..3u8 {
        let mut spans = Vec::new();
        spans.push(Span::styled(
            match row {
                1 => "Concise ",
                _ => "        ",
            },
            axis,
        ));
        for col in 0..3u8 {
            let cell = KnobCell::from_row_col(row, col).unwrap_or(KnobCell::CENTER);
            if cell == knob {
                spans.push(Span::styled(" [●] ", Style::default().fg(theme::KNOB_COLOR)));
            } else {
                spans.push(Span::raw(" [ ] "));
            }
        }
        spans.push(Span::styled(
            match row {
                1 => " Expanded",
                _ => "",
            },
            axis,
        ));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled("           Casual", axis));

    let description = tone_for_cell(knob)
        .map(|tone| tone.description().to_owned())
        .unwrap_or_else(|| "Neutral".to_owned());
    lines.push(Line::raw(description));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Tone matrix")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_presets(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let selected_id = app
        .controller
        .state()
        .selected_tone()
        .map(|tone| tone.tone_id().clone());

    let items: Vec<ListItem<'_>> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(i, tone)| {
            let marker = if selected_id.as_ref() == Some(tone.tone_id()) {
                "▶"
            } else {
                " "
            };
            let icon = tone.icon().unwrap_or(" ");
            ListItem::new(format!("{marker}{} {icon} {}", i + 1, tone.label()))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Presets")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PANEL_COLOR)),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.controller.state();
    let log = state.log();

    let mut lines = Vec::new();
    if state.is_loading() {
        let label = state
            .selected_tone()
            .map(|tone| tone.label().to_owned())
            .unwrap_or_default();
        lines.push(Line::styled(
            format!("Rewriting as {label}… (Esc to stop)"),
            Style::default().fg(theme::LOADING_COLOR),
        ));
    }
    if let Some(error) = state.error() {
        lines.push(Line::styled(
            error.to_owned(),
            Style::default().fg(theme::ERROR_COLOR),
        ));
    }
    if log.is_empty() {
        lines.push(Line::raw("No history yet — type, then apply a tone."));
    } else {
        let position = log.cursor().map_or(0, |cursor| cursor + 1);
        lines.push(Line::raw(format!("History {position}/{}", log.len())));
        let mut hints = Vec::new();
        if log.can_undo() {
            hints.push("undo ^Z");
        }
        if log.can_redo() {
            hints.push("redo ^Y");
        }
        if !hints.is_empty() {
            lines.push(Line::raw(hints.join(" · ")));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Status")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PANEL_COLOR)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(theme::FOOTER_KEY_COLOR);
    let label = Style::default().fg(theme::FOOTER_LABEL_COLOR);

    let hints = [
        ("Tab", "focus"),
        ("1-4", "preset"),
        ("↵", "apply"),
        ("^Z", "undo"),
        ("^Y", "redo"),
        ("^R", "reset"),
        ("^N", "reset all"),
        ("Esc", "stop"),
        ("^B", "dismiss"),
        ("^Q", "quit"),
    ];

    let mut spans = Vec::new();
    for (i, (k, l)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", label));
        }
        spans.push(Span::styled(*k, key));
        spans.push(Span::styled(format!(" {l}"), label));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
