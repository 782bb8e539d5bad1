//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::features::focus::TimerMode;
use crate::tui::app::{App, InputMode};

const DEFAULT_HINT: &str =
    "space:start/pause | r:reset | 1-3:mode | [ ]:duration | a:add | c:done | s:select | d:del | m:mute | ?:help | q:quit";

const HOW_TO_USE: [(&str, &str); 7] = [
    ("Choose a task", "Pick a task to complete."),
    ("Set a timer", "Set a timer for 25 minutes."),
    (
        "Work",
        "Focus on the task until the timer rings (switch off all your notifications).",
    ),
    (
        "Take a break",
        "After the timer rings, take a short break of 5 minutes.",
    ),
    (
        "Repeat",
        "Return to step 2 and repeat the cycle until you've completed four pomodoros.",
    ),
    (
        "Take a longer break",
        "After four pomodoros, take a longer break of 15 minutes.",
    ),
    (
        "Repeat",
        "Once the break is over, return to step 2 and repeat the cycle.",
    ),
];

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: mode tabs, clock, progress, tasks, input, summary, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Length(3), // Clock
            Constraint::Length(1), // Progress
            Constraint::Min(3),    // Tasks
            Constraint::Length(3), // New task input
            Constraint::Length(2), // Sessions / current task
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_clock(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_tasks(frame, app, chunks[3]);
    render_input(frame, app, chunks[4]);
    render_summary(frame, app, chunks[5]);
    render_status_bar(frame, app, chunks[6]);

    if app.show_help {
        render_help(frame);
    }
}

/// Render the mode selector.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode = app.view.timer_state().mode;
    let titles: Vec<Line<'_>> = TimerMode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| Line::from(format!("{} {}", i + 1, m.display_name())))
        .collect();
    let selected = TimerMode::ALL.iter().position(|m| *m == mode).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .title(" Simple Focus Timer ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the countdown, pulsing while the visual alert is up.
fn render_clock(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let timer = app.view.timer();
    let state = timer.state();

    let clock_style = if app.view.is_alert_active() {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else if state.is_running {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let run_label = if state.is_running { "running" } else { "paused" };
    let duration_label = timer
        .duration_choice()
        .map_or_else(|| state.mode.display_name().to_string(), |c| c.to_string());

    let mut spans = vec![
        Span::styled(timer.format_remaining(), clock_style),
        Span::styled(
            format!("  {run_label} · {duration_label}"),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    spans.push(Span::styled(
        if app.view.is_muted() { "  [muted]" } else { "  [sound on]" },
        Style::default().fg(Color::DarkGray),
    ));
    if app.view.is_ringing() {
        spans.push(Span::styled(
            "  RINGING (S to stop)",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let clock = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(clock, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.view.timer().progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(progress)
        .label("");

    frame.render_widget(gauge, area);
}

/// Render the task list.
fn render_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.view.current_task().map(|t| t.id);

    let items: Vec<ListItem<'_>> = app
        .view
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;
            let is_current = current == Some(task.id);

            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let text_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(
                    format!("{checkbox} "),
                    Style::default().fg(if task.completed {
                        Color::Green
                    } else {
                        Color::White
                    }),
                ),
                Span::styled(task.text.as_str(), text_style),
            ];
            if is_current {
                spans.push(Span::styled(
                    "  ◀ current",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            }

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(
        " Tasks ({} open / {}) ",
        app.view.task_list().pending_count(),
        app.view.tasks().len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    if !app.view.tasks().is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = match app.input_mode {
        InputMode::Editing => (
            format!("{}_", app.input),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (
            "Add a new task (a)".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    );

    frame.render_widget(input, area);
}

fn render_summary(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![Line::from(format!(
        "Sessions completed: {}",
        app.view.sessions_completed()
    ))];
    if let Some(task) = app.view.current_task() {
        lines.push(Line::from(vec![
            Span::raw("Current task: "),
            Span::styled(
                task.text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(DEFAULT_HINT);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the "how to use" panel over the timer.
fn render_help(frame: &mut Frame<'_>) {
    let area = centered_rect(70, 60, frame.area());

    let lines: Vec<Line<'_>> = HOW_TO_USE
        .iter()
        .enumerate()
        .map(|(i, (step, detail))| {
            Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(*step, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(": {detail}")),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" How to use the Pomodoro timer (any key to close) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Rectangle of `percent_x` by `percent_y` centered in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
