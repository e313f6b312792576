//! Ratatui popup wired to the search controller.
//!
//! The terminal stands in for the extension popup: a search bar on top, the
//! paginated results list below, a status footer. All decision logic lives in
//! [`SearchController`]; this loop only forwards input events, runs the fetch
//! worker, and draws whatever state comes back.

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::io;
use std::time::{Duration, Instant};

use crate::controller::SearchController;
use crate::fetch::FlaticonFetcher;
use crate::fetch::worker::spawn_fetch_worker;
use crate::model::types::Phase;
use crate::ui::theme::ThemePalette;
use crate::ui::{open_in_browser, provider_search_url};

/// Selection this close to the end of the list counts as "near the bottom"
/// and triggers the next page, the popup's 100px scroll margin translated to
/// rows.
const SCROLL_THRESHOLD: usize = 5;

pub fn footer_legend() -> &'static str {
    "Esc quit | type to search | Enter search now | Up/Down select | F8 open icon | Ctrl+O flaticon.com | F5 retry | F2 theme"
}

pub fn run_tui(offline: bool, once: bool) -> Result<()> {
    if once {
        return run_headless();
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let fetcher = FlaticonFetcher::new(offline)?;
    let (request_tx, outcome_rx) = spawn_fetch_worker(Box::new(fetcher));
    let mut controller = SearchController::new();

    let mut input = String::new();
    let mut list_state = ListState::default();
    let mut theme_dark = true;
    let mut needs_draw = true;
    let tick_rate = Duration::from_millis(50);

    loop {
        if needs_draw {
            terminal.draw(|f| {
                let palette = if theme_dark { ThemePalette::dark() } else { ThemePalette::light() };
                draw(f, palette, &input, &controller, &mut list_state);
            })?;
            needs_draw = false;
        }

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            let selected = list_state.selected().unwrap_or(0);
            let total = controller.state().accumulated.len();
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let url = provider_search_url(controller.state().query.as_str());
                    if let Err(err) = open_in_browser(&url) {
                        tracing::warn!("could not open browser: {err}");
                    }
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    controller.on_query_changed(&input);
                    needs_draw = true;
                }
                KeyCode::Backspace => {
                    input.pop();
                    controller.on_query_changed(&input);
                    needs_draw = true;
                }
                KeyCode::Enter => {
                    if let Some(request) = controller.on_submit(&input) {
                        request_tx.send(request)?;
                    }
                    list_state.select(Some(0));
                }
                KeyCode::Down => {
                    if total > 0 {
                        let next = (selected + 1).min(total - 1);
                        list_state.select(Some(next));
                        if total - next <= SCROLL_THRESHOLD
                            && let Some(request) = controller.on_scroll_near_bottom()
                        {
                            request_tx.send(request)?;
                        }
                        needs_draw = true;
                    }
                }
                KeyCode::Up => {
                    if total > 0 {
                        list_state.select(Some(selected.saturating_sub(1)));
                        needs_draw = true;
                    }
                }
                KeyCode::PageDown => {
                    if total > 0 {
                        let next = (selected + 10).min(total - 1);
                        list_state.select(Some(next));
                        if total - next <= SCROLL_THRESHOLD
                            && let Some(request) = controller.on_scroll_near_bottom()
                        {
                            request_tx.send(request)?;
                        }
                        needs_draw = true;
                    }
                }
                KeyCode::PageUp => {
                    if total > 0 {
                        list_state.select(Some(selected.saturating_sub(10)));
                        needs_draw = true;
                    }
                }
                KeyCode::F(8) => {
                    if let Some(record) = controller.state().accumulated.get(selected)
                        && let Err(err) = open_in_browser(&record.flaticon_url)
                    {
                        tracing::warn!("could not open browser: {err}");
                    }
                }
                KeyCode::F(5) => {
                    if let Some(request) = controller.on_retry() {
                        request_tx.send(request)?;
                    }
                }
                KeyCode::F(2) => {
                    theme_dark = !theme_dark;
                    needs_draw = true;
                }
                _ => {}
            }
        }

        if let Some(request) = controller.tick(Instant::now()) {
            request_tx.send(request)?;
        }
        while let Ok(outcome) = outcome_rx.try_recv() {
            controller.apply_outcome(outcome);
        }
        if controller.take_dirty() {
            let total = controller.state().accumulated.len();
            if total == 0 {
                list_state.select(None);
            } else if list_state.selected().unwrap_or(0) >= total {
                list_state.select(Some(0));
            } else if list_state.selected().is_none() {
                list_state.select(Some(0));
            }
            needs_draw = true;
        }
    }

    teardown_terminal()
}

fn draw(
    f: &mut Frame,
    palette: ThemePalette,
    input: &str,
    controller: &SearchController,
    list_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // search bar
                Constraint::Min(0),    // results
                Constraint::Length(1), // footer
            ]
            .as_ref(),
        )
        .split(f.area());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(input.to_string(), Style::default().fg(palette.text)),
        Span::styled("▏", Style::default().fg(palette.accent)),
    ]))
    .block(
        Block::default()
            .title(Span::styled("Flaticon search", palette.title()))
            .borders(Borders::ALL),
    );
    f.render_widget(bar, chunks[0]);

    let state = controller.state();
    let results_block = Block::default().title("Results").borders(Borders::ALL);
    match state.phase {
        Phase::Idle => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Type to search icons; results load as you scroll.",
                Style::default().fg(palette.hint),
            )))
            .block(results_block);
            f.render_widget(hint, chunks[1]);
        }
        Phase::Loading => {
            let loading = Paragraph::new(Line::from(Span::styled(
                format!("Searching \"{}\"…", state.query),
                Style::default().fg(palette.accent),
            )))
            .block(results_block);
            f.render_widget(loading, chunks[1]);
        }
        Phase::Empty => {
            let lines = vec![
                Line::from(format!("No icons found for \"{}\".", state.query)),
                Line::from(""),
                Line::from(Span::styled(
                    "Try a different term, or press Ctrl+O to search on flaticon.com.",
                    Style::default().fg(palette.hint),
                )),
            ];
            f.render_widget(Paragraph::new(lines).block(results_block), chunks[1]);
        }
        Phase::Error => {
            let lines = vec![
                Line::from(Span::styled(
                    "Search failed.",
                    Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press F5 to retry.",
                    Style::default().fg(palette.hint),
                )),
            ];
            f.render_widget(Paragraph::new(lines).block(results_block), chunks[1]);
        }
        Phase::Loaded | Phase::LoadingMore => {
            let items: Vec<ListItem> = state
                .accumulated
                .iter()
                .map(|record| {
                    ListItem::new(Line::from(vec![
                        Span::styled(record.title.clone(), Style::default().fg(palette.text)),
                        Span::raw("  "),
                        Span::styled(format!("#{}", record.id), Style::default().fg(palette.hint)),
                        Span::raw("  "),
                        Span::styled(record.image_url.clone(), Style::default().fg(palette.hint)),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(results_block)
                .highlight_style(palette.selected())
                .highlight_symbol("▶ ");
            f.render_stateful_widget(list, chunks[1], list_state);
        }
    }

    let status = match state.phase {
        Phase::LoadingMore => format!("Showing {} icons — loading more…", state.accumulated.len()),
        Phase::Loaded if state.has_more => {
            format!("Showing {} icons (scroll for more)", state.accumulated.len())
        }
        Phase::Loaded => format!("Showing {} icons — end of results", state.accumulated.len()),
        _ => String::new(),
    };
    let footer = if status.is_empty() {
        Line::from(Span::styled(footer_legend(), Style::default().fg(palette.hint)))
    } else {
        Line::from(vec![
            Span::styled(status, Style::default().fg(palette.accent_alt)),
            Span::raw("  "),
            Span::styled(footer_legend(), Style::default().fg(palette.hint)),
        ])
    };
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

/// `--once` smoke path: exercise the full controller + worker + catalog flow
/// without touching the terminal or the network.
fn run_headless() -> Result<()> {
    let fetcher = FlaticonFetcher::new(true)?;
    let (request_tx, outcome_rx) = spawn_fetch_worker(Box::new(fetcher));
    let mut controller = SearchController::new();

    let request = controller
        .on_submit("ring")
        .ok_or_else(|| anyhow::anyhow!("submit produced no request"))?;
    request_tx.send(request)?;
    let outcome = outcome_rx.recv_timeout(Duration::from_secs(10))?;
    controller.apply_outcome(outcome);

    let state = controller.state();
    anyhow::ensure!(state.phase == Phase::Loaded, "headless search did not load");
    println!("ok: {} icons for \"{}\"", state.accumulated.len(), state.query);
    Ok(())
}

fn teardown_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
