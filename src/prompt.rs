//! Interactive live search prompt.
//!
//! Every keystroke feeds the coordinator; a fixed tick pumps the debounce
//! timer and the response channel, and the screen is redrawn from
//! [`SearchView`] whenever it changes. Rendering never talks to the
//! backend.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use tracing::warn;

use laf_search::{HttpBackend, LiveSearch, ReportSummary, SearchView};

use crate::settings::ResolvedConfig;

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const MAX_ROWS: usize = 10;

/// Run the interactive prompt until the user exits with Esc or Ctrl-C.
pub(crate) fn run(backend: Arc<HttpBackend>, settings: &ResolvedConfig) -> Result<()> {
    // Fetched once and shown while the input is empty. Failure here only
    // costs the idle screen.
    let recent = backend.latest_reports().unwrap_or_else(|err| {
        warn!(error = %err, "failed to fetch recent reports");
        Vec::new()
    });

    let mut search = LiveSearch::with_quiet_period(backend, settings.quiet_period);
    let _guard = RawModeGuard::acquire()?;
    run_loop(&mut search, &recent)
}

/// Raw terminal mode held for the lifetime of the prompt; restored on all
/// exit paths, including panics.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn run_loop(search: &mut LiveSearch, recent: &[ReportSummary]) -> Result<()> {
    let mut query = String::new();
    let mut last_frame = String::new();

    loop {
        search.tick();

        let frame = render_frame(&query, search.view(), recent);
        if frame != last_frame {
            draw(&frame)?;
            last_frame = frame;
        }

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Enter => search.search_now(&query),
                KeyCode::Backspace => {
                    query.pop();
                    search.input(&query);
                }
                KeyCode::Char(ch) => {
                    query.push(ch);
                    search.input(&query);
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}

fn render_frame(query: &str, view: &SearchView, recent: &[ReportSummary]) -> String {
    let mut lines = vec![format!("find> {query}")];

    if query.trim().is_empty() {
        if !recent.is_empty() {
            lines.push(String::new());
            lines.push("Recently posted".to_string());
            lines.extend(result_lines(recent));
        }
    } else if view.is_searching {
        lines.push("searching...".to_string());
    } else if view.no_results {
        lines.push(format!("No reports matching '{}'", query.trim()));
    } else if !view.results.is_empty() {
        lines.push(String::new());
        lines.extend(result_lines(&view.results));
    }

    lines.push(String::new());
    lines.push("Esc to quit, Enter to search without waiting".to_string());
    lines.join("\r\n")
}

fn result_lines(reports: &[ReportSummary]) -> Vec<String> {
    reports
        .iter()
        .take(MAX_ROWS)
        .map(|report| {
            let mut line = format!("  [{}] {}", report.item_type.label(), report.item_name);
            if let Some(location) = &report.item_location {
                line.push_str(&format!(" ({location})"));
            }
            line
        })
        .collect()
}

fn draw(frame: &str) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(stdout, "{frame}")?;
    stdout.flush()?;
    Ok(())
}
