//! Terminal front end (ratatui + crossterm)
//!
//! Drives a pet from wall-clock timers: one logic tick per
//! `tick_interval`, one animation step per `anim_interval`.

use crate::actions::PetAction;
use crate::core::error::Result;
use crate::render::{self, colors};
use crate::simulation::pet::PetSimulation;
use crate::ui::state::GameUI;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Timer settings for the interactive loop
#[derive(Debug, Clone, Copy)]
pub struct TerminalOptions {
    pub tick_interval: Duration,
    pub anim_interval: Duration,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
            anim_interval: Duration::from_millis(333),
        }
    }
}

/// Take over the terminal until the player quits
pub fn run(pet: &mut PetSimulation, options: TerminalOptions) -> Result<GameUI> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, || {
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    })?;

    let result = event_loop(&mut terminal, pet, options);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `setup`, calling `restore` if it fails so raw mode never leaks
fn setup_or_restore<T>(setup: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    setup().map_err(|e| {
        restore();
        e
    })
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    pet: &mut PetSimulation,
    options: TerminalOptions,
) -> Result<GameUI> {
    let mut ui = GameUI::new();
    let mut last_tick = Instant::now();
    let mut last_anim = Instant::now();

    while !ui.should_quit {
        terminal.draw(|f| draw(f, pet, &ui))?;

        let until_tick = options.tick_interval.saturating_sub(last_tick.elapsed());
        let until_anim = options.anim_interval.saturating_sub(last_anim.elapsed());

        if event::poll(until_tick.min(until_anim))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key.code, pet, &mut ui);
                }
            }
        }

        if last_tick.elapsed() >= options.tick_interval {
            ui.game_tick(pet);
            last_tick = Instant::now();
        }
        if last_anim.elapsed() >= options.anim_interval {
            ui.animation_tick();
            last_anim = Instant::now();
        }
    }

    Ok(ui)
}

fn handle_key(code: KeyCode, pet: &mut PetSimulation, ui: &mut GameUI) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ui.should_quit = true,
        KeyCode::Char(c) => {
            if let Some(action) = PetAction::from_key(c) {
                ui.perform(pet, action);
            }
        }
        _ => {}
    }
}

fn draw(f: &mut Frame, pet: &PetSimulation, ui: &GameUI) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.size());

    draw_header(f, rows[0], pet, ui);
    draw_bars(f, rows[1], pet);

    let feedback = Paragraph::new(ui.feedback.as_str()).style(Style::default().fg(colors::FEEDBACK));
    f.render_widget(feedback, rows[2]);

    f.render_widget(Paragraph::new(buttons_line(pet)), rows[3]);

    draw_log(f, rows[4], ui);
}

fn draw_log(f: &mut Frame, area: Rect, ui: &GameUI) {
    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line> = ui
        .recent_log(visible)
        .map(|entry| Line::from(entry.message()))
        .collect();
    let log = Paragraph::new(lines).block(Block::default().title("Action Log").borders(Borders::ALL));
    f.render_widget(log, area);
}

fn draw_header(f: &mut Frame, area: Rect, pet: &PetSimulation, ui: &GameUI) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let art = Paragraph::new(render::pet_frame(pet, ui.anim_frame))
        .style(Style::default().fg(colors::species_color(pet.species())));
    f.render_widget(art, cols[0]);

    let info = vec![
        Line::from(Span::styled(
            format!("Name: {}", pet.name()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("State: "),
            Span::styled(
                GameUI::state_text(pet),
                Style::default().fg(colors::state_color(pet.state())),
            ),
        ]),
        Line::from(format!("Species: {}", capitalize(pet.species().as_str()))),
        Line::from(format!("Stage: {}", capitalize(pet.stage().as_str()))),
        Line::from(format!("Tick: {}", ui.tick_count)),
    ];
    f.render_widget(Paragraph::new(info), cols[1]);
}

fn draw_bars(f: &mut Frame, area: Rect, pet: &PetSimulation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let config = pet.config();
    let bars = [
        ("Hunger", pet.hunger(), true),
        ("Happiness", pet.happiness(), false),
        ("Energy", pet.energy(), false),
    ];

    for (row, (title, value, invert)) in rows.iter().zip(bars) {
        let gauge = Gauge::default()
            .block(Block::default().title(title).borders(Borders::ALL))
            .gauge_style(Style::default().fg(colors::BAR_FILL))
            .ratio(render::bar_ratio(value, config.min_stat, config.max_stat, invert))
            .label(value.to_string());
        f.render_widget(gauge, *row);
    }
}

fn buttons_line(pet: &PetSimulation) -> Line<'static> {
    let mut spans = Vec::new();
    for action in PetAction::all() {
        let style = if action.is_available(pet) {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let label = format!(
            "{} [{}]  ",
            capitalize(action.name()),
            action.key().to_ascii_uppercase()
        );
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::raw("Quit [Q]"));
    Line::from(spans)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PetConfig;
    use crate::core::types::Species;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("dragon"), "Dragon");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || restored = true,
        );
        assert!(result.is_err());
        assert!(restored);

        let mut restored = false;
        assert_eq!(setup_or_restore(|| Ok(7), || restored = true).unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn test_keys_drive_actions() {
        let mut pet = PetSimulation::new("Tama", Species::Cat, PetConfig::default());
        let mut ui = GameUI::new();
        handle_key(KeyCode::Char('s'), &mut pet, &mut ui);
        assert!(pet.is_sleeping());
        handle_key(KeyCode::Char('W'), &mut pet, &mut ui);
        assert!(!pet.is_sleeping());
        handle_key(KeyCode::Char('x'), &mut pet, &mut ui);
        assert!(!ui.should_quit);
        handle_key(KeyCode::Char('q'), &mut pet, &mut ui);
        assert!(ui.should_quit);
    }
}
