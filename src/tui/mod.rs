//! Interactive workout dashboard built with ratatui.
//!
//! The dashboard shows a yearly activity strip, a month calendar and the
//! selected day's exercise progress side by side. All state transitions go
//! through [`Mode`]: the plain dashboard, the add-progress form and the
//! weekly timetable editor are distinct variants, so every key handler
//! works on exactly one screen. A fixed-interval poll reloads the data
//! file, which lets edits from a parallel CLI invocation show up in the
//! running session.

mod views;
mod weekly;

use crate::data::logs::{Logs, RecordMode};
use crate::data::model::WorkoutData;
use crate::data::store::Store;
use crate::libs::git::{BackupPort, GitBackup};
use crate::libs::messages::{self, Message};
use anyhow::Result;
use chrono::{Local, Months, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const RELOAD_INTERVAL: Duration = Duration::from_secs(1);
const BANNER_TTL: Duration = Duration::from_secs(3);

/// Transient status line with an expiry time.
struct Banner {
    text: String,
    error: bool,
    until: Instant,
}

/// Which screen currently owns the keyboard.
enum Mode {
    Dashboard,
    AddForm(AddForm),
    WeeklyEditor(weekly::WeeklyEditor),
}

/// Step of the add-progress form.
enum AddStep {
    Select,
    Amount,
}

/// State of the add-progress form.
struct AddForm {
    step: AddStep,
    selected: usize,
    amount: String,
}

impl AddForm {
    fn new() -> Self {
        Self {
            step: AddStep::Select,
            selected: 0,
            amount: String::new(),
        }
    }
}

/// App state for the dashboard session.
pub struct App {
    store: Store,
    backup: GitBackup,
    data: WorkoutData,
    selected_date: NaiveDate,
    mode: Mode,
    banner: Option<Banner>,
    last_reload: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store) -> Result<Self> {
        let data = store.load()?;
        let backup = GitBackup::new(store.data_dir());
        Ok(Self {
            store,
            backup,
            data,
            selected_date: Local::now().date_naive(),
            mode: Mode::Dashboard,
            banner: None,
            last_reload: Instant::now(),
            should_quit: false,
        })
    }

    /// Runs the dashboard until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.main_loop(&mut terminal);
        restore_terminal()?;
        result
    }

    fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
            self.tick()?;
        }
        Ok(())
    }

    /// Periodic work between input events.
    fn tick(&mut self) -> Result<()> {
        if self.last_reload.elapsed() >= RELOAD_INTERVAL {
            self.data = self.store.load()?;
            self.last_reload = Instant::now();
        }
        if let Some(banner) = &self.banner {
            if banner.until <= Instant::now() {
                self.banner = None;
            }
        }
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                let mode = std::mem::replace(&mut self.mode, Mode::Dashboard);
                self.mode = match mode {
                    Mode::Dashboard => self.dashboard_key(key.code)?,
                    Mode::AddForm(form) => self.add_form_key(form, key.code)?,
                    Mode::WeeklyEditor(editor) => self.weekly_editor_key(editor, key.code)?,
                };
            }
        }
        Ok(())
    }

    fn dashboard_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Left => self.move_selected(-1),
            KeyCode::Right => self.move_selected(1),
            KeyCode::Up => self.move_selected(-7),
            KeyCode::Down => self.move_selected(7),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => self.should_quit = true,
                'p' => self.move_month(-1),
                'n' => self.move_month(1),
                't' => {
                    self.selected_date = Local::now().date_naive();
                    self.set_banner(messages::info(Message::JumpedToToday), false);
                }
                'a' => {
                    if self.data.exercises.is_empty() {
                        self.set_banner(messages::info(Message::NoExercisesConfigured), false);
                    } else {
                        return Ok(Mode::AddForm(AddForm::new()));
                    }
                }
                'w' => return Ok(Mode::WeeklyEditor(weekly::WeeklyEditor::new())),
                'g' => self.push_backup(),
                _ => {}
            },
            _ => {}
        }
        Ok(Mode::Dashboard)
    }

    fn add_form_key(&mut self, mut form: AddForm, code: KeyCode) -> Result<Mode> {
        let names: Vec<String> = self.data.exercises.keys().cloned().collect();
        if names.is_empty() {
            return Ok(Mode::Dashboard);
        }
        // The registry can shrink under the form via the reload poll.
        form.selected = form.selected.min(names.len() - 1);

        match form.step {
            AddStep::Select => match code {
                KeyCode::Esc => return Ok(Mode::Dashboard),
                KeyCode::Up => {
                    form.selected = if form.selected == 0 { names.len() - 1 } else { form.selected - 1 };
                }
                KeyCode::Down => {
                    form.selected = (form.selected + 1) % names.len();
                }
                KeyCode::Enter => form.step = AddStep::Amount,
                _ => {}
            },
            AddStep::Amount => match code {
                KeyCode::Esc => return Ok(Mode::Dashboard),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => form.amount.push(c),
                KeyCode::Backspace => {
                    form.amount.pop();
                }
                KeyCode::Enter => return self.submit_add(form, &names),
                _ => {}
            },
        }
        Ok(Mode::AddForm(form))
    }

    fn submit_add(&mut self, form: AddForm, names: &[String]) -> Result<Mode> {
        let Ok(amount) = form.amount.parse::<f64>() else {
            return Ok(Mode::AddForm(form));
        };
        if amount <= 0.0 {
            return Ok(Mode::AddForm(form));
        }

        let today = Local::now().date_naive();
        if self.selected_date != today {
            self.set_banner(messages::error(Message::CanOnlyLogToday), true);
            return Ok(Mode::Dashboard);
        }

        let name = names[form.selected].clone();
        match Logs::new(&self.store).record(today, &name, amount, RecordMode::Add) {
            Ok(_) => {
                self.reload()?;
                self.set_banner(messages::success(Message::AddedAmount(amount, name)), false);
            }
            Err(err) => self.set_banner(format!("❌ {}", err), true),
        }
        Ok(Mode::Dashboard)
    }

    fn move_selected(&mut self, days: i64) {
        self.selected_date += chrono::Duration::days(days);
    }

    fn move_month(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        self.selected_date = if delta < 0 {
            self.selected_date.checked_sub_months(months).unwrap_or(self.selected_date)
        } else {
            self.selected_date.checked_add_months(months).unwrap_or(self.selected_date)
        };
    }

    fn push_backup(&mut self) {
        let outcome = self.backup.push();
        if outcome.success {
            self.set_banner(format!("✅ {}", outcome.message), false);
        } else {
            self.set_banner(format!("❌ {}", outcome.message), true);
        }
    }

    fn set_banner(&mut self, text: String, error: bool) {
        self.banner = Some(Banner {
            text,
            error,
            until: Instant::now() + BANNER_TTL,
        });
    }

    fn reload(&mut self) -> Result<()> {
        self.data = self.store.load()?;
        self.last_reload = Instant::now();
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        if let Mode::WeeklyEditor(editor) = &self.mode {
            weekly::render(frame, self, editor);
            return;
        }

        let today = Local::now().date_naive();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(frame.area());

        views::render_yearly(frame, chunks[0], &self.data, self.selected_date, today);
        views::render_banner(frame, chunks[1], self.banner.as_ref());

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(30)])
            .split(chunks[2]);
        views::render_calendar(frame, main[0], &self.data, self.selected_date, today);
        match &self.mode {
            Mode::AddForm(form) => views::render_add_form(frame, main[1], form, &self.data),
            _ => views::render_exercises(frame, main[1], &self.data, self.selected_date, today),
        }

        views::render_help(frame, chunks[3]);
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
