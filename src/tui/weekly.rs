//! Fullscreen editor for the weekly workout plan.

use super::{views, App, Mode};
use crate::data::model::{PlannedWorkout, TemplateDay};
use crate::data::template::Weekly;
use crate::libs::messages::{self, Message};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// State of the weekly plan editor screen.
pub(super) struct WeeklyEditor {
    day_index: usize,
    entry_index: usize,
    state: EditorState,
}

enum EditorState {
    View,
    Form(EntryForm),
    ConfirmDelete(String),
}

/// Add or edit form for one planned workout.
struct EntryForm {
    editing: bool,
    exercise: String,
    reps: String,
    field: FormField,
}

#[derive(PartialEq)]
enum FormField {
    Exercise,
    Reps,
}

impl WeeklyEditor {
    pub(super) fn new() -> Self {
        Self {
            day_index: 0,
            entry_index: 0,
            state: EditorState::View,
        }
    }

    fn day(&self) -> TemplateDay {
        TemplateDay::ALL[self.day_index]
    }
}

impl EntryForm {
    fn add() -> Self {
        Self {
            editing: false,
            exercise: String::new(),
            reps: String::new(),
            field: FormField::Exercise,
        }
    }

    // Editing keeps the name fixed, only the reps field is open.
    fn edit(workout: &PlannedWorkout) -> Self {
        Self {
            editing: true,
            exercise: workout.exercise_name.clone(),
            reps: workout.reps.to_string(),
            field: FormField::Reps,
        }
    }
}

impl App {
    pub(super) fn weekly_editor_key(&mut self, mut editor: WeeklyEditor, code: KeyCode) -> Result<Mode> {
        match std::mem::replace(&mut editor.state, EditorState::View) {
            EditorState::View => self.editor_view_key(editor, code),
            EditorState::Form(form) => {
                editor.state = self.editor_form_key(editor.day(), form, code)?;
                self.clamp_entry(&mut editor);
                Ok(Mode::WeeklyEditor(editor))
            }
            EditorState::ConfirmDelete(name) => {
                editor.state = self.editor_confirm_key(editor.day(), name, code)?;
                self.clamp_entry(&mut editor);
                Ok(Mode::WeeklyEditor(editor))
            }
        }
    }

    fn editor_view_key(&mut self, mut editor: WeeklyEditor, code: KeyCode) -> Result<Mode> {
        let day = editor.day();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Mode::Dashboard),
            KeyCode::Left => {
                editor.day_index = editor.day_index.saturating_sub(1);
                editor.entry_index = 0;
            }
            KeyCode::Right => {
                editor.day_index = (editor.day_index + 1).min(TemplateDay::ALL.len() - 1);
                editor.entry_index = 0;
            }
            KeyCode::Up => editor.entry_index = editor.entry_index.saturating_sub(1),
            KeyCode::Down => {
                let count = self.planned(day).len();
                if count > 0 {
                    editor.entry_index = (editor.entry_index + 1).min(count - 1);
                }
            }
            KeyCode::Char('a') => editor.state = EditorState::Form(EntryForm::add()),
            KeyCode::Char('e') => {
                if let Some(workout) = self.planned(day).get(editor.entry_index) {
                    editor.state = EditorState::Form(EntryForm::edit(workout));
                }
            }
            KeyCode::Char('d') => {
                if let Some(workout) = self.planned(day).get(editor.entry_index) {
                    editor.state = EditorState::ConfirmDelete(workout.exercise_name.clone());
                }
            }
            _ => {}
        }
        Ok(Mode::WeeklyEditor(editor))
    }

    fn editor_form_key(&mut self, day: TemplateDay, mut form: EntryForm, code: KeyCode) -> Result<EditorState> {
        match code {
            KeyCode::Esc => return Ok(EditorState::View),
            KeyCode::Tab => {
                if !form.editing {
                    form.field = match form.field {
                        FormField::Exercise => FormField::Reps,
                        FormField::Reps => FormField::Exercise,
                    };
                }
            }
            KeyCode::Backspace => {
                match form.field {
                    FormField::Exercise => form.exercise.pop(),
                    FormField::Reps => form.reps.pop(),
                };
            }
            KeyCode::Char(ch) => match form.field {
                FormField::Exercise => form.exercise.push(ch),
                FormField::Reps if ch.is_ascii_digit() => form.reps.push(ch),
                FormField::Reps => {}
            },
            KeyCode::Enter => return self.submit_entry(day, form),
            _ => {}
        }
        Ok(EditorState::Form(form))
    }

    fn submit_entry(&mut self, day: TemplateDay, form: EntryForm) -> Result<EditorState> {
        let name = form.exercise.trim().to_string();
        if name.is_empty() {
            self.set_banner(messages::error(Message::ExerciseNameAndRepsRequired), true);
            return Ok(EditorState::Form(form));
        }
        let reps: u32 = match form.reps.trim().parse() {
            Ok(reps) if reps > 0 => reps,
            _ => {
                self.set_banner(messages::error(Message::RepsMustBePositive), true);
                return Ok(EditorState::Form(form));
            }
        };

        let result = Weekly::new(&self.store).add_or_update(day, &name, reps);
        match result {
            Ok(()) => {
                self.reload()?;
                self.set_banner(messages::success(Message::WeeklyWorkoutAdded(name, reps, day)), false);
                Ok(EditorState::View)
            }
            Err(err) => {
                self.set_banner(format!("❌ {}", err), true);
                Ok(EditorState::Form(form))
            }
        }
    }

    fn editor_confirm_key(&mut self, day: TemplateDay, name: String, code: KeyCode) -> Result<EditorState> {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let result = Weekly::new(&self.store).remove(day, &name);
                match result {
                    Ok(true) => {
                        self.reload()?;
                        self.set_banner(messages::success(Message::WeeklyWorkoutRemoved(name, day)), false);
                    }
                    Ok(false) => self.set_banner(messages::info(Message::WeeklyWorkoutNotPlanned(name, day)), false),
                    Err(err) => self.set_banner(format!("❌ {}", err), true),
                }
                Ok(EditorState::View)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Ok(EditorState::View),
            _ => Ok(EditorState::ConfirmDelete(name)),
        }
    }

    fn planned(&self, day: TemplateDay) -> &[PlannedWorkout] {
        self.data
            .weekly_template
            .as_ref()
            .map(|template| template.day(day))
            .unwrap_or(&[])
    }

    // Submits and removals can shrink the entry list under the cursor.
    fn clamp_entry(&self, editor: &mut WeeklyEditor) {
        let count = self.planned(editor.day()).len();
        editor.entry_index = if count == 0 { 0 } else { editor.entry_index.min(count - 1) };
    }
}

pub(super) fn render(frame: &mut Frame, app: &App, editor: &WeeklyEditor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled("Weekly Plan", Style::default().fg(Color::Cyan).bold())));
    frame.render_widget(title, chunks[0]);
    views::render_banner(frame, chunks[1], app.banner.as_ref());
    render_day_tabs(frame, chunks[2], editor);
    render_entries(frame, chunks[3], app, editor);
    match &editor.state {
        EditorState::View => render_controls(frame, chunks[4]),
        EditorState::Form(form) => render_form(frame, chunks[4], form),
        EditorState::ConfirmDelete(name) => render_confirm(frame, chunks[4], editor.day(), name),
    }
}

fn render_day_tabs(frame: &mut Frame, area: Rect, editor: &WeeklyEditor) {
    let mut spans = Vec::new();
    for (idx, day) in TemplateDay::ALL.iter().enumerate() {
        let style = if idx == editor.day_index {
            Style::default().fg(Color::Cyan).bold().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", day.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App, editor: &WeeklyEditor) {
    let day = editor.day();
    let block = Block::default().borders(Borders::ALL).title(day.title());
    let planned = app.planned(day);

    if planned.is_empty() {
        let empty = Paragraph::new(format!("{}  (press a to add)", Message::NoWorkoutsScheduled))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for (idx, workout) in planned.iter().enumerate() {
        let unit = app
            .data
            .exercises
            .get(&workout.exercise_name)
            .map(|exercise| exercise.unit.as_str())
            .unwrap_or("reps");
        let text = format!("{:<12} {:>4} {}", workout.exercise_name, workout.reps, unit);
        if idx == editor.entry_index {
            lines.push(Line::from(vec![
                Span::styled("▶ ", Style::default().fg(Color::Cyan)),
                Span::styled(text, Style::default().fg(Color::Cyan).bold()),
            ]));
        } else {
            lines.push(Line::from(format!("  {}", text)));
        }
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(frame: &mut Frame, area: Rect, form: &EntryForm) {
    let title = if form.editing { "Edit Workout" } else { "Add Workout" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    let hint = if form.editing {
        "Enter save, Esc cancel"
    } else {
        "Tab switch field, Enter save, Esc cancel"
    };
    let lines = vec![
        field_line("Exercise", &form.exercise, form.field == FormField::Exercise),
        field_line("Reps", &form.reps, form.field == FormField::Reps),
        Line::default(),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let text = if active { format!("{}_", value) } else { value.to_string() };
    let style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(vec![Span::raw(format!("{:<10}", format!("{}:", label))), Span::styled(text, style)])
}

fn render_confirm(frame: &mut Frame, area: Rect, day: TemplateDay, name: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirm")
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(format!("Delete \"{}\" from {}'s schedule?", name, day.title())),
        Line::default(),
        Line::from(Span::styled("y confirm, n cancel", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("←/→ day   ↑/↓ entry   a add   e edit   d delete   q back")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Commands"));
    frame.render_widget(help, area);
}
