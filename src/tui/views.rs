//! Widget rendering for the dashboard screens.

use super::{AddForm, AddStep, Banner};
use crate::data::logs::{self, DayStatus};
use crate::data::model::{date_key, WorkoutData};
use crate::libs::messages::Message;
use chrono::{Datelike, NaiveDate};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const LIST_BAR_WIDTH: usize = 10;

/// GitHub-style activity strip for the selected year.
pub(super) fn render_yearly(frame: &mut Frame, area: Rect, data: &WorkoutData, selected: NaiveDate, today: NaiveDate) {
    let year = selected.year();
    let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return;
    };

    // Rows are weekdays Sunday through Saturday, columns are weeks.
    let offset = jan1.weekday().num_days_from_sunday() as usize;
    let mut rows: Vec<Vec<Span>> = (0..7)
        .map(|row| if row < offset { vec![Span::raw(" ")] } else { Vec::new() })
        .collect();

    let mut date = jan1;
    while date.year() == year {
        let row = date.weekday().num_days_from_sunday() as usize;
        let span = match logs::day_status(data, date, today) {
            DayStatus::Future => Span::styled("·", Style::default().fg(Color::DarkGray)),
            status => Span::styled("•", Style::default().fg(yearly_color(status))),
        };
        rows[row].push(span);
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("{} Activity", year),
        Style::default().fg(Color::Cyan).bold(),
    ))];
    lines.extend(rows.into_iter().map(Line::from));
    lines.push(Line::from(vec![
        Span::styled("•", Style::default().fg(Color::Green)),
        Span::raw(" Complete   "),
        Span::styled("•", Style::default().fg(Color::Yellow)),
        Span::raw(" Partial   "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw(" Rest"),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

pub(super) fn render_banner(frame: &mut Frame, area: Rect, banner: Option<&Banner>) {
    let Some(banner) = banner else {
        return;
    };
    let style = if banner.error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(Paragraph::new(banner.text.as_str()).style(style), area);
}

/// Month calendar with per-day completion colors.
pub(super) fn render_calendar(frame: &mut Frame, area: Rect, data: &WorkoutData, selected: NaiveDate, today: NaiveDate) {
    let block = Block::default().borders(Borders::ALL).title(selected.format("%B %Y").to_string());

    let mut lines = Vec::new();
    let header: Vec<Span> = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|day| Span::styled(format!("{:^4}", day), Style::default().fg(Color::DarkGray)))
        .collect();
    lines.push(Line::from(header));

    let Some(first) = selected.with_day(1) else {
        return;
    };
    let mut week: Vec<Span> = vec![Span::raw("    "); first.weekday().num_days_from_sunday() as usize];
    let mut date = first;
    while date.month() == selected.month() {
        let mut style = Style::default().fg(calendar_color(logs::day_status(data, date, today)));
        if date == today {
            style = style.bold();
        }
        if date == selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        week.push(Span::styled(format!(" {:>2} ", date.day()), style));
        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("■", Style::default().fg(Color::Green)),
        Span::raw(" done  "),
        Span::styled("■", Style::default().fg(Color::Yellow)),
        Span::raw(" partial  "),
        Span::styled("■", Style::default().fg(Color::Red)),
        Span::raw(" missed"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Per-exercise progress for the selected day.
pub(super) fn render_exercises(frame: &mut Frame, area: Rect, data: &WorkoutData, selected: NaiveDate, today: NaiveDate) {
    let block = Block::default().borders(Borders::ALL).title(format!("Progress {}", date_key(selected)));

    if data.exercises.is_empty() {
        let empty = Paragraph::new(Message::NoExercisesConfigured.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let future = selected > today;
    let mut lines = Vec::new();
    for (name, exercise) in &data.exercises {
        let current = logs::amount_for(data, selected, name);
        let met = current >= exercise.daily_target;
        let percent = logs::completion_percentage(current, exercise.daily_target).min(100);

        let icon = if met && !future {
            Span::styled("✓ ", Style::default().fg(Color::Green))
        } else {
            Span::styled("○ ", Style::default().fg(Color::DarkGray))
        };
        let bar_color = if future {
            Color::DarkGray
        } else if met {
            Color::Green
        } else if current > 0.0 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            icon,
            Span::styled(format!("{:<10}", name), Style::default().bold()),
            Span::raw(format!(" {:>7} ", format!("{}/{}", current, exercise.daily_target))),
            Span::raw(format!("{:<5}", exercise.unit)),
            Span::styled(dot_bar(percent), Style::default().fg(bar_color)),
            Span::styled(format!(" {:>4}%", percent), Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two-step form for logging progress on today.
pub(super) fn render_add_form(frame: &mut Frame, area: Rect, form: &AddForm, data: &WorkoutData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Exercise Progress")
        .border_style(Style::default().fg(Color::Cyan));

    let names: Vec<_> = data.exercises.iter().collect();
    let mut lines = Vec::new();
    match form.step {
        AddStep::Select => {
            lines.push(Line::from(Span::styled(
                "↑/↓ select, Enter confirm, Esc cancel",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
            for (idx, (name, exercise)) in names.iter().enumerate() {
                if idx == form.selected {
                    lines.push(Line::from(vec![
                        Span::styled("▶ ", Style::default().fg(Color::Cyan)),
                        Span::styled(format!("{} ({})", name, exercise.unit), Style::default().fg(Color::Cyan).bold()),
                    ]));
                } else {
                    lines.push(Line::from(format!("  {} ({})", name, exercise.unit)));
                }
            }
        }
        AddStep::Amount => {
            if let Some((name, exercise)) = names.get(form.selected) {
                lines.push(Line::from(format!("Exercise: {} ({})", name, exercise.unit)));
            }
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::raw("Amount: "),
                Span::styled(format!("{}_", form.amount), Style::default().fg(Color::Cyan)),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Enter save, Esc cancel", Style::default().fg(Color::DarkGray))));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub(super) fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("←/→ day   ↑/↓ week   p/n month   t today   a add   w weekly   g push   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Commands"));
    frame.render_widget(help, area);
}

fn yearly_color(status: DayStatus) -> Color {
    match status {
        DayStatus::Complete => Color::Green,
        DayStatus::Partial => Color::Yellow,
        _ => Color::DarkGray,
    }
}

fn calendar_color(status: DayStatus) -> Color {
    match status {
        DayStatus::Complete => Color::Green,
        DayStatus::Partial => Color::Yellow,
        DayStatus::None => Color::Red,
        DayStatus::Future => Color::DarkGray,
    }
}

fn dot_bar(percent: i64) -> String {
    let filled = (percent.clamp(0, 100) as usize * LIST_BAR_WIDTH + 50) / 100;
    format!("{}{}", "•".repeat(filled), "·".repeat(LIST_BAR_WIDTH - filled))
}
