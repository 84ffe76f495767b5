//! Calculator screen rendering.

use super::ThemeColors;
use crate::app::App;
use crate::recipe::PanSize;
use crate::share::SHARE_TITLE;
use crate::text::{column_width, pad_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the calculator screen.
pub(super) fn draw_calculator(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Inputs, recipe, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_inputs(f, app, chunks[0], &colors);

    if app.show_help {
        draw_help(f, chunks[1], &colors);
    } else {
        draw_recipe(f, app, chunks[1], &colors);
    }

    draw_status(f, app, chunks[2], &colors);
    draw_keymap(f, chunks[3], &colors);
}

fn block<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

fn draw_inputs(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let mut pan_line = vec![Span::styled(
        "Mida paella: ",
        Style::default().fg(colors.label),
    )];
    for size in PanSize::ALL {
        let text = format!(" {} cm ", size);
        let style = if size == app.inputs.pan_size {
            Style::default()
                .fg(colors.selected_fg)
                .bg(colors.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        pan_line.push(Span::styled(text, style));
        pan_line.push(Span::raw(" "));
    }

    let guests_style = if app.guests_invalid {
        Style::default().fg(colors.invalid).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.amount).add_modifier(Modifier::BOLD)
    };
    let guests_line = vec![
        Span::styled("Persones:    ", Style::default().fg(colors.label)),
        Span::styled(format!("{}▏", app.guests_field), guests_style),
    ];

    let title = format!(" {} ", SHARE_TITLE);
    let paragraph = Paragraph::new(vec![Line::from(pan_line), Line::from(guests_line)])
        .block(block(&title, colors));

    f.render_widget(paragraph, area);
}

fn draw_recipe(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let recipe = app.recipe();
    let width = column_width(recipe.entries().map(|(name, _)| name));

    let items: Vec<ListItem<'_>> = recipe
        .lines()
        .iter()
        .map(|line| {
            let value_style = if line.amount.is_some() {
                Style::default().fg(colors.amount)
            } else {
                Style::default().fg(colors.label)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    pad_to_width(&line.name, width),
                    Style::default().fg(colors.text),
                ),
                Span::raw("  "),
                Span::styled(line.quantity.clone(), value_style),
            ]))
        })
        .collect();

    let title = format!(
        " Ingredients · {} persones · {} cm ",
        app.view.inputs.guests, app.view.inputs.pan_size
    );

    let list = List::new(items).block(block(&title, colors));

    f.render_widget(list, area);
}

const HELP: [(&str, &str); 7] = [
    ("h/l, ←/→, Tab", "Change pan size"),
    ("j/k, ↓/↑, -/+", "One guest less/more"),
    ("0-9, Backspace", "Edit guest count"),
    ("s", "Copy recipe to clipboard"),
    ("T", "Cycle theme"),
    ("?", "Toggle this help"),
    ("q or Esc", "Quit"),
];

const KEYMAP: &str = "q:quit | hl:pan | jk/-+:guests | 0-9:type | s:share | T:theme | ?:help";

fn draw_help(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard shortcuts",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let width = column_width(HELP.iter().map(|(keys, _)| *keys));
    lines.extend(
        HELP.iter()
            .map(|(keys, action)| Line::from(format!("  {} - {}", pad_to_width(keys, width), action))),
    );

    let paragraph = Paragraph::new(lines)
        .block(block(" Help ", colors))
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(app.status.as_str())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP)
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
