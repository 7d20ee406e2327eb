use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::App;

/// Height of one recipe card in terminal rows (border + title + link + border)
const CARD_HEIGHT: u16 = 4;
/// Preferred card width; column count is derived from it, minimum two columns
const CARD_WIDTH: u16 = 34;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header strip
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Card grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_grid(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Show cursor in search bar when focused
    if app.search.focused {
        // Border (1) + space + magnifier glyph + space (4 display cols)
        let prefix_width = app.search.query[..app.search.cursor_pos].width() as u16;
        let cursor_x = chunks[1].x + 1 + 4 + prefix_width;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let left = format!(" Refrigerator \u{1F6D2} {} recipes", app.session.catalog_len());
    let padding = (area.width as usize).saturating_sub(left.width());

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(40, 40, 50))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(Color::Rgb(40, 40, 50))),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let paragraph = if app.search.query.is_empty() {
        Paragraph::new(" \u{1F50D} 搜尋食譜")
            .block(block)
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
    } else {
        Paragraph::new(format!(" \u{1F50D} {}", app.search.query))
            .block(block)
            .style(Style::default().fg(Color::White))
    };

    frame.render_widget(paragraph, area);
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    // Recompute grid geometry from the current terminal size
    let columns = ((area.width / CARD_WIDTH).max(2)) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.grid.columns = columns;
    app.grid.visible_rows = visible_rows;

    let total = app.session.visible_len();
    if total == 0 {
        let msg = if app.session.catalog_len() == 0 {
            "No recipes"
        } else {
            "No recipes match this search"
        };
        let para = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let msg_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(para, msg_area);
        return;
    }

    // Column count may have changed with the terminal size
    let max_scroll = app.grid.row_count(total).saturating_sub(visible_rows);
    app.grid.scroll_row = app.grid.scroll_row.min(max_scroll);

    let card_width = area.width / columns as u16;
    let first = app.grid.scroll_row * columns;

    for (slot, n) in (first..total).take(columns * visible_rows).enumerate() {
        let row = (slot / columns) as u16;
        let col = (slot % columns) as u16;
        let card_area = Rect::new(
            area.x + col * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );

        let Some(record) = app.session.visible_record(n) else {
            break;
        };
        let is_selected = app.grid.selected == Some(n);

        let border_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let text_width = inner.width as usize;
        let title_style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let title = truncate_to_width(&record.title, text_width);
        frame.render_widget(
            Paragraph::new(title).style(title_style),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        if inner.height > 1 {
            let link = if record.link.is_empty() {
                "(no link)".to_string()
            } else {
                truncate_to_width(&record.link, text_width)
            };
            frame.render_widget(
                Paragraph::new(link).style(Style::default().fg(Color::DarkGray)),
                Rect::new(inner.x, inner.y + 1, inner.width, 1),
            );
        }
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(
        " {} | {} of {} visible",
        app.status_message,
        app.session.visible_len(),
        app.session.catalog_len()
    );
    let right_text = " Tab:Search  Enter:Open  \u{2190}\u{2191}\u{2192}\u{2193}:Move  Ctrl+Q:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

/// Truncate a string to a display-cell budget, appending an ellipsis when
/// anything was cut. CJK characters are two cells wide.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}
