// List and grid rendering for GIF views.
// Provides the trending grid, search results list, and history key menu,
// with shared loading and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::gifs::Gif;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Display label for a gif; untitled gifs fall back to their id.
fn gif_label(gif: &Gif) -> &str {
    if gif.title.is_empty() {
        &gif.id
    } else {
        &gif.title
    }
}

/// Truncate to a character budget with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Render the trending grid: one text row per group of three.
pub fn render_trending(
    frame: &mut Frame,
    area: Rect,
    groups: &[&[Gif]],
    scroll: usize,
    loading: bool,
    page: u32,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Trending · page {} ", page));

    if groups.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if loading {
            render_loading(frame, inner, "Loading trending GIFs");
        } else {
            render_empty(frame, inner, "No trending GIFs loaded");
        }
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let cell_width = inner_width.saturating_sub(6).max(3) / 3;
    let visible = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = groups
        .iter()
        .skip(scroll)
        .take(visible)
        .map(|group| {
            let mut spans = Vec::new();
            for (i, gif) in group.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                }
                spans.push(Span::raw(format!(
                    "{:<width$}",
                    truncate(gif_label(gif), cell_width),
                    width = cell_width
                )));
            }
            Line::from(spans)
        })
        .collect();

    if loading && lines.len() < visible {
        lines.push(Line::from(Span::styled(
            "⏳ Loading more...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let text = Paragraph::new(lines).block(block);
    frame.render_widget(text, area);
}

/// Render a flat list of gifs (search results or a recalled history entry).
pub fn render_gif_list(frame: &mut Frame, area: Rect, gifs: &[Gif], title: &str) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    if gifs.is_empty() {
        let text = Paragraph::new("Nothing to show yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = gifs
        .iter()
        .map(|gif| {
            ListItem::new(Line::from(vec![
                Span::raw(gif_label(gif).to_string()),
                Span::styled(
                    format!("  {}", gif.url),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items).block(block);
    frame.render_widget(list_widget, area);
}

/// Render the search history key menu.
pub fn render_history_keys(
    frame: &mut Frame,
    area: Rect,
    keys: &[String],
    selected: Option<usize>,
) {
    let block = Block::default().borders(Borders::ALL).title(" History ");

    if keys.is_empty() {
        let text = Paragraph::new("No searches yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = keys
        .iter()
        .map(|key| ListItem::new(key.as_str()))
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list_widget, area, &mut state);
}

/// Render the search input line.
pub fn render_search_input(frame: &mut Frame, area: Rect, input: &str, pending: usize) {
    let title = if pending > 0 {
        " Search ⏳ ".to_string()
    } else {
        " Search ".to_string()
    };

    let line = Line::from(vec![
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(input.to_string()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("much too long title", 8), "much to…");
    }

    #[test]
    fn test_gif_label_falls_back_to_id() {
        let gif = Gif {
            id: "abc".to_string(),
            title: String::new(),
            url: "https://media.giphy.com/abc.gif".to_string(),
        };
        assert_eq!(gif_label(&gif), "abc");
    }
}
