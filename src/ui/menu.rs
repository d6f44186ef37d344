// Menu bar rendering.
// Renders the static two-entry navigation menu as a tab bar.

use ratatui::{prelude::*, widgets::*};

use crate::app::{MENU, Tab};

/// Draw the menu bar at the top of the screen.
pub fn draw_menu(frame: &mut Frame, active_tab: Tab, area: Rect) {
    let titles: Vec<Line> = MENU
        .iter()
        .map(|option| {
            let style = if option.tab == active_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(
                format!("{} {}", option.icon, option.label),
                style,
            ))
        })
        .collect();

    let selected_index = MENU
        .iter()
        .position(|option| option.tab == active_tab)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" gifgrid ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
