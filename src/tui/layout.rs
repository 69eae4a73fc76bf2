use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActivePane, InputMode, TuiApp};

pub fn render(frame: &mut Frame, app: &TuiApp) {
    let mut constraints = Vec::new();
    if app.input_mode != InputMode::Normal {
        constraints.push(Constraint::Length(3)); // input bar
        if !app.suggestions.is_empty() {
            let rows = app.suggestions.len().min(5) as u16;
            constraints.push(Constraint::Length(rows + 2));
        }
    }
    constraints.push(Constraint::Length(8)); // subscriptions
    constraints.push(Constraint::Percentage(40)); // articles
    constraints.push(Constraint::Min(10)); // content
    constraints.push(Constraint::Length(1)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = 0;
    if app.input_mode != InputMode::Normal {
        render_input_bar(frame, app, chunks[next]);
        next += 1;
        if !app.suggestions.is_empty() {
            render_suggestions(frame, app, chunks[next]);
            next += 1;
        }
    }
    render_subscriptions_pane(frame, app, chunks[next]);
    render_articles_pane(frame, app, chunks[next + 1]);
    render_content_pane(frame, app, chunks[next + 2]);
    render_status_bar(frame, app, chunks[next + 3]);
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn selection_style(selected: bool, pane_active: bool) -> Option<Style> {
    if selected && pane_active {
        Some(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else if selected {
        Some(Style::default().bg(Color::DarkGray))
    } else {
        None
    }
}

fn render_input_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let title = match app.input_mode {
        InputMode::AddUrl => " Add feed URL (Enter:confirm Tab:complete Esc:cancel) ",
        InputMode::RenameTitle => " New display title (Enter:confirm Esc:cancel) ",
        InputMode::Normal => " ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(app.input.as_str()).block(block);
    frame.render_widget(paragraph, area);
}

fn render_suggestions(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .take(5)
        .map(|(title, url)| {
            ListItem::new(Line::from(vec![
                Span::styled(title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(url.clone(), Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Suggestions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_subscriptions_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Subscriptions;

    let items: Vec<ListItem> = app
        .subscriptions
        .iter()
        .enumerate()
        .map(|(i, sub)| {
            let mut item = ListItem::new(sub.display_title().to_string());
            if let Some(style) = selection_style(i == app.subscription_index, is_active) {
                item = item.style(style);
            }
            item
        })
        .collect();

    let title = format!(" Subscriptions ({}) ", app.subscriptions.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_articles_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Articles;
    let articles = app.current_articles();

    let items: Vec<ListItem> = articles
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let mut item = ListItem::new(article.display_title().to_string());
            if let Some(style) = selection_style(i == app.article_index, is_active) {
                item = item.style(style);
            }
            item
        })
        .collect();

    let title = format!(" Articles ({}) ", articles.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_content_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Content;

    let (title, content) = if let Some(article) = app.selected_article() {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            article.display_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if !article.link.is_empty() {
            lines.push(Line::from(Span::styled(
                article.link.clone(),
                Style::default().fg(Color::Blue),
            )));
        }
        lines.push(Line::from(""));

        if !article.summary.is_empty() {
            for line in article.summary.lines() {
                lines.push(Line::from(line.to_string()));
            }
            lines.push(Line::from(""));
        }
        for line in article.content.lines() {
            lines.push(Line::from(line.to_string()));
        }

        (
            format!(" {} ", article.display_title()),
            Text::from(lines),
        )
    } else {
        (" Content ".to_string(), Text::from("No article selected"))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if app.is_fetching {
        "Loading...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        "j/k:Navigate  Tab:Pane  Enter:Load  a:Add  d:Remove  e:Rename  o:Open  R:Refresh  q:Quit"
            .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
