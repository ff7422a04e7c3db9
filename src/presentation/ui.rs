use crate::application::{App, AppMode, FetchStatus, Focus, Picker};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Seu marketplace de coleta de resíduos.";
const DESCRIPTION: &str = "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente.";
const BRAND: Color = Color::Rgb(0x34, 0xCB, 0x79);
const HEADING: Color = Color::Rgb(0x32, 0x21, 0x53);
const MUTED: Color = Color::Rgb(0x6C, 0x6C, 0x80);

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_select(f, app, Picker::Region, chunks[1]);
    render_select(f, app, Picker::Locality, chunks[2]);
    render_button(f, app, chunks[3]);
    render_status_bar(f, app, chunks[4]);

    if let AppMode::Picking(picker) = app.mode {
        render_picker_popup(f, app, picker);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "♻ Ecoleta",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DESCRIPTION, Style::default().fg(MUTED))),
    ];
    let header = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(header, area);
}

fn render_select(f: &mut Frame, app: &App, picker: Picker, area: Rect) {
    let focused = matches!(
        (app.focus, picker),
        (Focus::Region, Picker::Region) | (Focus::Locality, Picker::Locality)
    );
    let title = match picker {
        Picker::Region => "UF",
        Picker::Locality => "Cidade",
    };

    let (text, text_style) = match app.status(picker) {
        FetchStatus::Loading => ("Carregando...".to_string(), Style::default().fg(MUTED)),
        _ if app.selected_value(picker) == crate::domain::UNSELECTED => {
            (app.selected_label(picker).to_string(), Style::default().fg(MUTED))
        }
        _ => (app.selected_label(picker).to_string(), Style::default()),
    };

    let border_style = match app.status(picker) {
        FetchStatus::Failed(_) => Style::default().fg(Color::Red),
        _ if focused => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };

    let select = Paragraph::new(Line::from(vec![
        Span::styled(text, text_style),
        Span::raw(" ▾"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    f.render_widget(select, area);
}

fn render_button(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Submit {
        Style::default().bg(BRAND).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRAND)
    };
    let button = Paragraph::new("→  Entrar")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BRAND)));
    f.render_widget(button, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let FetchStatus::Failed(reason) = &app.region_status {
        (
            format!("r: tentar novamente | Erro ao carregar UFs: {reason}"),
            Style::default().fg(Color::Red),
        )
    } else if let FetchStatus::Failed(reason) = &app.locality_status {
        (
            format!("r: tentar novamente | Erro ao carregar cidades: {reason}"),
            Style::default().fg(Color::Red),
        )
    } else if let Some(ref status) = app.status_message {
        (status.clone(), Style::default().fg(Color::Yellow))
    } else {
        let hint = match app.mode {
            AppMode::Picking(_) => "↑↓: mover | letra: pular | Enter: escolher | Esc: fechar",
            _ => "Tab/↑↓: mover | Enter: abrir/entrar | r: recarregar | q: sair",
        };
        (hint.to_string(), Style::default())
    };

    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_picker_popup(f: &mut Frame, app: &App, picker: Picker) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = app
        .picker_entries(picker)
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            if i == 0 {
                ListItem::new(label).style(Style::default().fg(MUTED))
            } else {
                ListItem::new(label)
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.placeholder())
                .style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(Some(app.picker_index));
    f.render_stateful_widget(list, popup_area, &mut state);
}
