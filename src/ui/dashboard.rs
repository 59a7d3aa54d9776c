use crate::model::{StatusKind, Unit};
use crate::ui::app::App;
use crate::ui::layout::{self, pressed_area, DashboardLayout};
use crate::view::{format_aed, format_area, text_or_placeholder};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

// Palette
const BRAND_DARK: Color = Color::Rgb(0x4A, 0x3C, 0x2A); // #4a3c2a - title
const BRAND_TEXT: Color = Color::Rgb(0x33, 0x33, 0x33); // #333333 - card labels
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - footer

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const LABEL_STYLE: Style = Style::new().fg(BRAND_MUTED);

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    draw_header(frame, layout.header, app);
    draw_counters(frame, layout.counters, app);
    draw_floor_grid(frame, &layout, app);

    let help = if app.selected.is_some() {
        " Esc/x Close | click outside to close | q Quit "
    } else {
        " ←→ Unit | ↑↓ Floor | Enter/click Details | PgUp/PgDn Scroll | q Quit "
    };
    draw_footer(frame, layout.footer, help);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.is_loading() {
        format!(" Inventory Board | loading {} ", app.source_label)
    } else {
        format!(
            " {} | {} units | {} floors ",
            app.view.project_name,
            app.view.counts.total(),
            app.view.grid.floors.len()
        )
    };

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_counters(frame: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (kind, card) in StatusKind::ALL.iter().zip(cards.iter()) {
        let value = app.view.counts.get(*kind);
        let text = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(kind.color()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(kind.label(), Style::default().fg(BRAND_TEXT))),
        ];
        let widget = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(widget, *card);
    }
}

fn draw_floor_grid(frame: &mut Frame, layout: &DashboardLayout, app: &App) {
    let block = Block::default()
        .title(format!(" Floors ({}) ", app.view.grid.floors.len()))
        .borders(Borders::ALL);
    frame.render_widget(block, layout.grid);

    let inner = layout.grid_inner();
    if app.is_loading() {
        frame.render_widget(
            Paragraph::new("Loading inventory...").style(LABEL_STYLE),
            inner,
        );
        return;
    }
    if app.view.grid.is_empty() {
        frame.render_widget(
            Paragraph::new("No floors to display").style(LABEL_STYLE),
            inner,
        );
        return;
    }

    let placement = app.placement();

    for slot in &placement.floors {
        let key = &app.view.grid.floors[slot.floor].key;
        let label = Rect {
            y: slot.label.y + slot.label.height / 2,
            height: 1,
            ..slot.label
        };
        frame.render_widget(
            Paragraph::new(format!("Floor {key}")).style(HEADER_STYLE),
            label,
        );
    }

    for slot in &placement.tiles {
        if let Some(unit) = app.unit(slot.at) {
            let focused = app.cursor == slot.at && app.selected.is_none();
            let pressed = app.pressed == Some(slot.at);
            draw_tile(frame, slot.area, unit, focused, pressed);
        }
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, unit: &Unit, focused: bool, pressed: bool) {
    let kind = unit.status();
    let mut style = Style::default().fg(kind.color());
    if kind.is_selectable() {
        style = style.add_modifier(Modifier::BOLD);
    } else {
        style = style.add_modifier(Modifier::DIM);
    }

    let area = if pressed && kind.is_selectable() {
        pressed_area(area)
    } else {
        area
    };

    let border_type = if focused {
        BorderType::Double
    } else {
        BorderType::Plain
    };

    let tile = Paragraph::new(unit.unit_no.as_str())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(style),
        );
    frame.render_widget(tile, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_unit_modal(frame: &mut Frame, app: &App) {
    let unit = match app.selected_unit() {
        Some(u) => u,
        None => return,
    };

    // Backdrop
    let full = frame.area();
    frame
        .buffer_mut()
        .set_style(full, Style::default().add_modifier(Modifier::DIM));

    let area = app.modal_area();
    frame.render_widget(Clear, area);

    let kind = unit.status();
    let title = if unit.unit_label.is_empty() {
        format!(" Unit {} ", unit.unit_no)
    } else {
        format!(" Unit {} · {} ", unit.unit_no, unit.unit_label)
    };
    let card = Block::default()
        .title(title)
        .title_style(HEADER_STYLE)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(kind.color()));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let close = layout::close_button_area(area);
    frame.render_widget(
        Paragraph::new("[x]").style(Style::default().fg(BRAND_MUTED).add_modifier(Modifier::BOLD)),
        close,
    );

    let rows = vec![
        detail_row("Unit", Cell::from(unit.unit_no.clone())),
        detail_row("Floor", Cell::from(text_or_placeholder(unit.floor_no.as_deref()))),
        detail_row(
            "Status",
            Cell::from(unit.status_text())
                .style(Style::default().fg(kind.color()).add_modifier(Modifier::BOLD)),
        ),
        detail_row("Type", Cell::from(text_or_placeholder(unit.unit_type.as_deref()))),
        detail_row("View", Cell::from(text_or_placeholder(unit.view.as_deref()))),
        detail_row("Area", Cell::from(format_area(unit.total_area))),
        detail_row("Rooms", Cell::from(text_or_placeholder(unit.rooms.as_deref()))),
        detail_row("Parking", Cell::from(text_or_placeholder(unit.parking.as_deref()))),
        detail_row(
            "Price",
            Cell::from(format_aed(unit.sales_value)).style(Style::default().add_modifier(Modifier::BOLD)),
        ),
    ];

    let widths = [Constraint::Length(10), Constraint::Min(10)];
    let table = Table::new(rows, widths).column_spacing(2);
    frame.render_widget(table, inner);
}

fn detail_row<'a>(label: &'a str, value: Cell<'a>) -> Row<'a> {
    Row::new(vec![Cell::from(label).style(LABEL_STYLE), value])
}
