use crate::loader::LoadOutcome;
use crate::model::{InventoryDocument, Unit};
use crate::ui::layout::{self, DashboardLayout, GridPlacement};
use crate::view::InventoryView;
use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::{DefaultTerminal, Frame};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Position of a unit in the floor grid: floor index, then unit index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitRef {
    pub floor: usize,
    pub unit: usize,
}

pub struct App {
    /// Label for the data source, shown while loading.
    pub source_label: String,
    pub document: Option<InventoryDocument>,
    pub view: InventoryView,
    /// Unit shown in the detail modal.
    pub selected: Option<UnitRef>,
    pub cursor: UnitRef,
    /// Tile under a held mouse button.
    pub pressed: Option<UnitRef>,
    pub scroll: usize,
    pub viewport: Rect,
    pub should_quit: bool,
    loader: Option<Receiver<LoadOutcome>>,
}

impl App {
    #[must_use]
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            document: None,
            view: InventoryView::default(),
            selected: None,
            cursor: UnitRef::default(),
            pressed: None,
            scroll: 0,
            viewport: Rect::default(),
            should_quit: false,
            loader: None,
        }
    }

    #[must_use]
    pub fn with_loader(mut self, loader: Receiver<LoadOutcome>) -> Self {
        self.loader = Some(loader);
        self
    }

    #[must_use]
    pub fn with_document(mut self, document: InventoryDocument) -> Self {
        self.set_document(document);
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.poll_loader();
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(TICK_RATE)? {
                self.handle_event(&event::read()?);
            }
        }
        Ok(())
    }

    /// Draws the dashboard and remembers the frame size for hit-testing.
    pub fn render(&mut self, frame: &mut Frame) {
        self.viewport = frame.area();
        super::dashboard::draw_dashboard(frame, self);
        if self.selected.is_some() {
            super::dashboard::draw_unit_modal(frame, self);
        }
    }

    /// Replaces the document and recomputes everything derived from it.
    /// Any open modal or pending press refers to the old document, so both
    /// are dropped.
    pub fn set_document(&mut self, document: InventoryDocument) {
        self.view = InventoryView::derive(&document);
        self.document = Some(document);
        self.selected = None;
        self.pressed = None;
        self.cursor = UnitRef::default();
        self.scroll = 0;
    }

    /// Picks up the background load result, if it has arrived.
    pub fn poll_loader(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };
        match loader.try_recv() {
            Ok(Ok(document)) => {
                self.loader = None;
                self.set_document(document);
            }
            Ok(Err(error)) => {
                self.loader = None;
                tracing::error!(source = %self.source_label, %error, "failed to load inventory");
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.loader = None;
                tracing::error!(source = %self.source_label, "inventory loader exited without a result");
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document.is_none()
    }

    #[must_use]
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout::new(self.viewport)
    }

    #[must_use]
    pub fn placement(&self) -> GridPlacement {
        GridPlacement::compute(self.layout().grid_inner(), &self.view.grid, self.scroll)
    }

    #[must_use]
    pub fn unit(&self, at: UnitRef) -> Option<&Unit> {
        self.view.grid.unit(at.floor, at.unit)
    }

    #[must_use]
    pub fn selected_unit(&self) -> Option<&Unit> {
        self.selected.and_then(|at| self.unit(at))
    }

    #[must_use]
    pub fn tile_area(&self, at: UnitRef) -> Option<Rect> {
        self.placement().tile_area(at)
    }

    #[must_use]
    pub fn modal_area(&self) -> Rect {
        layout::modal_area(self.viewport)
    }

    /// Opens the detail modal for a unit. Sold units are inert, so this
    /// returns false and leaves the selection untouched.
    pub fn select(&mut self, at: UnitRef) -> bool {
        let Some(unit) = self.unit(at) else {
            return false;
        };
        if !unit.status().is_selectable() {
            return false;
        }
        tracing::debug!(unit_no = %unit.unit_no, "unit selected");
        self.selected = Some(at);
        true
    }

    pub fn close_modal(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("detail closed");
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, *width, *height);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.selected.is_some() {
            self.handle_modal_keys(code);
        } else {
            self.handle_dashboard_keys(code);
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_floor(),
            KeyCode::Down | KeyCode::Char('j') => self.next_floor(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_unit(),
            KeyCode::Right | KeyCode::Char('l') => self.next_unit(),
            KeyCode::PageUp => self.scroll_up(),
            KeyCode::PageDown => self.scroll_down(),
            KeyCode::Enter => {
                self.select(self.cursor);
            }
            _ => {}
        }
    }

    fn handle_modal_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('x') => self.close_modal(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);

        if self.selected.is_some() {
            // The modal owns all input while open.
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                let modal = self.modal_area();
                if layout::close_button_area(modal).contains(position)
                    || !modal.contains(position)
                {
                    self.close_modal();
                }
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = self
                    .placement()
                    .tile_at(position)
                    .filter(|at| self.unit(*at).is_some_and(|u| u.status().is_selectable()));
                if let Some(at) = self.pressed {
                    self.cursor = at;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(pressed) = self.pressed.take() {
                    if self.placement().tile_at(position) == Some(pressed) {
                        self.select(pressed);
                    }
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(),
            MouseEventKind::ScrollDown => self.scroll_down(),
            _ => {}
        }
    }

    fn floor_len(&self, floor: usize) -> usize {
        self.view.grid.floors.get(floor).map_or(0, |f| f.units.len())
    }

    fn previous_floor(&mut self) {
        if self.cursor.floor > 0 {
            self.cursor.floor -= 1;
            self.clamp_cursor_unit();
            self.ensure_cursor_visible();
        }
    }

    fn next_floor(&mut self) {
        if self.cursor.floor < self.view.grid.floors.len().saturating_sub(1) {
            self.cursor.floor += 1;
            self.clamp_cursor_unit();
            self.ensure_cursor_visible();
        }
    }

    fn previous_unit(&mut self) {
        if self.cursor.unit > 0 {
            self.cursor.unit -= 1;
            self.ensure_cursor_visible();
        }
    }

    fn next_unit(&mut self) {
        if self.cursor.unit < self.floor_len(self.cursor.floor).saturating_sub(1) {
            self.cursor.unit += 1;
            self.ensure_cursor_visible();
        }
    }

    fn clamp_cursor_unit(&mut self) {
        let max = self.floor_len(self.cursor.floor).saturating_sub(1);
        self.cursor.unit = self.cursor.unit.min(max);
    }

    /// Scrolls just enough to bring the cursor's tile line on screen.
    fn ensure_cursor_visible(&mut self) {
        let inner = self.layout().grid_inner();
        let per_line = layout::tiles_per_line(inner.width);
        let line = layout::line_of(&self.view.grid, per_line, self.cursor);
        let visible = layout::visible_lines(inner).max(1);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + visible {
            self.scroll = line + 1 - visible;
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let per_line = layout::tiles_per_line(self.layout().grid_inner().width);
        if self.scroll + 1 < layout::total_lines(&self.view.grid, per_line) {
            self.scroll += 1;
        }
    }
}
