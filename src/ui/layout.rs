//! Screen geometry shared by drawing and mouse hit-testing.

use crate::ui::app::UnitRef;
use crate::view::FloorView;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Block;

pub const TILE_WIDTH: u16 = 10;
pub const TILE_HEIGHT: u16 = 3;
pub const FLOOR_LABEL_WIDTH: u16 = 12;

const MODAL_WIDTH: u16 = 54;
const MODAL_HEIGHT: u16 = 15;
const CLOSE_LABEL_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub counters: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Counter cards
            Constraint::Min(6),    // Floor grid
            Constraint::Length(3), // Footer
        ])
        .split(area);

        Self {
            header: chunks[0],
            counters: chunks[1],
            grid: chunks[2],
            footer: chunks[3],
        }
    }

    /// Floor grid area inside its border.
    #[must_use]
    pub fn grid_inner(&self) -> Rect {
        Block::bordered().inner(self.grid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorSlot {
    pub floor: usize,
    pub label: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSlot {
    pub at: UnitRef,
    pub area: Rect,
}

/// Where each visible floor label and unit tile lands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPlacement {
    pub floors: Vec<FloorSlot>,
    pub tiles: Vec<TileSlot>,
}

impl GridPlacement {
    /// Lays floors out top to bottom, skipping the first `scroll` tile
    /// lines. A floor's tiles wrap onto extra lines, so one tall floor can
    /// span several screens. A floor label sits on the floor's first
    /// visible line.
    #[must_use]
    pub fn compute(inner: Rect, grid: &FloorView, scroll: usize) -> Self {
        let mut placement = Self::default();
        let per_line = tiles_per_line(inner.width);
        let visible = visible_lines(inner);
        let end = scroll + visible;
        let row_y = |line: usize| inner.y + (line - scroll) as u16 * TILE_HEIGHT;
        let mut first_line = 0;

        for (floor_idx, floor) in grid.floors.iter().enumerate() {
            let lines = floor_lines(floor.units.len(), per_line);
            let first = first_line;
            first_line += lines;
            if first + lines <= scroll {
                continue;
            }
            if first >= end {
                break;
            }

            placement.floors.push(FloorSlot {
                floor: floor_idx,
                label: Rect::new(
                    inner.x,
                    row_y(first.max(scroll)),
                    FLOOR_LABEL_WIDTH.min(inner.width),
                    TILE_HEIGHT,
                ),
            });

            for unit_idx in 0..floor.units.len() {
                let line = first + unit_idx / per_line;
                if line < scroll {
                    continue;
                }
                if line >= end {
                    break;
                }
                let column = (unit_idx % per_line) as u16;
                let tile_x = inner
                    .x
                    .saturating_add(FLOOR_LABEL_WIDTH)
                    .saturating_add(column.saturating_mul(TILE_WIDTH));
                if tile_x.saturating_add(TILE_WIDTH) > inner.right() {
                    continue;
                }
                placement.tiles.push(TileSlot {
                    at: UnitRef {
                        floor: floor_idx,
                        unit: unit_idx,
                    },
                    area: Rect::new(tile_x, row_y(line), TILE_WIDTH, TILE_HEIGHT),
                });
            }
        }

        placement
    }

    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<UnitRef> {
        self.tiles
            .iter()
            .find(|slot| slot.area.contains(position))
            .map(|slot| slot.at)
    }

    #[must_use]
    pub fn tile_area(&self, at: UnitRef) -> Option<Rect> {
        self.tiles
            .iter()
            .find(|slot| slot.at == at)
            .map(|slot| slot.area)
    }

    #[must_use]
    pub fn shows_floor(&self, floor: usize) -> bool {
        self.floors.iter().any(|slot| slot.floor == floor)
    }
}

#[must_use]
pub fn tiles_per_line(width: u16) -> usize {
    usize::from((width.saturating_sub(FLOOR_LABEL_WIDTH) / TILE_WIDTH).max(1))
}

/// Whole tile lines that fit in the grid area.
#[must_use]
pub fn visible_lines(inner: Rect) -> usize {
    usize::from(inner.height / TILE_HEIGHT)
}

/// An empty floor still takes one line for its label.
#[must_use]
pub fn floor_lines(units: usize, per_line: usize) -> usize {
    units.div_ceil(per_line).max(1)
}

#[must_use]
pub fn total_lines(grid: &FloorView, per_line: usize) -> usize {
    grid.floors
        .iter()
        .map(|f| floor_lines(f.units.len(), per_line))
        .sum()
}

/// Tile line holding `at`, counted from the top of the whole grid.
#[must_use]
pub fn line_of(grid: &FloorView, per_line: usize, at: UnitRef) -> usize {
    let before: usize = grid
        .floors
        .iter()
        .take(at.floor)
        .map(|f| floor_lines(f.units.len(), per_line))
        .sum();
    before + at.unit / per_line
}

/// Centered detail card, shrunk to fit small terminals.
#[must_use]
pub fn modal_area(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The `[x]` control sitting in the card's top border.
#[must_use]
pub fn close_button_area(modal: Rect) -> Rect {
    let x = modal.right().saturating_sub(CLOSE_LABEL_WIDTH + 2).max(modal.x);
    Rect::new(x, modal.y, CLOSE_LABEL_WIDTH.min(modal.width), 1_u16.min(modal.height))
}

/// Pressed tiles narrow by one cell on the left and right. Tiles are only
/// three rows tall, so the height stays put to keep the label row.
#[must_use]
pub fn pressed_area(tile: Rect) -> Rect {
    Rect::new(
        tile.x + 1,
        tile.y,
        tile.width.saturating_sub(2),
        tile.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use crate::view::FloorRow;
    use pretty_assertions::assert_eq;

    fn grid(sizes: &[usize]) -> FloorView {
        FloorView {
            floors: sizes
                .iter()
                .enumerate()
                .map(|(i, n)| FloorRow {
                    key: i.to_string(),
                    units: (0..*n).map(|u| Unit::new(u.to_string())).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn tiles_wrap_onto_new_lines() {
        // Room for two tiles per line after the label column.
        let inner = Rect::new(0, 0, FLOOR_LABEL_WIDTH + 2 * TILE_WIDTH, 30);
        let placement = GridPlacement::compute(inner, &grid(&[3, 1]), 0);

        let third = placement.tile_area(UnitRef { floor: 0, unit: 2 }).unwrap();
        assert_eq!(third, Rect::new(FLOOR_LABEL_WIDTH, TILE_HEIGHT, TILE_WIDTH, TILE_HEIGHT));

        let next_floor = placement.tile_area(UnitRef { floor: 1, unit: 0 }).unwrap();
        assert_eq!(next_floor.y, 2 * TILE_HEIGHT);
    }

    #[test]
    fn scroll_reaches_every_line_of_a_tall_floor() {
        // Two tiles per line, two visible lines, one floor of five units.
        let inner = Rect::new(0, 0, FLOOR_LABEL_WIDTH + 2 * TILE_WIDTH, TILE_HEIGHT * 2);
        let grid = grid(&[5]);
        let per_line = tiles_per_line(inner.width);
        assert_eq!(total_lines(&grid, per_line), 3);

        let top = GridPlacement::compute(inner, &grid, 0);
        assert_eq!(top.tiles.len(), 4);

        let bottom = GridPlacement::compute(inner, &grid, 1);
        let last = bottom.tile_area(UnitRef { floor: 0, unit: 4 }).unwrap();
        assert_eq!(last.y, TILE_HEIGHT);
        assert!(bottom.shows_floor(0));
        assert_eq!(bottom.floors[0].label.y, 0);
    }

    #[test]
    fn line_of_counts_wrapped_lines_of_earlier_floors() {
        let grid = grid(&[5, 0, 3]);
        assert_eq!(line_of(&grid, 2, UnitRef { floor: 0, unit: 4 }), 2);
        assert_eq!(line_of(&grid, 2, UnitRef { floor: 2, unit: 2 }), 5);
    }

    #[test]
    fn pressed_tile_narrows_but_keeps_height() {
        let tile = Rect::new(10, 10, TILE_WIDTH, TILE_HEIGHT);
        assert_eq!(pressed_area(tile), Rect::new(11, 10, TILE_WIDTH - 2, TILE_HEIGHT));
    }

    #[test]
    fn scroll_skips_leading_floors() {
        let inner = Rect::new(0, 0, 80, 30);
        let placement = GridPlacement::compute(inner, &grid(&[1, 1, 1]), 2);
        assert!(!placement.shows_floor(0));
        assert!(placement.shows_floor(2));
        assert_eq!(placement.tile_area(UnitRef { floor: 2, unit: 0 }).unwrap().y, 0);
    }

    #[test]
    fn floors_past_the_bottom_are_cut() {
        let inner = Rect::new(0, 0, 80, TILE_HEIGHT * 2);
        let placement = GridPlacement::compute(inner, &grid(&[1, 1, 1]), 0);
        assert_eq!(placement.floors.len(), 2);
        assert_eq!(placement.tiles.len(), 2);
    }

    #[test]
    fn hit_test_finds_the_tile_under_the_pointer() {
        let inner = Rect::new(1, 1, 80, 20);
        let placement = GridPlacement::compute(inner, &grid(&[2]), 0);
        let second = placement.tile_area(UnitRef { floor: 0, unit: 1 }).unwrap();
        assert_eq!(
            placement.tile_at(Position::new(second.x + 1, second.y + 1)),
            Some(UnitRef { floor: 0, unit: 1 })
        );
        assert_eq!(placement.tile_at(Position::new(0, 0)), None);
    }

    #[test]
    fn modal_is_centered_and_clamped() {
        assert_eq!(modal_area(Rect::new(0, 0, 100, 41)), Rect::new(23, 13, 54, 15));
        assert_eq!(modal_area(Rect::new(0, 0, 30, 10)), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn close_button_sits_in_top_right_corner() {
        let modal = Rect::new(23, 13, 54, 15);
        assert_eq!(close_button_area(modal), Rect::new(72, 13, 3, 1));
    }
}
