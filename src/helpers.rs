use ratatui::layout::Rect;

use crate::geometry;

pub fn centered_rect(width: u16, height: u16, cols: u16, rows: u16) -> Rect {
    let actual_width = width.min(cols);
    let actual_height = height.min(rows);
    Rect::new(
        (cols - actual_width) / 2,
        (rows - actual_height) / 2,
        actual_width,
        actual_height,
    )
}

/// Centre a `width` x `height` box inside `area`, clipped to it.
pub fn centered_in(width: u16, height: u16, area: Rect) -> Rect {
    let inner = centered_rect(width, height, area.width, area.height);
    Rect::new(area.x + inner.x, area.y + inner.y, inner.width, inner.height)
}

/// Map a rectangle in court units onto terminal cells inside `area`.
/// Objects are never shrunk below one cell and never spill outside `area`.
pub fn court_to_cells(
    rect: &geometry::Rect,
    court_width: f32,
    court_height: f32,
    area: Rect,
) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let cols = area.width as f32;
    let rows = area.height as f32;
    let to_col = |v: f32| v * cols / court_width;
    let to_row = |v: f32| v * rows / court_height;

    let max_col = area.width - 1;
    let max_row = area.height - 1;
    let col = (to_col(rect.x).floor().max(0.0) as u16).min(max_col);
    let row = (to_row(rect.y).floor().max(0.0) as u16).min(max_row);
    let width = (to_col(rect.width).round() as u16).clamp(1, area.width - col);
    let height = (to_row(rect.height).round() as u16).clamp(1, area.height - row);

    Rect::new(area.x + col, area.y + row, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clips_to_available_space() {
        assert_eq!(centered_rect(40, 10, 100, 30), Rect::new(30, 10, 40, 10));
        assert_eq!(centered_rect(200, 50, 100, 30), Rect::new(0, 0, 100, 30));
    }

    #[test]
    fn court_maps_onto_cells() {
        let area = Rect::new(1, 1, 80, 24);
        let paddle = geometry::Rect::new(10.0, 250.0, 10.0, 100.0);
        let cells = court_to_cells(&paddle, 800.0, 600.0, area);
        assert_eq!(cells, Rect::new(2, 11, 1, 4));
    }

    #[test]
    fn offscreen_objects_stay_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let ball = geometry::Rect::new(-5.0, 610.0, 7.0, 7.0);
        let cells = court_to_cells(&ball, 800.0, 600.0, area);
        assert_eq!(cells, Rect::new(0, 23, 1, 1));
    }
}
