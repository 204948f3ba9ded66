use blocksweeper_core::{Cell, CellHighlight, CellValue, Coord2, GameResult, Renderer};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::layout::{CellLayout, CellRect};

pub(crate) const HIDDEN_COLOR: &str = "#000000";
pub(crate) const REVEALED_COLOR: &str = "#CCCCCC";
pub(crate) const TRIGGERED_COLOR: &str = "#FF9999";
const LABEL_FONT: &str = "25px Ubuntu";

/// Label color, shifting from blue over green to red as the value grows, mines being the
/// reddest.
pub(crate) fn label_color(value: CellValue) -> String {
    const STEP: f64 = 255. / 9.;
    let level = match value {
        CellValue::Empty => 0.,
        CellValue::Count(count) => f64::from(count),
        CellValue::Mine => 9.,
    };
    let r = (level * STEP).round();
    let g = (127.5 - level * STEP).max(0.).round();
    let b = (255. - level * STEP).round();
    format!("rgb({}, {}, {})", r as u8, g as u8, b as u8)
}

pub(crate) const fn result_message(result: GameResult) -> &'static str {
    match result {
        GameResult::Won => "You have won",
        GameResult::Lost => "The game is lost",
    }
}

/// Draws cells onto a 2D canvas context.
pub(crate) struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    layout: CellLayout,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, layout: CellLayout) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context,
            Ok(None) => {
                log::error!("canvas has no 2d context");
                return None;
            }
            Err(err) => {
                log::error!("failed to get 2d context: {:?}", err);
                return None;
            }
        };
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(Self { context, layout })
    }

    pub fn clear(&self) {
        let (width, height) = self.layout.canvas_size();
        self.context.clear_rect(0., 0., f64::from(width), f64::from(height));
    }

    /// Paints every cell as hidden, the state of a freshly started game.
    pub fn draw_hidden_grid(&self) {
        self.clear();
        let (cols, rows) = self.layout.size();
        for row in 0..rows {
            for col in 0..cols {
                self.fill_cell((col, row), HIDDEN_COLOR);
            }
        }
    }

    fn fill_cell(&self, coords: Coord2, color: &str) {
        let CellRect {
            x,
            y,
            width,
            height,
        } = self.layout.cell_rect(coords);

        self.context.begin_path();
        self.context.rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
        self.context.set_fill_style_str(color);
        self.context.fill();
        self.context.close_path();
    }

    fn draw_label(&self, cell: &Cell) {
        let label = cell.value().label();
        if label.is_empty() {
            return;
        }

        let (x, y) = self.layout.cell_center(cell.coords());
        self.context.set_fill_style_str(&label_color(cell.value()));
        self.context.set_font(LABEL_FONT);
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");
        if let Err(err) = self.context.fill_text(label, x, y) {
            log::error!("failed to draw label at {:?}: {:?}", cell.coords(), err);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw_cell(&mut self, cell: &Cell, highlight: CellHighlight) {
        let background = match highlight {
            CellHighlight::Revealed => REVEALED_COLOR,
            CellHighlight::Triggered => TRIGGERED_COLOR,
        };
        self.fill_cell(cell.coords(), background);
        self.draw_label(cell);
    }

    fn game_over(&mut self, result: GameResult) {
        gloo::dialogs::alert(result_message(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_colors_follow_the_value() {
        assert_eq!(label_color(CellValue::Empty), "rgb(0, 128, 255)");
        assert_eq!(label_color(CellValue::Count(1)), "rgb(28, 99, 227)");
        assert_eq!(label_color(CellValue::Count(4)), "rgb(113, 14, 142)");
        assert_eq!(label_color(CellValue::Mine), "rgb(255, 0, 0)");
    }

    #[test]
    fn result_messages() {
        assert_eq!(result_message(GameResult::Won), "You have won");
        assert_eq!(result_message(GameResult::Lost), "The game is lost");
    }
}
