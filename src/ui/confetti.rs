use ratatui::prelude::*;

use crate::effects::Spark;

/// Paint sparks straight into the frame buffer, over whatever is there.
pub fn render(frame: &mut Frame, area: Rect, sparks: &[Spark]) {
    if area.is_empty() {
        return;
    }

    let max_x = f64::from(area.width - 1);
    let max_y = f64::from(area.height - 1);
    let buffer = frame.buffer_mut();

    for spark in sparks {
        let x = area.x + (spark.x * max_x).round() as u16;
        let y = area.y + (spark.y * max_y).round() as u16;
        let [r, g, b] = spark.color;
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(spark.glyph).set_fg(Color::Rgb(r, g, b));
        }
    }
}
