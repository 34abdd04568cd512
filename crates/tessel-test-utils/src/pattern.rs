//! Text patterns for binary fields.
//!
//! A pattern is a slice of equal-length rows; `#` marks a live cell and
//! any other character a dead one.

use tessel_field::CellField;

/// Write `rows` into `field` starting at `(x0, y0)`, wrapping around the
/// grid. Cells outside the pattern are left untouched.
pub fn stamp_pattern<F: CellField<Value = bool>>(field: &mut F, x0: u32, y0: u32, rows: &[&str]) {
    let (w, h) = (field.width(), field.height());
    for (dy, row) in rows.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            let x = (x0 + dx as u32) % w;
            let y = (y0 + dy as u32) % h;
            field.set(x, y, ch == '#');
        }
    }
}

/// Clear `template` and load `rows` at the origin.
pub fn pattern_field<F: CellField<Value = bool>>(template: &F, rows: &[&str]) -> F {
    let mut field = template.clone();
    field.clear_with_default();
    stamp_pattern(&mut field, 0, 0, rows);
    field
}

/// Render a field as `#`/`.` rows.
pub fn render<F: CellField<Value = bool>>(field: &F) -> Vec<String> {
    (0..field.height())
        .map(|y| {
            (0..field.width())
                .map(|x| if field.get(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Coordinates of live cells in row-major order.
pub fn live_cells<F: CellField<Value = bool>>(field: &F) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..field.height() {
        for x in 0..field.width() {
            if field.get(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}
