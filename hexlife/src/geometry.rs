const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub type Point = (f64, f64);

pub fn cell_width(radius: f64) -> f64 {
    SQRT_3 * radius
}

pub fn cell_height(radius: f64) -> f64 {
    1.5 * radius
}

/// Pixel-space corners of the tile at `(row, col)`, pointed top and bottom.
///
/// Odd rows are shifted left by half a tile so the rows interlock like bricks.
pub fn hexagon(row: usize, col: usize, radius: f64) -> [Point; 6] {
    let template = [
        (0., 0.),
        (0., radius),
        (0.5 * SQRT_3 * radius, 1.5 * radius),
        (SQRT_3 * radius, radius),
        (SQRT_3 * radius, 0.),
        (0.5 * SQRT_3 * radius, -0.5 * radius),
    ];
    let offset = if row % 2 == 1 {
        -0.5 * cell_width(radius)
    } else {
        0.
    };
    let y = row as f64 * cell_height(radius);
    let x = col as f64 * cell_width(radius) + offset;
    template.map(|(dx, dy)| (x + dx, y + dy))
}

/// Canvas `(width, height)` in whole pixels, each at least 1.
///
/// Saturates at `u32::MAX`; see [`checked_canvas_size`].
pub fn canvas_size(rows: usize, cols: usize, radius: f64) -> (u32, u32) {
    let (width, height) = exact_canvas_size(rows, cols, radius);
    (width as u32, height as u32)
}

/// Like [`canvas_size`], but `None` unless an RGB buffer of that size is addressable.
pub fn checked_canvas_size(rows: usize, cols: usize, radius: f64) -> Option<(u32, u32)> {
    let (width, height) = exact_canvas_size(rows, cols, radius);
    if width > u32::MAX as f64 || height > u32::MAX as f64 {
        return None;
    }
    let (width, height) = (width as u32, height as u32);
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)?;
    Some((width, height))
}

fn exact_canvas_size(rows: usize, cols: usize, radius: f64) -> (f64, f64) {
    let width = (cols as f64 * cell_width(radius)).round().max(1.);
    let height = (rows as f64 * cell_height(radius)).round().max(1.);
    (width, height)
}
