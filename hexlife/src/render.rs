use image::{Rgb, RgbImage};
use itertools::Itertools;

use crate::{
    config::{Config, Palette},
    geometry::{self, Point},
    grid::Grid,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub radius: f64,
    pub palette: Palette,
}

impl Settings {
    pub fn new(config: &Config) -> Self {
        let (width, height) = geometry::canvas_size(config.rows, config.cols, config.cell_radius);
        Self {
            width,
            height,
            radius: config.cell_radius,
            palette: config.palette,
        }
    }
}

impl Grid {
    /// Draws one filled, outlined tile per cell onto a fresh canvas.
    pub fn render(&self, settings: Settings) -> RgbImage {
        let Palette {
            dead,
            alive,
            outline,
        } = settings.palette;
        let mut canvas = RgbImage::from_pixel(settings.width, settings.height, dead);
        for p @ (row, col) in self.coords() {
            let hex = geometry::hexagon(row, col, settings.radius);
            fill_polygon(&mut canvas, &hex, if self.get(p) { alive } else { dead });
            for (&a, &b) in hex.iter().circular_tuple_windows() {
                draw_line(&mut canvas, a, b, outline);
            }
        }
        canvas
    }
}

/// Scanline fill sampling at pixel centres; parts off the canvas are clipped.
fn fill_polygon(canvas: &mut RgbImage, vertices: &[Point], color: Rgb<u8>) {
    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
    let (y_min, y_max) = vertices
        .iter()
        .map(|&(_, y)| y)
        .minmax()
        .into_option()
        .unwrap_or_default();
    let first_row = (y_min - 0.5).ceil().max(0.) as u32;
    let last_row = (y_max - 0.5).floor().min(height - 1.);
    if last_row < 0. {
        return;
    }
    let mut crossings = Vec::with_capacity(vertices.len());
    for py in first_row..=last_row as u32 {
        let y = py as f64 + 0.5;
        crossings.clear();
        for (&(x0, y0), &(x1, y1)) in vertices.iter().circular_tuple_windows() {
            if (y0 <= y && y < y1) || (y1 <= y && y < y0) {
                crossings.push(x0 + (y - y0) * (x1 - x0) / (y1 - y0));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for (&x_start, &x_end) in crossings.iter().tuples() {
            let first_col = (x_start - 0.5).ceil().max(0.);
            let last_col = (x_end - 0.5).floor().min(width - 1.);
            if last_col < first_col {
                continue;
            }
            for px in first_col as u32..=last_col as u32 {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

fn draw_line(canvas: &mut RgbImage, (x0, y0): Point, (x1, y1): Point, color: Rgb<u8>) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.) as u32;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let (x, y) = ((x0 + t * (x1 - x0)).floor(), (y0 + t * (y1 - y0)).floor());
        if x >= 0. && y >= 0. && x < canvas.width() as f64 && y < canvas.height() as f64 {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}
