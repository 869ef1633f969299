//! Terminal previews of pipe trails.

use textplots::{Chart, Plot, Shape};

use crate::domain::Trail;

const WIDTH: u32 = 100;
const HEIGHT: u32 = 60;

/// Plots the projection of `trail` on the X/Y plane, framed one unit around its points.
pub fn plot_trail(trail: &Trail) -> String {
    let points = trail
        .iter()
        .map(|point| (point.x() as f32, point.y() as f32))
        .collect::<Vec<_>>();

    let (x_min, x_max) = frame(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = frame(points.iter().map(|(_, y)| *y));

    let mut chart = Chart::new_with_y_range(WIDTH, HEIGHT, x_min, x_max, y_min, y_max);
    let binding = Shape::Lines(&points);
    let chart = chart.lineplot(&binding);
    chart.figures();
    chart.to_string()
}

fn frame(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let (min, max) = values.fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min.is_finite() && max.is_finite() {
        (min.floor() - 1.0, max.ceil() + 1.0)
    } else {
        (-1.0, 1.0)
    }
}
