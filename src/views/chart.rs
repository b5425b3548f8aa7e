// src/views/chart.rs

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{common::format::format_brl, models::dashboard::SalesPoint};

pub const BAR_COLOR: &str = "#3B82F6";
pub const BAR_RADIUS: f64 = 4.0;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const MARGIN_LEFT: f64 = 56.0;
// Fração da faixa de cada dia ocupada pela barra
const BAR_FILL: f64 = 0.6;
const TARGET_INTERVALS: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct ChartBar {
    pub day: String,
    pub value: Decimal,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    // Centro da barra, onde fica o rótulo do eixo X
    pub label_x: f64,
    pub path: String,
    pub tooltip: String,
}

#[derive(Debug, Clone)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    // Linha de base do eixo X
    pub plot_bottom: f64,
    // Posições dos rótulos dos eixos
    pub axis_label_x: f64,
    pub label_y: f64,
    pub color: &'static str,
    pub ticks: Vec<AxisTick>,
    pub bars: Vec<ChartBar>,
}

impl BarChart {
    pub fn build(points: &[SalesPoint]) -> Self {
        let plot_left = MARGIN_LEFT;
        let plot_right = CHART_WIDTH - MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = CHART_HEIGHT - MARGIN_BOTTOM;
        let plot_height = plot_bottom - plot_top;

        let max = points
            .iter()
            .filter_map(|p| p.value.to_f64())
            .fold(0.0_f64, f64::max);
        let step = nice_step(max / TARGET_INTERVALS);
        let top = ((max / step).ceil() * step).max(step);

        let scale_y = |value: f64| plot_bottom - (value / top) * plot_height;

        let tick_count = (top / step).round() as usize;
        let ticks = (0..=tick_count)
            .map(|i| {
                let value = step * i as f64;
                AxisTick {
                    y: round2(scale_y(value)),
                    label: tick_label(value),
                }
            })
            .collect();

        let band = if points.is_empty() {
            0.0
        } else {
            (plot_right - plot_left) / points.len() as f64
        };
        let width = band * BAR_FILL;

        let bars = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let value = point.value.to_f64().unwrap_or(0.0).max(0.0);
                let x = plot_left + band * i as f64 + (band - width) / 2.0;
                let y = scale_y(value);
                let height = plot_bottom - y;

                ChartBar {
                    day: point.day.clone(),
                    value: point.value,
                    x: round2(x),
                    y: round2(y),
                    width: round2(width),
                    height: round2(height),
                    label_x: round2(x + width / 2.0),
                    path: rounded_top_path(x, y, width, height, BAR_RADIUS),
                    tooltip: format!("{}: {}", point.day, format_brl(point.value)),
                }
            })
            .collect();

        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            plot_left,
            plot_right,
            plot_bottom,
            axis_label_x: plot_left - 8.0,
            label_y: plot_bottom + 20.0,
            color: BAR_COLOR,
            ticks,
            bars,
        }
    }
}

/// Menor passo "redondo" (1, 2, 2.5 ou 5 vezes 10^n) maior ou igual a `raw`.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| normalized <= candidate + 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

// Só os cantos de cima são arredondados
fn rounded_top_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let r = radius.min(width / 2.0).min(height).max(0.0);
    let bottom = y + height;
    let right = x + width;
    format!(
        "M{:.2},{:.2} L{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2} L{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2} L{:.2},{:.2} Z",
        x, bottom,
        x, y + r,
        x, y, x + r, y,
        right - r, y,
        right, y, right, y + r,
        right, bottom,
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
