//! PNG rendering of the chart models with plotters.

use crate::charts::heatmap::{DAYS, HOURS, HeatGrid};
use crate::charts::stacked::{Anchor, BAR_WIDTH, StackedChart};
use crate::charts::style::{Rgb, sequential_orange};
use crate::errors::{AppError, AppResult};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::path::Path;

const FONT: &str = "sans-serif";

// 20x5 and 24x7 inch figures at 100 dpi
const BAR_SIZE: (u32, u32) = (2000, 500);
const HEATMAP_SIZE: (u32, u32) = (2400, 700);

const GRID_COLOR: RGBColor = RGBColor(0xaa, 0xaa, 0xaa);
const BAR_ALPHA: f64 = 0.5;
const HEAT_ALPHA: f64 = 0.8;

fn render_err<E: Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn text_style(size: u32, h: HPos, v: VPos) -> TextStyle<'static> {
    TextStyle::from((FONT, size).into_font()).pos(Pos::new(h, v))
}

fn anchor_pos(anchor: Anchor) -> HPos {
    match anchor {
        Anchor::Left => HPos::Left,
        Anchor::Center => HPos::Center,
    }
}

/// Draw a stacked (or single-series) bar chart.
pub fn render_stacked(chart: &StackedChart, path: &Path) -> AppResult<()> {
    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(36)
        .y_label_area_size(100)
        .build_cartesian_2d(
            chart.x_range.0..chart.x_range.1,
            chart.y_range.0..chart.y_range.1,
        )
        .map_err(render_err)?;

    // the mesh goes first so the grid stays beneath the bars
    ctx.configure_mesh()
        .disable_x_mesh()
        .max_light_lines(0)
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| format!("{v:.0}"))
        .y_desc(chart.y_label.as_str())
        .label_style((FONT, 14))
        .axis_desc_style((FONT, 16))
        .draw()
        .map_err(render_err)?;

    let half = BAR_WIDTH / 2.0;
    for layer in &chart.layers {
        let color = rgb(layer.color);
        let fill = color.mix(BAR_ALPHA).filled();

        let anno = ctx
            .draw_series(layer.segments.iter().map(|s| {
                let x = chart.centers[s.bucket];
                Rectangle::new(
                    [
                        (x - half, s.base as f64),
                        (x + half, (s.base + s.height) as f64),
                    ],
                    fill,
                )
            }))
            .map_err(render_err)?;

        if let Some(name) = &layer.name {
            anno.label(name.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.mix(BAR_ALPHA).filled())
            });
        }
    }

    for label in chart.inline_labels.iter().chain(&chart.top_labels) {
        let style = text_style(13, anchor_pos(label.anchor), VPos::Center);
        ctx.plotting_area()
            .draw(&Text::new(label.text.clone(), (label.x, label.y), style))
            .map_err(render_err)?;
    }

    // bucket names under each bar centre
    let tick_style = text_style(14, HPos::Center, VPos::Top);
    for (center, bucket) in chart.centers.iter().zip(&chart.buckets) {
        let (px, py) = ctx.backend_coord(&(*center, chart.y_range.0));
        root.draw(&Text::new(bucket.clone(), (px, py + 8), tick_style.clone()))
            .map_err(render_err)?;
    }

    if chart.show_legend {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(GRID_COLOR)
            .label_font((FONT, 13))
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw the day × hour heatmap: no frame, no grid, no tick marks.
pub fn render_heatmap(grid: &HeatGrid, path: &Path) -> AppResult<()> {
    let root = BitMapBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&grid.title, (FONT, 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Top, 40)
        .set_label_area_size(LabelAreaPosition::Left, 130)
        .build_cartesian_2d(0f64..HOURS as f64, 0f64..DAYS as f64)
        .map_err(render_err)?;

    let (lo, hi) = grid.value_range();
    let spread = hi - lo;

    // first day on top
    let cells = grid.cells.iter().enumerate().flat_map(|(d, row)| {
        row.iter().enumerate().map(move |(h, v)| {
            let t = if spread > 0.0 { (v - lo) / spread } else { 0.0 };
            let y = (DAYS - d) as f64;
            Rectangle::new(
                [(h as f64, y - 1.0), (h as f64 + 1.0, y)],
                rgb(sequential_orange(t)).mix(HEAT_ALPHA).filled(),
            )
        })
    });
    ctx.draw_series(cells).map_err(render_err)?;

    let hour_style = text_style(14, HPos::Center, VPos::Bottom);
    for (h, label) in grid.hour_labels().into_iter().enumerate() {
        let (px, py) = ctx.backend_coord(&(h as f64 + 0.5, DAYS as f64));
        root.draw(&Text::new(label, (px, py - 8), hour_style.clone()))
            .map_err(render_err)?;
    }

    let day_style = text_style(14, HPos::Right, VPos::Center);
    for (d, name) in grid.day_labels().iter().enumerate() {
        let (px, py) = ctx.backend_coord(&(0.0, (DAYS - d) as f64 - 0.5));
        root.draw(&Text::new(name.to_string(), (px - 8, py), day_style.clone()))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}
