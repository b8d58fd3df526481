//! Stacked bar layout.
//!
//! Turns a [`Series`] into a fully positioned [`StackedChart`]: one layer
//! per category, one segment per bucket sitting on the running total of
//! the layers below it, inline labels for segments above the visibility
//! threshold and a total label on top of every stack. The renderer only
//! draws what this module computed.

use crate::charts::style::{CategoryStyles, Rgb};
use crate::errors::{AppError, AppResult};
use crate::models::Series;

pub const BAR_WIDTH: f64 = 0.6;

/// How numbers are shown (and compared against the threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelScale {
    Raw,
    Thousands,
}

impl LabelScale {
    pub fn scaled(&self, value: i64) -> f64 {
        match self {
            LabelScale::Raw => value as f64,
            LabelScale::Thousands => value as f64 / 1000.0,
        }
    }

    pub fn format(&self, value: i64) -> String {
        match self {
            LabelScale::Raw => value.to_string(),
            // shortest round-trip form, always with a fractional part: "12000.0"
            LabelScale::Thousands => format!("{:?}", self.scaled(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
}

/// Per-report presentation constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    /// Segments are labelled when their scaled value is strictly above this.
    pub threshold: Option<f64>,
    pub scale: LabelScale,
    /// Space above the highest stack, in metric units.
    pub headroom: f64,
    /// Gap between a stack and its total label, in metric units.
    pub top_margin: f64,
    /// Horizontal offsets from the bar centre, in bucket units.
    pub inline_dx: f64,
    pub top_dx: f64,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub bucket: usize,
    pub base: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: Option<String>,
    pub color: Rgb,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedChart {
    pub title: String,
    pub y_label: String,
    pub buckets: Vec<String>,
    /// Bar centre of each bucket on the x axis.
    pub centers: Vec<f64>,
    pub layers: Vec<Layer>,
    pub inline_labels: Vec<TextLabel>,
    pub top_labels: Vec<TextLabel>,
    /// Final running total of each bucket.
    pub totals: Vec<i64>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub show_legend: bool,
}

/// Bar centre of the `i`-th bucket: bars start at 1 and are centred on
/// their tick.
pub fn bucket_center(i: usize) -> f64 {
    i as f64 + 1.0 + BAR_WIDTH / 2.0
}

impl StackedChart {
    pub fn layout(
        title: &str,
        y_label: &str,
        series: &Series,
        styles: &CategoryStyles,
        style: &BarStyle,
    ) -> AppResult<Self> {
        let n = series.buckets.len();
        let centers: Vec<f64> = (0..n).map(bucket_center).collect();

        // fold over the ordered categories: the accumulator is the stack
        // base of the next layer
        let (layers, inline_labels, totals) = series.categories.iter().enumerate().try_fold(
            (Vec::new(), Vec::new(), vec![0i64; n]),
            |(mut layers, mut labels, bottoms), (c, category)| {
                let values = series.row(c);
                let color = styles.lookup(category.as_deref())?;

                let segments: Vec<Segment> = values
                    .iter()
                    .zip(&bottoms)
                    .enumerate()
                    .map(|(bucket, (&height, &base))| Segment {
                        bucket,
                        base,
                        height,
                    })
                    .collect();

                labels.extend(
                    segments
                        .iter()
                        .filter(|s| exceeds(style, s.height))
                        .map(|s| TextLabel {
                            x: centers[s.bucket] + style.inline_dx,
                            y: s.base as f64 + s.height as f64 / 2.0,
                            text: style.scale.format(s.height),
                            anchor: style.anchor,
                        }),
                );

                let next: Vec<i64> = bottoms.iter().zip(values).map(|(b, v)| b + v).collect();

                layers.push(Layer {
                    name: category.clone(),
                    color,
                    segments,
                });

                Ok::<_, AppError>((layers, labels, next))
            },
        )?;

        let top_labels = totals
            .iter()
            .enumerate()
            .map(|(i, &total)| TextLabel {
                x: centers[i] + style.top_dx,
                y: total as f64 + style.top_margin,
                text: style.scale.format(total),
                anchor: style.anchor,
            })
            .collect();

        let x_range = match (centers.first(), centers.last()) {
            (Some(first), Some(last)) => (first - BAR_WIDTH, last + BAR_WIDTH),
            _ => (0.0, 1.0),
        };
        let max_total = totals.iter().copied().max().unwrap_or(0);
        let y_range = (0.0, max_total as f64 + style.headroom);

        let show_legend = layers.iter().filter(|l| l.name.is_some()).count() > 1;

        Ok(Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            buckets: series.buckets.clone(),
            centers,
            layers,
            inline_labels,
            top_labels,
            totals,
            x_range,
            y_range,
            show_legend,
        })
    }
}

fn exceeds(style: &BarStyle, value: i64) -> bool {
    style
        .threshold
        .is_some_and(|limit| style.scale.scaled(value) > limit)
}
