pub mod heatmap;
pub mod render;
pub mod stacked;
pub mod style;

pub use heatmap::HeatGrid;
pub use stacked::{Anchor, BarStyle, LabelScale, StackedChart};
pub use style::{CategoryStyles, Rgb, Styles};
