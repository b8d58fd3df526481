//! Colour tables for chart categories.

use crate::db::queries::GAME_TYPES;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// An sRGB colour parsed from a `#rrggbb` / `rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#').unwrap_or(hex);
        if h.len() != 6 || !h.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Colour of the single-series players chart.
pub const SINGLE_SERIES_COLOR: Rgb = Rgb(0x1f, 0x77, 0xb4);

/// Ten colours, six hex digits each.
const GAME_TYPE_PALETTE: &str = "1f77b4ff7f0e2ca02cd627289467bd8c564be377c27f7f7fbcbd2217becf";

/// The same weapon colours XonStat uses.
const WEAPON_COLORS: &[(&str, &str)] = &[
    ("arc", "#b8e9ff"),
    ("laser", "#ff5933"),
    ("blaster", "#ff5933"),
    ("shotgun", "#1f77b4"),
    ("uzi", "#b9e659"),
    ("machinegun", "#b9e659"),
    ("grenadelauncher", "#ff2600"),
    ("mortar", "#ff2600"),
    ("minelayer", "#bfbf00"),
    ("electro", "#597fff"),
    ("crylink", "#d940ff"),
    ("nex", "#00e6ff"),
    ("vortex", "#00e6ff"),
    ("hagar", "#d98059"),
    ("rocketlauncher", "#ffbf33"),
    ("devastator", "#ffbf33"),
    ("porto", "#7fff7f"),
    ("minstanex", "#d62728"),
    ("vaporizer", "#d62728"),
    ("hook", "#a5ffd8"),
    ("hlac", "#ffa533"),
    ("seeker", "#ff5959"),
    ("rifle", "#9467bd"),
    ("tuba", "#d87f3f"),
    ("fireball", "#33ff33"),
];

/// Light to dark stops of the sequential heatmap scale.
const ORANGES: [Rgb; 3] = [
    Rgb(0xff, 0xf5, 0xeb),
    Rgb(0xfd, 0x8d, 0x3c),
    Rgb(0x7f, 0x27, 0x04),
];

/// Sequential orange scale; `t` is clamped to `[0, 1]`.
pub fn sequential_orange(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (ORANGES.len() - 1) as f64;
    let i = (pos.floor() as usize).min(ORANGES.len() - 2);
    let f = pos - i as f64;

    let (a, b) = (ORANGES[i], ORANGES[i + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Immutable category → colour lookup, keyed by category name.
#[derive(Debug, Clone, Default)]
pub struct CategoryStyles {
    colors: HashMap<String, Rgb>,
}

impl CategoryStyles {
    /// Game types get palette chunks in the order the games query
    /// returns them (alphabetical).
    pub fn game_types() -> Self {
        let mut names: Vec<&str> = GAME_TYPES.to_vec();
        names.sort_unstable();

        let chunks = GAME_TYPE_PALETTE
            .as_bytes()
            .chunks(6)
            .filter_map(|c| std::str::from_utf8(c).ok())
            .filter_map(Rgb::from_hex);

        let colors = names
            .into_iter()
            .zip(chunks)
            .map(|(name, rgb)| (name.to_string(), rgb))
            .collect();

        Self { colors }
    }

    pub fn weapons() -> Self {
        let colors = WEAPON_COLORS
            .iter()
            .filter_map(|(name, hex)| Rgb::from_hex(hex).map(|rgb| (name.to_string(), rgb)))
            .collect();

        Self { colors }
    }

    /// Uncategorized (single-series) rows use the default colour.
    pub fn lookup(&self, category: Option<&str>) -> AppResult<Rgb> {
        match category {
            None => Ok(SINGLE_SERIES_COLOR),
            Some(name) => self
                .colors
                .get(name)
                .copied()
                .ok_or_else(|| AppError::UnmappedCategory(name.to_string())),
        }
    }

}

/// Colour tables built once per run.
#[derive(Debug, Clone)]
pub struct Styles {
    pub game_types: CategoryStyles,
    pub weapons: CategoryStyles,
    pub single: CategoryStyles,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            game_types: CategoryStyles::game_types(),
            weapons: CategoryStyles::weapons(),
            single: CategoryStyles::default(),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#00e6ff"), Some(Rgb(0x00, 0xe6, 0xff)));
        assert_eq!(Rgb::from_hex("ff7f0e"), Some(Rgb(0xff, 0x7f, 0x0e)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_game_types_follow_palette_in_query_order() {
        let styles = CategoryStyles::game_types();
        assert_eq!(styles.colors.len(), GAME_TYPES.len());
        assert_eq!(styles.lookup(Some("ctf")).unwrap(), Rgb(0x1f, 0x77, 0xb4));
        assert_eq!(styles.lookup(Some("cts")).unwrap(), Rgb(0xff, 0x7f, 0x0e));
        assert_eq!(styles.lookup(Some("dm")).unwrap(), Rgb(0x2c, 0xa0, 0x2c));
        assert_eq!(styles.lookup(Some("tdm")).unwrap(), Rgb(0x8c, 0x56, 0x4b));
    }

    #[test]
    fn test_weapon_table_is_complete() {
        let styles = CategoryStyles::weapons();
        assert_eq!(styles.colors.len(), WEAPON_COLORS.len());
        assert_eq!(styles.lookup(Some("nex")).unwrap(), Rgb(0x00, 0xe6, 0xff));
        assert_eq!(
            styles.lookup(Some("vortex")).unwrap(),
            styles.lookup(Some("nex")).unwrap()
        );
    }

    #[test]
    fn test_unmapped_weapon_is_an_error() {
        let err = CategoryStyles::weapons().lookup(Some("plasmagun")).unwrap_err();
        assert!(matches!(err, AppError::UnmappedCategory(ref w) if w == "plasmagun"));
    }

    #[test]
    fn test_orange_scale_ends_and_clamps() {
        assert_eq!(sequential_orange(0.0), ORANGES[0]);
        assert_eq!(sequential_orange(0.5), ORANGES[1]);
        assert_eq!(sequential_orange(1.0), ORANGES[2]);
        assert_eq!(sequential_orange(-3.0), ORANGES[0]);
        assert_eq!(sequential_orange(7.0), ORANGES[2]);
        assert_eq!(sequential_orange(f64::NAN), ORANGES[0]);
    }

    #[test]
    fn test_uncategorized_uses_single_series_color() {
        assert_eq!(
            CategoryStyles::default().lookup(None).unwrap(),
            SINGLE_SERIES_COLOR
        );
    }
}
