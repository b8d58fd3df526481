//! The five charts produced by a run.

use crate::charts::stacked::{Anchor, BarStyle, LabelScale};
use crate::db::queries::{
    GAMES_PER_MONTH, HOURS_PLAYED, PLAYERS_PER_MONTH, ReportQuery, WEAPON_DAMAGE_PER_MONTH,
    WEAPON_FRAGS_PER_MONTH,
};

/// Which colour table a bar report draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    GameTypes,
    Weapons,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarReport {
    pub slug: &'static str,
    /// `{year}` is replaced with the report year.
    pub title_template: &'static str,
    pub y_label: &'static str,
    pub query: ReportQuery,
    pub palette: Palette,
    pub style: BarStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapReport {
    pub slug: &'static str,
    pub title_template: &'static str,
    pub query: ReportQuery,
}

pub trait ReportInfo {
    fn slug(&self) -> &'static str;
    fn title_template(&self) -> &'static str;

    fn title(&self, year: i32) -> String {
        self.title_template().replace("{year}", &year.to_string())
    }

    fn file_name(&self, year: i32) -> String {
        format!("{}_{}.png", year, self.slug())
    }
}

impl ReportInfo for BarReport {
    fn slug(&self) -> &'static str {
        self.slug
    }
    fn title_template(&self) -> &'static str {
        self.title_template
    }
}

impl ReportInfo for HeatmapReport {
    fn slug(&self) -> &'static str {
        self.slug
    }
    fn title_template(&self) -> &'static str {
        self.title_template
    }
}

pub const GAMES_REPORT: BarReport = BarReport {
    slug: "games_per_month",
    title_template: "Games Per Month in {year}",
    y_label: "Games",
    query: GAMES_PER_MONTH,
    palette: Palette::GameTypes,
    style: BarStyle {
        threshold: Some(2000.0),
        scale: LabelScale::Raw,
        headroom: 3500.0,
        top_margin: 300.0,
        inline_dx: -0.12,
        top_dx: -0.15,
        anchor: Anchor::Left,
    },
};

pub const PLAYERS_REPORT: BarReport = BarReport {
    slug: "players_per_month",
    title_template: "Players Per Month in {year}",
    y_label: "Players",
    query: PLAYERS_PER_MONTH,
    palette: Palette::Single,
    style: BarStyle {
        threshold: None,
        scale: LabelScale::Raw,
        headroom: 500.0,
        top_margin: 100.0,
        inline_dx: 0.0,
        top_dx: -0.15,
        anchor: Anchor::Left,
    },
};

pub const HOURS_REPORT: HeatmapReport = HeatmapReport {
    slug: "hours_heatmap",
    title_template: "Average Games Per Hour (in UTC) in {year}",
    query: HOURS_PLAYED,
};

pub const WEAPON_DAMAGE_REPORT: BarReport = BarReport {
    slug: "weapon_damage_per_month",
    title_template: "Weapon Damage Per Month in {year} (in thousands)",
    y_label: "Damage Points",
    query: WEAPON_DAMAGE_PER_MONTH,
    palette: Palette::Weapons,
    style: BarStyle {
        threshold: Some(10_000.0),
        scale: LabelScale::Thousands,
        headroom: 5_500_000.0,
        top_margin: 500_000.0,
        inline_dx: 0.0,
        top_dx: 0.0,
        anchor: Anchor::Center,
    },
};

pub const WEAPON_FRAGS_REPORT: BarReport = BarReport {
    slug: "weapon_frags_per_month",
    title_template: "Weapon Frags Per Month in {year}",
    y_label: "Frags",
    query: WEAPON_FRAGS_PER_MONTH,
    palette: Palette::Weapons,
    style: BarStyle {
        threshold: Some(25_000.0),
        scale: LabelScale::Raw,
        headroom: 50_000.0,
        top_margin: 3500.0,
        inline_dx: 0.0,
        top_dx: 0.0,
        anchor: Anchor::Center,
    },
};
