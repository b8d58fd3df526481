//! Query → shape → render pipeline of every report.

pub mod definitions;

pub use definitions::{
    BarReport, GAMES_REPORT, HOURS_REPORT, HeatmapReport, PLAYERS_REPORT, Palette, ReportInfo,
    WEAPON_DAMAGE_REPORT, WEAPON_FRAGS_REPORT,
};

use crate::charts::render::{render_heatmap, render_stacked};
use crate::charts::{CategoryStyles, HeatGrid, StackedChart, Styles};
use crate::db::QueryExecutor;
use crate::errors::{AppError, AppResult};
use crate::models::{Series, TimeRange};
use crate::ui::messages::{info, success, warning};
use std::path::{Path, PathBuf};

fn palette<'a>(styles: &'a Styles, palette: Palette) -> &'a CategoryStyles {
    match palette {
        Palette::GameTypes => &styles.game_types,
        Palette::Weapons => &styles.weapons,
        Palette::Single => &styles.single,
    }
}

/// Run a bar report's query and lay out its chart.
pub fn build_bar_chart<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    report: &BarReport,
    range: &TimeRange,
    styles: &Styles,
) -> AppResult<StackedChart> {
    info(format!("Querying {} for {}", report.query.name, range.year));
    let rows = exec.fetch_activity(&report.query, range)?;
    if let Some(stray) = rows.iter().find(|r| !range.contains(r.bucket_start)) {
        return Err(AppError::InvalidBucket(format!(
            "{} outside {}",
            stray.bucket_start, range.year
        )));
    }

    let series = Series::from_records(&rows);
    if series.is_empty() {
        warning(format!("No rows for {} in {}", report.query.name, range.year));
    }
    StackedChart::layout(
        &report.title(range.year),
        report.y_label,
        &series,
        palette(styles, report.palette),
        &report.style,
    )
}

/// Run the hour-of-week query and build the normalised grid.
pub fn build_heatmap<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    report: &HeatmapReport,
    range: &TimeRange,
) -> AppResult<HeatGrid> {
    info(format!("Querying {} for {}", report.query.name, range.year));
    let rows = exec.fetch_hourly(&report.query, range)?;
    if rows.is_empty() {
        warning(format!("No rows for {} in {}", report.query.name, range.year));
    }

    HeatGrid::from_records(&report.title(range.year), &rows)
}

pub fn output_path(out_dir: &Path, report: &dyn ReportInfo, year: i32) -> PathBuf {
    out_dir.join(report.file_name(year))
}

fn generate_bar<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    report: &BarReport,
    range: &TimeRange,
    styles: &Styles,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    let chart = build_bar_chart(exec, report, range, styles)?;
    let path = output_path(out_dir, report, range.year);
    render_stacked(&chart, &path)?;
    success(format!("Chart written: {}", path.display()));
    Ok(path)
}

pub fn games_per_month<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    range: &TimeRange,
    styles: &Styles,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    generate_bar(exec, &GAMES_REPORT, range, styles, out_dir)
}

pub fn players_per_month<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    range: &TimeRange,
    styles: &Styles,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    generate_bar(exec, &PLAYERS_REPORT, range, styles, out_dir)
}

pub fn hours_played<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    range: &TimeRange,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    let grid = build_heatmap(exec, &HOURS_REPORT, range)?;
    let path = output_path(out_dir, &HOURS_REPORT, range.year);
    render_heatmap(&grid, &path)?;
    success(format!("Chart written: {}", path.display()));
    Ok(path)
}

pub fn weapon_damage_per_month<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    range: &TimeRange,
    styles: &Styles,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    generate_bar(exec, &WEAPON_DAMAGE_REPORT, range, styles, out_dir)
}

pub fn weapon_frags_per_month<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    range: &TimeRange,
    styles: &Styles,
    out_dir: &Path,
) -> AppResult<PathBuf> {
    generate_bar(exec, &WEAPON_FRAGS_REPORT, range, styles, out_dir)
}

/// Generate the five charts in their fixed order. The first error aborts
/// the run; files already written stay in place.
pub fn generate_all<E: QueryExecutor + ?Sized>(
    exec: &mut E,
    year: i32,
    out_dir: &Path,
) -> AppResult<Vec<PathBuf>> {
    let range = TimeRange::new(year)?;
    let styles = Styles::new();

    Ok(vec![
        games_per_month(exec, &range, &styles, out_dir)?,
        players_per_month(exec, &range, &styles, out_dir)?,
        hours_played(exec, &range, out_dir)?,
        weapon_damage_per_month(exec, &range, &styles, out_dir)?,
        weapon_frags_per_month(exec, &range, &styles, out_dir)?,
    ])
}
