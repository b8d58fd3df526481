use clap::Parser;

/// Command-line interface definition for xonstat-charts
/// Renders the yearly gameplay charts from the XonStat database
#[derive(Parser, Debug)]
#[command(
    name = "xonstat-charts",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render yearly Xonotic gameplay charts (games, players, hours, weapons) from XonStat",
    long_about = None
)]
pub struct Cli {
    /// Year to chart (defaults to the current year)
    #[arg(
        long = "year",
        value_name = "YEAR",
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Year to calculate (defaults to the current year)"
    )]
    pub year: Option<i32>,
}
