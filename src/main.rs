//! xonstat-charts main entrypoint.

use xonstat_charts::run;
use xonstat_charts::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
