#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn xsc() -> Command {
    cargo_bin_cmd!("xonstat-charts")
}

/// Create a fresh fake HOME inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_xonstat_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fake home");
    path
}

/// Write `~/.xonstat-charts/xonstat-charts.conf` under the given HOME
pub fn write_config(home: &PathBuf, yaml: &str) {
    let dir = home.join(".xonstat-charts");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("xonstat-charts.conf"), yaml).expect("write config");
}

/// A config pointing at a local port nothing listens on
pub fn unreachable_config(home: &PathBuf) {
    write_config(
        home,
        "database: xonstatdb\nhost: 127.0.0.1\nport: 1\n",
    );
}
