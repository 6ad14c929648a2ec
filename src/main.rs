mod api;
mod cli;
mod config;
mod model;
mod timeline;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
