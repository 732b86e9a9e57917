// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use hand_gestures::cli::args::{Cli, Commands};
use hand_gestures::cli::track::{list_gestures, run_tracking};
use hand_gestures::error;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Track(args) => {
            if let Err(e) = run_tracking(args) {
                error!("{e}");
                process::exit(1);
            }
        }
        Commands::Gestures => list_gestures(),
    }
}
