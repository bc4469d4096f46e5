//! Command-line runner
//!
//! Reads a JSON game config, plays the game once and prints the results and
//! their analysis as JSON.
//!
//! ```text
//! montecarlo game.json
//! montecarlo game.json --rolls 500 --seed 7 --form narrow
//! RUST_LOG=debug montecarlo game.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use montecarlo_core_rs::{Analyzer, GameConfig, ResultForm};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(author, version, about = "Roll weighted dice and analyze the results", long_about = None)]
struct Args {
    /// Path to the JSON game configuration
    config: PathBuf,

    /// Random seed, overriding the config's `seed`
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rolls, overriding the config's `rolls`
    #[arg(short, long)]
    rolls: Option<usize>,

    /// Result layout, "wide" or "narrow", overriding the config's `form`
    #[arg(short, long)]
    form: Option<ResultForm>,
}

impl Args {
    /// Apply command-line overrides on top of the file config
    fn apply(&self, config: &mut GameConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rolls) = self.rolls {
            config.rolls = rolls;
        }
        if let Some(form) = self.form {
            config.form = form;
        }
    }
}

fn run(args: &Args) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.config)?;
    let mut config = GameConfig::from_json(&text)?;
    args.apply(&mut config);

    let mut game = config.build_game()?;
    info!(
        "playing {} rolls with {} dice (seed {:?})",
        config.rolls,
        game.num_dice(),
        config.seed
    );
    game.play(config.rolls)?;

    let mut analyzer = Analyzer::new(&game);
    let jackpot_count = analyzer.jackpot()?;
    let combo_count = analyzer.combo()?;
    let permutation_count = analyzer.permutation()?;
    let face_counts = analyzer.face_counts_per_roll()?.clone();

    Ok(json!({
        "results": game.results(config.form)?,
        "analysis": {
            "face_types": analyzer.face_types(),
            "jackpot_count": jackpot_count,
            "jackpots": analyzer.jackpot_results(),
            "combo_count": combo_count,
            "combos": analyzer.combo_results(),
            "permutation_count": permutation_count,
            "face_counts": face_counts,
        },
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{:#}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}: {}", args.config.display(), err);
            ExitCode::FAILURE
        }
    }
}
