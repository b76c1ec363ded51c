//! Headless Sevens runner (default binary).
//!
//! Lets a CPU play against itself for a number of turns and prints the board
//! after each turn. Progress lines go to stderr, boards to stdout.
//!
//! ```text
//! sevens --mode normal --turns 30 --seed 7 --layout square
//! ```

use anyhow::Result;

use sevens::autoplay::{parse_autoplay_args, Session, TurnOutcome};
use sevens::core::Settings;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_autoplay_args(&args)?;

    let mut settings = Settings::from_env();
    if let Some(seed) = config.seed {
        settings.seed = seed;
    }

    eprintln!(
        "[Sevens] {}x{} board, cpu={}, seed={}",
        settings.grid_width,
        settings.grid_height,
        config.mode.as_str(),
        settings.seed
    );

    let mut session = Session::new(settings, config.mode, config.layout.clone());
    for _ in 0..config.turns {
        match session.play_turn() {
            TurnOutcome::Played(report) => {
                eprintln!(
                    "[Sevens] turn {} cpu={} anchor={} chains={} removed={} +{} score={}",
                    report.turn,
                    session.cpu().behaviour_name(),
                    report.anchor,
                    report.cascade.chains,
                    report.cascade.removed.len(),
                    report.cascade.total,
                    session.score()
                );
                println!("{}", session.grid().board());
            }
            TurnOutcome::ToppedOut => {
                eprintln!("[Sevens] topped out");
                break;
            }
        }
    }

    eprintln!("[Sevens] final score {}", session.score());
    Ok(())
}
