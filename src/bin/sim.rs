use clap::Parser;
use galaxy_cross::{init_logging, BoardEngine, BoardSize, LevelSource, StaticLevels};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Random-walk a level with legal slides and report whether it got solved.
#[derive(Parser)]
struct Args {
    /// RNG seed; the same seed replays the same walk.
    seed: u64,
    #[arg(long, default_value_t = 1, help = "Level number, starting at 1")]
    level: usize,
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let index = args
        .level
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("levels are numbered from 1"))?;

    let pieces = StaticLevels::default().get_level(index)?;
    let mut engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut steps = 0;
    while steps < args.max_steps && !engine.board().is_complete() {
        let moves = engine.legal_moves();
        if moves.is_empty() {
            break;
        }
        let pick = &moves[rng.random_range(0..moves.len())];
        engine.apply_move(pick.piece.as_str(), pick.to);
        steps += 1;
    }

    let result = json!({
        "level": args.level,
        "seed": args.seed,
        "steps": steps,
        "solved": engine.board().is_complete(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
