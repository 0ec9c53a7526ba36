use std::io::{self, Write};

use clap::{Parser, Subcommand};
use galaxy_cross::{
    init_logging, render_board, BoardEngine, BoardSize, LevelSource, Session, StaticLevels,
};

#[derive(Parser)]
#[command(author, version, about = "Sliding-block puzzle in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in levels.
    List,
    /// Print a level's starting board.
    Show {
        #[arg(long, default_value_t = 1, help = "Level number, starting at 1")]
        level: usize,
    },
    /// Play a level interactively; type 'help' for commands.
    Play {
        #[arg(long, default_value_t = 1, help = "Level number, starting at 1")]
        level: usize,
    },
}

fn level_index(level: usize) -> anyhow::Result<usize> {
    level
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("levels are numbered from 1"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let levels = StaticLevels::default();

    match cli.command {
        Commands::List => {
            for i in 0..levels.level_count() {
                let pieces = levels.get_level(i)?;
                println!("Level {}: {} pieces", i + 1, pieces.len());
            }
        }
        Commands::Show { level } => {
            let pieces = levels.get_level(level_index(level)?)?;
            let engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
            print!("{}", render_board(engine.board()));
        }
        Commands::Play { level } => {
            let mut session = Session::new(levels, level_index(level)?)?;
            println!("Get the target out through the gap. Type 'help' for commands.");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
