//! Fourfall: a Connect Four engine for the terminal.
//!
//! ## Usage
//!
//! - `fourfall` - Play against the engine with default settings
//! - `fourfall play --millis 500` - Play with half a second per engine move
//! - `fourfall play --engine-first` - Let the engine open the game
//! - `fourfall demo` - Watch the engine play itself
//!
//! Search logging is available through `RUST_LOG` (for example
//! `RUST_LOG=debug` to see every completed depth).

use std::time::Duration;

use clap::{Parser, Subcommand};

use fourfall::console::ConsoleGame;
use fourfall::constants::{DEFAULT_BUDGET_MS, WIN};
use fourfall::position::Position;
use fourfall::search::best_move;
use fourfall::zobrist::ZobristTable;

/// Fourfall: a Connect Four engine
#[derive(Parser)]
#[command(name = "fourfall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play {
        /// Engine thinking time per move, in milliseconds
        #[arg(long, default_value_t = DEFAULT_BUDGET_MS)]
        millis: u64,
        /// Let the engine make the opening move
        #[arg(long)]
        engine_first: bool,
    },
    /// Watch the engine play a game against itself
    Demo {
        /// Engine thinking time per move, in milliseconds
        #[arg(long, default_value_t = DEFAULT_BUDGET_MS)]
        millis: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            millis,
            engine_first,
        }) => {
            let mut game = ConsoleGame::new(Duration::from_millis(millis), engine_first);
            game.run();
        }
        Some(Commands::Demo { millis }) => {
            run_demo(Duration::from_millis(millis));
        }
        None => {
            let mut game = ConsoleGame::new(Duration::from_millis(DEFAULT_BUDGET_MS), false);
            game.run();
        }
    }
    Ok(())
}

fn run_demo(budget: Duration) {
    println!("Fourfall: engine self-play\n");

    let zobrist = ZobristTable::default();
    let mut pos = Position::new();
    let mut ply = 1;

    while let Some(result) = best_move(&pos, &zobrist, budget) {
        pos = pos.play(result.column, &zobrist);
        println!(
            "{ply:2}. column {} (depth {}, value {})",
            result.column + 1,
            result.depth,
            result.value
        );
        // Show every board from the first player's point of view.
        let view = if ply % 2 == 1 { pos.flip() } else { pos.clone() };
        println!("{view}");
        if pos.score == -WIN {
            let winner = if ply % 2 == 1 { "First" } else { "Second" };
            println!("{winner} player wins after {ply} moves.");
            return;
        }
        ply += 1;
    }
    println!("Draw.");
}
