//! Interactive console play against the engine.
//!
//! The game loop reads one line of input per human move from stdin:
//! a 1-based column number (`1`-`7`), or `q`/`quit` to leave. Anything
//! else, including a full column, is reported and asked again.
//!
//! The board is always printed from the human's point of view. Positions
//! alternate perspective with every move, so after the human has moved the
//! position is flipped for display; after the engine has moved it is shown
//! as is. That way the human's pieces keep the same glyph for the whole
//! game.
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use fourfall::console::ConsoleGame;
//!
//! let mut game = ConsoleGame::new(Duration::from_millis(200), false);
//! game.run();
//! ```

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::constants::{CENTER_COLUMN, COLS, WIN};
use crate::position::{Column, Position};
use crate::search::best_move;
use crate::zobrist::ZobristTable;

/// One parsed line of human input.
enum Input {
    Column(Column),
    Quit,
    Invalid,
}

/// Interactive human-vs-engine game over stdin/stdout.
pub struct ConsoleGame {
    /// Current position, from the perspective of the player to move
    pos: Position,
    /// Shared hashing keys
    zobrist: ZobristTable,
    /// Wall-clock budget per engine move
    budget: Duration,
    /// Whether the engine makes the opening move
    engine_first: bool,
}

impl ConsoleGame {
    /// Create a game with the given engine time budget.
    pub fn new(budget: Duration, engine_first: bool) -> Self {
        Self {
            pos: Position::new(),
            zobrist: ZobristTable::default(),
            budget,
            engine_first,
        }
    }

    /// Run the game loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        if let Some(col) = self.opening_move() {
            writeln!(stdout, "Engine opens in column {}.", col + 1).unwrap();
        }
        render(&mut stdout, &self.pos);
        prompt(&mut stdout);

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };

            let col = match parse_input(&line) {
                Input::Quit => break,
                Input::Invalid => {
                    writeln!(stdout, "Enter a column 1-{COLS}, or q to quit.").unwrap();
                    prompt(&mut stdout);
                    continue;
                }
                Input::Column(col) => col,
            };

            match self.pos.try_play(col, &self.zobrist) {
                Ok(next) => self.pos = next,
                Err(_) => {
                    writeln!(stdout, "Column {} is full, try another.", col + 1).unwrap();
                    prompt(&mut stdout);
                    continue;
                }
            }

            // The position now reads from the engine's side; flip it so the
            // human keeps seeing their own pieces as OWN_GLYPH.
            render(&mut stdout, &self.pos.flip());
            if let Some(message) = verdict(&self.pos, true) {
                writeln!(stdout, "{message}").unwrap();
                break;
            }

            let result = match best_move(&self.pos, &self.zobrist, self.budget) {
                Some(r) => r,
                None => break,
            };
            self.pos = self.pos.play(result.column, &self.zobrist);
            writeln!(stdout, "Engine plays column {}.", result.column + 1).unwrap();
            render(&mut stdout, &self.pos);
            if let Some(message) = verdict(&self.pos, false) {
                writeln!(stdout, "{message}").unwrap();
                break;
            }
            prompt(&mut stdout);
        }
    }

    /// Play the fixed center opening when the engine moves first.
    ///
    /// The first move of an empty board is not searched.
    fn opening_move(&mut self) -> Option<Column> {
        if !self.engine_first {
            return None;
        }
        self.pos = self.pos.play(CENTER_COLUMN, &self.zobrist);
        Some(CENTER_COLUMN)
    }
}

/// Parse one line of human input.
fn parse_input(line: &str) -> Input {
    let s = line.trim();
    if s.eq_ignore_ascii_case("q") || s.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Input::Column(n - 1),
        _ => Input::Invalid,
    }
}

/// Print the board with a column ruler underneath.
fn render(stdout: &mut impl Write, pos: &Position) {
    writeln!(stdout, "{pos}1 2 3 4 5 6 7\n").unwrap();
}

fn prompt(stdout: &mut impl Write) {
    write!(stdout, "Your move (1-{COLS}, q quits): ").unwrap();
    stdout.flush().unwrap();
}

/// The game-over message for a position, or `None` while play goes on.
///
/// A score of `-WIN` means the previous move completed four in a row, so
/// who wins depends on who moved last.
fn verdict(pos: &Position, human_moved: bool) -> Option<&'static str> {
    if pos.score == -WIN {
        Some(if human_moved {
            "You win!"
        } else {
            "The engine wins."
        })
    } else if pos.legal_moves().is_empty() {
        Some("Draw.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FOE;

    fn play_out(cols: &[Column]) -> Position {
        let zobrist = ZobristTable::default();
        cols.iter()
            .fold(Position::new(), |pos, &col| pos.play(col, &zobrist))
    }

    #[test]
    fn test_parse_input_columns() {
        assert!(matches!(parse_input("1"), Input::Column(0)));
        assert!(matches!(parse_input(" 7 "), Input::Column(6)));
        assert!(matches!(parse_input("4"), Input::Column(3)));
    }

    #[test]
    fn test_parse_input_rejects_out_of_range() {
        assert!(matches!(parse_input("0"), Input::Invalid));
        assert!(matches!(parse_input("8"), Input::Invalid));
        assert!(matches!(parse_input("three"), Input::Invalid));
        assert!(matches!(parse_input(""), Input::Invalid));
    }

    #[test]
    fn test_parse_input_quit() {
        assert!(matches!(parse_input("q"), Input::Quit));
        assert!(matches!(parse_input("Q"), Input::Quit));
        assert!(matches!(parse_input("quit"), Input::Quit));
    }

    #[test]
    fn test_opening_move_plays_the_center() {
        let mut game = ConsoleGame::new(Duration::ZERO, true);
        assert_eq!(game.opening_move(), Some(CENTER_COLUMN));
        // After the engine's move the position reads from the human's
        // side, so the engine's piece is a FOE cell on the bottom row.
        assert_eq!(game.pos.cells[5 * COLS + CENTER_COLUMN], FOE);
    }

    #[test]
    fn test_no_opening_move_for_the_human() {
        let mut game = ConsoleGame::new(Duration::ZERO, false);
        assert_eq!(game.opening_move(), None);
        assert_eq!(game.pos.cells, Position::new().cells);
    }

    #[test]
    fn test_verdict_names_the_last_mover() {
        let won = play_out(&[3, 0, 3, 1, 3, 2, 3]);
        assert_eq!(verdict(&won, true), Some("You win!"));
        assert_eq!(verdict(&won, false), Some("The engine wins."));
    }

    #[test]
    fn test_verdict_ongoing_game() {
        assert_eq!(verdict(&Position::new(), true), None);
        assert_eq!(verdict(&play_out(&[3, 3]), false), None);
    }

    #[test]
    fn test_render_includes_the_ruler() {
        let mut out = Vec::new();
        render(&mut out, &Position::new());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 2 3 4 5 6 7"));
        assert!(text.contains(". . . . . . ."));
    }
}
