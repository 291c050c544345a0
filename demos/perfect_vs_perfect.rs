//! Perfect vs Perfect self-play
//!
//! Drives the alpha-beta search for both sides from the empty board and
//! prints every position along the way. Two perfect players always draw;
//! the final outcome printed at the end demonstrates it.

use anyhow::Result;
use oxo::{Game, Outcome, best_action};

fn main() -> Result<()> {
    println!("\n=== Perfect vs Perfect ===\n");

    let mut game = Game::new();

    loop {
        let board = game.current_state()?;
        let Some(action) = best_action(&board) else {
            break;
        };

        let mover = board.to_move().to_cell().to_char();
        println!("{mover} plays {action}");
        game.play(action)?;
        println!("{}\n", game.current_state()?);
    }

    match game.outcome {
        Some(Outcome::Win(player)) => println!("Winner: {}", player.to_cell().to_char()),
        Some(Outcome::Draw) => println!("Draw, as theory demands"),
        None => unreachable!("self-play runs until the game ends"),
    }

    Ok(())
}
