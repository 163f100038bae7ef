use anyhow::{anyhow, Result};
use clap::Parser;
use log::{info, LevelFilter};

use std::io::{stdin, stdout, Write};

use connect4_mc::*;

mod cli;
use cli::Args;

fn player_number(player: Cell) -> usize {
    match player {
        Cell::PlayerTwo => 2,
        _ => 1,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, level)?,
        None => simple_logging::log_to_stderr(level),
    }

    let mut engine = MonteCarlo::new()
        .with_trials(args.trials)
        .parallel(args.parallel)
        .with_progress(true);
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }

    // (player 1, player 2)
    let ai_players = if args.ai_vs_ai {
        (true, true)
    } else if args.ai_first {
        (true, false)
    } else {
        (false, true)
    };
    info!(
        "starting game, AI players {:?}, {} trials per move",
        ai_players,
        engine.trials()
    );

    let stdin = stdin();
    let mut board = Board::new();
    let mut player = Cell::PlayerOne;

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        board.display()?;

        match game_state(&board) {
            GameState::Playing => {
                let ai_controlled = match player {
                    Cell::PlayerTwo => ai_players.1,
                    _ => ai_players.0,
                };

                let column = if ai_controlled {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let column = engine
                        .select_move(&board, player)
                        .ok_or_else(|| anyhow!("AI found no legal move in a game in progress"))?;
                    println!("Player {} chooses {}", player_number(player), column + 1);
                    column
                } else {
                    print!("[P{}] Move input (1-{}) > ", player_number(player), WIDTH);
                    stdout().flush()?;

                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // stdin closed
                        return Ok(());
                    }

                    match input_str.trim().parse::<usize>() {
                        Ok(column) if column >= 1 => column - 1,
                        _ => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                    }
                };

                if let Err(err) = apply_move(&mut board, column, player) {
                    if ai_controlled {
                        return Err(err.into());
                    }
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                info!("player {} played column {}", player_number(player), column + 1);
                player = player.opponent();
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
