//! Interactive text driver for the engine.
//!
//! Plays games on stdin/stdout: prompts for player count, engine colour,
//! and variant, then alternates user moves (short algebraic notation) with
//! engine replies. Commands: `undo`, `moves`, `hint`, `resign`/`retry`/
//! `restart` (new game), `exit`/`quit`.

use std::io::{self, BufRead};

use emberhill::{format_san, parse_san, Position, Searcher, Variant};

type InputLines = dyn Iterator<Item = io::Result<String>>;

fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    loop {
        if !play_game(&mut input) {
            return;
        }
    }
}

/// Read the next non-empty input token. Returns `None` at end of input.
fn read_line(input: &mut InputLines) -> Option<String> {
    for line in input {
        let line = line.ok()?;
        if let Some(word) = line.split_whitespace().next() {
            return Some(word.to_string());
        }
    }
    None
}

fn print_position(position: &mut Position) {
    println!("{position}");
    println!("{} to move.", position.side_to_move());
    println!("White's current score: {}", position.evaluate());
    println!();
}

fn current(game: &[Position]) -> &Position {
    &game[game.len() - 1]
}

/// Run one game. Returns false when the process should exit.
fn play_game(input: &mut InputLines) -> bool {
    println!("How many players? (0, 1, 2)");
    let Some(answer) = read_line(input) else {
        return false;
    };
    let num_players: u32 = match answer.as_str() {
        "0" => 0,
        "2" => 2,
        _ => 1,
    };

    let mut engine_plays_black = true;
    if num_players == 1 {
        println!("Computer colour? (white, black)");
        let Some(answer) = read_line(input) else {
            return false;
        };
        if answer.eq_ignore_ascii_case("white") {
            engine_plays_black = false;
        }
    }

    println!("Variant? (atomic, hill)");
    let Some(answer) = read_line(input) else {
        return false;
    };
    let variant = Variant::from_name(&answer);

    let mut game = vec![Position::new_with_variant(variant)];
    let mut searcher = Searcher::new();

    print_position(&mut game[0]);

    'game: while !current(&game).legal_moves().is_empty() {
        let engine_opens = game.len() == 1 && num_players == 1 && !engine_plays_black;
        if num_players > 0 && !engine_opens {
            'input: loop {
                println!("Please enter your move");
                let Some(word) = read_line(input) else {
                    return false;
                };
                match word.to_lowercase().as_str() {
                    "undo" => {
                        if game.len() > 2 {
                            game.pop();
                            game.pop();
                        } else {
                            println!("Nothing to undo");
                        }
                        println!();
                        let last = game.len() - 1;
                        print_position(&mut game[last]);
                    }
                    "moves" => {
                        let position = current(&game);
                        let all: Vec<String> = position
                            .legal_moves()
                            .iter()
                            .map(|&mv| format_san(position, mv))
                            .collect();
                        println!("{}.", all.join(", "));
                    }
                    "resign" | "retry" | "restart" => break 'game,
                    "exit" | "quit" => return false,
                    "hint" => {
                        if !engine_move(&mut game, &mut searcher) {
                            break 'game;
                        }
                        break 'input;
                    }
                    _ => match parse_san(current(&game), &word) {
                        Ok(mv) => {
                            let next = current(&game).derive(mv);
                            game.push(next);
                            println!();
                            let last = game.len() - 1;
                            print_position(&mut game[last]);
                            break 'input;
                        }
                        Err(_) => {
                            println!("Failed to find a legal move matching that instruction");
                        }
                    },
                }
            }
        }

        if num_players < 2
            && !current(&game).legal_moves().is_empty()
            && !engine_move(&mut game, &mut searcher)
        {
            break 'game;
        }
    }

    true
}

/// Let the engine pick and play a move. Returns false on resignation.
fn engine_move(game: &mut Vec<Position>, searcher: &mut Searcher) -> bool {
    let Some(best) = searcher.find_best_move(current(game)) else {
        println!("Resigns");
        return false;
    };
    let stats = searcher.stats();
    println!(
        "Evaluated to search depth {} in {:.2} seconds",
        stats.depth,
        stats.elapsed.as_secs_f64()
    );
    println!("Checked {} positions in total", stats.nodes);
    println!(
        "Best move {} has score {}",
        format_san(current(game), best),
        stats.score
    );

    let next = current(game).derive(best);
    game.push(next);
    let last = game.len() - 1;
    print_position(&mut game[last]);
    true
}
