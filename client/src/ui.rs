use std::io::{self, BufRead, Write};

use tictactoe_engine::config::GameConfig;
use tictactoe_engine::game::{Board, GamePhase, GameSession};

/// Interactive loop over stdin. All rule decisions stay inside the
/// session; this layer only renders state and forwards commands.
pub fn run(session: &mut GameSession, config: &GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("TIC TAC TOE");
    println!("Cells are numbered 0-8, left to right, top to bottom.");
    println!("Commands: <cell>, history, jump <k>, reset, quit");

    loop {
        render(session);

        if matches!(session.phase(), GamePhase::Finished(_)) {
            println!("Type 'reset' to play again or 'quit' to exit.");
        }

        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "q" => return Ok(()),
            "history" => print_history(session),
            "reset" => {
                session.reset_game();
                if let Err(e) = session.start_game(
                    &config.x_player_name,
                    &config.o_player_name,
                    config.multiplayer,
                    config.difficulty,
                ) {
                    println!("{}", e);
                }
            }
            _ => handle_move_or_jump(session, input),
        }
    }
}

fn handle_move_or_jump(session: &mut GameSession, input: &str) {
    if let Some(target) = input.strip_prefix("jump ") {
        match target.trim().parse::<usize>() {
            Ok(target) => {
                if let Err(e) = session.jump_to(target) {
                    println!("{}", e);
                }
            }
            Err(_) => println!("Usage: jump <move number>"),
        }
        return;
    }

    match input.parse::<usize>() {
        Ok(index) if index < 9 => {
            if let Err(e) = session.play_move(index) {
                println!("{}", e);
            }
        }
        _ => println!("Enter a cell number 0-8, or one of the commands."),
    }
}

fn render(session: &GameSession) {
    println!();
    print_board(session.current_board(), session.winning_line());
    println!("{}", session.status_text());
}

fn print_board(board: &Board, winning_line: Option<[usize; 3]>) {
    let highlighted = |index: usize| winning_line.is_some_and(|line| line.contains(&index));

    for row in 0..3 {
        let mut cells = Vec::with_capacity(3);
        for col in 0..3 {
            let index = row * 3 + col;
            let mark = board.cell(index).as_str();
            if highlighted(index) {
                cells.push(format!("[{}]", mark));
            } else {
                cells.push(format!(" {} ", mark));
            }
        }
        println!("{}", cells.join("|"));
        if row < 2 {
            println!("---+---+---");
        }
    }
}

fn print_history(session: &GameSession) {
    for step in 0..session.history().len() {
        let marker = if step == session.current_move() {
            " <- current"
        } else {
            ""
        };
        if step == 0 {
            println!("  0: game start{}", marker);
        } else {
            println!("  {}: after move {}{}", step, step, marker);
        }
    }
}
