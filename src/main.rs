use std::io::{self, Write};
use std::process::ExitCode;
use std::rc::Rc;
use std::thread;

use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tty_chess::chess_errors::ChessErrors;
use tty_chess::game::game::{Game, GameOutcome};
use tty_chess::game::game_config::{GameConfig, USAGE};
use tty_chess::game_state::board::Board;
use tty_chess::game_state::chess_types::Team;
use tty_chess::persistence::save_strategy::build_save_strategy;
use tty_chess::terminal::board_renderer::BoardRenderer;
use tty_chess::terminal::keyboard_input::{KeyboardInput, KeyboardPlayer};

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("tty_chess: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ChessErrors> {
    let config = GameConfig::from_args(std::env::args().skip(1))?;
    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let player_one_white = if config.random_sides {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed).random_bool(0.5),
            None => rand::rng().random_bool(0.5),
        }
    } else {
        true
    };
    let (first, second) = if player_one_white {
        (Team::White, Team::Black)
    } else {
        (Team::Black, Team::White)
    };

    let input = Rc::new(KeyboardInput::spawn_stdin());
    let mut player_one = KeyboardPlayer::new(first, "Player 1", Rc::clone(&input));
    let mut player_two = KeyboardPlayer::new(second, "Player 2", Rc::clone(&input));

    let save_path = config.resolved_save_path();
    info!(
        "Player 1 plays {first}, {}s each, record goes to {}",
        config.timer_start.as_secs(),
        save_path.display()
    );

    let mut game = Game::new(
        Board::new_game(config.rules),
        &mut player_one,
        &mut player_two,
        config.timer_start,
        build_save_strategy(config.save_format, &save_path),
    )
    .with_tick(config.tick);

    let mut renderer = BoardRenderer::new();
    let mut stdout = io::stdout();
    let tick = config.tick;
    let outcome = game.run(|game| {
        if let Some(frame) = renderer.frame(game) {
            print!("{frame}");
            let _ = stdout.flush();
        }
        if !game.is_over() {
            thread::sleep(tick);
        }
    })?;

    match outcome {
        GameOutcome::Checkmate { winner } => println!("{winner} wins by checkmate."),
        GameOutcome::Timeout { loser } => println!("{loser} lost on time."),
        GameOutcome::Abandoned { by } => println!("Input closed, {by} abandoned the game."),
    }
    println!("Game record saved to {}", save_path.display());
    Ok(())
}
