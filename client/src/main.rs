mod ui;

use clap::Parser;

use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, GameConfig, Validate};
use tictactoe_engine::game::{Difficulty, GameSession, SessionRng};
use tictactoe_engine::logger;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// YAML file with player names, mode and difficulty
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    x_name: Option<String>,

    #[arg(long)]
    o_name: Option<String>,

    /// Play against the bot instead of a second human
    #[arg(long)]
    vs_bot: bool,

    /// Bot difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = build_config(&args)?;
    config.validate()?;

    let mut session = GameSession::new(SessionRng::from_random());
    session.start_game(
        &config.x_player_name,
        &config.o_player_name,
        config.multiplayer,
        config.difficulty,
    )?;

    ui::run(&mut session, &config)?;
    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let manager: ConfigManager<FileContentConfigProvider, GameConfig> =
                ConfigManager::from_yaml_file(path);
            manager.get_config()?
        }
        None => GameConfig::default(),
    };

    if let Some(name) = &args.x_name {
        config.x_player_name = name.clone();
    }
    if let Some(name) = &args.o_name {
        config.o_player_name = name.clone();
    }
    if args.vs_bot {
        config.multiplayer = false;
    }
    if let Some(difficulty) = &args.difficulty {
        config.difficulty = Difficulty::parse(difficulty)?;
    }

    Ok(config)
}
