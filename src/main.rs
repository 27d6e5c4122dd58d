use clap::Parser;
use command_deck::{
    AppendText, Command, CommandHistory, CommandQueue, LightOff, LightOn, LoggingCommand,
    MacroCommand, RemoteControl, Room, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Settings file used when no path is given on the command line
const DEFAULT_SETTINGS_PATH: &str = "command_deck.ron";

#[derive(Parser, Debug)]
#[command(about = "Runs the command deck demo")]
struct Args {
    /// RON settings file; defaults are used if it cannot be read
    #[arg(default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = match Settings::load(&args.settings) {
        Ok(settings) => settings,
        Err(e) => {
            info!(path = %args.settings.display(), reason = %e, "using default settings");
            Settings::default()
        }
    };

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(cause) => error!(%cause, "{}", e),
                None => error!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> command_deck::CommandResult<()> {
    println!("=== Command Deck ===\n");
    let mut room = Room::new();

    // Party macro: light on then off, bound to the remote
    let party = MacroCommand::<Room>::from_settings(settings)
        .with(Box::new(LoggingCommand::new(LightOn::new())))
        .with(Box::new(LoggingCommand::new(LightOff::new())));
    let mut remote = RemoteControl::<Room>::new();
    remote.set_command(Box::new(party));
    remote.invoke(&mut room)?;
    println!("After party macro: light is {}", room.light);

    // Undoable edits
    let mut history = CommandHistory::<Room>::new();
    history.exec(Box::new(AppendText::new("Hello")), &mut room)?;
    history.exec(Box::new(AppendText::new(", world")), &mut room)?;
    println!("Document: {:?}", room.document.as_str());
    if let Some(undone) = history.undo(&mut room)? {
        println!("Undid {}: {:?}", undone.description(), room.document.as_str());
    }

    // Deferred batch
    let mut queue = CommandQueue::<Room>::new();
    queue.add(Box::new(LoggingCommand::new(LightOn::new())));
    queue.add(Box::new(AppendText::new("!")));
    let executed = queue.run_all(&mut room)?;
    println!(
        "Queue ran {} commands: light is {}, document {:?}",
        executed,
        room.light,
        room.document.as_str()
    );

    Ok(())
}
