mod audio;
mod common;
mod completions;
mod hdr;
mod replay;
mod subtitle;
mod ui;

use clap::{CommandFactory, Parser, Subcommand};

use crate::audio::AudioCommands;
use crate::completions::CompletionCommands;
use crate::hdr::HdrCommands;
use crate::replay::ReplayCommands;
use crate::subtitle::SubtitleCommands;
use crate::ui::OutputFormat;
use crate::ui::prelude::{Level, emit};

/// vod main parser
#[derive(Parser, Debug)]
#[command(name = "vod", author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit newline-delimited JSON events instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Subtitle generation from label tracks
    Subtitle {
        #[command(subcommand)]
        command: SubtitleCommands,
    },
    /// VBA-rr replay file inspection
    Replay {
        #[command(subcommand)]
        command: ReplayCommands,
    },
    /// Audio measurement helpers
    Audio {
        #[command(subcommand)]
        command: AudioCommands,
    },
    /// HDR mastering metadata helpers
    Hdr {
        #[command(subcommand)]
        command: HdrCommands,
    },
    /// Shell completion management
    Completions {
        #[command(subcommand)]
        command: CompletionCommands,
    },
}

/// Root clap command, shared by the parser and completion generation.
pub fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, !cli.json);
    ui::set_debug_mode(cli.debug);

    let result = match cli.command {
        Commands::Subtitle { command } => subtitle::handle_subtitle_command(command),
        Commands::Replay { command } => replay::handle_replay_command(command),
        Commands::Audio { command } => audio::handle_audio_command(command),
        Commands::Hdr { command } => hdr::handle_hdr_command(command),
        Commands::Completions { command } => completions::handle_completion_command(command),
    };

    if let Err(error) = result {
        emit(Level::Error, "vod.error", &format!("{error:#}"), None);
        std::process::exit(1);
    }
}
