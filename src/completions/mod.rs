use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use clap_complete::Shell;

use crate::common::paths;
use crate::ui::prelude::{Level, emit};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SupportedShell {
    Bash,
    Zsh,
}

impl SupportedShell {
    fn as_complete_shell(self) -> Shell {
        match self {
            SupportedShell::Bash => Shell::Bash,
            SupportedShell::Zsh => Shell::Zsh,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            SupportedShell::Bash => "vod.bash",
            SupportedShell::Zsh => "_vod",
        }
    }

    fn install_instructions(self, install_path: &Path) -> String {
        match self {
            SupportedShell::Bash => format!(
                "Source the script from your ~/.bashrc:\n  source \"{}\"",
                install_path.display()
            ),
            SupportedShell::Zsh => format!(
                "Add the directory to fpath in your ~/.zshrc:\n  fpath=(\"{}\" $fpath)\nand re-run compinit.",
                install_path
                    .parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| install_path.to_string_lossy().into())
            ),
        }
    }
}

impl fmt::Display for SupportedShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportedShell::Bash => write!(f, "bash"),
            SupportedShell::Zsh => write!(f, "zsh"),
        }
    }
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum CompletionCommands {
    /// Print a completion script to stdout
    Generate {
        #[arg(value_enum)]
        shell: SupportedShell,
    },
    /// Install a completion script under the vod data directory
    Install {
        #[arg(value_enum)]
        shell: SupportedShell,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

pub fn handle_completion_command(command: CompletionCommands) -> Result<()> {
    match command {
        CompletionCommands::Generate { shell } => {
            print!("{}", generate(shell)?);
            Ok(())
        }
        CompletionCommands::Install {
            shell,
            output,
            force,
        } => {
            let install_path = install(shell, output, force)?;
            emit(
                Level::Success,
                "completions.installed",
                &format!("Installed {shell} completions to {}", install_path.display()),
                None,
            );
            emit(
                Level::Info,
                "completions.instructions",
                &shell.install_instructions(&install_path),
                None,
            );
            Ok(())
        }
    }
}

pub fn generate(shell: SupportedShell) -> Result<String> {
    let mut command = crate::cli_command();
    let mut buffer = Vec::new();
    clap_complete::generate(shell.as_complete_shell(), &mut command, "vod", &mut buffer);
    String::from_utf8(buffer).context("rendering completions")
}

pub fn install(shell: SupportedShell, output: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let default_dir = paths::vod_data_dir()?.join("completions");
    let target_path = output.unwrap_or_else(|| default_dir.join(shell.file_name()));

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating completions directory {}", parent.display()))?;
    }

    if target_path.exists() && !force {
        return Err(anyhow!(
            "{} already exists, pass --force to overwrite",
            target_path.display()
        ));
    }

    let script = generate(shell)?;
    fs::write(&target_path, script)
        .with_context(|| format!("writing completion script to {}", target_path.display()))?;

    Ok(target_path)
}
