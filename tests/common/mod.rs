use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the compiled `vod` binary with the given arguments and environment
/// overrides, capturing everything it prints.
pub fn run_vod(args: &[&str], envs: &[(&str, &str)]) -> Result<CommandOutput> {
    run_vod_with_stdin(args, envs, None)
}

pub fn run_vod_with_stdin(
    args: &[&str],
    envs: &[(&str, &str)],
    stdin: Option<&str>,
) -> Result<CommandOutput> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vod"));
    command.args(args);
    for (key, value) in envs {
        command.env(key, value);
    }

    let output = match stdin {
        Some(input) => {
            command.stdin(Stdio::piped());
            command.stdout(Stdio::piped());
            command.stderr(Stdio::piped());
            let mut child = command.spawn().context("spawning vod")?;
            child
                .stdin
                .as_mut()
                .context("opening stdin")?
                .write_all(input.as_bytes())
                .context("writing stdin")?;
            child.wait_with_output().context("waiting for vod")?
        }
        None => command.output().context("running vod")?,
    };

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}
