use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueHint};

use crate::ui::prelude::{Level, emit};

/// VBA-rr replay files open with "VBM" plus an EOF-style marker byte.
const VBM_SIGNATURE: [u8; 4] = [b'V', b'B', b'M', 0x1a];

/// Byte offset of the little-endian recording timestamp in the header.
const RECORDED_AT_OFFSET: usize = 0x08;

#[derive(Subcommand, Debug, Clone)]
pub enum ReplayCommands {
    /// Print the Unix timestamp a VBM replay was recorded at
    Timestamp {
        /// Replay file (*.vbm)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

pub fn handle_replay_command(command: ReplayCommands) -> Result<()> {
    match command {
        ReplayCommands::Timestamp { file } => {
            let recorded_at = read_recorded_at(&file)?;
            emit(
                Level::Info,
                "replay.timestamp",
                &recorded_at.to_string(),
                None,
            );
            Ok(())
        }
    }
}

fn read_recorded_at(path: &Path) -> Result<u32> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read replay file {}", path.display()))?;

    if bytes.len() < RECORDED_AT_OFFSET + 4 {
        bail!(
            "{} is too short to be a VBM replay ({} bytes)",
            path.display(),
            bytes.len()
        );
    }
    if bytes[..4] != VBM_SIGNATURE {
        bail!("{} does not carry the VBM signature", path.display());
    }

    let field: [u8; 4] = bytes[RECORDED_AT_OFFSET..RECORDED_AT_OFFSET + 4]
        .try_into()
        .context("reading timestamp field")?;
    Ok(u32::from_le_bytes(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn replay_bytes(recorded_at: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&VBM_SIGNATURE);
        bytes.extend_from_slice(&[0u8; 4]); // version field
        bytes.extend_from_slice(&recorded_at.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 16]); // rest of the header
        bytes
    }

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(bytes).expect("write temp file");
        file
    }

    #[test]
    fn extracts_the_recording_timestamp() {
        let file = write_temp(&replay_bytes(1_234_567_890));
        assert_eq!(read_recorded_at(file.path()).unwrap(), 1_234_567_890);
    }

    #[test]
    fn rejects_truncated_files() {
        let file = write_temp(&[b'V', b'B', b'M', 0x1a, 0, 0]);
        let error = read_recorded_at(file.path()).unwrap_err();
        assert!(error.to_string().contains("too short"));
    }

    #[test]
    fn rejects_files_without_the_signature() {
        let mut bytes = replay_bytes(42);
        bytes[0] = b'X';
        let file = write_temp(&bytes);
        let error = read_recorded_at(file.path()).unwrap_err();
        assert!(error.to_string().contains("VBM signature"));
    }
}
