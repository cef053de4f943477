//! Environment-file switching.
//!
//! `.env.<profile>` is copied over `.env` in the target directory. An existing
//! `.env` is copied to `.env.backup` first, replacing any older backup.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

pub const ACTIVE_FILE: &str = ".env";
pub const BACKUP_FILE: &str = ".env.backup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    Local,
    Production,
}

impl Profile {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Local => "local",
            Profile::Production => "production",
        }
    }

    /// `.env.local`, `.env.production`
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{ACTIVE_FILE}.{}", self.as_str())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SwitchError {
    #[error("{} not found", .0.display())]
    SourceMissing(PathBuf),
    #[error("failed to back up {path}: {source}", path = .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}", path = .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful switch did, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub profile: Profile,
    pub source: PathBuf,
    pub active: PathBuf,
    /// Set only when an active file existed and was backed up.
    pub backup: Option<PathBuf>,
}

impl SwitchOutcome {
    /// Lines printed by the CLI, in order.
    #[must_use]
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if self.backup.is_some() {
            lines.push(format!("Backed up {ACTIVE_FILE} to {BACKUP_FILE}"));
        }
        lines.push(format!(
            "Switched to {} environment ({} -> {ACTIVE_FILE})",
            self.profile,
            self.profile.file_name()
        ));
        lines
    }
}

/// Make `.env.<profile>` the active environment file in `dir`.
///
/// # Errors
///
/// Returns `SwitchError::SourceMissing` if the profile file does not exist,
/// and the I/O variants if the backup or the copy fails. Nothing is touched
/// when the source is missing.
pub fn switch(dir: &Path, profile: Profile) -> Result<SwitchOutcome, SwitchError> {
    let source = dir.join(profile.file_name());
    if !source.is_file() {
        return Err(SwitchError::SourceMissing(PathBuf::from(profile.file_name())));
    }

    let active = dir.join(ACTIVE_FILE);
    let backup = if active.exists() {
        let backup = dir.join(BACKUP_FILE);
        fs::copy(&active, &backup).map_err(|source| SwitchError::Backup {
            path: backup.clone(),
            source,
        })?;
        Some(backup)
    } else {
        None
    };

    fs::copy(&source, &active).map_err(|source| SwitchError::Copy {
        path: active.clone(),
        source,
    })?;

    Ok(SwitchOutcome {
        profile,
        source,
        active,
        backup,
    })
}
