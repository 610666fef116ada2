//! Signed-in user session, stored at ~/.config/kintai/session.toml
//!
//! This is the CLI's identity collaborator: sign-in itself happens
//! elsewhere (whatever issued the user id); the session file only remembers
//! who the punches belong to.

use anyhow::{Context, Result};
use kintai_core::{Identity, KintaiError, KintaiResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    user_id: String,
    display_label: String,
}

impl Session {
    pub fn new(user_id: String, label: Option<String>) -> Self {
        let display_label = label.unwrap_or_else(|| user_id.clone());

        Session {
            user_id,
            display_label,
        }
    }

    fn path() -> KintaiResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KintaiError::Config("Could not determine config directory".into()))?;

        Ok(config_dir.join("kintai").join("session.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            anyhow::bail!("Not signed in. Run `kintai login <user-id>` first.");
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let session: Session = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse session at {}", path.display()))?;

        if session.user_id.is_empty() {
            anyhow::bail!("Session at {} has an empty user id", path.display());
        }

        Ok(session)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize session")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;

        Ok(())
    }

    pub fn exists() -> bool {
        Self::path().map(|p| p.exists()).unwrap_or(false)
    }
}

impl Identity for Session {
    fn id(&self) -> &str {
        &self.user_id
    }

    fn display_label(&self) -> &str {
        &self.display_label
    }

    fn sign_out(self) -> KintaiResult<()> {
        std::fs::remove_file(Self::path()?)?;
        Ok(())
    }
}
