//! Persisted user preferences with a scoped-commit editor.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which top-level tab the app was showing when it last exited.
///
/// Modal child screens and the quest detail view fold into their parent
/// tab; only the two browsable surfaces are remembered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Builder,
    Quests,
}

/// User-tweakable settings persisted between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    /// Show the key hint bar under the builder.
    pub show_builder_hints: bool,
    /// Tab restored on the next launch.
    pub last_tab: Tab,
    /// How many times the app has been launched.
    pub launch_count: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            show_builder_hints: true,
            last_tab: Tab::Builder,
            launch_count: 0,
        }
    }
}

/// RON-backed preference file.
///
/// Follows platform conventions via `directories`:
/// - Linux: `~/.local/share/wyrmdex/prefs.ron`
/// - macOS: `~/Library/Application Support/wyrmdex/prefs.ron`
/// - Windows: `%APPDATA%\wyrmdex\prefs.ron`
/// - Fallback: `./wyrmdex/prefs.ron`
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn open_default() -> Self {
        let base = directories::ProjectDirs::from("", "", "wyrmdex")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./wyrmdex"));
        Self::at(base.join("prefs.ron"))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the current preferences; a missing or unreadable file yields
    /// the defaults.
    pub fn load(&self) -> Prefs {
        match fs::read_to_string(&self.path) {
            Ok(content) => ron::from_str(&content).unwrap_or_else(|err| {
                tracing::debug!("discarding unreadable prefs file: {err}");
                Prefs::default()
            }),
            Err(_) => Prefs::default(),
        }
    }

    /// Scoped edit: applies `apply` to the current preferences and
    /// commits the result in the same call. Returns the committed value.
    pub fn edit<F>(&self, apply: F) -> Result<Prefs>
    where
        F: FnOnce(&mut Prefs),
    {
        let mut prefs = self.load();
        apply(&mut prefs);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating pref directory {}", parent.display()))?;
        }
        let content = ron::to_string(&prefs).context("serializing prefs")?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing prefs to {}", self.path.display()))?;

        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("prefs.ron"));
        assert_eq!(store.load(), Prefs::default());
    }

    #[test]
    fn edit_commits_in_one_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("prefs.ron"));

        let committed = store
            .edit(|prefs| {
                prefs.show_builder_hints = false;
                prefs.launch_count += 1;
            })
            .unwrap();

        assert!(!committed.show_builder_hints);
        assert_eq!(store.load(), committed);
    }

    #[test]
    fn last_tab_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("prefs.ron"));

        store.edit(|prefs| prefs.last_tab = Tab::Quests).unwrap();

        assert_eq!(store.load().last_tab, Tab::Quests);
    }

    #[test]
    fn edits_accumulate_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("prefs.ron"));

        store.edit(|prefs| prefs.launch_count += 1).unwrap();
        store.edit(|prefs| prefs.launch_count += 1).unwrap();

        assert_eq!(store.load().launch_count, 2);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ron");
        fs::write(&path, "not ron at all {{{").unwrap();

        let store = PrefStore::at(path);
        assert_eq!(store.load(), Prefs::default());
    }
}
