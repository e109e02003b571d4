//! Active theme mode holder.
//!
//! Owns the preference store. Initialization reads the persisted mode once;
//! every change updates memory first and then writes through synchronously.

use std::fmt;

use synthesia_core::prelude::*;
use synthesia_core::{ThemeMode, THEME_MODE_KEY};

use crate::preferences::PreferenceStore;

pub struct ThemeContext {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeContext {
    /// Restore the persisted mode, or `light` when it is missing, unreadable
    /// or not one of the known literals.
    pub fn init(store: Box<dyn PreferenceStore>) -> Self {
        let persisted = match store.get(THEME_MODE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read theme preference, using light: {}", e);
                None
            }
        };

        if let Some(raw) = persisted.as_deref() {
            if raw.parse::<ThemeMode>().is_err() {
                warn!("Ignoring unrecognized theme mode '{}'", raw);
            }
        }

        let mode = ThemeMode::from_persisted(persisted.as_deref());
        info!("Theme mode: {}", mode);
        Self { mode, store }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switch to `mode` and persist it.
    ///
    /// The in-memory mode changes even when the write fails; the error is
    /// returned so the caller can report it.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        self.store.set(THEME_MODE_KEY, mode.as_str())
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    use tempfile::tempdir;

    #[test]
    fn test_init_without_value_is_light() {
        let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(ctx.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_init_with_invalid_value_is_light() {
        let store = MemoryPreferenceStore::with_value(THEME_MODE_KEY, "midnight");
        let ctx = ThemeContext::init(Box::new(store));
        assert_eq!(ctx.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_init_with_unreadable_file_is_light() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::in_dir(dir.path());
        std::fs::write(store.path(), "themeMode = ").unwrap();

        let ctx = ThemeContext::init(Box::new(store));
        assert_eq!(ctx.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_then_reinit_restores_each_mode() {
        let dir = tempdir().unwrap();
        for mode in ThemeMode::ALL {
            let mut ctx = ThemeContext::init(Box::new(FilePreferenceStore::in_dir(dir.path())));
            ctx.set_theme_mode(mode).unwrap();
            assert_eq!(ctx.theme_mode(), mode);

            let reloaded = ThemeContext::init(Box::new(FilePreferenceStore::in_dir(dir.path())));
            assert_eq!(reloaded.theme_mode(), mode);
        }
    }

    #[test]
    fn test_failed_write_still_changes_mode() {
        let store = MemoryPreferenceStore::new().failing_writes();
        let mut ctx = ThemeContext::init(Box::new(store));

        let result = ctx.set_theme_mode(ThemeMode::Dark);
        assert!(result.is_err());
        assert_eq!(ctx.theme_mode(), ThemeMode::Dark);
    }
}
