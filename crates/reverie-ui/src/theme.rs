//! Theme selection state.
//!
//! One module owns the current theme instead of scattered attribute
//! reads/writes. The resolution order is: stored preference, then the
//! system color scheme, then light.

/// A color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted under the `theme` storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything but `"dark"`/`"light"` is ignored.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Backing storage for the explicit theme preference.
///
/// In the browser this is local storage; tests use [`MemoryStore`].
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore(Option<Theme>);

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.0
    }

    fn save(&mut self, theme: Theme) {
        self.0 = Some(theme);
    }
}

/// The theme state machine.
///
/// All transitions are synchronous; each one returns the theme that should
/// now be reflected on the document, which doubles as the change
/// notification for anything observing the theme.
#[derive(Debug)]
pub struct ThemeManager<S: ThemeStore> {
    store: S,
    current: Theme,
    /// Set once the user has made an explicit choice; from then on system
    /// preference changes no longer apply.
    explicit: bool,
}

impl<S: ThemeStore> ThemeManager<S> {
    /// Resolve the initial theme: stored preference wins, otherwise the
    /// system preference.
    pub fn new(store: S, system: Theme) -> Self {
        let stored = store.load();
        Self {
            current: stored.unwrap_or(system),
            explicit: stored.is_some(),
            store,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme on user activation (click or Enter/Space) and persist
    /// the new value.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.flipped())
    }

    /// Set an explicit theme and persist it.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.explicit = true;
        self.store.save(theme);
        self.current
    }

    /// Follow a system color-scheme change, but only while the user has not
    /// chosen explicitly. Not persisted.
    pub fn system_changed(&mut self, system: Theme) -> Theme {
        if !self.explicit {
            self.current = system;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_wins_when_nothing_stored() {
        let manager = ThemeManager::new(MemoryStore::default(), Theme::Dark);

        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let mut store = MemoryStore::default();
        store.save(Theme::Light);

        let manager = ThemeManager::new(store, Theme::Dark);

        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut manager = ThemeManager::new(MemoryStore::default(), Theme::Dark);

        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.store.load(), Some(Theme::Light));

        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.store.load(), Some(Theme::Dark));
    }

    #[test]
    fn system_change_applies_only_without_explicit_choice() {
        let mut manager = ThemeManager::new(MemoryStore::default(), Theme::Light);

        assert_eq!(manager.system_changed(Theme::Dark), Theme::Dark);

        manager.set(Theme::Light);
        assert_eq!(manager.system_changed(Theme::Dark), Theme::Light);
    }

    #[test]
    fn unknown_stored_literal_is_ignored() {
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
    }
}
