use tracing::{debug, error, warn};

use super::system::SystemAppearance;
use crate::error::StoreResult;
use crate::models::Theme;
use crate::storage::KeyValueStore;

/// Slot key for the persisted theme
pub const DEFAULT_THEME_KEY: &str = "kc_analyzer_theme";

/// Handle returned by [`ThemeManager::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn Fn(Theme)>;

/// Persists the theme choice and notifies listeners when it changes
pub struct ThemeManager<S, A> {
    storage: S,
    appearance: A,
    key: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<S: KeyValueStore, A: SystemAppearance> ThemeManager<S, A> {
    pub fn new(storage: S, appearance: A) -> Self {
        Self::with_key(storage, appearance, DEFAULT_THEME_KEY)
    }

    pub fn with_key(storage: S, appearance: A, key: impl Into<String>) -> Self {
        Self { storage, appearance, key: key.into(), listeners: Vec::new(), next_listener: 0 }
    }

    /// Theme the system preference alone would pick
    pub fn system_theme(&self) -> Theme {
        if self.appearance.prefers_dark() { Theme::Dark } else { Theme::Light }
    }

    /// The persisted choice if it is valid, otherwise the system theme
    pub fn current_theme(&self) -> Theme {
        match self.storage.get(&self.key) {
            Ok(Some(saved)) => match saved.parse::<Theme>() {
                Ok(theme) => return theme,
                Err(e) => debug!(error = %e, "ignoring saved theme"),
            },
            Ok(None) => {}
            Err(e) => warn!(key = %self.key, error = %e, "failed to read saved theme"),
        }
        self.system_theme()
    }

    /// Persist `theme`, then notify every listener
    pub fn set_theme(&self, theme: Theme) -> StoreResult<()> {
        self.storage.set(&self.key, theme.as_str())?;
        debug!(%theme, "theme changed");

        for (_, listener) in &self.listeners {
            listener(theme);
        }
        Ok(())
    }

    /// [`set_theme`](Self::set_theme) from a persisted name; anything but "light"/"dark" is rejected
    pub fn set_theme_name(&self, name: &str) -> StoreResult<Theme> {
        let theme = name.parse::<Theme>().inspect_err(|e| error!(error = %e, "rejected theme"))?;
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Switch to the other theme and return it
    pub fn toggle(&self) -> StoreResult<Theme> {
        let next = self.current_theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Apply the resolved theme at startup so listeners see the initial value
    pub fn init(&self) -> StoreResult<Theme> {
        let theme = self.current_theme();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}
