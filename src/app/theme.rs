use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class applied to the page root; the stylesheet keys its color tokens
    /// off of it.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Theme state passed down as explicit context instead of ambient global
/// access. Persistence goes through the `load`/`save` boundary only: one read
/// at startup, one write per toggle.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    #[cfg(feature = "hydrate")]
    stored: Signal<Theme>,
    #[cfg(feature = "hydrate")]
    set_stored: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Create the context at the app root. Server renders get the default
    /// (dark) until hydration applies the visitor's stored preference.
    pub fn provide() -> Self {
        let (theme, set_theme) = signal(Theme::default());
        #[cfg(feature = "hydrate")]
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(STORAGE_KEY);
        let ctx = Self {
            theme,
            set_theme,
            #[cfg(feature = "hydrate")]
            stored,
            #[cfg(feature = "hydrate")]
            set_stored,
        };
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Read the persisted preference once at startup.
    pub fn load(&self) {
        #[cfg(feature = "hydrate")]
        self.set_theme.set(self.stored.get_untracked());
    }

    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
        self.save();
    }

    /// Write the current preference through to browser storage.
    fn save(&self) {
        #[cfg(feature = "hydrate")]
        self.set_stored.set(self.theme.get_untracked());
    }
}
