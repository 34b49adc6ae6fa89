use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::{PreferenceStore, Theme, ThemeSwitch, DARK_CLASS};

/// `window.localStorage`. When storage is unavailable reads come back empty
/// and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("local storage unavailable, not saving {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("couldn't save {key}: {e:?}");
        }
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply {theme} theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefers_dark = use_preferred_dark();
    let (theme, set_theme) = signal(Theme::default());
    let switch = StoredValue::new(None::<ThemeSwitch<BrowserStore>>);

    // re-resolves when the system preference changes; a saved choice still wins
    Effect::new(move |_| {
        let loaded = ThemeSwitch::load(BrowserStore, prefers_dark.get());
        set_theme(loaded.theme());
        switch.set_value(Some(loaded));
    });

    Effect::new(move |_| apply_theme(theme.get()));

    view! {
        <button
            id="theme-toggle"
            type="button"
            aria-label="Toggle dark mode"
            class="p-2 rounded-lg text-gray-500 dark:text-gray-400 hover:bg-gray-200 dark:hover:bg-gray-700 focus:outline-none"
            on:click=move |_| {
                switch
                    .update_value(|switch| {
                        if let Some(switch) = switch {
                            set_theme(switch.toggle());
                        }
                    });
            }
        >
            <span id="theme-toggle-light-icon" class:hidden=move || theme.get().is_dark()>
                "☀️"
            </span>
            <span id="theme-toggle-dark-icon" class:hidden=move || !theme.get().is_dark()>
                "🌙"
            </span>
        </button>
    }
}
