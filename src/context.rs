//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;
use taskquest_core::nav::{action_for, NavAction, Page, Theme};

use crate::storage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page shown in the main area - read
    pub page: ReadSignal<Page>,
    /// Page shown in the main area - write
    set_page: WriteSignal<Page>,
    /// Colour theme - read
    pub theme: ReadSignal<Theme>,
    /// Colour theme - write
    set_theme: WriteSignal<Theme>,
    /// Whether the fish overlay is swimming - read
    pub fish_overlay_open: ReadSignal<bool>,
    /// Whether the fish overlay is swimming - write
    set_fish_overlay_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
        fish_overlay_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            theme: theme.0,
            set_theme: theme.1,
            fish_overlay_open: fish_overlay_open.0,
            set_fish_overlay_open: fish_overlay_open.1,
        }
    }

    /// Handle a navigation menu id
    pub fn select(&self, nav_id: &str) {
        match action_for(nav_id) {
            NavAction::Go(page) => self.go(page),
            NavAction::ToggleTheme => self.toggle_theme(),
        }
    }

    pub fn go(&self, page: Page) {
        log::debug!("navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Flip the theme and remember it
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        storage::persist(&next);
        self.set_theme.set(next);
    }

    pub fn open_fish_overlay(&self) {
        self.set_fish_overlay_open.set(true);
    }

    pub fn close_fish_overlay(&self) {
        self.set_fish_overlay_open.set(false);
    }
}
