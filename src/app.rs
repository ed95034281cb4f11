//! TaskQuest Frontend App
//!
//! Page shell: navigation bar, the current page, footer and the fish overlay.

use leptos::prelude::*;
use reactive_stores::Store;
use taskquest_core::nav::{Page, Theme};

use crate::components::{FishOverlay, Footer, Navigation};
use crate::context::AppContext;
use crate::pages::{AchievementsPage, FishMinigamePage, HomePage, NotFoundPage, TaskTreePage};
use crate::storage;
use crate::store::{today, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Global store
    let store = Store::new(AppState::load(today()));
    provide_context(store);

    // Theme defaults to dark and is written back on first run
    let saved_theme: Theme = storage::load();
    if !storage::is_stored::<Theme>() {
        storage::persist(&saved_theme);
    }

    let (page, set_page) = signal(Page::Home);
    let (theme, set_theme) = signal(saved_theme);
    let (fish_overlay_open, set_fish_overlay_open) = signal(false);

    provide_context(AppContext::new(
        (page, set_page),
        (theme, set_theme),
        (fish_overlay_open, set_fish_overlay_open),
    ));

    // Apply theme class to <html>
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            root.set_class_name(theme.as_str());
        }
    });

    view! {
        <div class="app-shell">
            <div class="sea-dim"></div>
            <div class="app-content">
                <Navigation />

                <main class="page">
                    {move || match page.get() {
                        Page::Home => view! { <HomePage /> }.into_any(),
                        Page::TaskTree => view! { <TaskTreePage /> }.into_any(),
                        Page::Achievements => view! { <AchievementsPage /> }.into_any(),
                        Page::Minigame => view! { <FishMinigamePage /> }.into_any(),
                        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
                    }}
                </main>

                <Footer />
            </div>

            <FishOverlay />
        </div>
    }
}
