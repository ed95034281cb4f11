//! Navigation Component
//!
//! Top bar with the goldfish logo, title, quick-access drawer and the
//! slide-out menu. "Appearance" flips the theme instead of navigating.

use leptos::prelude::*;
use taskquest_core::nav::{action_for, NavAction, Theme, NAV_ITEMS};

use crate::components::QuickAccessDrawer;
use crate::context::AppContext;

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (menu_open, set_menu_open) = signal(false);

    let select = move |id: &'static str| {
        ctx.select(id);
        set_menu_open.set(false);
    };

    view! {
        <nav class="top-nav glass-card">
            <div class="nav-left">
                <img
                    class="nav-logo"
                    src="assets/goldfish.png"
                    alt="Goldfish Logo"
                    on:click=move |_| select("minigame")
                />
                <h1 class="nav-title">"TaskQuest"</h1>
                <QuickAccessDrawer />
            </div>

            <div class="nav-right">
                <button class="menu-btn" title="Menu" on:click=move |_| set_menu_open.update(|o| *o = !*o)>
                    "☰"
                </button>
                <button class="profile-btn" title="Profile" on:click=move |_| select("profile")>
                    "👤"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                <aside class="menu-sheet">
                    {NAV_ITEMS.iter().copied().map(|item| {
                        let id = item.id;
                        let is_active = move || match action_for(id) {
                            NavAction::Go(page) => ctx.page.get() == page,
                            NavAction::ToggleTheme => false,
                        };
                        let icon = move || {
                            if id != "appearance" {
                                return item.icon;
                            }
                            match ctx.theme.get() {
                                Theme::Dark => "☀",
                                Theme::Light => "🌙",
                            }
                        };
                        view! {
                            <button
                                class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                on:click=move |_| select(id)
                            >
                                <span class=format!("nav-icon {}", item.color)>{icon}</span>
                                <span class="nav-label">{item.label}</span>
                            </button>
                        }
                    }).collect_view()}
                </aside>
            </Show>
        </nav>
    }
}
