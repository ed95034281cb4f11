//! Fish Minigame Page
//!
//! The player's pet fish: level, XP, hunger and feeding.

use leptos::prelude::*;

use crate::components::{StatsCard, StatsVariant};
use crate::context::AppContext;
use crate::store::{store_adopt_pet, store_feed_pet, today, use_app_store, AppStateStoreFields};

#[component]
pub fn FishMinigamePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (message, set_message) = signal(None::<String>);

    let alive = move || store.pet().with(|p| p.alive);
    let level = Signal::derive(move || store.pet().with(|p| format!("Level {}", p.level)));
    let xp = Signal::derive(move || store.pet().with(|p| format!("{} / {} XP", p.xp, p.xp_to_next())));
    let hunger = Signal::derive(move || store.pet().with(|p| format!("{}", p.feed_meter.max(0))));
    let xp_percent = move || store.pet().with(|p| p.xp as f64 / p.xp_to_next() as f64 * 100.0);

    let feed = move |_: web_sys::MouseEvent| match store_feed_pet(&store, today()) {
        Ok(()) => set_message.set(Some(format!("{} enjoyed the meal!", store.pet().with_untracked(|p| p.name.clone())))),
        Err(e) => set_message.set(Some(e)),
    };

    view! {
        <div class="minigame-page">
            <div class="minigame-status glass-card">
                <span class="coins">"🪙 " {move || store.pet().with(|p| p.tasks_completed)}</span>
                <button class="icon-btn" title="Release the fish" on:click=move |_| ctx.open_fish_overlay()>"🐟"</button>
            </div>

            <div class="tank">
                <img
                    class="tank-fish"
                    class:dead=move || !alive()
                    src="assets/fishminigame/fishy.gif"
                    alt="Fish Minigame Animation"
                />
                <img class="tank-border" src="assets/fishminigame/tank.png" alt="Fish Tank Border" />
            </div>

            <section class="pet-panel glass-card">
                <h2 class="pet-name">{move || store.pet().with(|p| p.name.clone())}</h2>
                <div class="pet-stats">
                    <StatsCard title="Level" value=level variant=StatsVariant::Achievement icon="⭐" />
                    <StatsCard title="Experience" value=xp variant=StatsVariant::Energy icon="⚡" />
                    <StatsCard title="Feed Meter" value=hunger subtitle="Drops by 2 each day you forget" variant=StatsVariant::Streak icon="🍤" />
                </div>
                <div class="progress-bar">
                    <div class="progress-fill" style=move || format!("width: {:.0}%", xp_percent())></div>
                </div>

                <Show
                    when=alive
                    fallback=move || view! {
                        <p class="pet-dead">"Your fish has passed away."</p>
                        <button
                            class="primary-btn"
                            on:click=move |_| {
                                store_adopt_pet(&store);
                                set_message.set(None);
                            }
                        >
                            "Adopt a new fish"
                        </button>
                    }
                >
                    <button class="primary-btn" on:click=feed>"🍤 Feed"</button>
                </Show>

                {move || message.get().map(|m| view! { <p class="notice">{m}</p> })}
            </section>
        </div>
    }
}
