//! Quick Access Drawer Component
//!
//! Side sheet with the focus timer, streak stats and recent achievements.

use leptos::prelude::*;
use taskquest_core::achievements::RECENT_BADGES;
use taskquest_core::nav::Page;

use crate::components::{AchievementBadge, BadgeSize, FocusTimerCard, StatsCard, StatsVariant};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn QuickAccessDrawer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let current_streak = Signal::derive(move || format!("{} days", store.streak().with(|s| s.current_daily_streak)));
    let best_streak = Signal::derive(move || format!("{} days", store.streak().with(|s| s.best_streak)));
    let focus_time = Signal::derive(move || format!("{:.1}h", store.focus_minutes().get() as f64 / 60.0));

    view! {
        <button class="drawer-toggle" title="Quick Access" on:click=move |_| set_open.set(true)>
            "›"
        </button>

        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_open.set(false)></div>
            <aside class="drawer-sheet">
                <header class="drawer-header">
                    <h2>"⭐ Quick Access"</h2>
                    <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                </header>

                <section>
                    <h3 class="drawer-section-title">"Focus Timer"</h3>
                    <FocusTimerCard />
                </section>

                <section>
                    <h3 class="drawer-section-title">"Your Stats"</h3>
                    <div class="drawer-stats">
                        <StatsCard
                            title="Current Streak"
                            value=current_streak
                            subtitle="Keep it up!"
                            variant=StatsVariant::Streak
                            icon="🔥"
                            background_image="assets/banners/current-streak-banner-400x80.png"
                        />
                        <StatsCard
                            title="Best Streak"
                            value=best_streak
                            subtitle="Personal record"
                            variant=StatsVariant::Achievement
                            icon="🏆"
                            background_image="assets/banners/best-streak-banner-400x80.png"
                        />
                        <StatsCard
                            title="Focus Time"
                            value=focus_time
                            subtitle="this session"
                            variant=StatsVariant::Energy
                            icon="⏱"
                            background_image="assets/banners/focus-time-banner-400x80.png"
                        />
                    </div>
                </section>

                <section>
                    <div class="drawer-section-row">
                        <h3 class="drawer-section-title">"Recent Achievements"</h3>
                        <button
                            class="link-btn"
                            on:click=move |_| {
                                set_open.set(false);
                                ctx.go(Page::Achievements);
                            }
                        >
                            "View all ›"
                        </button>
                    </div>
                    <ul class="recent-achievements">
                        {RECENT_BADGES.iter().map(|badge| view! {
                            <li class="recent-achievement">
                                <AchievementBadge
                                    icon=badge.icon
                                    title=badge.title
                                    description=badge.description
                                    unlocked=badge.unlocked
                                    size=BadgeSize::Sm
                                />
                                <div class="recent-achievement-text">
                                    <p class="recent-title">{badge.title}</p>
                                    <p class="recent-description">{badge.description}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </aside>
        </Show>
    }
}
