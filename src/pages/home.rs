//! Home Page
//!
//! Dashboard: in-progress rings, the calendar and the achievement sidebar.

use leptos::prelude::*;
use taskquest_core::achievements::DASHBOARD_BADGES;
use taskquest_core::nav::Page;
use taskquest_core::progress::{RingColor, RingSize};
use taskquest_core::task_tree::Branch;

use crate::components::{AchievementBadge, BadgeSize, CalendarWidget, ProgressRing};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let branch_ring = move |branch: Branch, color: RingColor| {
        let progress = Signal::derive(move || store.tree().with(|t| t.branch_progress(branch)));
        view! {
            <ProgressRing
                progress=progress
                color=color
                size=RingSize::Md
                label=branch.label()
                category=branch.label()
            />
        }
    };
    let streak_progress = Signal::derive(move || store.streak().with(|s| s.mastery_progress()));

    view! {
        <div class="home-page">
            <section class="glass-card in-progress">
                <div class="card-header">
                    <h3>"🎯 In-Progress"</h3>
                    <button class="link-btn" on:click=move |_| ctx.go(Page::TaskTree)>"View more ›"</button>
                </div>
                <div class="ring-grid">
                    {branch_ring(Branch::SelfCare, RingColor::Success)}
                    {branch_ring(Branch::Studying, RingColor::Primary)}
                    {branch_ring(Branch::Chores, RingColor::Accent)}
                    <div class="streak-ring">
                        <ProgressRing
                            progress=streak_progress
                            color=RingColor::Streak
                            size=RingSize::Md
                            label="Total Streak"
                            category="Total Streak"
                        />
                        <p class="streak-detail">
                            {move || store.streak().with(|s| format!(
                                "{} current · {} best · {} visits",
                                s.current_daily_streak, s.best_streak, s.total_visits
                            ))}
                        </p>
                    </div>
                </div>
            </section>

            <div class="home-columns">
                <div class="home-main">
                    <CalendarWidget />
                </div>

                <aside class="glass-card achievements-sidebar">
                    <div class="card-header">
                        <h3>"Achievements"</h3>
                        <button class="link-btn" on:click=move |_| ctx.go(Page::Achievements)>"View All ›"</button>
                    </div>
                    <div class="badge-grid">
                        {DASHBOARD_BADGES.iter().map(|badge| view! {
                            <AchievementBadge
                                icon=badge.icon
                                title=badge.title
                                description=badge.description
                                unlocked=badge.unlocked
                                size=BadgeSize::Sm
                            />
                        }).collect_view()}
                    </div>
                    <button class="goldfish-btn" title="Release the fish" on:click=move |_| ctx.open_fish_overlay()>
                        <img src="assets/goldfish.png" alt="Goldfish" />
                    </button>
                </aside>
            </div>
        </div>
    }
}
