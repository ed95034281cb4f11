//! Achievements Page
//!
//! Filterable catalog with completion stats.

use leptos::prelude::*;
use taskquest_core::achievements::{Achievement, AchievementFilter, CatalogStats, Category, Rarity, CATALOG};

use crate::components::{AchievementBadge, BadgeSize};

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let filter = RwSignal::new(AchievementFilter::default());
    let stats = CatalogStats::of(&CATALOG);
    let visible = move || filter.with(|f| f.apply(&CATALOG).into_iter().copied().collect::<Vec<_>>());

    let category_button = move |category: Option<Category>, text: &'static str| {
        view! {
            <button
                class=move || if filter.with(|f| f.category == category) { "filter-btn active" } else { "filter-btn" }
                on:click=move |_| filter.update(|f| f.category = category)
            >
                {text}
            </button>
        }
    };

    view! {
        <div class="achievements-page">
            <header class="page-header">
                <h2>"🏆 Achievements"</h2>
                <p class="achievements-summary">
                    {format!("{} / {}", stats.unlocked, stats.total)}
                    <span class="muted">{format!(" · {}% Complete", stats.completion_percent())}</span>
                </p>
            </header>

            <div class="achievements-layout">
                <aside class="achievements-side">
                    <section class="glass-card filters">
                        <h3>"Filters"</h3>
                        <h4>"Category"</h4>
                        <div class="filter-list">
                            {category_button(None, "All")}
                            {Category::ALL.into_iter().map(|c| category_button(Some(c), c.label())).collect_view()}
                        </div>
                        <h4>"Status"</h4>
                        <label class="toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || filter.with(|f| f.unlocked_only)
                                on:change=move |_| filter.update(|f| f.unlocked_only = !f.unlocked_only)
                            />
                            <span>"Unlocked only"</span>
                        </label>
                    </section>

                    <section class="glass-card rarity-stats">
                        <h3>"Statistics"</h3>
                        {Rarity::ALL.into_iter().map(|rarity| {
                            let (unlocked, total) = CatalogStats::by_rarity(&CATALOG, rarity);
                            view! {
                                <div class="rarity-row">
                                    <span class=rarity.color_class()>{rarity.label()}</span>
                                    <span>{format!("{}/{}", unlocked, total)}</span>
                                </div>
                            }
                        }).collect_view()}
                    </section>
                </aside>

                <section class="achievement-grid">
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| view! {
                            <div class="glass-card empty-state">
                                <h3>"No achievements found"</h3>
                                <p>"Try adjusting your filters to see more achievements."</p>
                            </div>
                        }
                    >
                        <For each=visible key=|a| a.id children=|a| view! { <AchievementCard achievement=a /> } />
                    </Show>
                </section>
            </div>
        </div>
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let a = achievement;
    let class = if a.unlocked { "glass-card achievement-card" } else { "glass-card achievement-card locked" };

    view! {
        <div class=class>
            <AchievementBadge
                icon=a.icon
                title=a.title
                description=a.description
                unlocked=a.unlocked
                size=BadgeSize::Lg
            />
            <div class="achievement-body">
                <div class="achievement-title-row">
                    <h4>{a.title}</h4>
                    <span class=format!("rarity-tag {}", a.rarity.color_class())>{a.rarity.label()}</span>
                </div>
                <p class="muted">{a.description}</p>
                <span class="category-tag">{a.category.label()}</span>
                {match (a.unlocked, a.unlocked_date, a.progress) {
                    (true, Some(date), _) => view! {
                        <p class="unlock-date">{format!("Unlocked {}", date)}</p>
                    }.into_any(),
                    (false, _, Some(progress)) => view! {
                        <div class="achievement-progress">
                            <div class="progress-caption">
                                <span>"Progress"</span>
                                <span>{format!("{}/{}", progress.current, progress.total)}</span>
                            </div>
                            <div class="progress-bar">
                                <div class="progress-fill" style=format!("width: {:.0}%", progress.percent())></div>
                            </div>
                        </div>
                    }.into_any(),
                    _ => ().into_any(),
                }}
            </div>
        </div>
    }
}
