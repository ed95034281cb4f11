//! Achievement Badge Component
//!
//! Icon badge with a locked overlay and hover tooltip.

use leptos::prelude::*;
use taskquest_core::achievements::BadgeIcon;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "badge-sm",
            BadgeSize::Md => "badge-md",
            BadgeSize::Lg => "badge-lg",
        }
    }
}

#[component]
pub fn AchievementBadge(
    icon: BadgeIcon,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    unlocked: bool,
    #[prop(optional)] size: BadgeSize,
) -> impl IntoView {
    let state = if unlocked { "unlocked" } else { "locked" };

    view! {
        <div class=format!("achievement-badge {} {}", size.class(), state)>
            <div class="badge-icon">
                <img src=icon.asset() alt=title.clone() />
                <Show when=move || !unlocked>
                    <div class="badge-lock">"🔒"</div>
                </Show>
            </div>
            <div class="badge-tooltip">
                <p class="badge-tooltip-title">{title}</p>
                <p class="badge-tooltip-description">{description}</p>
                <Show when=move || !unlocked>
                    <p class="badge-tooltip-locked">"Locked - Complete tasks to unlock!"</p>
                </Show>
            </div>
        </div>
    }
}
