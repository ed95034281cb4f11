//! Stats Card Component

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StatsVariant {
    #[default]
    Default,
    Streak,
    Achievement,
    Energy,
}

impl StatsVariant {
    fn class(&self) -> &'static str {
        match self {
            StatsVariant::Default => "stats-card",
            StatsVariant::Streak => "stats-card stats-streak",
            StatsVariant::Achievement => "stats-card stats-achievement",
            StatsVariant::Energy => "stats-card stats-energy",
        }
    }
}

#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] variant: StatsVariant,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] background_image: Option<&'static str>,
) -> impl IntoView {
    let style = background_image
        .map(|src| format!("background-image: url({})", src))
        .unwrap_or_default();

    view! {
        <div class=variant.class() style=style>
            {icon.map(|i| view! { <span class="stats-icon">{i}</span> })}
            <div class="stats-body">
                <p class="stats-title">{title}</p>
                <p class="stats-value">{move || value.get()}</p>
                {subtitle.map(|s| view! { <p class="stats-subtitle">{s}</p> })}
            </div>
        </div>
    }
}
