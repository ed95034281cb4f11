//! Progress Ring Component
//!
//! Circular SVG progress indicator with category artwork in the middle.

use leptos::prelude::*;
use taskquest_core::progress::{category_art, percent_label, RingColor, RingGeometry, RingSize, RING_VIEWPORT};

#[component]
pub fn ProgressRing(
    /// 0..=100, clamped
    #[prop(into)] progress: Signal<f64>,
    #[prop(optional)] size: RingSize,
    #[prop(optional)] color: RingColor,
    #[prop(optional, into)] label: Option<String>,
    /// Picks the artwork; unknown names get the placeholder
    #[prop(optional, into)] category: Option<String>,
) -> impl IntoView {
    let geometry = RingGeometry::for_size(size);
    let center = RING_VIEWPORT / 2.0;
    let art = category_art(category.as_deref());
    let view_box = format!("0 0 {0} {0}", RING_VIEWPORT);

    view! {
        <div class=format!("progress-ring {}", size.class())>
            <div class="progress-ring-figure">
                <svg viewBox=view_box class="progress-ring-svg">
                    <circle
                        class="progress-ring-track"
                        cx=center
                        cy=center
                        r=geometry.radius
                        stroke-width=geometry.stroke_width
                        fill="none"
                    />
                    <circle
                        class=format!("progress-ring-value {}", color.class())
                        cx=center
                        cy=center
                        r=geometry.radius
                        stroke-width=geometry.stroke_width
                        stroke-linecap="round"
                        fill="none"
                        stroke-dasharray=move || geometry.dasharray(progress.get())
                        transform=format!("rotate(-90 {0} {0})", center)
                    />
                </svg>
                <img class="progress-ring-art" src=art alt="" />
            </div>
            {label.map(|l| view! { <span class="progress-ring-label">{l}</span> })}
            <span class="progress-ring-percent">{move || percent_label(progress.get())}</span>
        </div>
    }
}
