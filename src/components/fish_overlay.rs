//! Fish Overlay Component
//!
//! Full-screen layer of wandering fish. The tank steps once per display frame
//! while the overlay is open; closing it stops the loop and empties the tank.

use leptos::ev;
use leptos::prelude::*;
use leptos_frame::{use_frame_loop, viewport_size};
use rand::rngs::StdRng;
use rand::SeedableRng;
use taskquest_core::sim::{Bounds, Tank};

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Used when the window size cannot be read
const FALLBACK_BOUNDS: Bounds = Bounds::new(1024.0, 768.0);

fn current_bounds() -> Bounds {
    viewport_size()
        .map(|(w, h)| Bounds::new(w, h))
        .unwrap_or(FALLBACK_BOUNDS)
}

/// Seed from the browser; no OS entropy on wasm32
fn browser_rng() -> StdRng {
    StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

#[component]
pub fn FishOverlay() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let tank = RwSignal::new(Tank::default());
    let rng = StoredValue::new(browser_rng());
    let open = Signal::derive(move || ctx.fish_overlay_open.get());

    // Fill on open, empty on close
    Effect::new(move |_| {
        if open.get() {
            let count = store.settings().with_untracked(|s| s.fish_count);
            let bounds = current_bounds();
            rng.update_value(|r| tank.update(|t| t.populate(r, bounds, count)));
        } else {
            tank.update(|t| t.clear());
        }
    });

    use_frame_loop(open, move |dt_ms| {
        let bounds = current_bounds();
        rng.update_value(|r| tank.update(|t| t.step(r, bounds, dt_ms)));
    });

    // Escape closes
    let esc = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.fish_overlay_open.get_untracked() {
            ctx.close_fish_overlay();
        }
    });
    on_cleanup(move || esc.remove());

    let feed = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let bounds = current_bounds();
        rng.update_value(|r| {
            tank.update(|t| {
                t.feed(r, bounds);
            })
        });
    };

    let dance = move |fish_id: u32| {
        let bounds = current_bounds();
        rng.update_value(|r| {
            tank.update(|t| {
                t.dance(fish_id, r, bounds);
            })
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="fish-overlay">
                <For
                    each=move || tank.with(|t| t.fishes().iter().map(|f| (f.id, f.color, f.size)).collect::<Vec<_>>())
                    key=|(id, _, _)| *id
                    children=move |(id, color, size)| {
                        let style = move || tank.with(|t| {
                            t.fishes().iter().find(|f| f.id == id).map(|f| format!(
                                "left: {:.1}px; top: {:.1}px; transform: {};",
                                f.position.x, f.position.y, f.transform().to_css()
                            )).unwrap_or_default()
                        });
                        view! {
                            <div
                                class="fish"
                                style=style
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    dance(id);
                                }
                            >
                                <FishSprite color=color size=size />
                            </div>
                        }
                    }
                />

                <For
                    each=move || tank.with(|t| t.pellets().iter().map(|p| p.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=move |id| {
                        let style = move || tank.with(|t| {
                            let cfg = t.pellet_config();
                            t.pellets().iter().find(|p| p.id == id).map(|p| format!(
                                "left: {:.1}px; top: {:.1}px; width: {2}px; height: {2}px; opacity: {3:.3};",
                                p.position.x, p.position.y, cfg.size, p.opacity(cfg)
                            )).unwrap_or_default()
                        });
                        view! { <div class="pellet" style=style></div> }
                    }
                />

                <div class="overlay-actions">
                    <button class="overlay-btn" on:click=feed>"❤ Feed Fish"</button>
                    <button
                        class="overlay-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.close_fish_overlay();
                        }
                    >
                        "✕ Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Drawn fish; `size` is the width in px
#[component]
fn FishSprite(color: &'static str, size: f64) -> impl IntoView {
    view! {
        <svg width=size height={size * 0.6} viewBox="0 0 100 60" class="fish-sprite">
            <ellipse cx="50" cy="30" rx="35" ry="20" fill=color opacity="0.9" />
            <path d="M15 30 Q5 20 5 30 Q5 40 15 30" fill=color opacity="0.8" />
            <circle cx="60" cy="25" r="6" fill="white" />
            <circle cx="62" cy="23" r="3" fill="black" />
            <ellipse cx="45" cy="15" rx="8" ry="4" fill=color opacity="0.7" />
            <ellipse cx="45" cy="45" rx="8" ry="4" fill=color opacity="0.7" />
            <ellipse cx="40" cy="30" rx="15" ry="3" fill="rgba(255,255,255,0.3)" />
        </svg>
    }
}
