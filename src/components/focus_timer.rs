//! Focus Timer Component
//!
//! Focus/break countdown. A one-second interval ticks the timer while it runs
//! and is dropped as soon as it stops or the component unmounts.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use taskquest_core::focus_timer::{FocusTimer, TickOutcome, TimerMode, TIMER_RING_RADIUS};

use crate::store::{store_add_focus_minutes, use_app_store, AppStateStoreFields};

const TICK_MS: u32 = 1000;

#[component]
pub fn FocusTimerCard() -> impl IntoView {
    let store = use_app_store();
    let (focus_secs, break_secs, focus_minutes) =
        store.settings().with_untracked(|s| (s.focus_secs(), s.break_secs(), s.focus_minutes));

    let timer = RwSignal::new(FocusTimer::new(focus_secs, break_secs));
    let running = Memo::new(move |_| timer.with(|t| t.is_running()));
    let ticker = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        if running.get() {
            let interval = Interval::new(TICK_MS, move || {
                let mut outcome = TickOutcome::Idle;
                timer.update(|t| outcome = t.tick());
                // Focus period just ended
                if outcome == TickOutcome::Finished(TimerMode::Break) {
                    store_add_focus_minutes(&store, focus_minutes);
                }
            });
            ticker.set_value(Some(interval));
        } else {
            ticker.set_value(None);
        }
    });

    on_cleanup(move || {
        let _ = ticker.try_set_value(None);
    });

    let circumference = std::f64::consts::TAU * TIMER_RING_RADIUS;

    let mode_button = move |mode: TimerMode, text: &'static str| {
        view! {
            <button
                class=move || if timer.with(|t| t.mode() == mode) { "timer-mode active" } else { "timer-mode" }
                on:click=move |_| timer.update(|t| t.switch(mode))
            >
                {text}
            </button>
        }
    };

    view! {
        <div class="focus-timer">
            <div class="timer-modes">
                {mode_button(TimerMode::Focus, "Focus")}
                {mode_button(TimerMode::Break, "Break")}
            </div>

            <div class="timer-dial">
                <svg viewBox="0 0 120 120" class="timer-svg">
                    <circle class="timer-track" cx="60" cy="60" r=TIMER_RING_RADIUS fill="none" stroke-width="6" />
                    <circle
                        class=move || format!("timer-value timer-{}", timer.with(|t| t.mode().label()))
                        cx="60"
                        cy="60"
                        r=TIMER_RING_RADIUS
                        fill="none"
                        stroke-width="6"
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=move || timer.with(|t| t.dash_offset())
                        transform="rotate(-90 60 60)"
                    />
                </svg>
                <div class="timer-readout">
                    <span class="timer-clock">{move || timer.with(|t| t.display())}</span>
                    <span class="timer-label">{move || timer.with(|t| t.mode().label())}</span>
                </div>
            </div>

            <div class="timer-controls">
                <button class="timer-toggle" on:click=move |_| timer.update(|t| t.toggle())>
                    {move || if running.get() { "Pause" } else { "Start" }}
                </button>
                <button class="timer-reset" on:click=move |_| timer.update(|t| t.reset())>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
