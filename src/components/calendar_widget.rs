//! Calendar Widget Component
//!
//! Week grid of tasks. Collapsed, each day shows six 4-hour cells; clicking
//! a day expands it to 24 hourly rows. Below the grid is the task list of
//! the selected day.

use leptos::prelude::*;
use taskquest_core::calendar::{long_day_label, SlotLayout, SlotSummary, Task, TimeSlot, WeekView};

use crate::components::{DeleteConfirmButton, NewTaskForm};
use crate::store::{store_remove_task, store_toggle_task, today, use_app_store, AppStateStoreFields};

#[component]
pub fn CalendarWidget() -> impl IntoView {
    let store = use_app_store();
    let today = today();
    let week = RwSignal::new(WeekView::new(today));
    let (adding, set_adding) = signal(false);

    let day_headers = move || {
        week.get().visible_days().into_iter().map(|day| {
            let class = match (day == week.with(|w| w.selected), day == today) {
                (true, _) => "day-header selected",
                (false, true) => "day-header today",
                _ => "day-header",
            };
            view! {
                <button class=class on:click=move |_| week.update(|w| w.click_day(day))>
                    <span class="day-name">{day.format("%a").to_string()}</span>
                    <span class="day-number">{day.format("%-d").to_string()}</span>
                </button>
            }
        }).collect_view()
    };

    let grid_rows = move || {
        let view = week.get();
        let days = view.visible_days();
        let layout = view.layout();
        let planner = store.planner().read();

        let rows = TimeSlot::all(layout).into_iter().map(|slot| {
            let cells = days.iter().map(|&day| match layout {
                SlotLayout::FourHour => {
                    let summary = SlotSummary::of(&planner.for_slot(day, slot));
                    view! { <div class="grid-cell">{summary.map(slot_summary)}</div> }.into_any()
                }
                SlotLayout::Hourly => {
                    let tasks = planner.at(day, slot.start());
                    view! {
                        <div class="grid-cell hourly">
                            {tasks.into_iter().map(task_chip).collect_view()}
                        </div>
                    }.into_any()
                }
            }).collect_view();

            view! {
                <div class="grid-row">
                    <div class="slot-label">{slot.label()}</div>
                    {cells}
                </div>
            }
        }).collect_view();
        rows
    };

    let selected_tasks = move || {
        let selected = week.with(|w| w.selected);
        store.planner().with(|p| p.for_date(selected))
    };

    view! {
        <div class="calendar-widget glass-card">
            <div class="calendar-header">
                <h3>"📅 Calendar"</h3>
                <button class="primary-btn" on:click=move |_| set_adding.set(true)>"+ Add Task"</button>
            </div>

            <Show when=move || adding.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <NewTaskForm
                            default_date=week.with_untracked(|w| w.selected)
                            on_close=move |_| set_adding.set(false)
                        />
                    </div>
                </div>
            </Show>

            <div class="week-nav">
                <button class="icon-btn" on:click=move |_| week.update(|w| w.prev_week())>"‹"</button>
                <h4>{move || week.with(|w| w.range_label())}</h4>
                <button class="icon-btn" on:click=move |_| week.update(|w| w.next_week())>"›"</button>
            </div>

            <div class=move || if week.with(|w| w.expanded.is_some()) { "week-grid expanded" } else { "week-grid" }>
                <div class="grid-row grid-head">
                    <div class="slot-label"></div>
                    {day_headers}
                </div>
                {grid_rows}
            </div>

            {move || week.with(|w| w.expanded).map(|day| view! {
                <div class="expanded-controls">
                    <p>"Viewing detailed schedule for " {long_day_label(day)}</p>
                    <button class="outline-btn" on:click=move |_| week.update(|w| w.collapse())>
                        "Show All Days"
                    </button>
                </div>
            })}

            <Show when=move || !selected_tasks().is_empty()>
                <div class="selected-day">
                    <h5>{move || long_day_label(week.with(|w| w.selected))}</h5>
                    <For
                        each=selected_tasks
                        key=|task| (task.id, task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </div>
            </Show>
        </div>
    }
}

fn slot_summary(summary: SlotSummary) -> impl IntoView {
    view! {
        <div class="slot-summary">
            <span class="slot-count">{summary.count_label}</span>
            {summary.preview.into_iter().map(task_chip).collect_view()}
            {summary.more.map(|n| view! { <span class="slot-more">{format!("+{} more", n)}</span> })}
        </div>
    }
}

fn task_chip(task: Task) -> impl IntoView {
    let class = if task.completed { "task-chip done" } else { "task-chip" };
    view! { <span class=class title=task.time.display_12h()>{task.title}</span> }
}

/// One task of the selected day
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;

    view! {
        <div class="task-row">
            <input
                type="checkbox"
                prop:checked=task.completed
                on:change=move |_| {
                    if let Err(e) = store_toggle_task(&store, id) {
                        log::warn!("toggle failed: {}", e);
                    }
                }
            />
            <span class="task-time">{task.time.display_12h()}</span>
            <span class=if task.completed { "task-title done" } else { "task-title" }>{task.title}</span>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| {
                    if let Err(e) = store_remove_task(&store, id) {
                        log::warn!("delete failed: {}", e);
                    }
                }
            />
        </div>
    }
}
