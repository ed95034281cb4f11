//! New Task Form Component
//!
//! Dialog form for adding a calendar task with a 12-hour time picker.

use chrono::NaiveDate;
use leptos::prelude::*;
use taskquest_core::calendar::{time_options, Meridiem, TimeOfDay};

use crate::store::{store_add_task, use_app_store};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_TIME: &str = "9:00";

/// Task creation form; `default_date` pre-fills the date field
#[component]
pub fn NewTaskForm(
    default_date: NaiveDate,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(default_date.format(DATE_INPUT_FORMAT).to_string());
    let (time, set_time) = signal(DEFAULT_TIME.to_string());
    let (meridiem, set_meridiem) = signal(Meridiem::Am.as_str().to_string());
    let (error, set_error) = signal(None::<String>);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let parsed = NaiveDate::parse_from_str(&date.get_untracked(), DATE_INPUT_FORMAT)
            .map_err(|e| format!("Invalid date: {}", e))
            .and_then(|day| {
                let meridiem = Meridiem::parse(&meridiem.get_untracked()).map_err(|e| e.to_string())?;
                let at = TimeOfDay::from_12h(&time.get_untracked(), meridiem).map_err(|e| e.to_string())?;
                Ok((day, at))
            });

        let result = parsed.and_then(|(day, at)| store_add_task(&store, &title.get_untracked(), day, at));
        match result {
            Ok(_) => {
                set_title.set(String::new());
                set_error.set(None);
                on_close.run(());
            }
            Err(e) => {
                log::warn!("task not added: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <h4>"Add New Task"</h4>

            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    placeholder="Enter task title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Date"</span>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </label>

            <div class="form-row">
                <label class="form-field">
                    <span>"Time"</span>
                    <select
                        prop:value=move || time.get()
                        on:change=move |ev| set_time.set(event_target_value(&ev))
                    >
                        {time_options().into_iter().map(|option| view! {
                            <option value=option.clone()>{option.clone()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"AM/PM"</span>
                    <select
                        prop:value=move || meridiem.get()
                        on:change=move |ev| set_meridiem.set(event_target_value(&ev))
                    >
                        <option value="AM">"AM"</option>
                        <option value="PM">"PM"</option>
                    </select>
                </label>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="primary-btn" disabled=move || title.with(|t| t.trim().is_empty())>
                    "Add Task"
                </button>
            </div>
        </form>
    }
}
