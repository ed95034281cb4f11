//! UI Components
//!
//! Reusable Leptos components.

mod achievement_badge;
mod calendar_widget;
mod delete_confirm_button;
mod fish_overlay;
mod focus_timer;
mod footer;
mod navigation;
mod new_task_form;
mod progress_ring;
mod quick_access_drawer;
mod stats_card;

pub use achievement_badge::{AchievementBadge, BadgeSize};
pub use calendar_widget::CalendarWidget;
pub use delete_confirm_button::DeleteConfirmButton;
pub use fish_overlay::FishOverlay;
pub use focus_timer::FocusTimerCard;
pub use footer::Footer;
pub use navigation::Navigation;
pub use new_task_form::NewTaskForm;
pub use progress_ring::ProgressRing;
pub use quick_access_drawer::QuickAccessDrawer;
pub use stats_card::{StatsCard, StatsVariant};
