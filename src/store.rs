//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;
use taskquest_core::calendar::{Planner, TimeOfDay};
use taskquest_core::pet::PetFish;
use taskquest_core::settings::Settings;
use taskquest_core::streak::StreakData;
use taskquest_core::task_tree::{TaskTree, TreeProgress};

use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Calendar tasks (memory only)
    pub planner: Planner,
    /// Skill tree with completion progress
    pub tree: TaskTree,
    pub pet: PetFish,
    pub streak: StreakData,
    pub settings: Settings,
    /// Focus minutes finished this session
    pub focus_minutes: u32,
}

impl AppState {
    /// Load persisted records and record today's visit
    pub fn load(today: NaiveDate) -> Self {
        let mut streak: StreakData = storage::load();
        streak.record_visit(today);
        storage::persist(&streak);

        let mut pet: PetFish = storage::load();
        if pet.daily_feed_check(today) {
            storage::persist(&pet);
        }

        let mut tree = TaskTree::from_catalog();
        tree.restore(&storage::load::<TreeProgress>());

        Self {
            planner: Planner::new(),
            tree,
            pet,
            streak,
            settings: storage::load(),
            focus_minutes: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ========================
// Store Helper Functions
// ========================

/// Add a calendar task
pub fn store_add_task(store: &AppStore, title: &str, date: NaiveDate, time: TimeOfDay) -> Result<u64, String> {
    let planner_field = store.planner();
    let mut planner = planner_field.write();
    let task = planner.add(title, date, time).map_err(|e| e.to_string())?;
    Ok(task.id)
}

/// Toggle a task; the first completion of each task feeds XP to the pet fish
pub fn store_toggle_task(store: &AppStore, task_id: u64) -> Result<(), String> {
    let toggled = store.planner().write().toggle(task_id).map_err(|e| e.to_string())?;
    if toggled.first_completion {
        store.pet().write().complete_tasks(1);
        store.pet().with_untracked(storage::persist);
    }
    Ok(())
}

/// Remove a task by ID
pub fn store_remove_task(store: &AppStore, task_id: u64) -> Result<(), String> {
    store.planner().write().remove(task_id).map(|_| ()).map_err(|e| e.to_string())
}

/// Complete a task tree node; returns the titles of newly unlocked nodes.
/// Finishing a whole branch counts as an achievement for the pet fish.
pub fn store_complete_node(store: &AppStore, node_id: &str) -> Result<Vec<&'static str>, String> {
    let (unlocked, finished_branch) = {
        let tree_field = store.tree();
        let mut tree = tree_field.write();
        let done = tree.complete(node_id).map_err(|e| e.to_string())?;
        let titles = done
            .unlocked
            .into_iter()
            .filter_map(|id| tree.node(id).ok().map(|n| n.title))
            .collect::<Vec<_>>();
        (titles, done.finished_branch)
    };
    store.tree().with_untracked(|tree| storage::persist(&tree.progress()));
    {
        let pet_field = store.pet();
        let mut pet = pet_field.write();
        if finished_branch.is_some() {
            pet.complete_achievement();
        }
        pet.complete_tasks(1);
    }
    store.pet().with_untracked(storage::persist);
    Ok(unlocked)
}

/// Feed the pet fish
pub fn store_feed_pet(store: &AppStore, today: NaiveDate) -> Result<(), String> {
    store.pet().write().feed(today).map_err(|e| e.to_string())?;
    store.pet().with_untracked(storage::persist);
    Ok(())
}

/// Replace a dead pet with a fresh one
pub fn store_adopt_pet(store: &AppStore) {
    store.pet().set(PetFish::default());
    store.pet().with_untracked(storage::persist);
}

/// Credit a finished focus period
pub fn store_add_focus_minutes(store: &AppStore, minutes: u32) {
    *store.focus_minutes().write() += minutes;
}
