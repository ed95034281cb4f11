//! Pages
//!
//! One component per navigation target.

mod achievements;
mod fish_minigame;
mod home;
mod not_found;
mod task_tree;

pub use achievements::AchievementsPage;
pub use fish_minigame::FishMinigamePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use task_tree::TaskTreePage;
