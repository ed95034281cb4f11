//! Achievement Catalog
//!
//! Hard-coded catalog plus the lookup tables used to render badges.
//! "Unlocked" is presentational and never derived at runtime.

use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SelfCare,
    Chores,
    Study,
    Social,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SelfCare,
        Category::Chores,
        Category::Study,
        Category::Social,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::SelfCare => "Self Care",
            Category::Chores => "Chores",
            Category::Study => "Study",
            Category::Social => "Social",
            Category::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic];

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Rarity::Common => "rarity-common",
            Rarity::Uncommon => "rarity-uncommon",
            Rarity::Rare => "rarity-rare",
            Rarity::Epic => "rarity-epic",
        }
    }
}

/// Badge artwork keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeIcon {
    Star,
    Trophy,
    Target,
    Zap,
    Award,
    FirstTask,
    Silver,
    Gold,
    Bronze,
    Cleaning,
    SelfCare,
    Studying,
    TotalStreak,
    Algae,
    Crab,
    Shark,
    SeaTurtle,
    Snail,
    Angler,
    Puffer,
}

impl BadgeIcon {
    /// Image asset for the icon
    pub fn asset(&self) -> &'static str {
        match self {
            BadgeIcon::FirstTask | BadgeIcon::Zap => "assets/icons/lightning.png",
            BadgeIcon::Gold | BadgeIcon::Trophy => "assets/icons/trophy.png",
            BadgeIcon::Silver | BadgeIcon::Star => "assets/icons/star.png",
            BadgeIcon::Bronze | BadgeIcon::Target => "assets/icons/target.png",
            BadgeIcon::Award => "assets/icons/focustime.png",
            BadgeIcon::Cleaning => "assets/icons/cleaning.png",
            BadgeIcon::SelfCare => "assets/icons/self-care.png",
            BadgeIcon::Studying => "assets/icons/studying.png",
            BadgeIcon::TotalStreak => "assets/icons/total-streak.png",
            BadgeIcon::Algae => "assets/icons/algae.png",
            BadgeIcon::Crab => "assets/icons/crab.png",
            BadgeIcon::Shark => "assets/icons/shark.png",
            BadgeIcon::SeaTurtle => "assets/icons/seaturtle.png",
            BadgeIcon::Snail => "assets/icons/snail2.png",
            BadgeIcon::Angler => "assets/icons/angler.png",
            BadgeIcon::Puffer => "assets/icons/puffer.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
}

impl Progress {
    /// Percentage in `[0, 100]`
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub icon: BadgeIcon,
    pub rarity: Rarity,
    pub unlocked: bool,
    pub unlocked_date: Option<&'static str>,
    pub progress: Option<Progress>,
}

impl Entity for Achievement {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.id
    }
}

const fn unlocked(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    icon: BadgeIcon,
    rarity: Rarity,
    date: &'static str,
) -> Achievement {
    Achievement { id, title, description, category, icon, rarity, unlocked: true, unlocked_date: Some(date), progress: None }
}

const fn locked(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    icon: BadgeIcon,
    rarity: Rarity,
    current: u32,
    total: u32,
) -> Achievement {
    Achievement {
        id,
        title,
        description,
        category,
        icon,
        rarity,
        unlocked: false,
        unlocked_date: None,
        progress: Some(Progress { current, total }),
    }
}

use BadgeIcon as I;
use Category as C;
use Rarity as R;

pub static CATALOG: [Achievement; 20] = [
    unlocked("1", "First Steps", "Complete your first self-care task", C::SelfCare, I::Algae, R::Common, "2024-09-20"),
    unlocked("2", "Morning Person", "Complete morning routine 5 times", C::SelfCare, I::SelfCare, R::Uncommon, "2024-09-22"),
    locked("3", "Self Care Hero", "Complete self care routine 10 times", C::SelfCare, I::Star, R::Rare, 7, 10),
    locked("4", "Wellness Warrior", "Maintain perfect self-care for 30 days", C::SelfCare, I::Trophy, R::Epic, 12, 30),
    locked("5", "Mindful Master", "Complete 100 meditation sessions", C::SelfCare, I::SelfCare, R::Rare, 23, 100),
    unlocked("6", "Clean Slate", "Complete your first cleaning task", C::Chores, I::Cleaning, R::Common, "2024-09-18"),
    locked("7", "Organization Pro", "Organize 5 different spaces", C::Chores, I::Target, R::Uncommon, 3, 5),
    locked("8", "Household Hero", "Complete 50 household tasks", C::Chores, I::Cleaning, R::Rare, 31, 50),
    locked("9", "Master Chef", "Cook 25 meals from scratch", C::Chores, I::Angler, R::Uncommon, 8, 25),
    unlocked("10", "Study Starter", "Complete your first study session", C::Study, I::Crab, R::Common, "2024-09-25"),
    unlocked("11", "Focus Champion", "Complete 10 focus sessions", C::Study, I::Zap, R::Uncommon, "2024-09-27"),
    locked("12", "Study Champion", "Complete 25 study sessions", C::Study, I::Shark, R::Rare, 18, 25),
    locked("13", "Knowledge Seeker", "Study for 100 hours total", C::Study, I::Trophy, R::Epic, 42, 100),
    locked("14", "Social Butterfly", "Complete 5 social activities", C::Social, I::Snail, R::Uncommon, 2, 5),
    locked("15", "Team Player", "Collaborate on 10 group tasks", C::Social, I::SeaTurtle, R::Rare, 0, 10),
    unlocked("16", "Streak Master", "Maintain a 7-day streak", C::General, I::Puffer, R::Uncommon, "2024-09-21"),
    locked("17", "Consistency King", "Complete daily goals for 14 days", C::General, I::TotalStreak, R::Rare, 9, 14),
    locked("18", "Time Manager", "Use calendar for 30 days", C::General, I::Target, R::Uncommon, 15, 30),
    locked("19", "Ultimate Achiever", "Unlock 15 other achievements", C::General, I::Trophy, R::Epic, 6, 15),
    unlocked("20", "Energy Boost", "Complete 3 tasks in one day", C::General, I::Zap, R::Common, "2024-09-19"),
];

/// Compact badge entry for dashboard/drawer grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeSummary {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: BadgeIcon,
    pub unlocked: bool,
}

const fn badge(title: &'static str, description: &'static str, icon: BadgeIcon, unlocked: bool) -> BadgeSummary {
    BadgeSummary { title, description, icon, unlocked }
}

/// Dashboard sidebar grid
pub static DASHBOARD_BADGES: [BadgeSummary; 12] = [
    badge("First Steps", "Complete your first task", I::FirstTask, true),
    badge("Focus Starter", "Complete 5 focus sessions", I::Silver, true),
    badge("Morning Person", "Complete morning routine 5 times", I::Gold, false),
    badge("Habit Builder", "Maintain 7-day streak", I::Trophy, false),
    badge("Task Master", "Complete 50 tasks", I::Target, false),
    badge("Consistency King", "Complete daily goals 14 days", I::Star, false),
    badge("Time Manager", "Use calendar 30 days", I::Award, false),
    badge("Energy Boost", "Complete 3 tasks in one day", I::Zap, false),
    badge("Self Care Hero", "Complete self care 10 times", I::FirstTask, false),
    badge("Study Champion", "Complete 25 study sessions", I::Silver, false),
    badge("Organization Pro", "Use calendar every day for 2 weeks", I::Gold, false),
    badge("Ultimate Achiever", "Unlock 10 other achievements", I::Trophy, false),
];

/// Quick-access drawer list
pub static RECENT_BADGES: [BadgeSummary; 4] = [
    badge("First Steps", "Complete your first task", I::Star, true),
    badge("Streak Master", "Maintain a 7-day streak", I::Trophy, true),
    badge("Focus Champion", "Complete 10 focus sessions", I::Target, false),
    badge("Early Bird", "Complete morning routine 5 times", I::Zap, false),
];

/// Category / status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementFilter {
    /// `None` = all categories
    pub category: Option<Category>,
    pub unlocked_only: bool,
}

impl AchievementFilter {
    pub fn matches(&self, achievement: &Achievement) -> bool {
        let category_match = self.category.map_or(true, |c| c == achievement.category);
        let unlocked_match = !self.unlocked_only || achievement.unlocked;
        category_match && unlocked_match
    }

    pub fn apply<'a>(&self, achievements: &'a [Achievement]) -> Vec<&'a Achievement> {
        achievements.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Header and sidebar statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub unlocked: usize,
    pub total: usize,
}

impl CatalogStats {
    pub fn of(achievements: &[Achievement]) -> Self {
        Self {
            unlocked: achievements.iter().filter(|a| a.unlocked).count(),
            total: achievements.len(),
        }
    }

    /// Rounded completion percentage
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.unlocked as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// `(unlocked, total)` for one rarity
    pub fn by_rarity(achievements: &[Achievement], rarity: Rarity) -> (usize, usize) {
        let of_rarity = achievements.iter().filter(|a| a.rarity == rarity);
        let total = of_rarity.clone().count();
        let unlocked = of_rarity.filter(|a| a.unlocked).count();
        (unlocked, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        assert!(CATALOG.iter().all(|a| a.unlocked == a.unlocked_date.is_some()));
        assert!(CATALOG.iter().all(|a| a.unlocked || a.progress.is_some()));
    }

    #[test]
    fn test_stats() {
        let stats = CatalogStats::of(&CATALOG);
        assert_eq!(stats, CatalogStats { unlocked: 7, total: 20 });
        assert_eq!(stats.completion_percent(), 35);
        assert_eq!(CatalogStats::by_rarity(&CATALOG, Rarity::Common), (4, 4));
        assert_eq!(CatalogStats::by_rarity(&CATALOG, Rarity::Epic), (0, 3));
        assert_eq!(CatalogStats::of(&[]).completion_percent(), 0);
    }

    #[test]
    fn test_filters() {
        let all = AchievementFilter::default();
        assert_eq!(all.apply(&CATALOG).len(), 20);

        let study = AchievementFilter { category: Some(Category::Study), unlocked_only: false };
        assert_eq!(study.apply(&CATALOG).len(), 4);

        let study_unlocked = AchievementFilter { unlocked_only: true, ..study };
        let titles: Vec<&str> = study_unlocked.apply(&CATALOG).iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Study Starter", "Focus Champion"]);

        let social_unlocked = AchievementFilter { category: Some(Category::Social), unlocked_only: true };
        assert!(social_unlocked.apply(&CATALOG).is_empty());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress { current: 7, total: 10 }.percent(), 70.0);
        assert_eq!(Progress { current: 3, total: 0 }.percent(), 0.0);
        assert_eq!(Progress { current: 12, total: 10 }.percent(), 100.0);
        assert_eq!(crate::find_by_id(&CATALOG, "16").map(|a| a.title), Some("Streak Master"));
        assert_eq!(BadgeIcon::Snail.asset(), "assets/icons/snail2.png");
    }
}
