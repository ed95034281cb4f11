//! Pet Fish
//!
//! The player's companion fish. Completed tasks grant XP, XP levels the fish
//! up, and the fish has to be fed every day or it dies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{decode_record, DomainError, DomainResult};

pub const PET_STORAGE_KEY: &str = "taskquest.pet";

/// Meter lost per day without feeding
pub const DAILY_HUNGER: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetFish {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub tasks_completed: u32,
    pub achievements_completed: u32,
    pub feed_meter: i32,
    pub last_fed: Option<NaiveDate>,
    /// Last day the hunger check ran; the check applies once per day
    pub last_checked: Option<NaiveDate>,
    pub alive: bool,
}

impl Default for PetFish {
    fn default() -> Self {
        Self {
            name: "Goldie".to_string(),
            level: 1,
            xp: 0,
            tasks_completed: 0,
            achievements_completed: 0,
            feed_meter: 3,
            last_fed: None,
            last_checked: None,
            alive: true,
        }
    }
}

impl PetFish {
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(decode_record::<PetFish>) {
            Some(Ok(pet)) => pet,
            Some(Err(e)) => {
                log::warn!("discarding malformed pet record: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// XP needed to leave the current level
    pub fn xp_to_next(&self) -> u32 {
        self.level * 10
    }

    pub fn complete_tasks(&mut self, count: u32) {
        self.tasks_completed += count;
        self.add_xp(count * self.achievements_completed.max(1));
    }

    pub fn complete_achievement(&mut self) {
        self.achievements_completed += 1;
    }

    /// Returns the number of levels gained
    pub fn add_xp(&mut self, xp: u32) -> u32 {
        self.xp += xp;
        let mut gained = 0;
        while self.xp >= self.xp_to_next() {
            self.xp -= self.xp_to_next();
            self.level += 1;
            gained += 1;
        }
        if gained > 0 {
            log::info!("{} reached level {}", self.name, self.level);
        }
        gained
    }

    pub fn feed(&mut self, today: NaiveDate) -> DomainResult<()> {
        if !self.alive {
            return Err(DomainError::Conflict(format!("{} is dead", self.name)));
        }
        self.feed_meter += 1;
        self.last_fed = Some(today);
        Ok(())
    }

    /// Applies hunger for a missed day and kills a starving fish.
    /// Returns whether anything changed.
    pub fn daily_feed_check(&mut self, today: NaiveDate) -> bool {
        if !self.alive || self.last_checked == Some(today) {
            return false;
        }
        self.last_checked = Some(today);
        if matches!(self.last_fed, Some(fed) if today > fed) {
            self.feed_meter -= DAILY_HUNGER;
        }
        if self.feed_meter <= 0 {
            log::warn!("{} starved", self.name);
            self.alive = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_xp_scales_with_achievements() {
        let mut pet = PetFish::default();
        pet.complete_tasks(3);
        assert_eq!((pet.level, pet.xp), (1, 3));

        pet.complete_achievement();
        pet.complete_achievement();
        pet.complete_tasks(2);
        assert_eq!(pet.tasks_completed, 5);
        assert_eq!((pet.level, pet.xp), (1, 7));
    }

    #[test]
    fn test_level_up_loops() {
        let mut pet = PetFish::default();
        // 10 for level 1, 20 for level 2, 5 left over
        assert_eq!(pet.add_xp(35), 2);
        assert_eq!((pet.level, pet.xp), (3, 5));
        assert_eq!(pet.add_xp(0), 0);
    }

    #[test]
    fn test_feed_and_hunger() {
        let mut pet = PetFish::default();
        pet.feed(day(1)).unwrap();
        assert_eq!(pet.feed_meter, 4);

        assert!(pet.daily_feed_check(day(1)));
        assert_eq!(pet.feed_meter, 4);

        assert!(pet.daily_feed_check(day(2)));
        assert_eq!(pet.feed_meter, 2);
        // once per day
        assert!(!pet.daily_feed_check(day(2)));
        assert_eq!(pet.feed_meter, 2);

        assert!(pet.daily_feed_check(day(3)));
        assert_eq!(pet.feed_meter, 0);
        assert!(!pet.alive);
        assert!(matches!(pet.feed(day(3)), Err(DomainError::Conflict(_))));
        assert!(!pet.daily_feed_check(day(4)));
    }

    #[test]
    fn test_never_fed_is_not_hungry() {
        let mut pet = PetFish::default();
        pet.daily_feed_check(day(10));
        assert_eq!(pet.feed_meter, 3);
        assert!(pet.alive);
    }

    #[test]
    fn test_stored_round_trip_and_fallback() {
        let mut pet = PetFish::default();
        pet.feed(day(5)).unwrap();
        let json = pet.to_json().unwrap();
        assert_eq!(PetFish::from_stored(Some(&json)), pet);

        let partial = PetFish::from_stored(Some(r#"{"name":"Bubbles","level":4}"#));
        assert_eq!(partial.name, "Bubbles");
        assert_eq!(partial.level, 4);
        assert_eq!(partial.feed_meter, 3);

        assert_eq!(PetFish::from_stored(Some("nope")), PetFish::default());
        assert_eq!(PetFish::from_stored(Some(r#"["Bubbles", 9, 3]"#)), PetFish::default());
    }
}
