//! Calendar Planner
//!
//! In-memory task list bucketed by day and time slot, plus the week view
//! navigation state. Weeks start on Sunday.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::entity::{DomainError, DomainResult, Entity};

/// Number of tasks previewed in a collapsed 4-hour cell
pub const SLOT_PREVIEW: usize = 2;

/// Time of day, 24h clock, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// AM/PM marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn parse(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            other => Err(DomainError::InvalidInput(format!("not AM/PM: {}", other))),
        }
    }
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> DomainResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidInput(format!("{}:{:02} is not a time of day", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Build from a 12h clock string like `"9:30"` plus AM/PM
    pub fn from_12h(time12: &str, meridiem: Meridiem) -> DomainResult<Self> {
        let (h, m) = split_clock(time12)?;
        if !(1..=12).contains(&h) {
            return Err(DomainError::InvalidInput(format!("{} is not a 12h hour", h)));
        }
        let hour = match (meridiem, h) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Self::new(hour, m)
    }

    /// 12h clock parts, e.g. `("9:30", Pm)`
    pub fn to_12h(&self) -> (String, Meridiem) {
        let meridiem = if self.hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
        let hour12 = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        (format!("{}:{:02}", hour12, self.minute), meridiem)
    }

    /// `"9:30 PM"`
    pub fn display_12h(&self) -> String {
        let (time, meridiem) = self.to_12h();
        format!("{} {}", time, meridiem.as_str())
    }
}

fn split_clock(s: &str) -> DomainResult<(u8, u8)> {
    let invalid = || DomainError::InvalidInput(format!("bad time: {:?}", s));
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let h: u8 = h.parse().map_err(|_| invalid())?;
    let m: u8 = m.parse().map_err(|_| invalid())?;
    Ok((h, m))
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    /// Parse a 24h `"HH:MM"` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = split_clock(s)?;
        Self::new(h, m)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Options offered by the add-task time picker: `1:00, 1:30, ..., 12:30`
pub fn time_options() -> Vec<String> {
    (1..=12)
        .flat_map(|h| [0, 30].into_iter().map(move |m| format!("{}:{:02}", h, m)))
        .collect()
}

/// A scheduled task
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub completed: bool,
    /// Completion already paid out; reopening does not clear it
    pub rewarded: bool,
}

/// Result of flipping a task's completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub completed: bool,
    /// First time this task was completed
    pub first_completion: bool,
}

impl Entity for Task {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Row layout of the week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLayout {
    /// Six 4-hour rows, all seven days
    FourHour,
    /// 24 hourly rows, one expanded day
    Hourly,
}

/// One row of the week grid: `[start_hour, end_hour)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TimeSlot {
    pub fn all(layout: SlotLayout) -> Vec<TimeSlot> {
        let step = match layout {
            SlotLayout::FourHour => 4,
            SlotLayout::Hourly => 1,
        };
        (0..24)
            .step_by(step)
            .map(|start| TimeSlot { start_hour: start, end_hour: start + step as u8 })
            .collect()
    }

    pub fn start(&self) -> TimeOfDay {
        TimeOfDay { hour: self.start_hour, minute: 0 }
    }

    /// Row label; the end of the last range wraps to midnight
    pub fn label(&self) -> String {
        let start = self.start().display_12h();
        if self.end_hour - self.start_hour <= 1 {
            return start;
        }
        let end = TimeOfDay { hour: self.end_hour % 24, minute: 0 }.display_12h();
        format!("{} - {}", start, end)
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        (self.start_hour..self.end_hour).contains(&time.hour)
    }
}

/// What a collapsed cell shows
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSummary {
    pub count_label: String,
    pub preview: Vec<Task>,
    pub more: Option<usize>,
}

impl SlotSummary {
    /// `None` when the cell is empty
    pub fn of(tasks: &[Task]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }
        let n = tasks.len();
        Some(Self {
            count_label: format!("{} task{}", n, if n == 1 { "" } else { "s" }),
            preview: tasks.iter().take(SLOT_PREVIEW).cloned().collect(),
            more: (n > SLOT_PREVIEW).then(|| n - SLOT_PREVIEW),
        })
    }
}

/// In-memory task list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Planner {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Planner {
    pub fn new() -> Self {
        Self { tasks: Vec::new(), next_id: 1 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        crate::entity::find_by_id(&self.tasks, id)
    }

    /// Add a task; the title is trimmed and must not be empty
    pub fn add(&mut self, title: &str, date: NaiveDate, time: TimeOfDay) -> DomainResult<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("task title is empty".to_string()));
        }
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            date,
            time,
            completed: false,
            rewarded: false,
        });
        log::debug!("task #{} added for {} {}", id, date, time);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip completion
    pub fn toggle(&mut self, id: u64) -> DomainResult<Toggled> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task #{}", id)))?;
        task.completed = !task.completed;
        let first_completion = task.completed && !task.rewarded;
        if first_completion {
            task.rewarded = true;
        }
        Ok(Toggled {
            completed: task.completed,
            first_completion,
        })
    }

    pub fn remove(&mut self, id: u64) -> DomainResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task #{}", id)))?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks on `date`, sorted by time
    pub fn for_date(&self, date: NaiveDate) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().filter(|t| t.date == date).cloned().collect();
        tasks.sort_by_key(|t| t.time);
        tasks
    }

    /// Tasks on `date` whose hour falls in `slot`, in insertion order
    pub fn for_slot(&self, date: NaiveDate, slot: TimeSlot) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.date == date && slot.contains(t.time))
            .cloned()
            .collect()
    }

    /// Tasks scheduled exactly at `time` on `date`
    pub fn at(&self, date: NaiveDate, time: TimeOfDay) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.date == date && t.time == time)
            .cloned()
            .collect()
    }
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(date.weekday().num_days_from_sunday() as i64)
}

/// Week grid navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    pub start: NaiveDate,
    pub selected: NaiveDate,
    pub expanded: Option<NaiveDate>,
}

impl WeekView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: week_start(today),
            selected: today,
            expanded: None,
        }
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + TimeDelta::days(i as i64))
    }

    pub fn end(&self) -> NaiveDate {
        self.start + TimeDelta::days(6)
    }

    pub fn next_week(&mut self) {
        self.start += TimeDelta::days(7);
    }

    pub fn prev_week(&mut self) {
        self.start -= TimeDelta::days(7);
    }

    /// Select a day; clicking the expanded day again collapses it
    pub fn click_day(&mut self, day: NaiveDate) {
        self.selected = day;
        self.expanded = if self.expanded == Some(day) { None } else { Some(day) };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn layout(&self) -> SlotLayout {
        if self.expanded.is_some() {
            SlotLayout::Hourly
        } else {
            SlotLayout::FourHour
        }
    }

    /// Columns currently shown
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.expanded {
            Some(day) => vec![day],
            None => self.days().to_vec(),
        }
    }

    /// `"Sep 21 - Sep 27, 2025"`
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.start.format("%b %-d"), self.end().format("%b %-d, %Y"))
    }
}

/// `"Monday, Sep 22"`
pub fn long_day_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_12h_conversion_edges() {
        assert_eq!(TimeOfDay::from_12h("12:00", Meridiem::Am).unwrap(), time("00:00"));
        assert_eq!(TimeOfDay::from_12h("12:30", Meridiem::Pm).unwrap(), time("12:30"));
        assert_eq!(TimeOfDay::from_12h("1:30", Meridiem::Pm).unwrap(), time("13:30"));
        assert_eq!(TimeOfDay::from_12h("9:00", Meridiem::Am).unwrap(), time("09:00"));
        assert!(TimeOfDay::from_12h("13:00", Meridiem::Pm).is_err());
        assert!(TimeOfDay::from_12h("noon", Meridiem::Pm).is_err());

        assert_eq!(time("00:15").display_12h(), "12:15 AM");
        assert_eq!(time("12:00").display_12h(), "12:00 PM");
        assert_eq!(time("23:30").display_12h(), "11:30 PM");
        assert_eq!(time("07:05").to_string(), "07:05");
        assert!("24:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_options() {
        let options = time_options();
        assert_eq!(options.len(), 24);
        assert_eq!(options[0], "1:00");
        assert_eq!(options[1], "1:30");
        assert_eq!(options[23], "12:30");
    }

    #[test]
    fn test_slots_and_labels() {
        let four = TimeSlot::all(SlotLayout::FourHour);
        assert_eq!(four.len(), 6);
        assert_eq!(four[0].label(), "12:00 AM - 4:00 AM");
        assert_eq!(four[5].label(), "8:00 PM - 12:00 AM");
        assert!(four[2].contains(time("11:59")));
        assert!(!four[2].contains(time("12:00")));

        let hourly = TimeSlot::all(SlotLayout::Hourly);
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly[14].label(), "2:00 PM");
    }

    #[test]
    fn test_planner_crud_and_bucketing() {
        let mut planner = Planner::new();
        let day = date(2025, 9, 24);
        assert!(planner.add("   ", day, time("09:00")).is_err());

        let a = planner.add(" Laundry ", day, time("14:30")).unwrap().id;
        let b = planner.add("Stretch", day, time("09:00")).unwrap().id;
        planner.add("Read", day, time("09:00")).unwrap();
        planner.add("Call mom", date(2025, 9, 25), time("09:00")).unwrap();
        assert_ne!(a, b);
        assert_eq!(planner.get(a).unwrap().title, "Laundry");

        let titles: Vec<String> = planner.for_date(day).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Stretch", "Read", "Laundry"]);

        let morning = TimeSlot { start_hour: 8, end_hour: 12 };
        assert_eq!(planner.for_slot(day, morning).len(), 2);
        assert_eq!(planner.at(day, time("09:00")).len(), 2);
        assert!(planner.at(day, time("10:00")).is_empty());

        assert_eq!(planner.toggle(a), Ok(Toggled { completed: true, first_completion: true }));
        assert_eq!(planner.toggle(a), Ok(Toggled { completed: false, first_completion: false }));
        // re-checking pays nothing
        assert_eq!(planner.toggle(a), Ok(Toggled { completed: true, first_completion: false }));
        assert!(planner.get(a).unwrap().rewarded);
        assert!(matches!(planner.toggle(999), Err(DomainError::NotFound(_))));

        planner.remove(b).unwrap();
        assert_eq!(planner.len(), 3);
        assert!(planner.remove(b).is_err());
    }

    #[test]
    fn test_slot_summary() {
        let mut planner = Planner::new();
        let day = date(2025, 9, 24);
        assert!(SlotSummary::of(&[]).is_none());
        planner.add("One", day, time("01:00")).unwrap();
        let one = SlotSummary::of(planner.tasks()).unwrap();
        assert_eq!(one.count_label, "1 task");
        assert_eq!(one.more, None);

        planner.add("Two", day, time("02:00")).unwrap();
        planner.add("Three", day, time("03:00")).unwrap();
        let three = SlotSummary::of(planner.tasks()).unwrap();
        assert_eq!(three.count_label, "3 tasks");
        assert_eq!(three.preview.len(), 2);
        assert_eq!(three.more, Some(1));
    }

    #[test]
    fn test_week_view_navigation() {
        // 2025-09-24 is a Wednesday
        let today = date(2025, 9, 24);
        let mut view = WeekView::new(today);
        assert_eq!(view.start, date(2025, 9, 21));
        assert_eq!(view.days()[6], date(2025, 9, 27));
        assert_eq!(view.range_label(), "Sep 21 - Sep 27, 2025");
        assert_eq!(week_start(date(2025, 9, 21)), date(2025, 9, 21));

        view.next_week();
        assert_eq!(view.start, date(2025, 9, 28));
        view.prev_week();
        view.prev_week();
        assert_eq!(view.start, date(2025, 9, 14));

        assert_eq!(view.layout(), SlotLayout::FourHour);
        assert_eq!(view.visible_days().len(), 7);
        view.click_day(date(2025, 9, 16));
        assert_eq!(view.layout(), SlotLayout::Hourly);
        assert_eq!(view.visible_days(), vec![date(2025, 9, 16)]);
        view.click_day(date(2025, 9, 16));
        assert_eq!(view.expanded, None);
        assert_eq!(view.selected, date(2025, 9, 16));

        assert_eq!(long_day_label(today), "Wednesday, Sep 24");
    }
}
