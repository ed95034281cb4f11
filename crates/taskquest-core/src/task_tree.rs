//! Task Tree
//!
//! Skill-progression graph. Node status is derived from the set of completed
//! nodes: a node is available once every prerequisite is completed, and
//! completing it can unlock its dependents.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::entity::{decode_record, find_by_id, DomainError, DomainResult, Entity};

/// Local storage key for tree progress
pub const TREE_STORAGE_KEY: &str = "taskquest.tree";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    Completed,
    Available,
    Locked,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Completed => "completed",
            NodeStatus::Available => "available",
            NodeStatus::Locked => "locked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    SelfCare,
    Chores,
    Studying,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::SelfCare, Branch::Chores, Branch::Studying];

    pub fn label(&self) -> &'static str {
        match self {
            Branch::SelfCare => "Self Care",
            Branch::Chores => "Cleaning Path",
            Branch::Studying => "Studying",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub branch: Branch,
    /// Percent of the canvas width
    pub x: f64,
    /// Percent of the canvas height
    pub y: f64,
    /// Status the catalog ships with; only `Completed` seeds progress
    pub seed: NodeStatus,
    pub prerequisites: &'static [&'static str],
}

impl Entity for TaskNode {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.id
    }
}

/// SVG connector from a prerequisite to its dependent, in percent coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Drawn dashed while the dependent is locked
    pub dashed: bool,
}

/// Outcome of completing a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// Dependents that became available
    pub unlocked: Vec<&'static str>,
    /// Set when this node was the last open one in its branch
    pub finished_branch: Option<Branch>,
}

/// Persisted progress record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeProgress {
    #[serde(default)]
    pub completed: Vec<String>,
}

impl TreeProgress {
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(decode_record::<TreeProgress>) {
            Some(Ok(progress)) => progress,
            Some(Err(e)) => {
                log::warn!("discarding malformed tree progress: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskTree {
    nodes: Vec<TaskNode>,
    completed: BTreeSet<&'static str>,
}

impl TaskTree {
    /// Build a tree, seeding progress from nodes shipped as completed
    pub fn new(nodes: Vec<TaskNode>) -> Self {
        let completed = nodes
            .iter()
            .filter(|n| n.seed == NodeStatus::Completed)
            .map(|n| n.id)
            .collect();
        Self { nodes, completed }
    }

    pub fn from_catalog() -> Self {
        Self::new(catalog())
    }

    /// Apply stored progress on top of the seed; unknown ids are ignored
    pub fn restore(&mut self, progress: &TreeProgress) {
        for id in &progress.completed {
            match self.nodes.iter().find(|n| n.id == id.as_str()) {
                Some(node) => {
                    self.completed.insert(node.id);
                }
                None => log::warn!("ignoring unknown task node in stored progress: {}", id),
            }
        }
    }

    pub fn progress(&self) -> TreeProgress {
        TreeProgress {
            completed: self.completed.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn nodes(&self) -> &[TaskNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> DomainResult<&TaskNode> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task node {}", id)))
    }

    pub fn status_of(&self, node: &TaskNode) -> NodeStatus {
        if self.completed.contains(node.id) {
            NodeStatus::Completed
        } else if node.prerequisites.iter().all(|p| self.completed.contains(p)) {
            NodeStatus::Available
        } else {
            NodeStatus::Locked
        }
    }

    pub fn status(&self, id: &str) -> DomainResult<NodeStatus> {
        Ok(self.status_of(self.node(id)?))
    }

    /// Mark an available node completed
    pub fn complete(&mut self, id: &str) -> DomainResult<Completion> {
        let node = self.node(id)?;
        let node_id = node.id;
        let branch = node.branch;
        match self.status_of(node) {
            NodeStatus::Completed => return Ok(Completion::default()),
            NodeStatus::Locked => {
                return Err(DomainError::Conflict(format!("{} is locked until its prerequisites are done", node.title)))
            }
            NodeStatus::Available => {}
        }

        self.completed.insert(node_id);
        let unlocked: Vec<&'static str> = self
            .nodes
            .iter()
            .filter(|n| n.prerequisites.contains(&node_id) && self.status_of(n) == NodeStatus::Available)
            .map(|n| n.id)
            .collect();
        log::info!("task node {} completed, unlocked {:?}", node_id, unlocked);

        let finished_branch = self.is_branch_complete(branch).then_some(branch);
        if finished_branch.is_some() {
            log::info!("{} branch finished", branch.label());
        }
        Ok(Completion { unlocked, finished_branch })
    }

    pub fn is_branch_complete(&self, branch: Branch) -> bool {
        self.nodes
            .iter()
            .filter(|n| n.branch == branch)
            .all(|n| self.completed.contains(n.id))
    }

    /// Percentage of a branch's nodes that are completed
    pub fn branch_progress(&self, branch: Branch) -> f64 {
        let in_branch: Vec<&TaskNode> = self.nodes.iter().filter(|n| n.branch == branch).collect();
        if in_branch.is_empty() {
            return 0.0;
        }
        let done = in_branch.iter().filter(|n| self.completed.contains(n.id)).count();
        done as f64 / in_branch.len() as f64 * 100.0
    }

    pub fn connectors(&self) -> Vec<Connector> {
        self.nodes
            .iter()
            .flat_map(|node| {
                let dashed = self.status_of(node) == NodeStatus::Locked;
                node.prerequisites.iter().filter_map(move |p| {
                    find_by_id(&self.nodes, *p).map(|pre| Connector {
                        from: (pre.x, pre.y),
                        to: (node.x, node.y),
                        dashed,
                    })
                })
            })
            .collect()
    }

    /// Every prerequisite exists and the graph has no cycles
    pub fn validate(&self) -> DomainResult<()> {
        let index: HashMap<&str, &TaskNode> = self.nodes.iter().map(|n| (n.id, n)).collect();
        for node in &self.nodes {
            for p in node.prerequisites {
                if !index.contains_key(p) {
                    return Err(DomainError::NotFound(format!("{} requires unknown node {}", node.id, p)));
                }
            }
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit<'a>(
            id: &'a str,
            index: &HashMap<&'a str, &'a TaskNode>,
            marks: &mut HashMap<&'a str, Mark>,
        ) -> DomainResult<()> {
            match marks.get(id) {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => return Err(DomainError::Conflict(format!("cycle through {}", id))),
                None => {}
            }
            marks.insert(id, Mark::Visiting);
            for p in index[id].prerequisites {
                visit(p, index, marks)?;
            }
            marks.insert(id, Mark::Done);
            Ok(())
        }

        let mut marks = HashMap::new();
        for node in &self.nodes {
            visit(node.id, &index, &mut marks)?;
        }
        Ok(())
    }
}

mod icons {
    pub const STAR: &str = "assets/icons/star.png";
    pub const TROPHY: &str = "assets/icons/trophy.png";
    pub const TARGET: &str = "assets/icons/target.png";
    pub const LIGHTNING: &str = "assets/icons/lightning.png";
    pub const SELF_CARE: &str = "assets/icons/self-care.png";
    pub const CLEANING: &str = "assets/icons/cleaning.png";
    pub const STUDYING: &str = "assets/icons/studying.png";
    pub const EXERCISE: &str = "assets/icons/exercise.png";
    pub const MORNING: &str = "assets/icons/morningroutine.png";
    pub const MEDITATE: &str = "assets/icons/meditate.png";
    pub const FOCUS: &str = "assets/icons/focustime.png";
}

#[allow(clippy::too_many_arguments)]
fn node(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    branch: Branch,
    (x, y): (f64, f64),
    seed: NodeStatus,
    prerequisites: &'static [&'static str],
) -> TaskNode {
    TaskNode { id, title, description, icon, branch, x, y, seed, prerequisites }
}

/// The shipped skill tree: three branches of ten nodes each
pub fn catalog() -> Vec<TaskNode> {
    use icons::*;
    use Branch::*;
    use NodeStatus::*;

    vec![
        // Self care (left)
        node("self-care-base", "Self Care Basics", "Master daily self-care routines and build healthy habits", SELF_CARE, SelfCare, (20.0, 85.0), Completed, &[]),
        node("morning-routine", "Morning Routine", "Establish a consistent morning routine to start your day right", MORNING, SelfCare, (15.0, 70.0), Completed, &["self-care-base"]),
        node("self-hygiene", "Hygiene Habits", "Build consistent personal hygiene routines", SELF_CARE, SelfCare, (25.0, 70.0), Available, &["self-care-base"]),
        node("exercise", "Exercise Routine", "Develop a sustainable fitness habit", EXERCISE, SelfCare, (12.0, 55.0), Locked, &["morning-routine"]),
        node("nutrition", "Healthy Eating", "Create balanced meal planning and eating habits", TARGET, SelfCare, (20.0, 55.0), Locked, &["morning-routine", "self-hygiene"]),
        node("sleep-hygiene", "Sleep Mastery", "Optimize sleep schedule and bedtime routines", STAR, SelfCare, (28.0, 55.0), Locked, &["self-hygiene"]),
        node("mindfulness", "Mindfulness", "Develop meditation and stress management skills", MEDITATE, SelfCare, (20.0, 40.0), Locked, &["exercise", "nutrition", "sleep-hygiene"]),
        node("wellness-master", "Wellness Master", "Achieve holistic health and well-being", TROPHY, SelfCare, (20.0, 25.0), Locked, &["mindfulness"]),
        node("life-coach", "Life Coach", "Help others develop their wellness journey", STAR, SelfCare, (15.0, 10.0), Locked, &["wellness-master"]),
        node("wellness-influencer", "Wellness Influencer", "Inspire communities to live healthier lives", LIGHTNING, SelfCare, (25.0, 10.0), Locked, &["wellness-master"]),
        // Chores (center)
        node("chores-base", "Basic Chores", "Master fundamental household maintenance tasks", CLEANING, Chores, (50.0, 85.0), Available, &[]),
        node("cleaning-basics", "Cleaning Basics", "Learn efficient cleaning techniques and routines", CLEANING, Chores, (45.0, 70.0), Locked, &["chores-base"]),
        node("laundry", "Laundry Management", "Organize washing, drying, and clothing care", TARGET, Chores, (55.0, 70.0), Locked, &["chores-base"]),
        node("organization", "Home Organization", "Create and maintain organized living spaces", STAR, Chores, (42.0, 55.0), Locked, &["cleaning-basics"]),
        node("maintenance", "Home Maintenance", "Handle basic repairs and upkeep tasks", TARGET, Chores, (50.0, 55.0), Locked, &["cleaning-basics", "laundry"]),
        node("cooking", "Cooking Skills", "Develop meal preparation and kitchen management", TROPHY, Chores, (58.0, 55.0), Locked, &["laundry"]),
        node("home-systems", "Home Systems", "Create efficient household management systems", LIGHTNING, Chores, (50.0, 40.0), Locked, &["organization", "maintenance", "cooking"]),
        node("home-master", "Home Master", "Achieve complete household management mastery", TROPHY, Chores, (50.0, 25.0), Locked, &["home-systems"]),
        node("home-designer", "Home Designer", "Create beautiful and functional living spaces", STAR, Chores, (45.0, 10.0), Locked, &["home-master"]),
        node("household-guru", "Household Guru", "Become an expert who can optimize any living space", TROPHY, Chores, (55.0, 10.0), Locked, &["home-master"]),
        // Studying (right)
        node("study-base", "Study Basics", "Learn fundamental study techniques and habits", STUDYING, Studying, (80.0, 85.0), Locked, &[]),
        node("note-taking", "Note Taking", "Master effective note-taking strategies", STUDYING, Studying, (75.0, 70.0), Locked, &["study-base"]),
        node("focus-skills", "Focus Training", "Develop concentration and attention skills", FOCUS, Studying, (85.0, 70.0), Locked, &["study-base"]),
        node("time-management", "Time Management", "Learn to organize study time effectively", TARGET, Studying, (72.0, 55.0), Locked, &["note-taking"]),
        node("research-skills", "Research Skills", "Develop information gathering and analysis abilities", LIGHTNING, Studying, (80.0, 55.0), Locked, &["note-taking", "focus-skills"]),
        node("memory-techniques", "Memory Techniques", "Master memorization and retention strategies", STAR, Studying, (88.0, 55.0), Locked, &["focus-skills"]),
        node("advanced-study", "Advanced Study", "Integrate all study skills for maximum learning", TROPHY, Studying, (80.0, 40.0), Locked, &["time-management", "research-skills", "memory-techniques"]),
        node("study-master", "Study Master", "Achieve mastery in learning and academic success", TROPHY, Studying, (80.0, 25.0), Locked, &["advanced-study"]),
        node("knowledge-sage", "Knowledge Sage", "Become a master learner who can tackle any subject", STAR, Studying, (75.0, 10.0), Locked, &["study-master"]),
        node("study-mentor", "Study Mentor", "Guide others in their learning journey", LIGHTNING, Studying, (85.0, 10.0), Locked, &["study-master"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        let tree = TaskTree::from_catalog();
        assert_eq!(tree.nodes().len(), 30);
        assert_eq!(tree.validate(), Ok(()));
        for branch in Branch::ALL {
            assert_eq!(tree.nodes().iter().filter(|n| n.branch == branch).count(), 10);
        }
    }

    #[test]
    fn test_seeded_statuses() {
        let tree = TaskTree::from_catalog();
        assert_eq!(tree.status("self-care-base"), Ok(NodeStatus::Completed));
        assert_eq!(tree.status("morning-routine"), Ok(NodeStatus::Completed));
        assert_eq!(tree.status("self-hygiene"), Ok(NodeStatus::Available));
        assert_eq!(tree.status("exercise"), Ok(NodeStatus::Available));
        assert_eq!(tree.status("nutrition"), Ok(NodeStatus::Locked));
        assert_eq!(tree.status("chores-base"), Ok(NodeStatus::Available));
        // Roots are always startable
        assert_eq!(tree.status("study-base"), Ok(NodeStatus::Available));
        assert!(matches!(tree.status("nope"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_completion_unlocks_dependents() {
        let mut tree = TaskTree::from_catalog();
        assert!(matches!(tree.complete("nutrition"), Err(DomainError::Conflict(_))));

        let done = tree.complete("self-hygiene").unwrap();
        assert_eq!(done.unlocked, vec!["nutrition", "sleep-hygiene"]);
        assert_eq!(done.finished_branch, None);
        assert_eq!(tree.status("nutrition"), Ok(NodeStatus::Available));

        // Completing twice is a no-op
        assert_eq!(tree.complete("self-hygiene"), Ok(Completion::default()));

        tree.complete("exercise").unwrap();
        tree.complete("nutrition").unwrap();
        assert_eq!(tree.status("mindfulness"), Ok(NodeStatus::Locked));
        assert_eq!(tree.complete("sleep-hygiene").unwrap().unlocked, vec!["mindfulness"]);
        assert!((tree.branch_progress(Branch::SelfCare) - 60.0).abs() < 1e-9);
        assert_eq!(tree.branch_progress(Branch::Studying), 0.0);
    }

    #[test]
    fn test_last_node_finishes_branch_once() {
        let mut tree = TaskTree::from_catalog();
        let order = [
            "chores-base",
            "cleaning-basics",
            "laundry",
            "organization",
            "maintenance",
            "cooking",
            "home-systems",
            "home-master",
            "home-designer",
        ];
        for id in order {
            assert_eq!(tree.complete(id).unwrap().finished_branch, None, "{}", id);
        }
        assert!(!tree.is_branch_complete(Branch::Chores));

        let last = tree.complete("household-guru").unwrap();
        assert_eq!(last.finished_branch, Some(Branch::Chores));
        assert!(tree.is_branch_complete(Branch::Chores));
        assert!(!tree.is_branch_complete(Branch::Studying));
        // repeating the last node does not finish it again
        assert_eq!(tree.complete("household-guru").unwrap().finished_branch, None);
    }

    #[test]
    fn test_progress_round_trip_ignores_unknown() {
        let mut tree = TaskTree::from_catalog();
        tree.complete("chores-base").unwrap();
        let saved = tree.progress();
        assert!(saved.completed.contains(&"chores-base".to_string()));

        let mut restored = TaskTree::from_catalog();
        let mut with_junk = TreeProgress::from_stored(Some(&saved.to_json().unwrap()));
        with_junk.completed.push("deleted-node".to_string());
        restored.restore(&with_junk);
        assert_eq!(TreeProgress::from_stored(Some("{}")), TreeProgress::default());
        assert_eq!(TreeProgress::from_stored(Some(r#"[["chores-base"]]"#)), TreeProgress::default());
        assert_eq!(restored, tree);
    }

    #[test]
    fn test_connectors() {
        let tree = TaskTree::from_catalog();
        let connectors = tree.connectors();
        let edge_count: usize = tree.nodes().iter().map(|n| n.prerequisites.len()).sum();
        assert_eq!(connectors.len(), edge_count);

        let to_exercise = connectors.iter().find(|c| c.to == (12.0, 55.0)).unwrap();
        assert_eq!(to_exercise.from, (15.0, 70.0));
        assert!(!to_exercise.dashed);
        let to_nutrition: Vec<_> = connectors.iter().filter(|c| c.to == (20.0, 55.0)).collect();
        assert_eq!(to_nutrition.len(), 2);
        assert!(to_nutrition.iter().all(|c| c.dashed));
    }

    #[test]
    fn test_validate_rejects_bad_graphs() {
        let cyclic = TaskTree::new(vec![
            node("a", "A", "", "", Branch::Chores, (0.0, 0.0), NodeStatus::Locked, &["b"]),
            node("b", "B", "", "", Branch::Chores, (0.0, 0.0), NodeStatus::Locked, &["a"]),
        ]);
        assert!(matches!(cyclic.validate(), Err(DomainError::Conflict(_))));

        let dangling = TaskTree::new(vec![node("a", "A", "", "", Branch::Chores, (0.0, 0.0), NodeStatus::Locked, &["ghost"])]);
        assert!(matches!(dangling.validate(), Err(DomainError::NotFound(_))));
    }
}
