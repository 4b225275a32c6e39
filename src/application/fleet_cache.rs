// Entity cache - create-once, read-many robot populations per group
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use super::clock::Clock;
use super::generator::generate_group;
use crate::domain::group::Group;
use crate::domain::robot::RobotRecord;

pub type Population = Arc<[RobotRecord]>;

/// Holds one lazily-populated slot per configured group.
///
/// The first caller for a group generates its population; concurrent first
/// callers block on the same slot and all observe the one stored sequence.
/// Populated slots are read without locking and never replaced.
pub struct FleetCache {
    groups: Vec<Group>,
    slots: HashMap<String, OnceLock<Population>>,
    clock: Arc<dyn Clock>,
    populations: AtomicUsize,
}

impl FleetCache {
    pub fn new(groups: Vec<Group>, clock: Arc<dyn Clock>) -> Self {
        let slots = groups
            .iter()
            .map(|group| (group.key.clone(), OnceLock::new()))
            .collect();
        Self {
            groups,
            slots,
            clock,
            populations: AtomicUsize::new(0),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.key == key)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Population of `key`, or `None` for an unknown group.
    pub fn robots(&self, key: &str) -> Option<Population> {
        let group = self.group(key)?;
        let slot = self.slots.get(key)?;
        let population = slot.get_or_init(|| self.populate(group));
        Some(Arc::clone(population))
    }

    /// Every group's population in declared order.
    pub fn all(&self) -> Vec<Population> {
        self.groups
            .iter()
            .filter_map(|group| self.robots(&group.key))
            .collect()
    }

    /// Number of generation passes run so far.
    pub fn populations(&self) -> usize {
        self.populations.load(Ordering::Acquire)
    }

    fn populate(&self, group: &Group) -> Population {
        let started = Instant::now();
        let robots: Population = generate_group(group, self.clock.now()).into();
        self.populations.fetch_add(1, Ordering::AcqRel);
        tracing::info!(
            group = %group.key,
            robots = robots.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "populated robot group"
        );
        robots
    }
}
