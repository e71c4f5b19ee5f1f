use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// What [`PriorityOpenList::update`] did with the entry it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// There was no entry for the key, a new one was pushed.
    Inserted,
    /// The existing entry had a worse priority and was replaced.
    Decreased,
    /// The existing entry was at least as good, nothing changed.
    Unchanged,
}

/// A min-priority frontier keyed by `K` with decrease-key.
///
/// There is at most one live entry per key; the value stored alongside it is
/// whatever the caller pushed with the winning priority. Entries with equal
/// priority pop in insertion order. Lowering the priority of an entry keeps its
/// original insertion rank.
pub struct PriorityOpenList<K, V>
where
    K: Hash + Eq,
{
    queue: PriorityQueue<K, Reverse<(Cost, usize)>>,
    values: HashMap<K, V>,
    insertions: usize,
}

impl<K, V> PriorityOpenList<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            values: HashMap::new(),
            insertions: 0,
        }
    }

    /// Insert `key` with `priority`, replacing any existing entry for it.
    pub fn push(&mut self, key: K, value: V, priority: Cost) {
        let rank = self.insertions;
        self.insertions += 1;
        self.values.insert(key.clone(), value);
        self.queue.push(key, Reverse((priority, rank)));
    }

    /// Insert `key`, or lower the priority of its existing entry. An entry that
    /// already has a priority no greater than `priority` is left as is.
    pub fn update(&mut self, key: K, value: V, priority: Cost) -> UpdateOutcome {
        let existing = self.queue.get_priority(&key).map(|Reverse(entry)| *entry);
        match existing {
            Some((current, _)) if current <= priority => UpdateOutcome::Unchanged,
            Some((_, rank)) => {
                self.queue.change_priority(&key, Reverse((priority, rank)));
                self.values.insert(key, value);
                UpdateOutcome::Decreased
            }
            None => {
                self.push(key, value, priority);
                UpdateOutcome::Inserted
            }
        }
    }

    /// Remove the entry with the lowest priority, earliest inserted first.
    pub fn pop(&mut self) -> Option<(K, V, Cost)> {
        let (key, Reverse((priority, _))) = self.queue.pop()?;
        let value = self.values.remove(&key)?;
        Some((key, value, priority))
    }

    pub fn get_priority(&self, key: &K) -> Option<Cost> {
        self.queue
            .get_priority(key)
            .map(|Reverse((priority, _))| *priority)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K, V> Default for PriorityOpenList<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for PriorityOpenList<K, V>
where
    K: Hash + Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityOpenList")
            .field("len", &self.queue.len())
            .field("insertions", &self.insertions)
            .finish()
    }
}
