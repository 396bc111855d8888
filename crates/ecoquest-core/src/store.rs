//! The state store and its provisioning session.
//!
//! `StateStore` is the single source of truth for the player and the
//! daily task list. It is an explicit, owned object rather than module
//! state; consumers reach it through a `Session`, which yields a typed
//! `NotProvisioned` error when touched before initialization.
//!
//! Every mutation applies atomically: the point total and the derived
//! level are updated in the same call, so no reader ever observes a
//! state where they diverge.

use chrono::Utc;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::events::StateEvent;
use crate::level::Level;
use crate::task::{seed_tasks, Task};
use crate::user::{User, UserPatch};

/// Read-only snapshot of the store contents.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot<'a> {
    pub user: &'a User,
    pub tasks: &'a [Task],
}

/// Single source of truth for the player record and the task list.
#[derive(Debug, Clone)]
pub struct StateStore {
    user: User,
    tasks: Vec<Task>,
    events: Vec<StateEvent>,
}

impl StateStore {
    /// Create a store seeded with the default player and task list.
    pub fn new() -> Self {
        Self::with_user(User::seed())
    }

    /// Create a store with a custom initial player (e.g. config overrides).
    pub fn with_user(user: User) -> Self {
        Self {
            user,
            tasks: seed_tasks(),
            events: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Combined read access for screens.
    pub fn state(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            user: &self.user,
            tasks: &self.tasks,
        }
    }

    /// Apply a typed profile patch. An empty patch is a no-op.
    pub fn update_user(&mut self, patch: UserPatch) {
        if patch.is_empty() {
            return;
        }
        if self.user.apply(&patch) {
            self.events.push(StateEvent::UserUpdated { at: Utc::now() });
        }
    }

    /// Mark a task completed and award its points.
    ///
    /// Unknown ids and already-completed tasks are silent no-ops. The
    /// point delta is applied against the latest total at application
    /// time, so back-to-back completions never under-count.
    pub fn complete_task(&mut self, task_id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return;
        };
        if task.completed {
            return;
        }
        task.completed = true;
        let awarded = task.points;
        let completed_id = task.id.clone();

        let level_before = self.user.level;
        self.user.points += awarded;
        self.user.level = Level::from_points(self.user.points);

        self.events.push(StateEvent::TaskCompleted {
            task_id: completed_id,
            points_awarded: awarded,
            total_points: self.user.points,
            at: Utc::now(),
        });
        if self.user.level != level_before {
            self.events.push(StateEvent::LevelChanged {
                from: level_before,
                to: self.user.level,
                at: Utc::now(),
            });
        }
    }

    /// Replace the task list with the seed list (all incomplete).
    ///
    /// Points, level, and badges are untouched: the point total is a
    /// lifetime running total, not a per-cycle one.
    pub fn reset_tasks(&mut self) {
        self.tasks = seed_tasks();
        self.events.push(StateEvent::TasksReset { at: Utc::now() });
    }

    /// Unlock a badge. Unknown ids and already-unlocked badges are
    /// silent no-ops.
    pub fn unlock_badge(&mut self, badge_id: &str) {
        let Some(badge) = self.user.badges.iter_mut().find(|b| b.id == badge_id) else {
            return;
        };
        if badge.unlocked {
            return;
        }
        badge.unlocked = true;
        self.events.push(StateEvent::BadgeUnlocked {
            badge_id: badge_id.to_string(),
            at: Utc::now(),
        });
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending (undrained) events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provisioning scope for the state store.
///
/// Screens and commands receive a `Session` and must go through
/// `store()`/`store_mut()`, which fail fast with `NotProvisioned`
/// until `provision()` has installed a store.
#[derive(Debug, Default)]
pub struct Session {
    store: Option<StateStore>,
}

impl Session {
    /// An unprovisioned session.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Install a freshly seeded store.
    pub fn provision(&mut self) {
        self.store = Some(StateStore::new());
    }

    /// Install a specific store (seeded elsewhere, e.g. from config).
    pub fn provision_with(&mut self, store: StateStore) {
        self.store = Some(store);
    }

    pub fn is_provisioned(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&StateStore> {
        self.store.as_ref().ok_or(CoreError::NotProvisioned)
    }

    pub fn store_mut(&mut self) -> Result<&mut StateStore> {
        self.store.as_mut().ok_or(CoreError::NotProvisioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_a_task_awards_points_once() {
        let mut store = StateStore::new();
        store.complete_task("1");
        assert_eq!(store.user().points, 10);
        let task = store.tasks().iter().find(|t| t.id == "1").unwrap();
        assert!(task.completed);

        // Idempotent: a second completion changes nothing.
        let snapshot = store.clone();
        store.complete_task("1");
        assert_eq!(store.user().points, snapshot.user().points);
        assert_eq!(store.tasks(), snapshot.tasks());
    }

    #[test]
    fn unknown_task_id_is_a_silent_noop() {
        let mut store = StateStore::new();
        store.complete_task("no-such-task");
        assert_eq!(store.user().points, 0);
        assert_eq!(store.drain_events().len(), 0);
    }

    #[test]
    fn sequential_completions_accumulate_against_latest_total() {
        let mut store = StateStore::new();
        store.complete_task("1"); // 10
        store.complete_task("5"); // 20
        store.complete_task("6"); // 25
        assert_eq!(store.user().points, 55);
        assert_eq!(store.user().level, Level::Sapling);
    }

    #[test]
    fn level_stays_consistent_with_points() {
        let mut store = StateStore::new();
        for task in seed_tasks() {
            store.complete_task(&task.id);
            assert_eq!(store.user().level, Level::from_points(store.user().points));
        }
        assert_eq!(store.user().points, 105);
        assert_eq!(store.user().level, Level::Sapling);
    }

    #[test]
    fn reset_clears_tasks_but_keeps_points_and_badges() {
        let mut store = StateStore::new();
        store.complete_task("4");
        store.unlock_badge("water-saver");
        let points_before = store.user().points;
        let level_before = store.user().level;
        let badges_before = store.user().badges.clone();

        store.reset_tasks();

        assert!(store.tasks().iter().all(|t| !t.completed));
        assert_eq!(store.user().points, points_before);
        assert_eq!(store.user().level, level_before);
        assert_eq!(store.user().badges, badges_before);
    }

    #[test]
    fn unlock_badge_is_idempotent_and_ignores_unknown_ids() {
        let mut store = StateStore::new();
        store.unlock_badge("water-saver");
        assert!(store.user().badges[0].unlocked);

        let badges_before = store.user().badges.clone();
        store.unlock_badge("water-saver");
        store.unlock_badge("no-such-badge");
        assert_eq!(store.user().badges, badges_before);
    }

    #[test]
    fn update_user_patches_profile_fields_only() {
        let mut store = StateStore::new();
        store.complete_task("1");
        store.update_user(UserPatch::new().name("Ada").group("River School"));
        assert_eq!(store.user().name, "Ada");
        assert_eq!(store.user().group, "River School");
        assert_eq!(store.user().points, 10);
    }

    #[test]
    fn events_track_effective_mutations_only() {
        let mut store = StateStore::new();
        store.complete_task("1");
        store.complete_task("1"); // no-op
        store.update_user(UserPatch::new()); // empty patch, no-op
        store.unlock_badge("zero-waste");
        store.reset_tasks();

        let events = store.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], StateEvent::TaskCompleted { ref task_id, points_awarded: 10, total_points: 10, .. } if task_id == "1"));
        assert!(matches!(events[1], StateEvent::BadgeUnlocked { ref badge_id, .. } if badge_id == "zero-waste"));
        assert!(matches!(events[2], StateEvent::TasksReset { .. }));
        assert_eq!(store.pending_events(), 0);
    }

    #[test]
    fn level_changed_event_fires_on_tier_crossing() {
        let mut store = StateStore::new();
        store.complete_task("6"); // 25
        store.complete_task("5"); // 45
        assert!(!store
            .drain_events()
            .iter()
            .any(|e| matches!(e, StateEvent::LevelChanged { .. })));

        store.complete_task("4"); // 60, crosses into Sapling
        let events = store.drain_events();
        assert!(matches!(
            events.last(),
            Some(StateEvent::LevelChanged {
                from: Level::Seed,
                to: Level::Sapling,
                ..
            })
        ));
    }

    #[test]
    fn unprovisioned_session_fails_fast() {
        let session = Session::new();
        assert!(!session.is_provisioned());
        assert!(matches!(session.store(), Err(CoreError::NotProvisioned)));

        let mut session = Session::new();
        assert!(matches!(
            session.store_mut(),
            Err(CoreError::NotProvisioned)
        ));

        session.provision();
        assert!(session.store().is_ok());
        assert_eq!(session.store().unwrap().user().points, 0);
    }
}
