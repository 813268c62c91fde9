#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::validation::validate;
use crate::errors::PersistenceError;
use crate::models::resume::Resume;
use crate::persistence::ResumePersistence;
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    View,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&Resume)>;

/// Holds the in-memory resume being edited and notifies subscribers on every change.
/// Passed explicitly to whatever renders it.
pub struct ResumeStore {
    resume: Resume,
    mode: EditorMode,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ResumeStore {
    /// A store starts in `View` when the resume is already complete, `Edit` otherwise.
    pub fn new(resume: Resume) -> Self {
        let mode = if validate(&resume).is_valid() {
            EditorMode::View
        } else {
            EditorMode::Edit
        };
        ResumeStore {
            resume,
            mode,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn load_from<S: KeyValueStorage>(persistence: &ResumePersistence<S>) -> Self {
        Self::new(persistence.load())
    }

    pub fn get(&self) -> &Resume {
        &self.resume
    }

    pub fn set(&mut self, resume: Resume) {
        self.resume = resume;
        self.notify();
    }

    /// Applies one pure edit, e.g. `store.update(add_experience)`.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&Resume) -> Resume,
    {
        let next = edit(&self.resume);
        self.set(next);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Resume) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> EditorMode {
        self.mode = match self.mode {
            EditorMode::View => EditorMode::Edit,
            EditorMode::Edit => EditorMode::View,
        };
        self.mode
    }

    /// Saves the current resume; switches to `View` on success, stays put on failure.
    pub fn save_to<S: KeyValueStorage>(
        &mut self,
        persistence: &mut ResumePersistence<S>,
    ) -> Result<(), PersistenceError> {
        persistence.save(&self.resume)?;
        self.mode = EditorMode::View;
        Ok(())
    }

    fn notify(&self) {
        debug!("Notifying {} resume subscribers", self.subscribers.len());
        for (_, callback) in &self.subscribers {
            callback(&self.resume);
        }
    }
}
