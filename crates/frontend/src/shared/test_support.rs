//! In-memory collaborators for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::notify::{NotificationLevel, Notifier};
use super::storage::KeyValueStorage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (k, v) in pairs {
            storage.set_item(k, v);
        }
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Session record for tenant 5
pub fn signed_in_storage() -> MemoryStorage {
    MemoryStorage::with(&[("user", r#"{"id":5,"fullName":"Test Admin","role":"Master Admin"}"#)])
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: RefCell<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(NotificationLevel, String)> {
        self.events.borrow().last().cloned()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.events.borrow().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: String) {
        self.events.borrow_mut().push((level, message));
    }
}
