#![allow(dead_code)]

use std::collections::HashMap;

use crate::errors::StorageError;
use crate::storage::{check_key, KeyValueStorage};

/// In-process slot store. Quota counts key plus value bytes across all slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStorage {
            slots: HashMap::new(),
            quota: Some(quota),
        }
    }

    fn used_excluding(&self, key: &str) -> usize {
        self.slots
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        if let Some(quota) = self.quota {
            let needed = self.used_excluding(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_is_none() {
        assert_eq!(MemoryStorage::new().get("resumeData").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_and_overwrite() {
        let mut s = MemoryStorage::new();
        s.set("resumeData", "one").unwrap();
        s.set("resumeData", "two").unwrap();
        assert_eq!(s.get("resumeData").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_remove() {
        let mut s = MemoryStorage::new();
        s.set("k", "v").unwrap();
        s.remove("k").unwrap();
        s.remove("k").unwrap();
        assert_eq!(s.get("k").unwrap(), None);
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let mut s = MemoryStorage::with_quota(8);
        s.set("k", "small").unwrap();
        let err = s.set("k", "much too large").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 8, .. }));
        assert_eq!(s.get("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn test_quota_counts_other_slots() {
        let mut s = MemoryStorage::with_quota(10);
        s.set("a", "1234").unwrap();
        assert!(s.set("b", "12345").is_err());
        assert!(s.set("b", "123").is_ok());
    }
}
