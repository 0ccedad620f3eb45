use std::collections::BTreeSet;

use dashmap::DashMap;
use staffetta_core::{Error, Group};

/// Mappa nome gruppo -> insieme dei membri.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: DashMap<String, BTreeSet<String>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea il gruppo o ne sostituisce per intero la membership.
    /// I membri non vengono confrontati con i client registrati.
    pub fn create_or_replace(&self, name: &str, members: BTreeSet<String>) -> Result<Group, Error> {
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if members.is_empty() {
            return Err(Error::missing_field("members"));
        }
        self.groups.insert(name.to_string(), members.clone());
        Ok(Group { name: name.to_string(), members })
    }

    /// Falso (non errore) se il gruppo non esiste.
    pub fn is_member(&self, name: &str, client_id: &str) -> bool {
        self.groups
            .get(name)
            .map(|members| members.contains(client_id))
            .unwrap_or(false)
    }

    pub fn get(&self, name: &str) -> Option<Group> {
        self.groups.get(name).map(|entry| Group {
            name: entry.key().clone(),
            members: entry.value().clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn membership_is_exact_match() {
        let groups = GroupRegistry::new();
        groups.create_or_replace("team", set(&["alice", "bob"])).unwrap();

        assert!(groups.is_member("team", "alice"));
        assert!(!groups.is_member("team", "Alice"));
        assert!(!groups.is_member("team", "carol"));
        assert!(!groups.is_member("unknown", "alice"));
    }

    #[test]
    fn recreation_replaces_members() {
        let groups = GroupRegistry::new();
        groups.create_or_replace("team", set(&["alice", "bob"])).unwrap();
        groups.create_or_replace("team", set(&["carol"])).unwrap();

        assert!(!groups.is_member("team", "alice"));
        assert!(groups.is_member("team", "carol"));
        assert_eq!(groups.get("team").unwrap().members, set(&["carol"]));
    }

    #[test]
    fn invalid_group_is_rejected_without_mutation() {
        let groups = GroupRegistry::new();
        groups.create_or_replace("team", set(&["alice"])).unwrap();

        assert_eq!(
            groups.create_or_replace("", set(&["alice"])).unwrap_err(),
            Error::missing_field("name")
        );
        assert_eq!(
            groups.create_or_replace("team", BTreeSet::new()).unwrap_err(),
            Error::missing_field("members")
        );
        assert!(groups.is_member("team", "alice"));
        assert_eq!(groups.len(), 1);
    }
}
