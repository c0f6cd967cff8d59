//! In-memory lead store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::{Lead, LeadId};
use crate::ports::{LeadBackupStore, StoreError};

/// Process-local backup of leads awaiting follow-up
#[derive(Default)]
pub struct InMemoryLeadStore {
    leads: RwLock<HashMap<LeadId, Lead>>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.read().is_empty()
    }
}

#[async_trait]
impl LeadBackupStore for InMemoryLeadStore {
    async fn retain(&self, lead: &Lead) -> Result<(), StoreError> {
        self.leads.write().insert(lead.id(), lead.clone());
        Ok(())
    }

    async fn get(&self, id: &LeadId) -> Result<Option<Lead>, StoreError> {
        Ok(self.leads.read().get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        let mut leads: Vec<_> = self.leads.read().values().cloned().collect();
        leads.sort_by_key(|l| l.captured_at());
        Ok(leads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuoteSnapshot, SubmitLeadCommand};
    use supportroi_engine::{estimate, EstimationInput};

    fn lead(company: &str) -> Lead {
        let input = EstimationInput::default();
        let command = SubmitLeadCommand {
            company_name: company.into(),
            contact_name: "Jo".into(),
            email: "jo@acme.example".into(),
            platform: "Shopify".into(),
            ..Default::default()
        };
        Lead::capture(command, QuoteSnapshot::capture(&input, &estimate(&input))).unwrap()
    }

    #[test]
    fn test_retain_and_get() {
        let store = InMemoryLeadStore::new();
        let lead = lead("Acme");

        tokio_test::block_on(store.retain(&lead)).unwrap();
        let found = tokio_test::block_on(store.get(&lead.id())).unwrap();

        assert_eq!(found.map(|l| l.company_name().to_string()), Some("Acme".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_retain_replaces_same_lead() {
        let store = InMemoryLeadStore::new();
        let lead = lead("Acme");

        tokio_test::block_on(store.retain(&lead)).unwrap();
        tokio_test::block_on(store.retain(&lead)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_oldest_first() {
        let store = InMemoryLeadStore::new();
        let first = lead("First");
        let second = lead("Second");

        tokio_test::block_on(store.retain(&second)).unwrap();
        tokio_test::block_on(store.retain(&first)).unwrap();

        let listed = tokio_test::block_on(store.list()).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].captured_at() <= listed[1].captured_at());
    }
}
