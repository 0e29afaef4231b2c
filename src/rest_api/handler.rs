//! # Client Handler
//!
//! Reads go through the resolver; writes pre-check existence and then
//! mutate the store. Input is validated before any lock is taken.
//!
//! One `RwLock` guards the whole store. Each mutation, including next-id
//! computation plus insert for create, runs under a single write guard, so
//! overlapping creates never share an identifier. Overlapping update and
//! delete of the same client are ordered only by lock acquisition.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{ClientId, ClientRecord, ClientStore};

use super::errors::{RestError, RestResult};
use super::parser::SearchCriteria;
use super::request::{CreateClient, UpdateClient};
use super::resolver::{ClientFilters, Snapshot};
use super::response::ClientView;

/// Client operations behind the HTTP routes
pub trait ClientHandler: Send + Sync {
    /// All clients in store order
    fn list(&self) -> RestResult<Vec<ClientView>>;

    /// A single client by identifier
    fn get(&self, id: ClientId) -> RestResult<ClientView>;

    /// Filtered search; an empty result is `NoMatches`
    fn search(&self, criteria: &SearchCriteria) -> RestResult<Vec<ClientView>>;

    /// Create a client and return its new identifier
    fn create(&self, body: &CreateClient) -> RestResult<ClientId>;

    /// Overwrite name, email, gender and phone
    fn update(&self, id: ClientId, body: &UpdateClient) -> RestResult<ClientId>;

    /// Set only the enabled flag
    fn set_enabled(&self, id: ClientId, enabled: bool) -> RestResult<ClientId>;

    /// Remove a client; absent identifiers are `NotFound`
    fn delete(&self, id: ClientId) -> RestResult<()>;
}

/// Handler over a process-lifetime in-memory store
pub struct InMemoryClientHandler {
    store: RwLock<ClientStore>,
    metrics: Arc<MetricsRegistry>,
}

impl InMemoryClientHandler {
    pub fn new(store: ClientStore) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(store: ClientStore, metrics: Arc<MetricsRegistry>) -> Self {
        metrics.set_clients(store.len() as u64);
        Self {
            store: RwLock::new(store),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    fn read(&self) -> RestResult<RwLockReadGuard<'_, ClientStore>> {
        self.store
            .read()
            .map_err(|_| RestError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> RestResult<RwLockWriteGuard<'_, ClientStore>> {
        self.store
            .write()
            .map_err(|_| RestError::Internal("Lock poisoned".to_string()))
    }

    /// Copy of a stored record, or `NotFound`
    fn existing(store: &ClientStore, id: ClientId) -> RestResult<ClientRecord> {
        store.get_by_id(id).cloned().ok_or(RestError::NotFound(id))
    }
}

impl ClientHandler for InMemoryClientHandler {
    fn list(&self) -> RestResult<Vec<ClientView>> {
        let store = self.read()?;
        Ok(Snapshot::new(store.data()).no_filter())
    }

    fn get(&self, id: ClientId) -> RestResult<ClientView> {
        let store = self.read()?;
        Snapshot::new(store.data())
            .filter_by_id(id)
            .ok_or(RestError::NotFound(id))
    }

    fn search(&self, criteria: &SearchCriteria) -> RestResult<Vec<ClientView>> {
        let store = self.read()?;
        let views = Snapshot::new(store.data()).search(criteria);
        if views.is_empty() {
            return Err(RestError::NoMatches);
        }
        Ok(views)
    }

    fn create(&self, body: &CreateClient) -> RestResult<ClientId> {
        let fields = body.validate()?;

        let mut store = self.write()?;
        let id = store.next_id();
        store.add(ClientRecord::new(
            id,
            fields.name,
            fields.email,
            fields.gender,
            fields.phone,
        ));
        let count = store.len();
        drop(store);

        self.metrics.increment_clients_created();
        self.metrics.set_clients(count as u64);
        log_event_with_fields(Event::ClientCreated, &[("id", id.to_string().as_str())]);
        Ok(id)
    }

    fn update(&self, id: ClientId, body: &UpdateClient) -> RestResult<ClientId> {
        let fields = body.validate(id)?;

        let mut store = self.write()?;
        let mut record = Self::existing(&store, id)?;
        record.name = fields.name;
        record.email = fields.email;
        record.gender = fields.gender;
        record.phone = fields.phone;
        store.update(record);
        drop(store);

        self.metrics.increment_clients_updated();
        log_event_with_fields(Event::ClientUpdated, &[("id", id.to_string().as_str())]);
        Ok(id)
    }

    fn set_enabled(&self, id: ClientId, enabled: bool) -> RestResult<ClientId> {
        let mut store = self.write()?;
        let mut record = Self::existing(&store, id)?;
        record.enabled = enabled;
        store.update(record);
        drop(store);

        self.metrics.increment_clients_updated();
        log_event_with_fields(
            Event::ClientEnabledChanged,
            &[("id", id.to_string().as_str()), ("enabled", enabled.to_string().as_str())],
        );
        Ok(id)
    }

    fn delete(&self, id: ClientId) -> RestResult<()> {
        let mut store = self.write()?;
        Self::existing(&store, id)?;
        store.remove(id);
        let count = store.len();
        drop(store);

        self.metrics.increment_clients_deleted();
        self.metrics.set_clients(count as u64);
        log_event_with_fields(Event::ClientDeleted, &[("id", id.to_string().as_str())]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    fn handler() -> InMemoryClientHandler {
        InMemoryClientHandler::new(ClientStore::with_records(vec![
            ClientRecord::new(1, "Ana", "ana@x.com", Gender::Female, "111"),
            ClientRecord::new(2, "Bruno", "bruno@x.com", Gender::Male, "222"),
        ]))
    }

    fn create_body(name: &str) -> CreateClient {
        CreateClient {
            name: Some(name.to_string()),
            email: Some(format!("{}@x.com", name.to_lowercase())),
            gender: Some(Gender::Male),
            phone: Some("123".to_string()),
        }
    }

    fn update_body(id: i64, name: &str) -> UpdateClient {
        UpdateClient {
            id: Some(id),
            name: Some(name.to_string()),
            email: Some("new@x.com".to_string()),
            gender: Some(Gender::Unknown),
            phone: Some("999".to_string()),
        }
    }

    #[test]
    fn test_create_then_get() {
        let handler = handler();
        let id = handler.create(&create_body("Bob")).unwrap();
        assert_eq!(id, 3);

        let view = handler.get(id).unwrap();
        assert_eq!(view.name, "Bob");
        assert_eq!(view.email, "bob@x.com");
        assert_eq!(view.gender, Gender::Male);
        assert_eq!(view.phone, "123");
        assert!(view.enabled);
        assert_eq!(handler.metrics().snapshot().clients, 3);
    }

    #[test]
    fn test_create_on_empty_store_assigns_one() {
        let handler = InMemoryClientHandler::new(ClientStore::new());
        assert_eq!(handler.create(&create_body("First")).unwrap(), 1);
    }

    #[test]
    fn test_invalid_create_leaves_store_untouched() {
        let handler = handler();
        let mut body = create_body("Bob");
        body.phone = None;

        assert!(matches!(
            handler.create(&body),
            Err(RestError::MissingParam(_))
        ));
        assert_eq!(handler.list().unwrap().len(), 2);
    }

    #[test]
    fn test_update_overwrites_fields_but_not_enabled() {
        let handler = handler();
        handler.set_enabled(2, false).unwrap();
        handler.update(2, &update_body(2, "Bruna")).unwrap();

        let view = handler.get(2).unwrap();
        assert_eq!(view.name, "Bruna");
        assert_eq!(view.email, "new@x.com");
        assert_eq!(view.gender, Gender::Unknown);
        assert_eq!(view.phone, "999");
        assert!(!view.enabled);
    }

    #[test]
    fn test_update_with_identical_fields_is_noop() {
        let handler = handler();
        let before = handler.list().unwrap();
        let body = UpdateClient {
            id: Some(1),
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            gender: Some(Gender::Female),
            phone: Some("111".to_string()),
        };

        assert_eq!(handler.update(1, &body).unwrap(), 1);
        assert_eq!(handler.list().unwrap(), before);
    }

    #[test]
    fn test_update_checks_mismatch_before_existence() {
        let handler = handler();
        assert!(matches!(
            handler.update(9, &update_body(8, "X")),
            Err(RestError::IdMismatch { .. })
        ));
        assert_eq!(
            handler.update(9, &update_body(9, "X")).unwrap_err(),
            RestError::NotFound(9)
        );
    }

    #[test]
    fn test_set_enabled() {
        let handler = handler();
        assert_eq!(handler.set_enabled(1, false).unwrap(), 1);
        assert!(!handler.get(1).unwrap().enabled);
        assert_eq!(
            handler.set_enabled(5, true).unwrap_err(),
            RestError::NotFound(5)
        );
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let handler = handler();
        handler.delete(2).unwrap();

        assert_eq!(handler.get(2).unwrap_err(), RestError::NotFound(2));
        assert_eq!(handler.delete(2).unwrap_err(), RestError::NotFound(2));
        assert_eq!(handler.metrics().snapshot().clients_deleted, 1);
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let handler = handler();
        handler.delete(2).unwrap();
        assert_eq!(handler.create(&create_body("Carl")).unwrap(), 3);
    }

    #[test]
    fn test_search_empty_result_is_no_matches() {
        let handler = handler();
        let criteria = SearchCriteria::Name("Zed".to_string());
        assert_eq!(handler.search(&criteria).unwrap_err(), RestError::NoMatches);

        let criteria = SearchCriteria::Gender(Gender::Female);
        assert_eq!(handler.search(&criteria).unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let handler = Arc::new(InMemoryClientHandler::new(ClientStore::new()));
        let threads: Vec<_> = (0..8)
            .map(|i| {
                let handler = Arc::clone(&handler);
                std::thread::spawn(move || handler.create(&create_body(&format!("C{}", i))))
            })
            .collect();

        let mut ids: Vec<_> = threads
            .into_iter()
            .map(|t| t.join().unwrap().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
