//! # Query Resolver
//!
//! Pure read operations over a snapshot of the store. Every result is a
//! fresh `ClientView`; nothing here can mutate a record.

use crate::store::{ClientId, ClientRecord, Gender};

use super::filter::{ClientFilter, FilterSet};
use super::parser::SearchCriteria;
use super::response::ClientView;

/// Read-side filters over a client snapshot
pub trait ClientFilters {
    /// All clients, in store order
    fn no_filter(&self) -> Vec<ClientView>;

    /// The client with this identifier, if any
    fn filter_by_id(&self, id: ClientId) -> Option<ClientView>;

    /// Clients whose name contains `name_part`
    fn filter_by_name(&self, name_part: &str) -> Vec<ClientView>;

    /// Clients with exactly this gender
    fn filter_by_gender(&self, gender: Gender) -> Vec<ClientView>;

    /// Clients matching both the name and the gender filter
    fn filter_by_name_and_gender(&self, name_part: &str, gender: Gender) -> Vec<ClientView>;

    /// Dispatch a parsed search to the matching filter
    fn search(&self, criteria: &SearchCriteria) -> Vec<ClientView> {
        match criteria {
            SearchCriteria::Name(name) => self.filter_by_name(name),
            SearchCriteria::Gender(gender) => self.filter_by_gender(*gender),
            SearchCriteria::NameAndGender(name, gender) => {
                self.filter_by_name_and_gender(name, *gender)
            }
        }
    }
}

/// Resolver bound to one snapshot of store data
pub struct Snapshot<'a> {
    records: &'a [ClientRecord],
}

impl<'a> Snapshot<'a> {
    pub fn new(records: &'a [ClientRecord]) -> Self {
        Self { records }
    }

    fn select(&self, filters: &FilterSet) -> Vec<ClientView> {
        self.records
            .iter()
            .filter(|r| filters.matches(r))
            .map(ClientView::from)
            .collect()
    }
}

impl ClientFilters for Snapshot<'_> {
    fn no_filter(&self) -> Vec<ClientView> {
        self.select(&FilterSet::new())
    }

    fn filter_by_id(&self, id: ClientId) -> Option<ClientView> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(ClientView::from)
    }

    fn filter_by_name(&self, name_part: &str) -> Vec<ClientView> {
        self.select(&FilterSet::new().and(ClientFilter::name_contains(name_part)))
    }

    fn filter_by_gender(&self, gender: Gender) -> Vec<ClientView> {
        self.select(&FilterSet::new().and(ClientFilter::gender_is(gender)))
    }

    fn filter_by_name_and_gender(&self, name_part: &str, gender: Gender) -> Vec<ClientView> {
        self.select(
            &FilterSet::new()
                .and(ClientFilter::name_contains(name_part))
                .and(ClientFilter::gender_is(gender)),
        )
    }
}
