//! The inbound boundary: where record collections come from.
//!
//! RULE: Analyses never fetch. The aggregator fetches each collection
//! once into a RecordSnapshot and hands analyses a shared reference.

use crate::{
    error::{InsightsError, InsightsResult},
    record::{OrganizationalUnit, Person, Role},
};
use serde::{Deserialize, Serialize};

pub const PEOPLE: &str = "people";
pub const UNITS: &str = "organizational_units";
pub const ROLES: &str = "roles";

/// The three read-only fetch operations the engine consumes.
pub trait RecordSource {
    fn fetch_people(&self) -> InsightsResult<Vec<Person>>;
    fn fetch_units(&self) -> InsightsResult<Vec<OrganizationalUnit>>;
    fn fetch_roles(&self) -> InsightsResult<Vec<Role>>;
}

/// `{ success, items?, message? }` envelope used on the desktop bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items:   Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> FetchResponse<T> {
    pub fn ok(items: T) -> Self {
        Self { success: true, items: Some(items), message: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, items: None, message: Some(message.into()) }
    }

    /// Treat `success: false` or a missing payload as a fetch failure.
    pub fn into_result(self, collection: &'static str) -> InsightsResult<T> {
        match (self.success, self.items) {
            (true, Some(items)) => Ok(items),
            (_, _) => Err(InsightsError::FetchFailed {
                collection,
                message: self.message.unwrap_or_else(|| "no items returned".into()),
            }),
        }
    }
}

impl<T> From<InsightsResult<T>> for FetchResponse<T> {
    fn from(result: InsightsResult<T>) -> Self {
        match result {
            Ok(items) => Self::ok(items),
            Err(e)    => Self::failed(e.to_string()),
        }
    }
}

/// Immutable copies of the three collections for one aggregation.
/// A `None` collection means its fetch failed.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    pub people: Option<Vec<Person>>,
    pub units:  Option<Vec<OrganizationalUnit>>,
    pub roles:  Option<Vec<Role>>,
}

impl RecordSnapshot {
    pub fn complete(
        people: Vec<Person>,
        units: Vec<OrganizationalUnit>,
        roles: Vec<Role>,
    ) -> Self {
        Self { people: Some(people), units: Some(units), roles: Some(roles) }
    }

    /// Fetch all three collections once. Failures are logged and
    /// recorded as absent collections, never returned.
    pub fn fetch(source: &dyn RecordSource) -> Self {
        Self {
            people: keep_or_log(PEOPLE, source.fetch_people()),
            units:  keep_or_log(UNITS, source.fetch_units()),
            roles:  keep_or_log(ROLES, source.fetch_roles()),
        }
    }

    pub fn people(&self) -> InsightsResult<&[Person]> {
        self.people
            .as_deref()
            .ok_or(InsightsError::MissingCollection { collection: PEOPLE })
    }

    pub fn units(&self) -> InsightsResult<&[OrganizationalUnit]> {
        self.units
            .as_deref()
            .ok_or(InsightsError::MissingCollection { collection: UNITS })
    }

    pub fn roles(&self) -> InsightsResult<&[Role]> {
        self.roles
            .as_deref()
            .ok_or(InsightsError::MissingCollection { collection: ROLES })
    }
}

fn keep_or_log<T>(collection: &'static str, result: InsightsResult<T>) -> Option<T> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            log::warn!("Fetching {collection} failed, treating as no data: {e}");
            None
        }
    }
}

/// In-memory source. Any collection can be marked as failing.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub people: Vec<Person>,
    pub units:  Vec<OrganizationalUnit>,
    pub roles:  Vec<Role>,
    failing:    Vec<&'static str>,
}

impl MemorySource {
    pub fn new(people: Vec<Person>, units: Vec<OrganizationalUnit>, roles: Vec<Role>) -> Self {
        Self { people, units, roles, failing: Vec::new() }
    }

    /// Make the fetch for `collection` (PEOPLE, UNITS or ROLES) fail.
    pub fn failing(mut self, collection: &'static str) -> Self {
        self.failing.push(collection);
        self
    }

    fn check(&self, collection: &'static str) -> InsightsResult<()> {
        if self.failing.contains(&collection) {
            return Err(InsightsError::FetchFailed {
                collection,
                message: "source unavailable".into(),
            });
        }
        Ok(())
    }
}

impl RecordSource for MemorySource {
    fn fetch_people(&self) -> InsightsResult<Vec<Person>> {
        self.check(PEOPLE)?;
        Ok(self.people.clone())
    }

    fn fetch_units(&self) -> InsightsResult<Vec<OrganizationalUnit>> {
        self.check(UNITS)?;
        Ok(self.units.clone())
    }

    fn fetch_roles(&self) -> InsightsResult<Vec<Role>> {
        self.check(ROLES)?;
        Ok(self.roles.clone())
    }
}
