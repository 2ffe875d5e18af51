//! Record snapshots consumed by the analytics engine.
//!
//! These are read-only copies of what the record store holds.
//! An analysis never mutates them.

use crate::{
    error::{InsightsError, InsightsResult},
    types::{EntityId, EpochMillis},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two parallel people sets the desktop app tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[default]
    Employee,
    Member,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Member   => "member",
        }
    }

    pub fn parse(s: &str) -> InsightsResult<Self> {
        match s {
            "employee" => Ok(Self::Employee),
            "member"   => Ok(Self::Member),
            other => Err(InsightsError::InvalidRecord {
                id:     other.to_string(),
                reason: "record kind must be 'employee' or 'member'".into(),
            }),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id:            EntityId,
    pub full_name:     String,
    pub kind:          RecordKind,
    pub department_id: EntityId,
    pub position_id:   Option<EntityId>,
    /// Annual compensation. `None` when not recorded.
    pub salary:        Option<f64>,
    pub hire_date_ms:  EpochMillis,
}

impl Person {
    pub fn new(
        id: impl Into<EntityId>,
        department_id: impl Into<EntityId>,
        salary: Option<f64>,
        hire_date_ms: EpochMillis,
    ) -> Self {
        let id = id.into();
        Self {
            full_name: id.clone(),
            id,
            kind: RecordKind::Employee,
            department_id: department_id.into(),
            position_id: None,
            salary,
            hire_date_ms,
        }
    }

    pub fn with_position(mut self, position_id: impl Into<EntityId>) -> Self {
        self.position_id = Some(position_id.into());
        self
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    /// Salary if recorded and finite. Non-finite values count as absent.
    pub fn known_salary(&self) -> Option<f64> {
        self.salary.filter(|s| s.is_finite())
    }
}

/// A department-like grouping of people.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalUnit {
    pub id:   EntityId,
    pub name: String,
}

impl OrganizationalUnit {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A position/title scoped to one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id:            EntityId,
    pub title:         String,
    pub department_id: EntityId,
}

impl Role {
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        department_id: impl Into<EntityId>,
    ) -> Self {
        Self { id: id.into(), title: title.into(), department_id: department_id.into() }
    }
}
