use super::{now_ms, RecordStore};
use crate::{
    error::{InsightsError, InsightsResult},
    record::{OrganizationalUnit, Person, RecordKind, Role},
    source::RecordSource,
};
use rusqlite::params;

impl RecordStore {
    // ── People ─────────────────────────────────────────────────

    pub fn insert_person(&self, person: &Person) -> InsightsResult<()> {
        if let Some(salary) = person.salary {
            if !salary.is_finite() || salary < 0.0 {
                return Err(InsightsError::InvalidRecord {
                    id:     person.id.clone(),
                    reason: format!("salary {salary} must be a non-negative number"),
                });
            }
        }
        self.conn.execute(
            "INSERT INTO person (
                person_id, kind, full_name, department_id, position_id,
                salary, hire_date_ms, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                person.id,
                person.kind.as_str(),
                person.full_name,
                person.department_id,
                person.position_id,
                person.salary,
                person.hire_date_ms,
                now_ms(),
            ],
        )?;
        Ok(())
    }

    pub fn all_people(&self, kind: RecordKind) -> InsightsResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(
            "SELECT person_id, kind, full_name, department_id, position_id,
                    salary, hire_date_ms
             FROM person WHERE kind = ?1
             ORDER BY created_at ASC, rowid ASC",
        )?;
        let rows = stmt
            .query_map(params![kind.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<f64>>(5)?,
                    row.get::<_, i64>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, kind, full_name, department_id, position_id, salary, hire_date_ms)| -> InsightsResult<Person> {
                Ok(Person {
                    kind: RecordKind::parse(&kind)?,
                    id,
                    full_name,
                    department_id,
                    position_id,
                    salary,
                    hire_date_ms,
                })
            })
            .collect()
    }

    pub fn person_count(&self, kind: RecordKind) -> InsightsResult<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM person WHERE kind = ?1",
            params![kind.as_str()],
            |r| r.get(0),
        )?)
    }
}

/// One people set of a store, seen through the fetch boundary.
/// Departments and positions are shared by both sets.
pub struct StoreSource<'a> {
    store: &'a RecordStore,
    kind:  RecordKind,
}

impl<'a> StoreSource<'a> {
    pub fn new(store: &'a RecordStore, kind: RecordKind) -> Self {
        Self { store, kind }
    }
}

impl RecordSource for StoreSource<'_> {
    fn fetch_people(&self) -> InsightsResult<Vec<Person>> {
        self.store.all_people(self.kind)
    }

    fn fetch_units(&self) -> InsightsResult<Vec<OrganizationalUnit>> {
        self.store.all_departments()
    }

    fn fetch_roles(&self) -> InsightsResult<Vec<Role>> {
        self.store.all_positions()
    }
}
