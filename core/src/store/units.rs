use super::{now_ms, RecordStore};
use crate::{
    error::InsightsResult,
    record::{OrganizationalUnit, Role},
};
use rusqlite::params;

impl RecordStore {
    // ── Departments ────────────────────────────────────────────

    pub fn insert_department(&self, unit: &OrganizationalUnit) -> InsightsResult<()> {
        self.conn.execute(
            "INSERT INTO department (department_id, name, created_at) VALUES (?1, ?2, ?3)",
            params![unit.id, unit.name, now_ms()],
        )?;
        Ok(())
    }

    pub fn all_departments(&self) -> InsightsResult<Vec<OrganizationalUnit>> {
        let mut stmt = self.conn.prepare(
            "SELECT department_id, name FROM department ORDER BY created_at ASC, rowid ASC",
        )?;
        let units = stmt
            .query_map([], |row| {
                Ok(OrganizationalUnit {
                    id:   row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(units)
    }

    pub fn department_count(&self) -> InsightsResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM department", [], |r| r.get(0))?)
    }

    // ── Positions ──────────────────────────────────────────────

    pub fn insert_position(&self, role: &Role) -> InsightsResult<()> {
        self.conn.execute(
            "INSERT INTO position (position_id, department_id, title, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![role.id, role.department_id, role.title, now_ms()],
        )?;
        Ok(())
    }

    pub fn all_positions(&self) -> InsightsResult<Vec<Role>> {
        let mut stmt = self.conn.prepare(
            "SELECT position_id, title, department_id
             FROM position ORDER BY created_at ASC, rowid ASC",
        )?;
        let roles = stmt
            .query_map([], |row| {
                Ok(Role {
                    id:            row.get(0)?,
                    title:         row.get(1)?,
                    department_id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(roles)
    }
}
