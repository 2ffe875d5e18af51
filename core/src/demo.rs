//! Demo population for the runner.
//!
//! Inserts a fixed department/position catalog and `count` people with
//! deterministic names, salaries, hire dates and assignments. About one
//! in twelve people has no recorded salary, and the last position of
//! each department is never assigned, so every analysis has input.

use crate::{
    clock::years_before,
    error::InsightsResult,
    name_generator::NameGenerator,
    record::{OrganizationalUnit, Person, RecordKind, Role},
    rng::AnalysisRng,
    store::RecordStore,
    types::EpochMillis,
};

/// (department, base salary, positions). The last position stays vacant.
const CATALOG: &[(&str, f64, &[&str])] = &[
    ("Engineering", 95_000.0, &["Software Engineer", "QA Analyst", "Platform Architect"]),
    ("Finance",     72_000.0, &["Accountant", "Controller"]),
    ("Operations",  54_000.0, &["Coordinator", "Logistics Lead", "Operations Analyst"]),
    ("Sales",       61_000.0, &["Account Executive", "Sales Engineer"]),
    ("People",      58_000.0, &["HR Generalist", "Recruiter"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub departments_created: usize,
    pub positions_created:   usize,
    pub people_created:      usize,
}

/// Insert the catalog if the store has no departments yet, then `count`
/// people of `kind`.
pub fn populate_demo(
    store: &RecordStore,
    rng: &mut AnalysisRng,
    kind: RecordKind,
    count: usize,
    now_ms: EpochMillis,
) -> InsightsResult<DemoSummary> {
    let mut summary = DemoSummary { departments_created: 0, positions_created: 0, people_created: 0 };

    if store.department_count()? == 0 {
        for (name, _, titles) in CATALOG {
            let unit = OrganizationalUnit::new(uuid::Uuid::new_v4().to_string(), *name);
            store.insert_department(&unit)?;
            summary.departments_created += 1;
            for title in *titles {
                store.insert_position(&Role::new(uuid::Uuid::new_v4().to_string(), *title, &unit.id))?;
                summary.positions_created += 1;
            }
        }
    }

    let units = store.all_departments()?;
    let roles = store.all_positions()?;
    if units.is_empty() {
        return Ok(summary);
    }

    for _ in 0..count {
        let unit = &units[rng.next_u64_below(units.len() as u64) as usize];
        let base = CATALOG
            .iter()
            .find(|(name, _, _)| *name == unit.name)
            .map(|(_, base, _)| *base)
            .unwrap_or(60_000.0);

        // All but the last position of the unit are assignable.
        let unit_roles: Vec<&Role> = roles.iter().filter(|r| r.department_id == unit.id).collect();
        let assignable = &unit_roles[..unit_roles.len().saturating_sub(1)];
        let position_id = if assignable.is_empty() {
            None
        } else {
            Some(assignable[rng.next_u64_below(assignable.len() as u64) as usize].id.clone())
        };

        let salary = if rng.chance(1.0 / 12.0) {
            None
        } else {
            Some((base * rng.range_f64(0.6, 1.6) / 100.0).round() * 100.0)
        };
        let tenure = rng.range_f64(0.0, 12.0);

        let person = Person {
            id: uuid::Uuid::new_v4().to_string(),
            full_name: NameGenerator::full_name(rng),
            kind,
            department_id: unit.id.clone(),
            position_id,
            salary,
            hire_date_ms: years_before(now_ms, tenure),
        };
        store.insert_person(&person)?;
        summary.people_created += 1;
    }

    log::info!(
        "Demo population: {} departments, {} positions, {} {} records",
        summary.departments_created,
        summary.positions_created,
        summary.people_created,
        kind
    );
    Ok(summary)
}
