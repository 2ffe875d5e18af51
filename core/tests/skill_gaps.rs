use workforce_core::{
    config::SkillGapConfig,
    record::{Person, Role},
    skill_gaps::{estimate, unmatched_roles, FALLBACK_SKILLS, SKILL_VOCABULARY},
};

fn roles(n: usize) -> Vec<Role> {
    (0..n).map(|i| Role::new(format!("r{i}"), format!("Role {i}"), "dept")).collect()
}

fn holder(id: &str, role: &str) -> Person {
    Person::new(id, "dept", Some(60_000.0), 0).with_position(role)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn all_roles_filled_returns_fallback_pair() {
    let people = vec![holder("a", "r0"), holder("b", "r1"), holder("c", "r1")];
    let gaps = estimate(&people, &roles(2), &SkillGapConfig::default());
    assert_eq!(gaps, vec!["Advanced Data Analytics", "Artificial Intelligence Implementation"]);
    assert_eq!(gaps, FALLBACK_SKILLS.to_vec());
}

#[test]
fn no_roles_at_all_returns_fallback_pair() {
    let gaps = estimate(&[holder("a", "r0")], &[], &SkillGapConfig::default());
    assert_eq!(gaps, FALLBACK_SKILLS.to_vec());
}

#[test]
fn gap_count_follows_unmatched_roles_up_to_three() {
    let config = SkillGapConfig::default();

    let one_open = estimate(&[holder("a", "r0")], &roles(2), &config);
    assert_eq!(one_open, SKILL_VOCABULARY[..1].to_vec());

    let two_open = estimate(&[holder("a", "r0")], &roles(3), &config);
    assert_eq!(two_open, SKILL_VOCABULARY[..2].to_vec());

    let many_open = estimate(&[], &roles(7), &config);
    assert_eq!(many_open, SKILL_VOCABULARY[..3].to_vec());
}

#[test]
fn unmatched_roles_ignores_people_without_positions() {
    let people = vec![Person::new("floater", "dept", None, 0), holder("a", "r1")];
    let all = roles(3);
    let open: Vec<String> = unmatched_roles(&people, &all).iter().map(|r| r.id.clone()).collect();
    assert_eq!(open, vec!["r0", "r2"]);
}
