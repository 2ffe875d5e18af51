//! Deterministic person names for demo records.
//! Same RNG stream, same names.

use crate::rng::AnalysisRng;

pub struct NameGenerator;

impl NameGenerator {
    pub fn full_name(rng: &mut AnalysisRng) -> String {
        format!("{} {}", Self::pick(rng, FIRST_NAMES), Self::pick(rng, LAST_NAMES))
    }

    fn pick(rng: &mut AnalysisRng, names: &'static [&'static str]) -> &'static str {
        names[rng.next_u64_below(names.len() as u64) as usize]
    }
}

const FIRST_NAMES: &[&str] = &[
    "Amara", "Bilal", "Chen", "Dana", "Elif", "Farid", "Grace", "Hiro",
    "Ines", "Jonas", "Kofi", "Leila", "Mateo", "Nadia", "Oskar", "Priya",
    "Quinn", "Rosa", "Sven", "Tariq", "Uma", "Viktor", "Wen", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Berg", "Castillo", "Dubois", "Eriksen", "Fontaine", "Gupta",
    "Haddad", "Ivanova", "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura",
    "Okafor", "Petrov", "Quintero", "Rossi", "Sato", "Tanaka", "Vargas", "Weber",
];
