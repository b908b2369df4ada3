//! Process-wide lookup tables for ion charges, synonym formulas, and unknown-adduct sentinels

use crate::Charge;

/// What every unknown adduct harmonizes to (before any charge annotation)
pub const DEFAULT_UNKNOWN: &str = "unknown";

/// Adducts that were never identified upstream, compared case-insensitively
pub const UNKNOWN_ADDUCTS: [&str; 8] = ["unk", "?", "??", "???", "unknown", "M+?", "M-?", "M"];

/// The radical cation `[M]+`, written as a molecule name
pub const CATION_RADICAL: &str = "Cat";

// NOTE: Neutral losses and additions don't need to be listed here, since unlisted names carry no charge, but the
// common ones are kept so that this table doubles as documentation
const ION_CHARGES: &[(&str, i64)] = &[
    // Singly charged cations
    ("H", 1),
    ("Li", 1),
    ("Na", 1),
    ("K", 1),
    ("NH4", 1),
    // Doubly charged cations
    ("Ca", 2),
    ("Fe", 2),
    ("Mg", 2),
    // Anions
    ("FA", -1),
    ("Fa", -1),
    ("Formate", -1),
    ("formate", -1),
    ("HCOO", -1),
    ("CHOO", -1),
    ("HCO2", -1),
    ("CHO2", -1),
    ("OFA", -1),
    ("OFa", -1),
    ("Ofa", -1),
    ("CH3COO", -1),
    ("C2H3OO", -1),
    ("H3C2OO", -1),
    ("C2H3O2", -1),
    ("Ac", -1),
    ("AC", -1),
    ("OAc", -1),
    ("Oac", -1),
    ("Cl", -1),
    ("Br", -1),
    ("I", -1),
    ("OH", -1),
    // Neutral
    ("H2O", 0),
    ("ACN", 0),
    ("AcN", 0),
    ("HFA", 0),
    ("MeOH", 0),
    ("EtOH", 0),
    ("i", 0),
    ("TFA", 0),
    // Special
    (CATION_RADICAL, 1),
];

const FORMULAS: &[(&str, &str)] = &[
    ("FA", "CHOO"),
    ("Fa", "CHOO"),
    ("Formate", "CHOO"),
    ("formate", "CHOO"),
    ("HCOO", "CHOO"),
    ("OFA", "CHOO"),
    ("OFa", "CHOO"),
    ("Ofa", "CHOO"),
    ("C2H3OO", "CH3COO"),
    ("H3C2OO", "CH3COO"),
    ("C2H3O2", "CH3COO"),
    ("Ac", "CH3COO"),
    ("AC", "CH3COO"),
    ("OAc", "CH3COO"),
    ("Oac", "CH3COO"),
    ("TFA", "CF3COOH"),
    ("ACN", "C2H3N"),
    ("AcN", "C2H3N"),
    ("HFA", "CHOOH"),
    ("HAc", "CH3COOH"),
    ("MeOH", "CH4O"),
    ("EtOH", "C2H6O"),
];

/// The charge carried by a single unit of `name`, if it's a known ion
#[must_use]
pub fn ion_charge(name: &str) -> Option<Charge> {
    lookup(ION_CHARGES, name).map(Charge)
}

/// The chemical formula that the synonym `name` stands for
#[must_use]
pub fn formula(name: &str) -> Option<&'static str> {
    lookup(FORMULAS, name)
}

/// True if `adduct` is one of the [`UNKNOWN_ADDUCTS`] (like `unknown`, `M+?` or `?`)
#[must_use]
pub fn is_unknown(adduct: &str) -> bool {
    UNKNOWN_ADDUCTS
        .iter()
        .any(|unknown| unknown.eq_ignore_ascii_case(adduct))
}

fn lookup<V: Copy>(table: &[(&str, V)], name: &str) -> Option<V> {
    table
        .iter()
        .find_map(|&(key, value)| (key == name).then_some(value))
}
