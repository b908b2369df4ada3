//! Harmonization of free-text mass-spectrometry adduct notations
//!
//! Adducts like `M+H`, `[M+H]+`, `2M-H2O+Na]2+` or `Cat-2H` arrive from spectral libraries, instrument exports and
//! user entry with inconsistent brackets, term ordering, multiplier placement and charge annotations. Everything in
//! this crate is a total function: malformed input still produces a deterministic (if not meaningful) result.
//!
//! ```
//! assert_eq!(adducts::clean("M+Na-2H"), "[M-2H+Na]-");
//! assert!(adducts::equal("M+H", "[M+H]+"));
//! assert_eq!(adducts::charge_of("M+2Na"), 2);
//! ```

mod adduct;
mod charge;
pub mod errors;
mod multiplier;
mod options;
mod parser;
mod scanner;
mod sign;
pub mod tables;
mod term;

// Standard Library Imports
use std::num::NonZeroU32;

// External Crate Imports
use derive_more::{Add, Display, From, Into, Neg, Sum};
use serde::Serialize;
use static_assertions::assert_impl_all;

// Public API ==========================================================================================================

/// A fully parsed adduct, with its addition and loss terms already sorted into canonical order
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub enum Adduct {
    /// One of the sentinels in [`tables::UNKNOWN_ADDUCTS`], optionally followed by a charge
    Unknown { charge: Option<ExplicitCharge> },
    Known {
        core: AdductTerm,
        losses: Vec<AdductTerm>,
        additions: Vec<AdductTerm>,
        charge: Option<ExplicitCharge>,
    },
}

/// One signed, multiplied contribution to an adduct, like `+2Na` or `-H2O`
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct AdductTerm {
    sign: Option<Sign>,
    multiplier: Multiplier,
    name: String,
    input_name: String,
    charge: Charge,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct Multiplier(NonZeroU32);

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Serialize,
    Add,
    Neg,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Charge(i64);

/// A charge annotation written out in the adduct text itself, like the `2+` in `[M+2H]2+`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct ExplicitCharge {
    magnitude: String,
    sign: Sign,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct CleanOptions {
    /// Wrap the molecule and its terms in `[...]`
    pub add_brackets: bool,
    /// Append the charge computed from the terms when the input didn't declare one
    pub add_missing_charge: bool,
    /// Replace synonyms like `FA` or `OAc` with their chemical formulas
    pub substitute_formulas: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct CleanedAdduct {
    text: String,
    charge: Charge,
}

assert_impl_all!(Adduct: Send, Sync);
assert_impl_all!(CleanedAdduct: Send, Sync);
assert_impl_all!(CleanOptions: Send, Sync);

// Re-exports
pub use tables::is_unknown;

// Convenience API =====================================================================================================

/// Harmonizes `adduct` using the default [`CleanOptions`]
#[must_use]
pub fn clean(adduct: &str) -> String {
    clean_with(adduct, CleanOptions::default()).into_text()
}

/// Harmonizes `adduct`, returning the canonical text alongside its charge
///
/// The charge is the one explicitly written in the adduct when present, otherwise the one computed from its terms,
/// regardless of whether `options` asked for that charge to be appended to the text.
#[must_use]
pub fn clean_with(adduct: &str, options: CleanOptions) -> CleanedAdduct {
    let adduct = Adduct::parse(adduct, options.substitute_formulas);
    CleanedAdduct::new(adduct.render(&options), adduct.charge())
}

/// Checks if two adducts describe the same ion once harmonized
///
/// An adduct without a charge sign is considered equal to the same adduct carrying a `+` or `-`, but two adducts
/// with opposing signs never are.
#[must_use]
pub fn equal(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }

    let (a, b) = (clean(a), clean(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    const SIGNS: [char; 2] = ['+', '-'];
    match (a.strip_suffix(SIGNS), b.strip_suffix(SIGNS)) {
        (Some(unsigned_a), None) => unsigned_a == b,
        (None, Some(unsigned_b)) => a == unsigned_b,
        _ => false,
    }
}

/// Calculates the charge of `adduct`, resolving synonyms before looking up ion charges
#[must_use]
pub fn charge_of(adduct: &str) -> i64 {
    let options = CleanOptions::default()
        .with_brackets(false)
        .with_missing_charge(false)
        .with_formulas(true);
    clean_with(adduct, options).charge()
}

// Module Tests ========================================================================================================
