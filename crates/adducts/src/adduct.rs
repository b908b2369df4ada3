use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::{
    Adduct, AdductTerm, Charge, CleanOptions, CleanedAdduct, ExplicitCharge, Sign,
    parser::{self, Tokens},
    scanner,
    tables::{self, DEFAULT_UNKNOWN},
    term::RawTerm,
};

impl Adduct {
    /// Parses any adduct text, however malformed, into its core molecule, losses, additions and charge
    #[must_use]
    pub fn parse(adduct: &str, substitute_formulas: bool) -> Self {
        // NOTE: Closing brackets have to survive until the charge is split off, since they can be the only thing
        // separating a formula from an unsigned charge, like in `M+Ca]2`
        let stripped: String = adduct
            .chars()
            .filter(|c| !matches!(c, ' ' | '(' | ')' | '['))
            .collect();
        let (chemical, charge) = scanner::split_charge(&stripped);
        let chemical = chemical.replace(']', "");

        if tables::is_unknown(&chemical) {
            debug!("{adduct:?} is an unknown adduct");
            return Self::Unknown { charge };
        }

        let Tokens {
            core,
            additions,
            losses,
        } = parser::tokenize(&chemical);
        let core = RawTerm::tokenize(None, core)
            .into_core()
            .resolve(substitute_formulas);
        let losses = sorted_terms(Sign::Minus, losses, substitute_formulas);
        let additions = sorted_terms(Sign::Plus, additions, substitute_formulas);

        Self::Known {
            core,
            losses,
            additions,
            charge,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    #[must_use]
    pub const fn explicit_charge(&self) -> Option<&ExplicitCharge> {
        match self {
            Self::Unknown { charge } | Self::Known { charge, .. } => charge.as_ref(),
        }
    }

    /// The sum of the charges of every addition and loss, ignoring any explicit charge
    ///
    /// The radical cation `Cat` is always singly charged, whatever its terms say.
    #[must_use]
    pub fn computed_charge(&self) -> Charge {
        match self {
            Self::Unknown { .. } => Charge::default(),
            Self::Known { core, .. } if core.is_cation_radical() => Charge::from(Sign::Plus),
            Self::Known {
                losses, additions, ..
            } => losses.iter().chain(additions).map(AdductTerm::charge).sum(),
        }
    }

    /// The explicitly written charge if there is one, otherwise the [`Adduct::computed_charge`]
    #[must_use]
    pub fn charge(&self) -> Charge {
        self.explicit_charge()
            .map_or_else(|| self.computed_charge(), ExplicitCharge::value)
    }

    /// Writes out the canonical form: the core, then sorted losses, then sorted additions, then the charge
    #[must_use]
    pub fn render(&self, options: &CleanOptions) -> String {
        let (core, losses, additions, charge) = match self {
            Self::Unknown { charge } => {
                let charge = charge.as_ref().map(ToString::to_string).unwrap_or_default();
                return format!("{DEFAULT_UNKNOWN}{charge}");
            }
            Self::Known {
                core,
                losses,
                additions,
                charge,
            } => (core, losses, additions, charge),
        };

        let core = if core.is_cation_radical() {
            format!("{}M", core.multiplier())
        } else {
            core.to_string()
        };
        let terms = losses.iter().chain(additions).join("");

        let mut adduct = if options.add_brackets {
            format!("[{core}{terms}]")
        } else {
            format!("{core}{terms}")
        };

        if let Some(charge) = charge {
            adduct.push_str(&charge.to_string());
        } else if options.add_missing_charge {
            adduct.push_str(&charge_suffix(self.computed_charge()));
        }

        adduct
    }
}

impl Display for Adduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let adduct = self.render(&CleanOptions::default());
        write!(f, "{adduct}")
    }
}

impl CleanedAdduct {
    pub(crate) const fn new(text: String, charge: Charge) -> Self {
        Self { text, charge }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    pub const fn charge(&self) -> i64 {
        self.charge.0
    }
}

impl Display for CleanedAdduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = &self.text;
        write!(f, "{text}")
    }
}

impl From<CleanedAdduct> for (String, i64) {
    fn from(value: CleanedAdduct) -> Self {
        let charge = value.charge();
        (value.text, charge)
    }
}

// Sorting on the multiplier as well keeps `M-H-2H` and `M-2H-H` from harmonizing differently
fn sorted_terms(sign: Sign, tokens: Vec<&str>, substitute_formulas: bool) -> Vec<AdductTerm> {
    tokens
        .into_iter()
        .map(|token| RawTerm::tokenize(Some(sign), token).resolve(substitute_formulas))
        .sorted_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.multiplier().cmp(&b.multiplier()))
        })
        .collect()
}

// Singly charged adducts only get a sign, and neutral ones get nothing at all
fn charge_suffix(charge: Charge) -> String {
    let magnitude = charge.abs();
    let magnitude = if magnitude > Charge(1) {
        magnitude.to_string()
    } else {
        String::new()
    };
    let sign = charge.sign().map(|s| s.to_string()).unwrap_or_default();
    format!("{magnitude}{sign}")
}
