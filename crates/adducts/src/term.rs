use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::{AdductTerm, Charge, Multiplier, Sign, parser, scanner, tables};

/// A term split into its sign, multiplier and name, but not yet resolved against any lookup tables
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct RawTerm<'s> {
    sign: Option<Sign>,
    multiplier: Multiplier,
    name: &'s str,
}

impl<'s> RawTerm<'s> {
    /// Splits a term like `2Na` or `H2` into a multiplier and name
    ///
    /// A multiplier normally leads the term, but a trailing count after a single element (`H2`, `Na2`) is read as a
    /// multiplier too. Formulas with more than one capital letter, like `NH4`, keep their trailing count.
    pub(crate) fn tokenize(sign: Option<Sign>, token: &'s str) -> Self {
        let (digits, name) = parser::term(token);
        let (multiplier, name) = if name.is_empty() {
            // A term made of nothing but digits has no name to multiply
            (Multiplier::default(), token)
        } else if !digits.is_empty() {
            (Multiplier::from_digits(digits).unwrap_or_default(), name)
        } else if let Some((stem, digits)) = scanner::split_trailing_multiplier(name) {
            (Multiplier::from_digits(digits).unwrap_or_default(), stem)
        } else {
            (Multiplier::default(), name)
        };

        Self {
            sign,
            multiplier,
            name,
        }
    }

    /// Reads multimer notation off of the molecule core, so that `M2` means the same thing as `2M`
    pub(crate) fn into_core(self) -> Self {
        let core = Self { sign: None, ..self };
        match scanner::split_trailing_digits(core.name) {
            Some((name, digits)) => Self {
                multiplier: Multiplier::from_digits(digits).unwrap_or_default(),
                name,
                ..core
            },
            None => core,
        }
    }

    /// Attaches a charge to this term, optionally replacing its name with a chemical formula first
    pub(crate) fn resolve(self, substitute_formulas: bool) -> AdductTerm {
        let Self {
            sign,
            multiplier,
            name: input_name,
        } = self;

        let name = substitute_formulas
            .then(|| tables::formula(input_name))
            .flatten()
            .unwrap_or(input_name);

        // NOTE: Synonyms and their formulas carry the same charge, but formulas aren't guaranteed to be listed
        let unit_charge = tables::ion_charge(name)
            .or_else(|| tables::ion_charge(input_name))
            .unwrap_or_default();
        let charge = multiplier * unit_charge;
        let charge = if sign == Some(Sign::Minus) {
            -charge
        } else {
            charge
        };

        let term = AdductTerm {
            sign,
            multiplier,
            name: name.to_owned(),
            input_name: input_name.to_owned(),
            charge,
        };
        trace!("resolved {self:?} into {term:?}");
        term
    }
}

impl AdductTerm {
    /// Parses and resolves a term in one go
    #[must_use]
    pub fn new(sign: Option<Sign>, token: &str, substitute_formulas: bool) -> Self {
        RawTerm::tokenize(sign, token).resolve(substitute_formulas)
    }

    /// `None` for the molecule core, which is never signed
    #[must_use]
    pub const fn sign(&self) -> Option<Sign> {
        self.sign
    }

    #[must_use]
    pub const fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as written in the adduct, before any formula substitution
    #[must_use]
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    pub(crate) fn is_cation_radical(&self) -> bool {
        self.name == tables::CATION_RADICAL
    }
}

impl Display for AdductTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(sign) = self.sign {
            write!(f, "{sign}")?;
        }
        let Self {
            multiplier, name, ..
        } = self;
        write!(f, "{multiplier}{name}")
    }
}
