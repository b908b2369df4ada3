use crate::CleanOptions;

impl CleanOptions {
    #[must_use]
    pub const fn with_brackets(self, add_brackets: bool) -> Self {
        Self {
            add_brackets,
            ..self
        }
    }

    #[must_use]
    pub const fn with_missing_charge(self, add_missing_charge: bool) -> Self {
        Self {
            add_missing_charge,
            ..self
        }
    }

    #[must_use]
    pub const fn with_formulas(self, substitute_formulas: bool) -> Self {
        Self {
            substitute_formulas,
            ..self
        }
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            add_brackets: true,
            add_missing_charge: true,
            substitute_formulas: false,
        }
    }
}
