use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
    ops::Mul,
};

use crate::{Charge, Multiplier};

impl Multiplier {
    pub(crate) fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    /// Reads a run of ASCII digits, returning `None` for zero or for counts too large to be meaningful
    pub(crate) fn from_digits(digits: &str) -> Option<Self> {
        digits.parse().ok().and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Mul<Charge> for Multiplier {
    type Output = Charge;

    fn mul(self, rhs: Charge) -> Self::Output {
        Charge(i64::from(self.0.get()) * rhs.0)
    }
}

impl Display for Multiplier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let multiplier = self.0.get();
        if multiplier > 1 {
            write!(f, "{multiplier}")?;
        }
        Ok(())
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}
