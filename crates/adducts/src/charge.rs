use std::fmt::{self, Display, Formatter};

use log::warn;

use crate::{
    Charge, ExplicitCharge, Sign,
    errors::{AdductError, Result},
};

impl Charge {
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The sign of a non-zero charge
    #[must_use]
    pub const fn sign(self) -> Option<Sign> {
        match self.0 {
            0 => None,
            c if c > 0 => Some(Sign::Plus),
            _ => Some(Sign::Minus),
        }
    }
}

impl ExplicitCharge {
    pub(crate) const fn new(magnitude: String, sign: Sign) -> Self {
        Self { magnitude, sign }
    }

    /// The digits preceding the sign, which may be empty (as in `[M+H]+`)
    #[must_use]
    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// # Errors
    ///
    /// Returns an [`AdductError::InvalidChargeMagnitude`] if the magnitude doesn't fit in an `i64`
    pub fn try_value(&self) -> Result<Charge> {
        let unit = Charge::from(self.sign);
        if self.magnitude.is_empty() {
            return Ok(unit);
        }

        let magnitude: i64 = self
            .magnitude
            .parse()
            .map_err(|e| AdductError::invalid_charge_magnitude(&self.magnitude, e))?;
        Ok(Charge(magnitude * unit.0))
    }

    /// Like [`ExplicitCharge::try_value`], but a corrupted magnitude is treated as a charge of zero
    #[must_use]
    pub fn value(&self) -> Charge {
        self.try_value().unwrap_or_else(|error| {
            warn!("treating the charge annotation {self} as uncharged: {error}");
            Charge::default()
        })
    }
}

impl Display for ExplicitCharge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { magnitude, sign } = self;
        write!(f, "{magnitude}{sign}")
    }
}
