use std::fmt::{self, Display, Formatter};

use crate::{Charge, Sign};

impl Sign {
    pub(crate) const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Plus => "+",
                Self::Minus => "-",
            }
        )
    }
}

impl From<Sign> for Charge {
    fn from(value: Sign) -> Self {
        match value {
            Sign::Plus => Self(1),
            Sign::Minus => Self(-1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_from_char() {
        assert_eq!(Sign::from_char('+'), Some(Sign::Plus));
        assert_eq!(Sign::from_char('-'), Some(Sign::Minus));
        assert_eq!(Sign::from_char(']'), None);
        assert_eq!(Sign::from_char('2'), None);
    }

    #[test]
    fn sign_display() {
        let plus = Sign::Plus;
        assert_eq!(plus.to_string(), "+");
        let minus = Sign::Minus;
        assert_eq!(minus.to_string(), "-");
    }

    #[test]
    fn into_charge() {
        assert_eq!(i64::from(Charge::from(Sign::Plus)), 1);
        assert_eq!(i64::from(Charge::from(Sign::Minus)), -1);
    }
}
