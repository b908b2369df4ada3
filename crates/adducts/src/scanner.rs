// Right-to-left scans over adduct text, which `nom` (being a left-to-right parser) isn't suited for

use log::trace;

use crate::{ExplicitCharge, Sign};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum ChargeScan {
    ScanningCharge,
    // Holds the byte offset and value of the character that ended the charge, or `None` if the scan ran off the start
    // of the input
    Done(Option<(usize, char)>),
}

/// Splits a trailing charge annotation (like the `2+` in `M+2H]2+`) off of `adduct`
///
/// Repeated signs count as extra charges (`M+2H++` is doubly charged), and digits without any sign are treated as
/// part of the chemical formula instead. A `]` immediately before such unsigned digits still separates them from
/// the formula, but the digits are discarded, leaving the charge to be calculated from the adduct's terms.
pub(crate) fn split_charge(adduct: &str) -> (&str, Option<ExplicitCharge>) {
    let mut magnitude = String::new();
    let mut sign = None;

    let mut chars = adduct.char_indices().rev();
    let mut state = ChargeScan::ScanningCharge;
    let terminator = loop {
        match state {
            ChargeScan::ScanningCharge => {
                state = match chars.next() {
                    Some((_, c @ ('+' | '-'))) => {
                        if let Some(seen) = Sign::from_char(c) {
                            record_sign(&mut sign, &mut magnitude, seen);
                        }
                        ChargeScan::ScanningCharge
                    }
                    Some((_, digit)) if digit.is_ascii_digit() => {
                        magnitude.insert(0, digit);
                        ChargeScan::ScanningCharge
                    }
                    terminator => ChargeScan::Done(terminator),
                };
            }
            ChargeScan::Done(terminator) => break terminator,
        }
    };

    let through_terminator = terminator.map_or("", |(i, c)| &adduct[..i + c.len_utf8()]);

    let Some(sign) = sign else {
        let chemical = match terminator {
            Some((_, ']')) => through_terminator,
            _ => adduct,
        };
        trace!("no charge declared in {adduct:?}, keeping {chemical:?}");
        return (chemical, None);
    };

    let charge = ExplicitCharge::new(magnitude, sign);
    trace!("split {adduct:?} into {through_terminator:?} with a charge of {charge}");
    (through_terminator, Some(charge))
}

fn record_sign(sign: &mut Option<Sign>, magnitude: &mut String, seen: Sign) {
    if *sign != Some(seen) {
        *sign = Some(seen);
    } else if magnitude.is_empty() {
        "2".clone_into(magnitude);
    } else if let Ok(count) = magnitude.parse::<u64>() {
        *magnitude = count.saturating_add(1).to_string();
    }
}

/// Splits `name` into a non-empty stem and its trailing run of digits (`M2` into `M` and `2`)
pub(crate) fn split_trailing_digits(name: &str) -> Option<(&str, &str)> {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &name[stem.len()..];
    (!stem.is_empty() && !digits.is_empty()).then_some((stem, digits))
}

/// Like [`split_trailing_digits`], but only when the stem is a single element (`H2` or `Na2`, but not `NH4`)
///
/// Anything with more than one capital letter is taken to be a formula whose final count is part of the name.
pub(crate) fn split_trailing_multiplier(name: &str) -> Option<(&str, &str)> {
    split_trailing_digits(name)
        .filter(|(stem, _)| stem.chars().filter(char::is_ascii_uppercase).count() == 1)
}
