// External Crate Imports
use log::{debug, trace};
use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit0},
    combinator::rest,
    multi::separated_list1,
    sequence::pair,
    IResult,
};

// Public API ==========================================================================================================

/// The raw, unparsed terms of an adduct: the molecule core and its signed additions and losses, in input order
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Tokens<'s> {
    pub(crate) core: &'s str,
    pub(crate) additions: Vec<&'s str>,
    pub(crate) losses: Vec<&'s str>,
}

/// Splits an adduct (with its charge and brackets already removed) into its terms
///
/// The first piece of every `+`-separated group is an addition (or the core, for the very first group), and every
/// `-`-separated piece after that is a loss. Empty additions and losses (as in `M++H`) are dropped.
pub(crate) fn tokenize(adduct: &str) -> Tokens<'_> {
    // NOTE: Every sub-parser of `groups` accepts empty input, so it can't fail
    let groups = groups(adduct).map_or_else(|_| vec![vec![adduct]], |(_, groups)| groups);
    trace!("tokenized {adduct:?} into {groups:?}");

    let mut groups = groups.into_iter();
    let mut first_group = groups.next().unwrap_or_default().into_iter();
    let core = first_group.next().unwrap_or_default();

    let mut additions = Vec::new();
    let mut losses: Vec<_> = first_group.collect();
    for group in groups {
        let mut pieces = group.into_iter();
        additions.extend(pieces.next());
        losses.extend(pieces);
    }

    drop_empty(&mut additions, adduct);
    drop_empty(&mut losses, adduct);

    Tokens {
        core,
        additions,
        losses,
    }
}

/// Term = { digit } , Name ;
///
/// Returns the (possibly empty) leading multiplier digits and the rest of the term.
pub(crate) fn term(token: &str) -> (&str, &str) {
    // NOTE: Both `digit0` and `rest` accept empty input, so this can't fail either
    pair(digit0::<_, nom::error::Error<_>>, rest)(token).map_or(("", token), |(_, parts)| parts)
}

fn drop_empty(terms: &mut Vec<&str>, adduct: &str) {
    let before = terms.len();
    terms.retain(|term| !term.is_empty());
    if terms.len() < before {
        debug!("dropped {} empty term(s) from {adduct:?}", before - terms.len());
    }
}

// Private Sub-Parsers =================================================================================================

/// Groups = Group , { "+" , Group } ;
fn groups(i: &str) -> IResult<&str, Vec<Vec<&str>>> {
    separated_list1(char('+'), group)(i)
}

/// Group = Piece , { "-" , Piece } ;
fn group(i: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('-'), piece)(i)
}

/// Piece = { any character - ( "+" | "-" ) } ;
fn piece(i: &str) -> IResult<&str, &str> {
    take_till(|c| c == '+' || c == '-')(i)
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::*;

    #[test]
    fn test_piece() {
        assert_eq!(piece("H2O"), Ok(("", "H2O")));
        assert_eq!(piece("M+H"), Ok(("+H", "M")));
        assert_eq!(piece("M-H"), Ok(("-H", "M")));
        assert_eq!(piece("+H"), Ok(("+H", "")));
        assert_eq!(piece(""), Ok(("", "")));
    }

    #[test]
    fn test_group() {
        assert_eq!(group("M-H-H2O"), Ok(("", vec!["M", "H", "H2O"])));
        assert_eq!(group("M-H+Na"), Ok(("+Na", vec!["M", "H"])));
        assert_eq!(group("Na"), Ok(("", vec!["Na"])));
        assert_eq!(group("--"), Ok(("", vec!["", "", ""])));
    }

    #[test]
    fn test_groups() {
        assert_eq!(
            groups("2M-H2O+Na-H+K"),
            Ok(("", vec![vec!["2M", "H2O"], vec!["Na", "H"], vec!["K"]]))
        );
        assert_eq!(groups(""), Ok(("", vec![vec![""]])));
    }

    #[test]
    fn test_term() {
        assert_eq!(term("2H"), ("2", "H"));
        assert_eq!(term("12CH4"), ("12", "CH4"));
        assert_eq!(term("H2O"), ("", "H2O"));
        assert_eq!(term("42"), ("42", ""));
        assert_eq!(term(""), ("", ""));
    }

    #[test]
    fn test_tokenize() {
        assert_debug_snapshot!(tokenize("2M-H2O+Na-H+K"), @r#"
        Tokens {
            core: "2M",
            additions: [
                "Na",
                "K",
            ],
            losses: [
                "H2O",
                "H",
            ],
        }
        "#);
        assert_eq!(
            tokenize("M"),
            Tokens {
                core: "M",
                additions: Vec::new(),
                losses: Vec::new()
            }
        );
        assert_eq!(
            tokenize(""),
            Tokens {
                core: "",
                additions: Vec::new(),
                losses: Vec::new()
            }
        );
        // Empty terms are dropped, but an empty core is kept
        assert_eq!(
            tokenize("+H+-Na"),
            Tokens {
                core: "",
                additions: vec!["H"],
                losses: vec!["Na"]
            }
        );
    }
}
