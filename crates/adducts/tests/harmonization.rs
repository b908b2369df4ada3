use adducts::{CleanOptions, charge_of, clean, clean_with, equal, is_unknown};

#[test]
fn term_order_is_irrelevant() {
    let permutations = [
        ["M+H+Na-H2O", "M+Na+H-H2O", "M-H2O+H+Na", "M-H2O+Na+H"],
        ["M-2H+K-Cl", "M+K-2H-Cl", "M-Cl+K-2H", "M-Cl-2H+K"],
        ["2M+ACN+H", "2M+H+ACN", "M2+H+ACN", "M2+ACN+H"],
    ];
    for adducts in permutations {
        let canonical = clean(adducts[0]);
        for adduct in adducts {
            assert_eq!(clean(adduct), canonical, "harmonizing {adduct:?}");
            assert!(equal(adduct, adducts[0]));
        }
    }
}

#[test]
fn multimer_notations_agree() {
    for (leading, trailing) in [("2M+H", "M2+H"), ("3M-H", "M3-H"), ("2M+Na]+", "[M2+Na]+")] {
        assert_eq!(clean(leading), clean(trailing));
        assert!(equal(leading, trailing));
    }
}

#[test]
fn charges_match_suffixes() {
    let options = CleanOptions::default().with_formulas(true);
    for adduct in ["M+H", "M-H", "M+2H", "M-3H", "M+Ca", "M+FA-H", "M+H2O", "M+Cl", "M+NH4"] {
        let cleaned = clean_with(adduct, options);
        let charge = cleaned.charge();
        let text = cleaned.text();
        let suffix = match charge {
            0 => String::new(),
            1 => "+".to_owned(),
            -1 => "-".to_owned(),
            c if c > 0 => format!("{c}+"),
            c => format!("{}-", -c),
        };
        assert!(text.ends_with(&format!("]{suffix}")), "{text:?} should end with {suffix:?}");
        assert_eq!(charge_of(adduct), charge);
    }
}

#[test]
fn explicit_charges_are_authoritative() {
    assert_eq!(clean("[M+H]2-"), "[M+H]2-");
    assert_eq!(charge_of("[M+H]2-"), -2);
    assert_eq!(charge_of("[M+2H]2+"), 2);
    assert_eq!(charge_of("[M+Na]+"), 1);
}

#[test]
fn charges_resolve_synonyms() {
    assert_eq!(charge_of("M+FA"), -1);
    assert_eq!(charge_of("M+Hac-H"), -1);
    assert_eq!(charge_of("M+TFA-H"), -1);
    assert_eq!(charge_of("M+ACN+H"), 1);
}

#[test]
fn equality_tolerates_missing_signs() {
    assert!(equal("[M+H]+", "M+H"));
    assert!(equal("M+H]", "[M+H]+"));
    assert!(equal("[M+Na-H2O]+", "M-H2O+Na"));
    assert!(equal("M", "?"));
    assert!(!equal("[M+H]+", "[M+H]-"));
    assert!(!equal("[M+H]+", "[M+Na]+"));
    assert!(!equal("", ""));
    assert!(!equal("   ", "[M+H]+"));
}

#[test]
fn unknown_adducts() {
    for adduct in ["?", "unknown", "UNK", "M", "[M]", "[M]+"] {
        assert!(clean(adduct).starts_with("unknown"), "harmonizing {adduct:?}");
    }
    assert!(is_unknown("Unknown"));
    assert!(is_unknown("unk"));
    assert!(!is_unknown("[M+H]+"));
    assert_eq!(clean("[M]2+"), "unknown2+");
    assert_eq!(clean("Cat+"), "[M]+");
}
