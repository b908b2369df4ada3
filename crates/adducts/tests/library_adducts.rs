use adducts::{CleanOptions, charge_of, clean, clean_with, equal};

// Adducts collected from public spectral libraries, alongside their expected harmonized forms
const LIBRARY_ADDUCTS: &str = include_str!("data/library_adducts.tsv");

struct Expected<'a> {
    adduct: &'a str,
    canonical: &'a str,
    with_formulas: &'a str,
    charge: i64,
}

fn library_adducts() -> impl Iterator<Item = Expected<'static>> {
    LIBRARY_ADDUCTS
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| {
            let fields: Vec<_> = line.split('\t').collect();
            let [adduct, canonical, with_formulas, charge] = fields[..] else {
                panic!("malformed line in library_adducts.tsv: {line:?}");
            };
            Expected {
                adduct,
                canonical,
                with_formulas,
                charge: charge.parse().unwrap(),
            }
        })
}

#[test]
fn library_adducts_are_read() {
    assert_eq!(library_adducts().count(), 398);
}

#[test]
fn canonical_forms() {
    for Expected {
        adduct, canonical, ..
    } in library_adducts()
    {
        assert_eq!(clean(adduct), canonical, "harmonizing {adduct:?}");
    }
}

#[test]
fn canonical_forms_with_formulas() {
    let options = CleanOptions::default().with_formulas(true);
    for Expected {
        adduct,
        with_formulas,
        charge,
        ..
    } in library_adducts()
    {
        let cleaned = clean_with(adduct, options);
        assert_eq!(cleaned.text(), with_formulas, "harmonizing {adduct:?}");
        assert_eq!(cleaned.charge(), charge, "charge of {adduct:?}");
    }
}

#[test]
fn charges() {
    for Expected { adduct, charge, .. } in library_adducts() {
        assert_eq!(charge_of(adduct), charge, "charge of {adduct:?}");
    }
}

#[test]
fn harmonized_forms_are_stable() {
    // A bare `M` is an unknown adduct, so a lone cation radical harmonizes to `[M]+` and then to `unknown+`
    for Expected {
        adduct, canonical, ..
    } in library_adducts().filter(|e| e.canonical != "[M]+")
    {
        assert_eq!(clean(canonical), canonical, "re-harmonizing {adduct:?}");
        if !canonical.is_empty() {
            assert!(equal(adduct, canonical), "{adduct:?} should equal {canonical:?}");
        }
    }
}
