use lifexp_model::{COUNTRY_CODES, CleanRow, Country, ModelError, list_of_countries};

#[test]
fn portugal_is_a_valid_country() {
    let country = Country::new("PT").expect("PT is registered");
    assert_eq!(country.as_str(), "PT");
    assert_eq!(country.to_string(), "PT");
}

#[test]
fn unknown_code_is_rejected() {
    let err = Country::new("XX").unwrap_err();
    assert_eq!(
        err,
        ModelError::InvalidCountryCode {
            code: "XX".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid country code 'XX'");
}

#[test]
fn parses_from_str() {
    let country: Country = "UK".parse().expect("parse UK");
    assert_eq!(country.as_str(), "UK");
    assert!("GB".parse::<Country>().is_err());
}

#[test]
fn list_of_countries_matches_registry() {
    let expected = vec![
        "AT", "BE", "BG", "CH", "CY", "CZ", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IS",
        "IT", "LI", "LT", "LU", "LV", "MT", "NL", "NO", "PL", "PT", "RO", "SE", "SI", "SK", "DE",
        "AL", "IE", "ME", "MK", "RS", "AM", "AZ", "GE", "TR", "UA", "BY", "UK", "XK", "FX", "MD",
        "SM", "RU",
    ];
    assert_eq!(list_of_countries().to_vec(), expected);
    assert_eq!(COUNTRY_CODES.len(), 47);
}

#[test]
fn every_registered_code_constructs() {
    for code in list_of_countries() {
        assert!(Country::new(code).is_ok(), "{code} should be valid");
    }
}

#[test]
fn country_serde_validates_code() {
    let json = serde_json::to_string(&Country::new("FR").unwrap()).unwrap();
    assert_eq!(json, "\"FR\"");
    let back: Country = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_str(), "FR");
    assert!(serde_json::from_str::<Country>("\"ZZ\"").is_err());
}

#[test]
fn clean_row_serializes_with_canonical_names() {
    let row = CleanRow {
        unit: "YR".to_string(),
        sex: "F".to_string(),
        age: "Y_LT1".to_string(),
        region: "PT".to_string(),
        year: 2010,
        value: 80.1,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["region"], "PT");
    assert_eq!(value["year"], 2010);
    assert_eq!(value["value"], 80.1);
}
