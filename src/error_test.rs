use super::*;

#[test]
fn serde_errors_convert_with_their_message() {
    let err = serde_json::from_str::<u32>("not json").unwrap_err();
    let converted = Error::from(err);

    assert!(matches!(converted, Error::Serde(_)));
    assert!(converted.to_string().starts_with("Serde Error: "));
}

#[test]
fn unknown_token_displays_its_message() {
    assert_eq!(
        Error::UnknownToken.to_string(),
        "Token not found in the registry!"
    );
}
