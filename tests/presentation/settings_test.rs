use narvik::presentation::CorsSettings;

#[test]
fn given_comma_separated_list_when_parsing_then_origins_are_trimmed() {
    let cors = CorsSettings::from_list("http://localhost:3000, https://app.example.com");

    assert_eq!(
        cors.allowed_origins,
        vec!["http://localhost:3000", "https://app.example.com"]
    );
    assert!(!cors.is_permissive());
}

#[test]
fn given_wildcard_when_parsing_then_settings_are_permissive() {
    assert!(CorsSettings::from_list("*").is_permissive());
}

#[test]
fn given_empty_list_when_parsing_then_settings_are_permissive() {
    let cors = CorsSettings::from_list("");

    assert!(cors.allowed_origins.is_empty());
    assert!(cors.is_permissive());
}
