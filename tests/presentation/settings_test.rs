use chatbridge::presentation::config::{Environment, Settings};

#[test]
fn given_known_aliases_when_parsing_environment_then_maps_to_variant() {
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(Environment::try_from(" Dev ".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}

#[test]
fn given_no_settings_file_when_loading_then_uses_built_in_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.gateway.base_url, "http://localhost:11434/api");
    assert_eq!(settings.gateway.default_model, "qwen2.5-coder:32b");
    assert_eq!(settings.gateway.timeout_secs, 300);
    assert_eq!(settings.extraction.max_pdf_size_bytes(), 20 * 1024 * 1024);
    assert!(settings.server.allowed_origins.is_empty());
}
