use chatbridge::infrastructure::observability::TracingConfig;
use chatbridge::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_json_logging_settings_when_creating_config_then_copies_format_and_filter() {
    let logging = LoggingSettings {
        json: true,
        filter: "warn,chatbridge=info".to_string(),
    };

    let config = TracingConfig::new(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn,chatbridge=info");
    assert_eq!(config.environment, Environment::Prod);
}

#[test]
fn given_local_environment_when_creating_config_then_keeps_pretty_output() {
    let logging = LoggingSettings {
        json: false,
        filter: "debug".to_string(),
    };

    let config = TracingConfig::new(Environment::Local, &logging);

    assert!(!config.json_format);
    assert_eq!(config.environment.as_str(), "local");
}
