use eventwatch_core::errors::{ExError, ExErrorKind, WatchError};
use eventwatch_core::RunId;

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidScope, "ERR_INVALID_SCOPE"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Fetch, "ERR_FETCH"),
        (ExErrorKind::Timeout, "ERR_TIMEOUT"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_invalid_config_conversion() {
    let err = WatchError::InvalidConfig {
        reason: "change_log_cap must be positive".to_string(),
    };
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidConfig);
    assert!(ex_err.message().contains("change_log_cap"));
    assert_eq!(ex_err.scope(), None);
}

#[test]
fn test_serde_json_error_becomes_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let ex_err: ExError = WatchError::from(json_err).into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_builder_carries_run_context() {
    let run_id = RunId::new();
    let err = ExError::new(ExErrorKind::Timeout)
        .with_op("fetch_page")
        .with_run_id(run_id.clone())
        .with_message("no response after 30s");

    assert_eq!(err.op(), Some("fetch_page"));
    assert_eq!(err.run_id(), Some(&run_id));
    assert_eq!(err.message(), "no response after 30s");
}

#[test]
fn test_source_chain_is_exposed() {
    let cause = ExError::new(ExErrorKind::Io).with_message("permission denied");
    let err = ExError::new(ExErrorKind::Persistence)
        .with_event_id("0123456789abcdef")
        .with_source(cause);

    let source = err.source_error().expect("source should be set");
    assert_eq!(source.kind(), ExErrorKind::Io);
    assert_eq!(err.event_id(), Some("0123456789abcdef"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("caused by [ERR_IO]"));
}
