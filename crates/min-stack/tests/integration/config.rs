//! Building stacks from TOML configuration.

use min_stack::{Error, MinStack, StackConfig};

#[test]
fn test_bounded_stack_from_toml() {
    let config = StackConfig::from_toml_str(
        r#"
        initial_capacity = 2
        max_depth = 3
        "#,
    )
    .expect("config should parse");
    let mut stack = MinStack::with_config(&config).expect("config should be valid");

    for value in [8, 4, 6] {
        stack.try_push(value).unwrap();
    }
    assert_eq!(
        stack.try_push(0).unwrap_err(),
        Error::DepthExceeded { max_depth: 3 }
    );
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.get_min().unwrap(), 4);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = StackConfig::from_toml_str("max_depth = [").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_inconsistent_config_rejected() {
    let err = StackConfig::from_toml_str("initial_capacity = 10\nmax_depth = 5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: initial_capacity (10) exceeds max_depth (5)"
    );
}

#[test]
fn test_default_config_builds_unbounded_stack() {
    let mut stack = MinStack::with_config(&StackConfig::default()).unwrap();
    assert_eq!(stack.max_depth(), None);
    for value in 0..1_000 {
        stack.try_push(-value).unwrap();
    }
    assert_eq!(stack.get_min().unwrap(), -999);
}

#[test]
fn test_bounded_stack_keeps_core_contract() {
    let config = StackConfig::from_toml_str("max_depth = 1").unwrap();
    let mut stack = MinStack::with_config(&config).unwrap();

    stack.push(3);
    stack.push(1);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.get_min().unwrap(), 1);

    stack.pop().unwrap();
    stack.pop().unwrap();
    for err in [
        stack.pop().unwrap_err(),
        stack.top().unwrap_err(),
        stack.get_min().unwrap_err(),
    ] {
        assert!(err.is_empty_stack());
    }
}
