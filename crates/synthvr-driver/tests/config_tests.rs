//! Tests for loading driver configuration from disk.

use std::io::Write;

use synthvr_driver::prelude::*;
use synthvr_test_helpers::prelude::*;

#[test]
fn test_load_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "manufacturer": "Acme",
            "model_number": "Stub-2",
            "motion": {{ "bob_amplitude": 0.25 }},
            "render_target_width": 2048
        }}"#
    )?;

    let config = DriverConfig::load(file.path())?;

    assert_eq!(config.manufacturer, "Acme");
    assert_eq!(config.model_number, "Stub-2");
    assert_approx_eq!(config.motion.bob_amplitude, 0.25, f64::EPSILON);
    assert_approx_eq!(config.motion.step_per_tick, 0.01, f64::EPSILON);
    assert_eq!(config.render_target_width, 2048);
    assert_eq!(config.render_target_height, 1024);
    Ok(())
}

#[test]
fn test_load_missing_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let err = must_err(DriverConfig::load(dir.path().join("absent.json")));
    assert!(matches!(err, DriverError::Io(_)));
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = must_err(DriverConfig::from_json_str(
        r#"{ "motion": { "step_per_tick": -0.5 } }"#,
    ));
    insta::assert_snapshot!(err.to_string(), @"Invalid configuration: step_per_tick must be greater than 0");

    let err = must_err(DriverConfig::from_json_str(r#"{ "model_number": "" }"#));
    insta::assert_snapshot!(err.to_string(), @"Invalid configuration: model_number must not be empty");

    let err = must_err(DriverConfig::from_json_str(
        r#"{ "render_target_height": 0 }"#,
    ));
    insta::assert_snapshot!(err.to_string(), @"Invalid configuration: render target dimensions must be greater than 0");
}

#[test]
fn test_roundtrip_through_json() -> TestResult {
    let config = DriverConfig::builder()
        .model_number("Stub-3")
        .motion(MotionParams {
            depth: -1.5,
            ..MotionParams::default()
        })
        .build()?;

    let json = serde_json::to_string(&config)?;
    let parsed = DriverConfig::from_json_str(&json)?;
    assert_eq!(parsed, config);
    Ok(())
}
