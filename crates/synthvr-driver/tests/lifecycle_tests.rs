//! Tests for full driver lifecycle scenarios against a recording host.

use std::sync::Arc;

use synthvr_driver::prelude::*;
use synthvr_driver_abi::{
    ControllerRole, DeviceClass, PropertyKey, PropertyValue, SERVER_TRACKED_DEVICE_PROVIDER_VERSION,
    TrackingResult,
};
use synthvr_test_helpers::prelude::*;

const LEFT_ID: TrackedDeviceIndex = 5;
const RIGHT_ID: TrackedDeviceIndex = 9;

fn initialized() -> Result<(Arc<MockDriverHost>, DeviceContext), DriverError> {
    let host = MockDriverHost::new().into_handle();
    let mut ctx = DeviceContext::default();
    ctx.initialize(Some(host.connection()), Some("driver.log"))?;
    Ok((host, ctx))
}

#[test]
fn test_left_only_three_ticks() -> TestResult {
    let (host, mut ctx) = initialized()?;

    ctx.activate_device(0, LEFT_ID)?;
    for _ in 0..3 {
        ctx.tick();
    }

    let pose = must_some(host.last_pose(LEFT_ID), "left pose published");
    assert_vec3_approx_eq!(pose.position, [0.03, 0.03_f64.sin() * 0.1, -2.0], 1e-12);
    assert!((pose.position[2] - -2.0).abs() < f64::EPSILON);
    assert_unit_quaternion!(pose.rotation, 1e-12);
    assert!(pose.pose_is_valid);
    assert!(pose.device_is_connected);
    assert_eq!(pose.result, TrackingResult::RunningOk);

    assert_eq!(host.poses_for(LEFT_ID).len(), 3);
    assert_eq!(host.pose_order(), vec![LEFT_ID; 3]);
    assert_eq!(ctx.lookup_driver(1), INVALID_TRACKED_DEVICE_INDEX);
    let right = must_some(ctx.controller(1), "right slot");
    assert_eq!(right.motion().ticks(), 0);
    Ok(())
}

#[test]
fn test_disconnect_left_keeps_right() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    ctx.activate_device(1, RIGHT_ID)?;

    ctx.disconnect(LEFT_ID);

    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert_eq!(ctx.lookup_driver(1), RIGHT_ID);
    assert!(ctx.controller(0).is_none());
    assert_eq!(ctx.device_count(), 2);

    ctx.tick();
    assert!(host.poses_for(LEFT_ID).is_empty());
    assert_eq!(host.poses_for(RIGHT_ID).len(), 1);
    Ok(())
}

#[test]
fn test_disconnected_slot_cannot_be_reactivated() -> TestResult {
    let (_host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    ctx.disconnect(LEFT_ID);

    let err = must_err(ctx.activate_device(0, LEFT_ID));
    assert!(matches!(err, DriverError::DeviceNotConnected(0)));
    Ok(())
}

#[test]
fn test_lookup_distinct_after_activation() -> TestResult {
    let (_host, mut ctx) = initialized()?;
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert_eq!(ctx.lookup_driver(1), INVALID_TRACKED_DEVICE_INDEX);

    ctx.activate_device(0, LEFT_ID)?;
    ctx.activate_device(1, RIGHT_ID)?;

    let left = ctx.lookup_driver(0);
    let right = ctx.lookup_driver(1);
    assert_ne!(left, INVALID_TRACKED_DEVICE_INDEX);
    assert_ne!(right, INVALID_TRACKED_DEVICE_INDEX);
    assert_ne!(left, right);
    assert_eq!(ctx.lookup_driver(2), INVALID_TRACKED_DEVICE_INDEX);
    Ok(())
}

#[test]
fn test_tick_order_is_left_then_right() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(1, RIGHT_ID)?;
    ctx.activate_device(0, LEFT_ID)?;

    ctx.tick();
    ctx.tick();

    assert_eq!(host.pose_order(), vec![LEFT_ID, RIGHT_ID, LEFT_ID, RIGHT_ID]);
    Ok(())
}

#[test]
fn test_controllers_have_independent_phase() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    ctx.tick();
    ctx.tick();
    ctx.activate_device(1, RIGHT_ID)?;
    ctx.tick();

    let left = must_some(host.last_pose(LEFT_ID), "left pose");
    let right = must_some(host.last_pose(RIGHT_ID), "right pose");
    assert_approx_eq!(left.position[0], 0.03, 1e-12);
    assert_approx_eq!(right.position[0], 0.01, 1e-12);
    Ok(())
}

#[test]
fn test_missing_host_leaves_no_controllers() {
    let mut ctx = DeviceContext::default();
    let err = must_err(ctx.initialize(None, None));
    assert!(matches!(err, DriverError::InvalidParameter(_)));
    assert_eq!(err.init_error(), InitError::InvalidParam);
    assert!(!ctx.is_initialized());
    assert!(ctx.controller(0).is_none());
    assert!(ctx.controller(1).is_none());
}

#[test]
fn test_missing_host_on_initialized_context_tears_down() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;

    let err = must_err(ctx.initialize(None, None));

    assert!(matches!(err, DriverError::InvalidParameter(_)));
    assert!(!ctx.is_initialized());
    assert!(ctx.controller(0).is_none());
    assert!(ctx.controller(1).is_none());
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert_eq!(host.cleanup_calls(), 1);

    ctx.tick();
    assert_eq!(host.pose_count(), 0);
    Ok(())
}

fn nan_yaw_config() -> DriverConfig {
    DriverConfig {
        motion: MotionParams {
            yaw_step_degrees: f64::NAN,
            ..MotionParams::default()
        },
        ..DriverConfig::default()
    }
}

#[test]
fn test_invalid_config_rejected_at_initialize() {
    let host = MockDriverHost::new().into_handle();
    let mut ctx = DeviceContext::new(nan_yaw_config());

    let err = must_err(ctx.initialize(Some(host.connection()), None));

    assert!(matches!(err, DriverError::InvalidConfiguration(_)));
    assert_eq!(err.init_error(), InitError::InvalidParam);
    assert!(!ctx.is_initialized());
    assert!(ctx.controller(0).is_none());
    assert_eq!(host.init_calls(), 0);
}

#[test]
fn test_factory_refuses_invalid_config() {
    let provider =
        driver_factory_with_config(SERVER_TRACKED_DEVICE_PROVIDER_VERSION, nan_yaw_config());
    assert!(provider.is_none());
}

#[test]
fn test_rejected_registration() {
    let host = MockDriverHost::rejecting("runtime shutting down").into_handle();
    let mut ctx = DeviceContext::default();

    let err = must_err(ctx.initialize(Some(host.connection()), None));
    assert!(matches!(err, DriverError::InitializationFailed(_)));
    assert_eq!(err.init_error(), InitError::InitInternal);
    assert!(ctx.controller(0).is_none());

    ctx.teardown();
    assert_eq!(host.init_calls(), 1);
    assert_eq!(host.cleanup_calls(), 0);
}

#[test]
fn test_activate_deactivate_then_tick_is_silent() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    must_some(ctx.controller_mut(0), "left slot").deactivate();

    ctx.tick();

    assert_eq!(host.pose_count(), 0);
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    Ok(())
}

#[test]
fn test_activation_publishes_properties() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    ctx.activate_device(1, RIGHT_ID)?;

    assert_eq!(host.properties_for(LEFT_ID).len(), 11);
    assert_eq!(
        host.property(LEFT_ID, PropertyKey::ControllerRole)
            .map(|p| p.value),
        Some(PropertyValue::Int32(ControllerRole::LeftHand as i32))
    );
    assert_eq!(
        host.property(RIGHT_ID, PropertyKey::ControllerRole)
            .map(|p| p.value),
        Some(PropertyValue::Int32(ControllerRole::RightHand as i32))
    );
    assert_eq!(
        host.property(RIGHT_ID, PropertyKey::DeviceClass)
            .map(|p| p.value),
        Some(PropertyValue::Uint64(DeviceClass::Controller as u64))
    );
    assert_eq!(
        host.property(LEFT_ID, PropertyKey::ModelNumber)
            .map(|p| p.value),
        Some(PropertyValue::String("My Controller Model".into()))
    );
    Ok(())
}

#[test]
fn test_activation_without_interface_stays_inactive() -> TestResult {
    let host = MockDriverHost::without_interface().into_handle();
    let mut ctx = DeviceContext::default();
    ctx.initialize(Some(host.connection()), None)?;

    let err = must_err(ctx.activate_device(0, LEFT_ID));
    assert!(matches!(err, DriverError::HostInterfaceUnavailable { .. }));
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert_eq!(host.property_count(), 0);
    Ok(())
}

#[test]
fn test_interface_lost_mid_session_is_swallowed() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    host.set_interface_available(false);

    ctx.tick();
    ctx.tick();

    assert_eq!(host.pose_count(), 0);
    let left = must_some(ctx.controller(0), "left slot");
    assert_eq!(left.motion().ticks(), 2);
    assert!(left.last_pose().is_some());
    Ok(())
}

#[test]
fn test_activate_with_invalid_index() -> TestResult {
    let (_host, mut ctx) = initialized()?;
    let err = must_err(ctx.activate_device(0, INVALID_TRACKED_DEVICE_INDEX));
    assert!(matches!(err, DriverError::InvalidParameter(_)));
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    Ok(())
}

#[test]
fn test_reactivation_resets_phase() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    for _ in 0..5 {
        ctx.tick();
    }
    ctx.activate_device(0, 11)?;
    ctx.tick();

    let pose = must_some(host.last_pose(11), "pose under new identity");
    assert_approx_eq!(pose.position[0], 0.01, 1e-12);
    Ok(())
}

#[test]
fn test_teardown_is_idempotent() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;
    assert_eq!(ctx.log_output(), Some("driver.log"));

    ctx.teardown();
    ctx.teardown();

    assert!(!ctx.is_initialized());
    assert_eq!(host.cleanup_calls(), 1);
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert!(ctx.log_output().is_none());

    ctx.tick();
    assert_eq!(host.pose_count(), 0);
    Ok(())
}

#[test]
fn test_drop_releases_host() -> TestResult {
    let (host, ctx) = initialized()?;
    drop(ctx);
    assert_eq!(host.cleanup_calls(), 1);
    Ok(())
}

#[test]
fn test_reinitialize_tears_down_first() -> TestResult {
    let (host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;

    ctx.initialize(Some(host.connection()), None)?;

    assert_eq!(host.init_calls(), 2);
    assert_eq!(host.cleanup_calls(), 1);
    assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
    assert!(ctx.log_output().is_none());
    Ok(())
}

#[test]
fn test_disconnect_unknown_is_ignored() -> TestResult {
    let (_host, mut ctx) = initialized()?;
    ctx.activate_device(0, LEFT_ID)?;

    ctx.disconnect(42);
    ctx.disconnect(INVALID_TRACKED_DEVICE_INDEX);

    assert_eq!(ctx.lookup_driver(0), LEFT_ID);
    assert!(ctx.controller(1).is_some());
    Ok(())
}

#[test]
fn test_provider_through_factory() -> TestResult {
    let host = MockDriverHost::new().into_handle();
    let mut provider = must_some(
        driver_factory(SERVER_TRACKED_DEVICE_PROVIDER_VERSION),
        "provider for the supported version",
    );

    provider.initialize(Some(host.connection()), None)?;
    must_some(provider.device_driver_mut(0), "left driver").activate(LEFT_ID)?;
    provider.run_frame();

    assert_eq!(provider.tracked_device_id_to_driver(0), LEFT_ID);
    let driver = must_some(provider.tracked_device_driver(LEFT_ID), "driver by identity");
    assert_eq!(driver.id(), LEFT_ID);
    assert!(driver.input_state().is_neutral());
    assert!(provider.tracked_device_driver(RIGHT_ID).is_none());

    assert_eq!(provider.recommended_render_target_size(), (1024, 1024));
    assert!(!provider.should_block_standby_mode());
    provider.enter_standby();
    provider.leave_standby();
    assert_eq!(host.pose_count(), 1);

    provider.disconnect_device(LEFT_ID);
    assert!(provider.device_driver_mut(0).is_none());

    provider.cleanup();
    assert_eq!(host.cleanup_calls(), 1);
    Ok(())
}

#[test]
fn test_provider_maps_errors_to_codes() {
    let host = MockDriverHost::rejecting("no").into_handle();
    let mut provider = must_some(
        driver_factory(SERVER_TRACKED_DEVICE_PROVIDER_VERSION),
        "provider",
    );
    assert_eq!(
        provider.initialize(Some(host.connection()), None),
        Err(InitError::InitInternal)
    );
    assert_eq!(provider.initialize(None, None), Err(InitError::InvalidParam));
}

#[test]
fn test_custom_config_flows_to_devices() -> TestResult {
    let config = DriverConfig::builder()
        .manufacturer("Acme")
        .render_target(1920, 1080)
        .build()?;
    let host = MockDriverHost::new().into_handle();
    let mut ctx = DeviceContext::new(config);
    ctx.initialize(Some(host.connection()), None)?;
    ctx.activate_device(0, LEFT_ID)?;

    assert_eq!(
        host.property(LEFT_ID, PropertyKey::ManufacturerName)
            .map(|p| p.value),
        Some(PropertyValue::String("Acme".into()))
    );
    assert_eq!(ctx.recommended_render_target_size(), (1920, 1080));
    Ok(())
}
