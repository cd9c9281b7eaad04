//! Platform description checks against the mock board

use pin_hal::platform::mock::MockBoard;
use pin_hal::{HalBackend, PinRegistry, PlatformInfo};

#[test]
fn test_platform_num_of_pins() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    assert_eq!(registry.info().pin_count(), 1, "Wrong number of pins reported by platform");
}

#[test]
fn test_platform_adc_max_resolution() {
    let board = MockBoard::new();
    let info = PlatformInfo::query(&board);
    assert_eq!(info.adc_max_resolution_bits(), 12, "Wrong ADC max. resolution");
}

#[test]
fn test_platform_adc_std_resolution() {
    let board = MockBoard::new();
    let info = PlatformInfo::query(&board);
    assert_eq!(info.adc_supported_resolution_bits(), 10, "Wrong ADC standard resolution");
}

#[test]
fn test_platform_info_matches_backend() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let info = registry.info();
    assert_eq!(info.name(), board.platform_name());
    assert_eq!(info.pin_count(), board.pin_count());
    assert_eq!(info.adc_channel_count(), board.adc_channel_count());
}

#[test]
fn test_adc_channel_reports_platform_resolution() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let adc = registry.adc(0).unwrap();
    assert_eq!(adc.max_resolution_bits(), registry.info().adc_max_resolution_bits());
    assert_eq!(
        adc.supported_resolution_bits(),
        registry.info().adc_supported_resolution_bits()
    );
}
