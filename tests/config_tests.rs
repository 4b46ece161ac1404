use std::io::Write;

use proptest::prelude::*;
use sysgpio::{
    DemoConfig, Direction, Edge, GpioError, PinConfiguration, PinConfigurationBuilder,
    SYSFS_GPIO_BASE,
};
use tempfile::NamedTempFile;

#[test]
fn unset_fields_stay_absent() {
    let config = PinConfigurationBuilder::new().name("17").build();

    assert_eq!(config.name.as_deref(), Some("17"));
    assert_eq!(config.direction, None);
    assert_eq!(config.edge, None);
    assert_eq!(config.active_low, None);
    assert_eq!(PinConfigurationBuilder::new().build(), PinConfiguration::default());
}

#[test]
fn build_can_be_called_repeatedly() {
    let mut builder = PinConfiguration::builder();
    builder.name("4").direction(Direction::In);
    let first = builder.build();

    builder.edge(Edge::Rising);
    let second = builder.build();

    assert_eq!(first.edge, None);
    assert_eq!(second.edge, Some(Edge::Rising));
    assert_eq!(first.name, second.name);
}

#[test]
fn later_setter_wins_and_no_validation() {
    let config = PinConfiguration::builder()
        .name("")
        .direction(Direction::Out)
        .edge(Edge::Falling)
        .direction(Direction::In)
        .build();

    assert_eq!(config.name.as_deref(), Some(""));
    assert_eq!(config.direction, Some(Direction::In));
    assert_eq!(config.edge, Some(Edge::Falling));
}

#[test]
fn pin_configuration_from_json() {
    let config: PinConfiguration = serde_json::from_str(
        r#"
        {
            "name": "9",
            "direction": "out",
            "edge": "rising"
        }
        "#,
    )
    .expect("valid pin config");

    assert_eq!(
        config,
        PinConfiguration::builder()
            .name("9")
            .direction(Direction::Out)
            .edge(Edge::Rising)
            .build()
    );
}

#[test]
fn demo_config_defaults() {
    let config = DemoConfig::default();

    assert_eq!(config.sysfs.base_path, SYSFS_GPIO_BASE);
    assert_eq!(config.pin.name.as_deref(), Some("9"));
    assert_eq!(config.pin.direction, Some(Direction::Out));
    assert_eq!(config.pin.edge, None);
}

#[test]
fn demo_config_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        {{
            "sysfs": {{ "base_path": "/tmp/fake-gpio" }},
            "pin": {{ "name": "21", "direction": "in", "active_low": true }}
        }}
        "#
    )
    .unwrap();

    let config = DemoConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.sysfs.base_path, "/tmp/fake-gpio");
    assert_eq!(config.pin.name.as_deref(), Some("21"));
    assert_eq!(config.pin.direction, Some(Direction::In));
    assert_eq!(config.pin.active_low, Some(true));
}

#[test]
fn demo_config_sysfs_section_is_optional() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pin": {{ "name": "3" }} }}"#).unwrap();

    let config = DemoConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.sysfs.base_path, SYSFS_GPIO_BASE);
}

#[test]
fn demo_config_errors() {
    let err = DemoConfig::load_from_file("/nonexistent/sysgpio.json").unwrap_err();
    assert!(matches!(err, GpioError::Config(ref msg) if msg.starts_with("Failed to read")));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pin": {{ "direction": "sideways" }} }}"#).unwrap();
    let err = DemoConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, GpioError::Config(ref msg) if msg.starts_with("Invalid config json")));
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::In), Just(Direction::Out)]
}

fn edge() -> impl Strategy<Value = Edge> {
    prop_oneof![Just(Edge::None), Just(Edge::Rising), Just(Edge::Falling)]
}

proptest! {
    #[test]
    fn setter_order_does_not_matter(
        name in "[0-9]{0,3}",
        direction in direction(),
        edge in edge(),
        active_low in any::<bool>(),
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let expected = PinConfiguration::builder()
            .name(name.clone())
            .direction(direction)
            .edge(edge)
            .active_low(active_low)
            .build();

        let mut builder = PinConfigurationBuilder::new();
        for setter in order {
            match setter {
                0 => builder.name(name.clone()),
                1 => builder.direction(direction),
                2 => builder.edge(edge),
                _ => builder.active_low(active_low),
            };
        }

        prop_assert_eq!(builder.build(), expected);
    }
}
