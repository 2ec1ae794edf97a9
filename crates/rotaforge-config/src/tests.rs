//! Tests for scheduler configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [program]
        blocks_per_year = 4
        num_years = 3
        weeks_per_block = 2

        [rules]
        fellowship_blackout_blocks = [1, 2]
        late_year_blackout_block = 3

        [search]
        random_seed = 42
        randomize = false
    "#;

    let config = SchedulerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.program.blocks_per_year, 4);
    assert_eq!(config.program.weeks_per_year(), 8);
    assert_eq!(config.rules.fellowship_blackout_blocks, vec![1, 2]);
    assert_eq!(config.rules.late_year_blackout_block, 3);
    assert_eq!(config.rules.late_year_blackout_year, 3);
    assert_eq!(config.search.random_seed, 42);
    assert!(!config.search.randomize);
    assert_eq!(config.search.staffing_target, StaffingTarget::Minimum);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        program:
          blocks_per_year: 6
        search:
          random_seed: 42
          staffing_target: maximum
    "#;

    let config = SchedulerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.program.blocks_per_year, 6);
    assert_eq!(config.program.num_years, DEFAULT_NUM_YEARS);
    assert_eq!(config.search.random_seed, 42);
    assert_eq!(config.search.staffing_target, StaffingTarget::Maximum);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SchedulerConfig::from_toml_str("").unwrap();
    assert_eq!(config, SchedulerConfig::default());
    assert_eq!(config.program.blocks_per_year, DEFAULT_BLOCKS_PER_YEAR);
    assert_eq!(config.rules.fellowship_blackout_blocks, vec![3, 4]);
    assert_eq!(config.rules.late_year_blackout_block, 12);
    assert!(config.search.randomize);
}

#[test]
fn test_unknown_staffing_target_is_rejected() {
    let toml = r#"
        [search]
        staffing_target = "average"
    "#;
    assert!(matches!(
        SchedulerConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_builder() {
    let config = SchedulerConfig::new()
        .with_blocks_per_year(4)
        .with_num_years(4)
        .with_random_seed(123)
        .with_randomize(false)
        .with_staffing_target(StaffingTarget::Maximum);

    assert_eq!(config.program.blocks_per_year, 4);
    assert_eq!(config.program.num_years, 4);
    assert_eq!(config.search.random_seed, 123);
    assert!(!config.search.randomize);
    assert_eq!(config.search.staffing_target, StaffingTarget::Maximum);
}

#[test]
fn test_validate() {
    assert!(SchedulerConfig::default().validate().is_ok());
    assert!(SchedulerConfig::default()
        .with_blocks_per_year(0)
        .validate()
        .is_err());
    assert!(SchedulerConfig::default()
        .with_num_years(1)
        .validate()
        .is_err());

    let mut config = SchedulerConfig::default();
    config.rules.late_year_blackout_year = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SchedulerConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));

    let converted: RotaForgeError = err.into();
    assert!(converted.to_string().starts_with("Configuration error"));
}

#[test]
fn test_late_year_blackout_year_ignores_num_years() {
    let config = SchedulerConfig::default().with_num_years(4);
    assert_eq!(config.rules.late_year_blackout_year, 3);
    assert_eq!(
        SchedulerConfig::default().rules,
        SchedulerConfig::default().with_num_years(2).rules
    );
}
