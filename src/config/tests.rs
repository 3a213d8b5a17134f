use super::*;
use crate::size::parse_size;

#[test]
fn defaults_match_the_documented_configuration() {
    let config = CommitgateConfig::default();

    assert!(!config.checks.console_logs.enabled);
    assert!(!config.checks.console_logs.block_commit);
    assert!(config.checks.console_logs.patterns[0].contains("console"));
    assert_eq!(config.checks.console_logs.allowed_patterns.len(), 4);

    assert!(config.checks.file_size.enabled);
    assert!(config.checks.file_size.block_commit);
    assert_eq!(
        parse_size(&config.checks.file_size.limits["default"]).unwrap(),
        5 * 1024 * 1024
    );
    assert_eq!(
        parse_size(&config.checks.file_size.limits["images"]).unwrap(),
        2 * 1024 * 1024
    );

    assert!(!config.checks.typescript.enabled);
    assert!(config.checks.typescript.no_emit);

    assert!(config.checks.branch_naming.enabled);
    assert!(!config.checks.branch_naming.block_commit);
    assert!(config.checks.branch_naming.allowed_branches.contains(&"main".to_string()));

    assert!(config.checks.commit_message.enabled);
    assert!(config.checks.commit_message.block_commit);
    assert_eq!(config.checks.commit_message.examples.len(), 3);

    assert!(config.notifications.enabled);
    assert!(config.performance.parallel);
    assert_eq!(config.performance.max_workers, 4);
    assert_eq!(config.performance.timeout, 60_000);
}

#[test]
fn default_configuration_validates() {
    CommitgateConfig::default().validate().unwrap();
}

#[test]
fn partial_file_overrides_merge_over_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "commitgate.toml",
            r#"
                [checks.console_logs]
                enabled = true
                block_commit = true

                [checks.file_size.limits]
                default = "1mb"
            "#,
        )?;

        let config = CommitgateConfig::load(None).expect("config should load");

        // Overridden fields take effect...
        assert!(config.checks.console_logs.enabled);
        assert!(config.checks.console_logs.block_commit);
        assert_eq!(
            parse_size(&config.checks.file_size.limits["default"]).unwrap(),
            1024 * 1024
        );

        // ...while untouched fields keep their defaults.
        assert!(!config.checks.console_logs.patterns.is_empty());
        assert!(config.checks.commit_message.enabled);
        assert!(config.performance.parallel);

        Ok(())
    });
}

#[test]
fn environment_variables_override_the_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "commitgate.toml",
            r#"
                [performance]
                parallel = true
            "#,
        )?;
        jail.set_env("COMMITGATE_PERFORMANCE__PARALLEL", "false");
        jail.set_env("COMMITGATE_PERFORMANCE__MAX_WORKERS", "2");

        let config = CommitgateConfig::load(None).expect("config should load");
        assert!(!config.performance.parallel);
        assert_eq!(config.performance.max_workers, 2);

        Ok(())
    });
}

#[test]
fn numeric_and_string_size_specs_both_deserialize() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "commitgate.toml",
            r#"
                [checks.file_size.limits]
                default = "5mb"
                ".bin" = 1048576
            "#,
        )?;

        let config = CommitgateConfig::load(None).expect("config should load");
        assert_eq!(config.checks.file_size.limits[".bin"], SizeSpec::Bytes(1_048_576));
        assert_eq!(parse_size(&config.checks.file_size.limits[".bin"]).unwrap(), 1_048_576);

        Ok(())
    });
}

#[test]
fn unknown_fields_are_ignored() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "commitgate.toml",
            r#"
                future_option = "whatever"

                [checks.console_logs]
                enabled = true
                not_a_real_field = 42
            "#,
        )?;

        let config = CommitgateConfig::load(None).expect("unknown fields should not fail");
        assert!(config.checks.console_logs.enabled);

        Ok(())
    });
}

#[test]
fn validate_rejects_broken_patterns_and_limits() {
    let mut config = CommitgateConfig::default();
    config.checks.console_logs.patterns = vec!["(unclosed".to_string()];
    assert!(config.validate().is_err());

    let mut config = CommitgateConfig::default();
    config.checks.file_size.limits.remove("default");
    assert!(config.validate().is_err());

    let mut config = CommitgateConfig::default();
    config
        .checks
        .file_size
        .limits
        .insert("default".to_string(), SizeSpec::Text("bogus".to_string()));
    assert!(config.validate().is_err());
}
