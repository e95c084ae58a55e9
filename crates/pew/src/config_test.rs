// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use serial_test::serial;
use tempfile::TempDir;

use super::*;
use crate::ScopedEnvironment;

#[rstest]
#[case::unset(None)]
#[case::empty(Some(""))]
fn test_missing_home_is_fatal(#[case] home: Option<&str>) {
    let result = Config::from_values(home, None);
    match result {
        Err(Error::HomeNotSet) => {}
        other => panic!("Expected HomeNotSet, got: {:?}", other),
    }
}

#[rstest]
fn test_home_expands_tilde() {
    let config = Config::from_values(Some("~/envs"), None).unwrap();
    let expected = PathBuf::from(shellexpand::tilde("~/envs").as_ref());
    assert_eq!(config.home, expected);
    assert!(!config.home.starts_with("~"));
}

#[rstest]
fn test_empty_active_is_none() {
    let config = Config::from_values(Some("/envs"), Some(PathBuf::new())).unwrap();
    assert_eq!(config.active, None);
}

#[rstest]
#[case::inside_home(Some("/envs/x"), true, Some("x"))]
#[case::nested(Some("/envs/a/b"), true, Some("a/b"))]
#[case::outside_home(Some("/elsewhere/x"), true, Some("/elsewhere/x"))]
#[case::absolute(Some("/envs/x"), false, Some("/envs/x"))]
#[case::nothing_active(None, true, None)]
fn test_active_display(
    #[case] active: Option<&str>,
    #[case] relative: bool,
    #[case] expected: Option<&str>,
) {
    let config = Config::from_values(Some("/envs"), active.map(PathBuf::from)).unwrap();
    assert_eq!(config.active_display(relative), expected.map(PathBuf::from));
}

#[rstest]
fn test_is_active_resolves_paths() {
    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("real");
    std::fs::create_dir(&real).unwrap();
    std::fs::create_dir(tmp.path().join("other")).unwrap();

    let config = Config::from_values(
        tmp.path().to_str(),
        Some(tmp.path().join("other").join("..").join("real")),
    )
    .unwrap();
    assert!(config.is_active(&real));
    assert!(!config.is_active(tmp.path().join("other")));

    let nothing_active = Config::from_values(tmp.path().to_str(), None).unwrap();
    assert!(!nothing_active.is_active(&real));
}

#[rstest]
#[serial]
fn test_from_env_reads_variables() {
    let _env = ScopedEnvironment::capture();
    ScopedEnvironment::set(WORKON_HOME_VAR, "/some/home");
    ScopedEnvironment::set(VIRTUAL_ENV_VAR, "/some/home/web");

    let config = Config::from_env().unwrap();
    assert_eq!(config.home, PathBuf::from("/some/home"));
    assert_eq!(config.active, Some(PathBuf::from("/some/home/web")));
}

#[rstest]
#[serial]
fn test_from_env_without_home() {
    let _env = ScopedEnvironment::capture();
    ScopedEnvironment::unset(WORKON_HOME_VAR);

    assert!(matches!(Config::from_env(), Err(Error::HomeNotSet)));
}

#[cfg(unix)]
#[rstest]
fn test_home_need_not_be_unicode() {
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"/envs/caf\xe9");
    let config = Config::from_values(Some(raw), None).unwrap();
    assert_eq!(config.home.as_os_str(), raw);
}

#[rstest]
fn test_environment_lookup() {
    let tmp = TempDir::new().unwrap();
    let bin = tmp.path().join("web").join(crate::BIN_DIR);
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("python3"), "").unwrap();
    std::fs::create_dir(tmp.path().join("plain")).unwrap();
    let config = Config::from_values(Some(tmp.path()), None).unwrap();

    assert_eq!(config.environment("web").unwrap(), tmp.path().join("web"));
    for name in ["plain", "missing", "", ".", "..", "web/..", "/"] {
        assert!(
            matches!(config.environment(name), Err(Error::EnvironmentNotFound(ref n)) if n == name),
            "{name:?} should not resolve"
        );
    }
}
