// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use serial_test::serial;
use tempfile::TempDir;

use super::*;

fn snapshot() -> BTreeMap<OsString, OsString> {
    std::env::vars_os().collect()
}

#[rstest]
#[serial]
fn test_arbitrary_changes_are_undone() {
    let before = snapshot();
    {
        let _env = ScopedEnvironment::capture();
        ScopedEnvironment::set("PEW_TEST_X", "x");
        ScopedEnvironment::set("PEW_TEST_Y", "y");
        ScopedEnvironment::set("PEW_TEST_Z", "z");
        assert_ne!(snapshot(), before);
        assert!(["X", "Y", "Z"]
            .iter()
            .all(|k| std::env::var_os(format!("PEW_TEST_{k}")).is_some()));
    }
    assert_eq!(snapshot(), before);
}

#[rstest]
#[serial]
fn test_apply_replaces_and_restores() {
    ScopedEnvironment::set("PEW_TEST_KEEP", "original");
    let before = snapshot();

    let mut wanted = before.clone();
    wanted.remove(OsStr::new("PEW_TEST_KEEP"));
    wanted.insert("PEW_TEST_NEW".into(), "new".into());
    {
        let guard = ScopedEnvironment::apply(&wanted);
        assert_eq!(guard.saved(), &before);
        assert_eq!(snapshot(), wanted);
        assert_eq!(std::env::var_os("PEW_TEST_KEEP"), None);
    }
    assert_eq!(snapshot(), before);
    ScopedEnvironment::unset("PEW_TEST_KEEP");
}

#[rstest]
#[serial]
fn test_restores_when_unwinding() {
    let before = snapshot();
    let result = std::panic::catch_unwind(|| {
        let _env = ScopedEnvironment::capture();
        ScopedEnvironment::set("PEW_TEST_PANIC", "1");
        panic!("boom");
    });
    assert!(result.is_err());
    assert_eq!(snapshot(), before);
}

#[rstest]
#[serial]
fn test_working_dir_string_path() {
    let tmp = TempDir::new().unwrap();
    let dirname = "newdirectory";
    std::fs::create_dir(tmp.path().join(dirname)).unwrap();

    let _outer = ScopedWorkingDir::enter(tmp.path()).unwrap();
    let cwd = std::env::current_dir().unwrap();
    {
        let _inner = ScopedWorkingDir::enter(dirname).unwrap();
        assert_eq!(std::env::current_dir().unwrap(), cwd.join(dirname));
    }
    assert_eq!(std::env::current_dir().unwrap(), cwd);
}

#[rstest]
#[serial]
fn test_working_dir_restored_after_inner_chdir() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("target");
    let other = tmp.path().join("other");
    std::fs::create_dir(&target).unwrap();
    std::fs::create_dir(&other).unwrap();

    let cwd = std::env::current_dir().unwrap();
    {
        let guard = ScopedWorkingDir::enter(&target).unwrap();
        assert_eq!(guard.previous(), cwd);
        std::env::set_current_dir(&other).unwrap();
    }
    assert_eq!(std::env::current_dir().unwrap(), cwd);
}

#[rstest]
#[serial]
fn test_working_dir_missing_target() {
    let tmp = TempDir::new().unwrap();
    let cwd = std::env::current_dir().unwrap();
    assert!(ScopedWorkingDir::enter(tmp.path().join("missing")).is_err());
    assert_eq!(std::env::current_dir().unwrap(), cwd);
}
