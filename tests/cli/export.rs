//! Tests for `capi export`.

use crate::support::*;
use capi::{VariableGroup, VariableRecord};

fn org() -> Org {
    Org::new().project(
        "My-App",
        vec![VariableGroup::new("My-App.QAS")
            .with_variable("HOST", VariableRecord::plain("qas.internal"))
            .with_variable("GREETING", VariableRecord::plain("it's \"quoted\""))
            .with_variable("PASSWORD", VariableRecord::withheld())],
    )
}

#[test]
fn test_export_prints_env() {
    let t = Test::with_org(&org());

    let output = t.export("My-App", "My-App.QAS");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "# My-App.QAS\nHOST=qas.internal\nGREETING='it'\"'\"'s \"quoted\"'\nPASSWORD=***SECRET***\n"
    );
}

#[test]
fn test_export_save_writes_env_file() {
    let t = Test::with_org(&org());

    let output = t.run(&[
        "export", "--project", "App", "--lib", "QAS", "--save", ".env",
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, ".env of 'My-App.QAS' saved to:");
    assert_stdout_excludes(&output, "HOST=");

    assert_eq!(
        t.read(".env"),
        "HOST=qas.internal\nGREETING='it'\"'\"'s \"quoted\"'\nPASSWORD=***SECRET***\n"
    );
}

#[test]
fn test_export_env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_org(&org());

    let output = t.run(&["baixar", "-p", "My-App", "-l", "My-App.QAS", "--save", ".env"]);
    assert_success(&output);

    let mode = std::fs::metadata(t.path(".env")).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_export_unknown_group_fails() {
    let t = Test::with_org(&org());

    let output = t.export("My-App", "Other.QAS");
    assert_failure(&output);
    assert_stderr_contains(&output, "variable group not found in the filtered projects: Other.QAS");
}

#[test]
fn test_export_unknown_project_fails() {
    let t = Test::with_org(&org());

    let output = t.export("Nope", "My-App.QAS");
    assert_failure(&output);
    assert_stderr_contains(&output, "no project matches the given project filter");
}

#[test]
fn test_export_requires_project_and_lib() {
    let t = Test::with_org(&org());

    t.cmd()
        .args(["export", "--lib", "My-App.QAS"])
        .assert()
        .failure()
        .code(2);
    assert!(t.az_calls().is_empty());
}
