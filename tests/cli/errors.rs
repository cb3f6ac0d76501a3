//! Tests for failure reporting and exit status.

use crate::support::*;

#[test]
fn test_az_failure_exits_with_status_2() {
    let t = Test::with_org(&Org::new().project("App", vec![]));
    t.fail_az("ERROR: Please run 'az login' to setup account.");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "Azure CLI: ERROR: Please run 'az login'");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_missing_devops_extension_hint() {
    let t = Test::new();
    t.fail_az(
        "ERROR: 'devops' is not in the 'az' command group. Install the azure-devops extension.",
    );

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "✗ Azure CLI: ERROR: 'devops' is not in the 'az' command group.",
    );
    assert_stderr_contains(&output, "\n→ az extension add --name azure-devops\n");
    assert!(!stderr(&output).contains("hint:"));
}

#[test]
fn test_missing_az_binary() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("CAPI_AZ", t.dir.path().join("no-such-az"))
        .args(["list"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "az executable not found");
    assert_stderr_contains(&output, "az login");
}

#[test]
fn test_missing_organization() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("CAPI_ORGANIZATION")
        .args(["list"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no organization configured");
    assert_stderr_contains(&output, "CAPI_ORGANIZATION");
    assert!(t.az_calls().is_empty());
}

#[test]
fn test_failure_mid_traversal_prints_nothing() {
    let org = Org::new()
        .project("App", vec![group("Svc.DEV", &[("KEY", "v1")])])
        .project("Broken", vec![]);
    let t = Test::with_org(&org);
    // Projects resolve, but the Broken listing returns garbage.
    std::fs::write(t.bin.path().join("groups").join("Broken.json"), "not json").unwrap();

    let output = t.search("v1");
    assert_failure(&output);
    assert_stderr_contains(&output, "response is not valid JSON");
    assert_stdout_excludes(&output, "Svc.DEV");
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let t = Test::with_org(&Org::new().project("App", vec![group("Svc.DEV", &[])]));

    let output = t.run(&["list", "--save", "missing-dir/groups.txt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}
