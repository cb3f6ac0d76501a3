//! Tests for `capi compare`.

use crate::support::*;
use predicates::prelude::*;

fn org() -> Org {
    Org::new().project(
        "App",
        vec![
            group("Svc.DEV", &[("A", "1"), ("B", "2")]),
            group("Svc.QAS", &[("B", "2"), ("C", "3")]),
        ],
    )
}

#[test]
fn test_compare_report() {
    let t = Test::with_org(&org());

    let output = t.compare("Svc.DEV", "Svc.QAS");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "------ DEV -------\n\
         + A=1 (Existe em DEV mas não existe em QAS)\n\
         ------ QAS -------\n\
         + C=3 (Existe em QAS mas não existe em DEV)\n\
         ------------------\n"
    );
    assert!(!stderr(&output).contains("different projects"));
}

#[test]
fn test_compare_identical_key_sets() {
    let t = Test::with_org(&org());

    let output = t.compare("Svc.DEV", "Svc.DEV");
    assert_success(&output);
    assert_stdout_contains(&output, "(Sem variáveis exclusivas em DEV)");
    assert_stdout_excludes(&output, "+ ");
}

#[test]
fn test_compare_across_projects_warns_on_stderr() {
    let org = Org::new()
        .project("App", vec![group("Svc.DEV", &[("A", "1")])])
        .project("Legacy", vec![group("Svc.QAS", &[("A", "1")])]);
    let t = Test::with_org(&org);

    let output = t.compare("Svc.DEV", "Svc.QAS");
    assert_success(&output);
    assert_stderr_contains(
        &output,
        "the libs were found in different projects: 'App' and 'Legacy'",
    );
    assert_stdout_excludes(&output, "different projects");
}

#[test]
fn test_compare_needs_exactly_two_libs() {
    let t = Test::with_org(&org());

    let output = t.run(&["compare", "--lib", "Svc.DEV"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "exactly two libs are required to compare, got 1");
    assert!(t.az_calls().is_empty());
}

#[test]
fn test_compare_missing_lib() {
    let t = Test::with_org(&org());

    t.cmd()
        .args(["comparar", "--lib", "Svc.DEV", "--lib", "Svc.PRD"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lib not found: Svc.PRD"));
}

#[test]
fn test_compare_save() {
    let t = Test::with_org(&org());

    let output = t.run(&[
        "compare", "--lib", "Svc.DEV", "--lib", "Svc.QAS", "--save", "diff.txt",
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "comparison saved to: diff.txt");
    assert!(t.read("diff.txt").ends_with("------------------\n"));
}
