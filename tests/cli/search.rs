//! Tests for `capi search`.

use crate::support::*;
use predicates::prelude::*;

fn app_org() -> Org {
    Org::new()
        .project("App", vec![group("Svc.DEV", &[("KEY", "v1")])])
        .project("App-Legacy", vec![group("Old.DEV", &[("KEY", "v2")])])
}

#[test]
fn test_search_prints_labeled_block() {
    let t = Test::with_org(&app_org());

    let output = t.search("v1");
    assert_success(&output);

    let expected = format!(
        "Resultados\n{}\nProjeto: App\nGrupo:   Svc.DEV\nChave:   KEY\nValor:   v1\n\
         Criado:  Ana <ana@acme.com>\nModif.:  Bruno <bruno@acme.com>\n{}\n",
        "=".repeat(80),
        "-".repeat(80)
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_search_without_matches() {
    let t = Test::with_org(&app_org());

    t.cmd()
        .args(["search", "--term", "nothing-here"])
        .assert()
        .success()
        .stdout("Nenhum resultado encontrado.\n");
}

#[test]
fn test_search_ignore_case_and_env() {
    let org = Org::new().project(
        "App",
        vec![
            group("Svc.DEV", &[("HOST", "DB01.dev")]),
            group("Svc.PRD", &[("HOST", "db01.prd")]),
        ],
    );
    let t = Test::with_org(&org);

    let output = t.run(&["search", "-t", "db01", "-i", "-e", "dev"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Valor:   DB01.dev");
    assert_stdout_excludes(&output, "Svc.PRD");
}

#[test]
fn test_search_project_filter_limits_calls() {
    let t = Test::with_org(&app_org());

    let output = t.run(&["search", "--term", "v", "--project", "Legacy"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Projeto: App-Legacy");
    assert_stdout_excludes(&output, "Svc.DEV");

    let calls = t.az_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].contains("--project App-Legacy"));
    assert!(calls
        .iter()
        .all(|c| c.contains(&format!("--organization {}", ORGANIZATION))));
}

#[test]
fn test_search_json_output() {
    let t = Test::with_org(&app_org());

    let output = t.run(&["search", "--term", "v1", "--json"]);
    assert_success(&output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([{
            "projeto": "App",
            "grupo": "Svc.DEV",
            "variavel": "KEY",
            "valor": "v1",
            "criado_por": "Ana <ana@acme.com>",
            "modificado_por": "Bruno <bruno@acme.com>"
        }])
    );
}

#[test]
fn test_search_save_writes_report_without_printing() {
    let t = Test::with_org(&app_org());

    let output = t.run(&["search", "--term", "v1", "--save", "hits.txt"]);
    assert_success(&output);
    assert_stdout_contains(&output, "results saved to: hits.txt");
    assert_stdout_excludes(&output, "Resultados");

    let saved = t.read("hits.txt");
    assert!(saved.starts_with("Resultados\n"));
    assert!(saved.contains("Chave:   KEY"));
}

#[test]
fn test_search_save_with_out_prints_same_report() {
    let t = Test::with_org(&app_org());

    let output = t.run(&["search", "--term", "v1", "--save", "hits.txt", "--out"]);
    assert_success(&output);

    let saved = t.read("hits.txt");
    assert!(stdout(&output).ends_with(&saved));
}

#[test]
fn test_search_portuguese_aliases() {
    let t = Test::with_org(&app_org());

    t.cmd()
        .args(["pesquisar", "--termo", "v2", "--projeto", "App"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grupo:   Old.DEV"));
}

#[test]
fn test_search_empty_term_fails() {
    let t = Test::with_org(&app_org());

    let output = t.search("");
    assert_failure(&output);
    assert_stderr_contains(&output, "search term must not be empty");
    assert!(t.az_calls().is_empty());
}

#[test]
fn test_search_matches_rendered_non_string_values() {
    let t = Test::with_org(&Org::new().project("App", vec![]));
    std::fs::write(
        t.bin.path().join("groups").join("App.json"),
        r#"[{"name": "Svc.DEV", "variables": {"ENABLED": {"value": true}, "HOSTS": {"value": ["a", "b"]}}}]"#,
    )
    .unwrap();

    let output = t.search("True");
    assert_success(&output);
    assert_stdout_contains(&output, "Chave:   ENABLED");
    assert_stdout_contains(&output, "Valor:   True");

    let output = t.export("App", "Svc.DEV");
    assert_success(&output);
    assert_stdout_contains(&output, "ENABLED=True\n");
    assert_stdout_contains(&output, "HOSTS='['\"'\"'a'\"'\"', '\"'\"'b'\"'\"']'\n");
}
