//! Tests for `capi list`.

use crate::support::*;

fn org() -> Org {
    Org::new()
        .project("App", vec![group("Svc.DEV", &[]), group("Svc.QAS", &[])])
        .project("Web", vec![group("Front.DEV", &[])])
}

#[test]
fn test_list_prints_blocks_between_rules() {
    let t = Test::with_org(&org());

    let output = t.list();
    assert_success(&output);

    let rule = "-".repeat(80);
    let expected = format!(
        "{rule}\nProjeto: App\nGrupo:   Svc.DEV\nCriado:  Ana <ana@acme.com>\nModif.:  Bruno <bruno@acme.com>\n\
         {rule}\nProjeto: App\nGrupo:   Svc.QAS\nCriado:  Ana <ana@acme.com>\nModif.:  Bruno <bruno@acme.com>\n\
         {rule}\nProjeto: Web\nGrupo:   Front.DEV\nCriado:  Ana <ana@acme.com>\nModif.:  Bruno <bruno@acme.com>\n\
         {rule}\n"
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_list_env_filter() {
    let t = Test::with_org(&org());

    let output = t.run(&["listar", "--ambiente", "dev"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Svc.DEV");
    assert_stdout_contains(&output, "Front.DEV");
    assert_stdout_excludes(&output, "Svc.QAS");
}

#[test]
fn test_list_json() {
    let t = Test::with_org(&org());

    let output = t.run(&["list", "--project", "Web", "--json"]);
    assert_success(&output);

    let groups: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(groups[0]["projeto"], "Web");
    assert_eq!(groups[0]["grupo"], "Front.DEV");
    assert_eq!(groups.as_array().unwrap().len(), 1);
}

#[test]
fn test_list_empty_organization() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_eq!(stdout(&output), "Nenhum grupo encontrado.\n");
}

#[test]
fn test_list_save() {
    let t = Test::with_org(&org());

    let output = t.run(&["list", "--salvar", "groups.txt"]);
    assert_success(&output);
    assert_stdout_contains(&output, "groups saved to: groups.txt");
    assert!(t.read("groups.txt").contains("Grupo:   Front.DEV"));
}
