//! Configuration and inventory file handling

use pedra_viewer::{
    config::Config,
    error::AppError,
    pedra::{Inventory, StatusEntry},
};
use std::io::Write;

#[tokio::test]
async fn test_config_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.modal.action_label = "Fechar".to_string();
    config.modal.dismiss_on_backdrop_click = false;
    config.ui.theme = "dark".to_string();
    config.save_to_file(&path).await.unwrap();

    let loaded = Config::load_from_file(&path).await.unwrap();
    assert_eq!(loaded.modal.action_label, "Fechar");
    assert!(!loaded.modal.dismiss_on_backdrop_click);
    assert_eq!(loaded.ui.theme, "dark");
    assert_eq!(loaded.inventory.path, config.inventory.path);
}

#[tokio::test]
async fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[tokio::test]
async fn test_missing_candidates_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let candidates = [dir.path().join("a.toml"), dir.path().join("b.toml")];

    let config = Config::load_first_existing(&candidates).await.unwrap();
    assert!(config.modal.show_action_button);
}

#[tokio::test]
async fn test_invalid_config_file_is_reported_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("pedra-viewer.toml");
    std::fs::write(&bad, "[modal]\nwidth_percent = 5\nshow_action_button = false\n").unwrap();
    let good = dir.path().join("config.toml");
    std::fs::write(&good, "[modal]\nshow_close_button = false\n").unwrap();

    let err = Config::load_first_existing(&[bad.clone(), good.clone()])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));

    std::fs::write(&bad, "[modal\n").unwrap();
    let err = Config::load_first_existing(&[bad, good]).await.unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
}

#[tokio::test]
async fn test_first_existing_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("config.toml");
    std::fs::write(&good, "[modal]\nshow_close_button = false\n").unwrap();

    let config = Config::load_first_existing(&[dir.path().join("missing.toml"), good])
        .await
        .unwrap();
    assert!(!config.modal.show_close_button);
}

#[tokio::test]
async fn test_inventory_with_original_field_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"uid": "f00dbabe12345678", "nome": "Pedra Mágica T2", "imagem": "pm.png",
              "status": [{{"nome": "Ataque", "valor": "+15"}}, {{"nome": "Defesa", "valor": "+4"}}]}},
            {{"uid": "deadbeef87654321", "name": "Ruby Tier 4 +3", "imageUrl": "ruby.png"}}
        ]"#
    )
    .unwrap();

    let inventory = Inventory::load_from_file(file.path()).await.unwrap().sorted();
    assert_eq!(inventory.len(), 2);

    let first = inventory.get(0).unwrap();
    assert_eq!(first.name, "Ruby Tier 4 +3");
    assert_eq!(first.status_list, None);

    let second = inventory.get(1).unwrap();
    assert_eq!(second.tier(), Some(2));
    assert_eq!(
        second.status_list.as_deref(),
        Some(&[StatusEntry::new("Ataque", "+15"), StatusEntry::new("Defesa", "+4")][..])
    );
}

#[tokio::test]
async fn test_missing_inventory_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = Inventory::load_from_file(dir.path().join("pedras.json"))
        .await
        .unwrap();
    assert!(inventory.is_empty());
}

#[tokio::test]
async fn test_malformed_inventory_is_serde_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": 42}}]"#).unwrap();

    let err = Inventory::load_from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, AppError::Serde(_)));
}

#[tokio::test]
async fn test_bundled_demo_inventory_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/pedras.json");
    let inventory = Inventory::load_from_file(path).await.unwrap().sorted();

    let names: Vec<&str> = inventory.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Ruby T5 Stone", "Pedra Mágica Tier 3 +7", "Pedra de Aprimoramento"]
    );
    assert_eq!(inventory.get(1).unwrap().status_count(), 3);
    assert_eq!(inventory.get(2).unwrap().status_list, Some(vec![]));
}

#[test]
fn test_numeric_status_value_keeps_every_stone() {
    let inventory = Inventory::from_json(
        r#"[{"nome":"Ruby Tier 3","status":[{"nome":"STR","valor":10}]},{"nome":"Jade Tier 2","status":[]}]"#,
    )
    .unwrap();

    assert_eq!(inventory.len(), 2);
    assert_eq!(
        inventory.get(0).unwrap().status_list,
        Some(vec![StatusEntry::new("STR", "10")])
    );
}
