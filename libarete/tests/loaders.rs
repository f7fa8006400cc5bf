//! Credential and integration-config loading against fake workspaces.
//!
//! Tests that touch `FATHOM_*` or `ARETE_WORKSPACE_ROOT` run serially.

use std::fs;
use std::path::Path;

use libarete::{
    load_credentials, load_integration_config, load_integration_config_from, CredentialSources,
    CREDENTIAL_ENV_SUFFIXES, WORKSPACE_ENV,
};
use serial_test::serial;
use tempfile::TempDir;

/// Every credential variable for `fathom`, unset.
fn clear_fathom_env() -> Vec<(String, Option<&'static str>)> {
    CREDENTIAL_ENV_SUFFIXES
        .iter()
        .map(|suffix| (format!("FATHOM_{}", suffix), None))
        .collect()
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn sources(workspace: &TempDir, home: &TempDir) -> CredentialSources {
    CredentialSources {
        workspace: workspace.path().to_path_buf(),
        home: Some(home.path().to_path_buf()),
    }
}

#[test]
#[serial]
fn test_credentials_from_env() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yaml"),
        "fathom:\n  api_key: from-file\n",
    );

    let mut vars = clear_fathom_env();
    vars.push(("FATHOM_API_KEY".to_string(), Some("from-env")));
    vars.push(("FATHOM_CLIENT_ID".to_string(), Some("client")));
    temp_env::with_vars(vars, || {
        let creds = sources(&workspace, &home).load("fathom").unwrap();
        assert_eq!(creds.len(), 2);
        assert_eq!(creds.get_str("api_key"), Some("from-env"));
        assert_eq!(creds.get_str("client_id"), Some("client"));
    });
}

#[test]
#[serial]
fn test_empty_env_var_ignored() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yaml"),
        "fathom:\n  api_key: from-file\n",
    );

    let mut vars = clear_fathom_env();
    vars.push(("FATHOM_API_KEY".to_string(), Some("")));
    temp_env::with_vars(vars, || {
        let creds = sources(&workspace, &home).load("fathom").unwrap();
        assert_eq!(creds.get_str("api_key"), Some("from-file"));
    });
}

#[test]
#[serial]
fn test_workspace_file_before_home() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yml"),
        "# workspace\nfathom:\n  api_key: \"workspace-key\"\n",
    );
    write(
        &home.path().join(".arete/credentials.yaml"),
        "fathom:\n  api_key: home-key\n",
    );

    temp_env::with_vars(clear_fathom_env(), || {
        let creds = sources(&workspace, &home).load("fathom").unwrap();
        assert_eq!(creds.get_str("api_key"), Some("workspace-key"));
    });
}

#[test]
#[serial]
fn test_falls_through_to_home() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yaml"),
        "calendar:\n  token: other\n",
    );
    write(
        &home.path().join(".arete/credentials.yaml"),
        "fathom:\n  api_key: home-key\n",
    );

    temp_env::with_vars(clear_fathom_env(), || {
        let creds = sources(&workspace, &home).load("fathom").unwrap();
        assert_eq!(creds.get_str("api_key"), Some("home-key"));
    });
}

#[test]
#[serial]
fn test_scalar_entry_skipped() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yaml"),
        "fathom: just-a-string\n",
    );
    write(
        &home.path().join(".arete/credentials.yml"),
        "fathom:\n  token: home-token\n",
    );

    temp_env::with_vars(clear_fathom_env(), || {
        let creds = sources(&workspace, &home).load("fathom").unwrap();
        assert_eq!(creds.get_str("token"), Some("home-token"));
    });
}

#[test]
#[serial]
fn test_no_credentials() {
    let workspace = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    temp_env::with_vars(clear_fathom_env(), || {
        assert!(sources(&workspace, &home).load("fathom").is_none());
        let no_home = CredentialSources {
            workspace: workspace.path().to_path_buf(),
            home: None,
        };
        assert!(no_home.load("fathom").is_none());
    });
}

#[test]
#[serial]
fn test_load_credentials_uses_workspace_env() {
    let workspace = TempDir::new().unwrap();
    write(
        &workspace.path().join(".credentials/credentials.yaml"),
        "zzintegration:\n  secret: s3cret\n",
    );

    temp_env::with_vars(
        [
            (WORKSPACE_ENV, Some(workspace.path().as_os_str())),
            ("ZZINTEGRATION_SECRET", None),
        ],
        || {
            let creds = load_credentials("zzintegration").unwrap();
            assert_eq!(creds.get_str("secret"), Some("s3cret"));
        },
    );
}

#[test]
fn test_integration_config_defaults() {
    let workspace = TempDir::new().unwrap();
    write(
        &workspace
            .path()
            .join(".cursor/integrations/configs/fathom.yaml"),
        "defaults:\n  min_duration_minutes: 5\n  days: '7'\n",
    );

    let config = load_integration_config_from(workspace.path(), "fathom");
    assert_eq!(config.default_str("min_duration_minutes"), Some("5"));
    assert_eq!(config.default_str("days"), Some("7"));
}

#[test]
fn test_integration_config_yml_extension() {
    let workspace = TempDir::new().unwrap();
    write(
        &workspace.path().join(".cursor/integrations/configs/fathom.yml"),
        "name: fathom\n",
    );

    let config = load_integration_config_from(workspace.path(), "fathom");
    assert_eq!(config.as_section().get_str("name"), Some("fathom"));
    assert!(config.defaults().is_empty());
}

#[test]
fn test_integration_config_missing() {
    let workspace = TempDir::new().unwrap();
    let config = load_integration_config_from(workspace.path(), "fathom");
    assert!(config.as_section().is_empty());
    assert!(config.defaults().is_empty());
}

#[test]
fn test_integration_config_scalar_defaults() {
    let workspace = TempDir::new().unwrap();
    write(
        &workspace
            .path()
            .join(".cursor/integrations/configs/fathom.yaml"),
        "defaults: none\n",
    );
    let config = load_integration_config_from(workspace.path(), "fathom");
    assert!(config.defaults().is_empty());
    assert_eq!(config.into_section().get_str("defaults"), Some("none"));
}

#[test]
#[serial]
fn test_load_integration_config_uses_workspace_env() {
    let workspace = TempDir::new().unwrap();
    write(
        &workspace
            .path()
            .join(".cursor/integrations/configs/fathom.yaml"),
        "defaults:\n  days: 14\n",
    );

    temp_env::with_var(WORKSPACE_ENV, Some(workspace.path()), || {
        let config = load_integration_config("fathom");
        assert_eq!(config.default_str("days"), Some("14"));
    });
}
