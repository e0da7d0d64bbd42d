use super::*;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn isolated() -> SettingsLoader {
    SettingsLoader::new().without_file().with_environment(HashMap::new())
}

fn write_settings(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, body).expect("write settings");
    path
}

#[test]
fn defaults_have_no_endpoint_and_public_assets() {
    let settings = isolated().load().expect("load");
    assert_eq!(settings, SiteSettings::default());
    assert_eq!(settings.contact_endpoint(), None);
    assert_eq!(settings.assets_dir, PathBuf::from("public"));
}

#[test]
fn file_values_are_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_settings(
        &dir,
        "contact_endpoint = \"https://forms.example.test/a\"\nassets_dir = \"static\"\n",
    );

    let settings = isolated().with_file(&path).load().expect("load");
    assert_eq!(
        settings.contact_endpoint(),
        Some("https://forms.example.test/a")
    );
    assert_eq!(settings.assets_dir, PathBuf::from("static"));
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = isolated()
        .with_file(dir.path().join("missing.toml"))
        .load()
        .expect_err("missing file");
    assert!(matches!(err, SettingsError::Source(_)));
}

#[test]
fn alias_overrides_file_and_prefixed_env_overrides_alias() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_settings(&dir, "contact_endpoint = \"https://file.example.test\"\n");

    let settings = isolated()
        .with_file(&path)
        .with_environment(env(&[("CONTACT_ENDPOINT", "https://alias.example.test")]))
        .load()
        .expect("load");
    assert_eq!(settings.contact_endpoint(), Some("https://alias.example.test"));

    let settings = isolated()
        .with_file(&path)
        .with_environment(env(&[
            ("CONTACT_ENDPOINT", "https://alias.example.test"),
            ("PORTFOLIO__CONTACT_ENDPOINT", "https://prefixed.example.test"),
        ]))
        .load()
        .expect("load");
    assert_eq!(
        settings.contact_endpoint(),
        Some("https://prefixed.example.test")
    );
}

#[test]
fn command_line_override_wins() {
    let settings = isolated()
        .with_environment(env(&[("PORTFOLIO__CONTACT_ENDPOINT", "https://env.example.test")]))
        .with_endpoint_override(Some("https://flag.example.test".into()))
        .with_assets_dir_override(Some(PathBuf::from("assets")))
        .load()
        .expect("load");
    assert_eq!(settings.contact_endpoint(), Some("https://flag.example.test"));
    assert_eq!(settings.assets_dir, PathBuf::from("assets"));
}

#[test]
fn blank_values_are_treated_as_absent() {
    let settings = isolated()
        .with_environment(env(&[("CONTACT_ENDPOINT", "   ")]))
        .with_endpoint_override(Some(String::new()))
        .load()
        .expect("load");
    assert_eq!(settings.contact_endpoint(), None);
}

#[test]
fn endpoint_is_trimmed() {
    let settings = isolated()
        .with_endpoint_override(Some("  https://forms.example.test/x \n".into()))
        .load()
        .expect("load");
    assert_eq!(settings.contact_endpoint(), Some("https://forms.example.test/x"));
}

#[test]
fn non_http_endpoints_are_rejected() {
    for bad in ["ftp://files.example.test", "not a url", "/relative/path"] {
        let err = isolated()
            .with_endpoint_override(Some(bad.into()))
            .load()
            .expect_err(bad);
        match err {
            SettingsError::InvalidEndpoint { value, .. } => assert_eq!(value, bad),
            other => panic!("unexpected error for {bad}: {other}"),
        }
    }
}

#[test]
fn asset_paths_resolve_under_assets_dir() {
    let settings = SiteSettings::default();
    assert_eq!(
        settings.asset_path("/projects/agent.png"),
        PathBuf::from("public").join("projects/agent.png")
    );
}
