use std::io::Write;
use std::path::PathBuf;

use static_server::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::load_from(None, None).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8000");
    assert_eq!(cfg.server.server_name, "StaticServer");
    assert_eq!(cfg.server.default_content_type, "text/html");
    assert_eq!(cfg.server.read_buffer_size, 4096);
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
    assert_eq!(cfg.static_files.index_file, "index.html");
    assert!(cfg.static_files.generate_listing);
}

#[test]
fn test_config_listen_override() {
    let cfg = Config::load_from(None, Some("0.0.0.0:3000".to_string())).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml(
        r#"
server:
  listen_addr: "127.0.0.1:9000"
static_files:
  root: /srv/www
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.server_name, "StaticServer");
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.index_file, "index.html");
}

#[test]
fn test_config_empty_yaml_is_default() {
    let cfg = Config::from_yaml("").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8000");
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml("server: [unclosed").is_err());
}

#[test]
fn test_config_file_then_listen_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  listen_addr: \"127.0.0.1:9100\"\n  server_name: Custom").unwrap();

    let cfg = Config::load_from(Some(file.path()), None).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9100");
    assert_eq!(cfg.server.server_name, "Custom");

    let cfg = Config::load_from(Some(file.path()), Some("127.0.0.1:9200".to_string())).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9200");
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    assert!(Config::load_from(Some(&missing), None).is_err());
}

#[test]
fn test_config_default_headers_order() {
    let cfg = Config::default();
    let headers: Vec<_> = cfg
        .server
        .default_headers()
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();

    assert_eq!(
        headers,
        vec!["Server: StaticServer", "Content-Type: text/html"]
    );
}

#[test]
fn test_config_rejects_zero_read_buffer() {
    let err = Config::from_yaml("server:\n  read_buffer_size: 0\n").unwrap_err();
    assert!(err.to_string().contains("read_buffer_size"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  read_buffer_size: 0").unwrap();
    assert!(Config::load_from(Some(file.path()), None).is_err());
}

#[test]
fn test_config_accepts_small_read_buffer() {
    let cfg = Config::from_yaml("server:\n  read_buffer_size: 1\n").unwrap();
    assert_eq!(cfg.server.read_buffer_size, 1);
}
