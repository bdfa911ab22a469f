//! Environment override for Config
//!
//! Kept in its own test binary: it mutates process environment.

use addrbook::config::CSV_PATH_ENV;
use addrbook::Config;
use tempfile::TempDir;

#[test]
fn test_env_overrides_csv_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    Config::builder().csv_path("from-file.csv").build().save(&path).unwrap();

    std::env::set_var(CSV_PATH_ENV, "from-env.csv");
    let config = Config::load(&path).unwrap();
    std::env::remove_var(CSV_PATH_ENV);

    assert_eq!(config.csv_path.to_str(), Some("from-env.csv"));
}
