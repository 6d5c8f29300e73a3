use super::*;
use serial_test::serial;

#[test]
fn test_get_existing_var() {
    std::env::set_var("SHELF_TEST_ENV_VAR", "test_value");
    assert_eq!(
        EnvVar::get("SHELF_TEST_ENV_VAR"),
        Some("test_value".to_string())
    );
    std::env::remove_var("SHELF_TEST_ENV_VAR");
}

#[test]
fn test_get_empty_var() {
    std::env::set_var("SHELF_TEST_EMPTY_VAR", "");
    assert_eq!(EnvVar::get("SHELF_TEST_EMPTY_VAR"), None);
    std::env::remove_var("SHELF_TEST_EMPTY_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("SHELF_NONEXISTENT_VAR_12345"), None);
}

#[test]
#[serial]
fn test_data_dir_prefers_shelf_home() {
    std::env::set_var(SHELF_HOME, "/tmp/shelf-test-home");
    assert_eq!(data_dir().unwrap(), PathBuf::from("/tmp/shelf-test-home"));
    std::env::remove_var(SHELF_HOME);
}

#[test]
#[serial]
fn test_data_dir_falls_back_to_home() {
    std::env::remove_var(SHELF_HOME);
    let home = std::env::var("HOME").unwrap();
    assert_eq!(data_dir().unwrap(), PathBuf::from(home).join(".shelf"));
}
