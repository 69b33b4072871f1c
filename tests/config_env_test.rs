//! Tests for DSDEMO_* environment overrides.
//!
//! Kept in their own test binary so the variables never leak into the
//! file-layer tests; the lock serializes the tests in this file.

use std::env;
use std::fs;
use std::sync::Mutex;

use tempfile::TempDir;

use dsdemo::application::ApplicationError;
use dsdemo::config::{local_config_path, Settings};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const CAPACITY_VAR: &str = "DSDEMO_STACK__CAPACITY";
const PAGES_VAR: &str = "DSDEMO_SITE__PAGES";

/// Removes the variables again when the test ends, even on panic.
struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            env::remove_var(key);
        }
    }
}

#[test]
fn given_env_overrides_when_load_then_env_wins_over_files() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = EnvGuard(&[CAPACITY_VAR, PAGES_VAR]);
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
[stack]
capacity = 3

[site]
pages = ["local.html"]
"#,
    )
    .unwrap();
    env::set_var(CAPACITY_VAR, "8");
    env::set_var(PAGES_VAR, "a.html,b.html");

    let settings = Settings::load_from(None, Some(dir.path())).expect("load settings");

    assert_eq!(settings.stack.capacity, 8);
    assert_eq!(settings.site.pages, vec!["a.html", "b.html"]);
    assert_eq!(settings.stack.separator, " <- TOP\n");
}

#[test]
fn given_non_numeric_capacity_env_when_load_then_returns_config_error() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = EnvGuard(&[CAPACITY_VAR]);
    let dir = TempDir::new().unwrap();
    env::set_var(CAPACITY_VAR, "lots");

    let result = Settings::load_from(None, Some(dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
