use std::process::Command;

fn inventory() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_inventory"));
    command
        .env_remove("DATABASE_URL")
        .env_remove("SYSTEM_DATABASE_URL")
        .env_remove("INVENTORY_DATABASE_URL");
    command
}

/// Expected: a missing app label is reported even without `DATABASE_URL`
#[test]
fn migrate_without_app_label_needs_no_config() {
    let output = inventory().arg("migrate").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("No app has been specified"));
    assert!(!stderr.contains("Configuration error"));
}

#[test]
fn migrate_without_database_needs_no_config() {
    let output = inventory().args(["migrate", "inventory"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("No database supplied"));
}
