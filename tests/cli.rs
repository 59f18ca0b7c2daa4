//! End-to-end tests for the `expense` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

fn expenses_file(dir: &Path) -> std::path::PathBuf {
    dir.join("data").join("expenses.json")
}

#[test]
fn add_list_and_summarize() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "12.50", "1", "-d", "lunch", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added $12.50 (Food) on 2024-06-01"));

    expense(temp_dir.path())
        .args(["add", "30", "Transportation", "-d", "bus pass", "--date", "2024-06-15"])
        .assert()
        .success();

    let output = expense(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lunch_at = stdout.find("lunch").unwrap();
    let bus_at = stdout.find("bus pass").unwrap();
    assert!(lunch_at < bus_at);

    expense(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: 2024-06"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("Miscellaneous"))
        .stdout(predicate::str::contains("$42.50"));

    let raw = fs::read_to_string(expenses_file(temp_dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"amount": 12.5, "description": "lunch", "category": "Food", "date": "2024-06-01"},
            {"amount": 30.0, "description": "bus pass", "category": "Transportation", "date": "2024-06-15"}
        ])
    );
}

#[test]
fn negative_amount_is_recorded() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "-5", "1", "-d", "refund", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$5.00"));

    expense(temp_dir.path())
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$5.00"));
}

#[test]
fn invalid_input_is_rejected_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "twelve", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expense(temp_dir.path())
        .args(["add", "12", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category number"));

    expense(temp_dir.path())
        .args(["add", "12", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category name"));

    assert!(!expenses_file(temp_dir.path()).exists());
}

#[test]
fn malformed_file_starts_empty_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let file = expenses_file(temp_dir.path());
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, "{\"this is\": \"not a list\"}").unwrap();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("unreadable"))
        .stdout(predicate::str::contains("No expenses recorded yet."));

    assert!(temp_dir
        .path()
        .join("data")
        .join("expenses.json.corrupt")
        .exists());
}

#[test]
fn interactive_menu_session() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .write_stdin("1\n12.50\nlunch\nFood\n2\n3\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Categories:"))
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("Monthly Expense Summary"))
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Exiting the application."));

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch"));
}

#[test]
fn custom_categories_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"categories": ["Rent", "Coffee"], "currency_symbol": "€"}"#,
    )
    .unwrap();

    expense(temp_dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Rent\n2. Coffee\n"));

    expense(temp_dir.path())
        .args(["add", "3.20", "2", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€3.20 (Coffee)"));

    expense(temp_dir.path())
        .args(["add", "3.20", "Food"])
        .assert()
        .failure();
}

#[test]
fn export_csv_files() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let expenses_csv = out_dir.path().join("expenses.csv");
    let summary_csv = out_dir.path().join("summary.csv");

    expense(temp_dir.path())
        .args(["add", "12.50", "1", "-d", "lunch", "--date", "2024-06-01"])
        .assert()
        .success();

    expense(temp_dir.path())
        .args(["export", "expenses"])
        .arg(&expenses_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    expense(temp_dir.path())
        .args(["export", "summary"])
        .arg(&summary_csv)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&expenses_csv).unwrap(),
        "date,amount,category,description\n2024-06-01,12.50,Food,lunch\n"
    );
    assert!(fs::read_to_string(&summary_csv)
        .unwrap()
        .contains("2024-06,Food,12.50\n2024-06,Transportation,0.00\n"));
}
