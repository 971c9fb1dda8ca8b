//! End-to-end tests driving the compiled binary over stdin/stdout

use assert_cmd::Command;
use predicates::prelude::*;

const MENU: &str = "\n====== EXPENSE TRACKER MENU ======\n\
                    1. Add an expense\n\
                    2. View all expenses\n\
                    3. View total spent\n\
                    4. View total spent by category\n\
                    5. Exit\n\
                    Enter your choice: ";

#[test]
fn test_full_transcript() {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.write_stdin("1\n12.50\nFood\nLunch\n3\n5\n");

    let expected = format!(
        "{menu}Enter the expense amount: \
         Enter the category for this expense: \
         Enter a short description (optional): \
         Expense added successfully!\n\
         {menu}Total spent so far: $12.50\n\
         {menu}Exiting the Expense Tracker. Goodbye!\n",
        menu = MENU
    );

    cmd.assert().success().stdout(expected);
}

#[test]
fn test_exit_status_is_success() {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.write_stdin("5\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Exiting the Expense Tracker. Goodbye!\n",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_end_of_input_fails() {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.write_stdin("1\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Input stream closed"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("expense-tracker"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.arg("--verbose").write_stdin("1\n3\nFood\n\n5\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Expense recorded").not())
        .stderr(predicate::str::contains("Expense recorded"));
}
