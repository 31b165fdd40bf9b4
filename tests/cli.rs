use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helb(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("helb").unwrap();
    cmd.env("HELB_BUDGET_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn init_plan(data_dir: &TempDir) {
    helb(data_dir)
        .args([
            "init",
            "--name",
            "Wanjiru",
            "--loan",
            "45000",
            "--start",
            "2024-08-20",
            "--end",
            "2024-12-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining:   KES 25000.00"));
}

#[test]
fn init_then_toggle_updates_totals() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args(["category", "toggle", "Accommodation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accommodation is now inactive"))
        .stdout(predicate::str::contains("Allocated:   KES 12000.00"))
        .stdout(predicate::str::contains("Remaining:   KES 33000.00"));

    helb(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"));
}

#[test]
fn negative_allocation_is_rejected_and_plan_kept() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args(["category", "set", "2", "--", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    helb(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated:   KES 20000.00"));
}

#[test]
fn duplicate_category_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args(["category", "add", "FOOD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists"));
}

#[test]
fn dashboard_shows_allowance_and_health() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args([
            "dashboard",
            "--balance",
            "15200",
            "--today",
            "2024-10-26",
            "--spent",
            "food=4200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days left:        50"))
        .stdout(predicate::str::contains("Daily allowance:  KES 304.00"))
        .stdout(predicate::str::contains("Budget health:    Fair"))
        .stdout(predicate::str::contains("Top category:"));
}

#[test]
fn init_without_usable_loan_amount_fails() {
    let dir = TempDir::new().unwrap();

    helb(&dir)
        .args([
            "init",
            "--loan",
            "lots",
            "--start",
            "2024-08-20",
            "--end",
            "2024-12-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incomplete input"));
}

#[test]
fn commands_need_a_plan() {
    let dir = TempDir::new().unwrap();

    helb(&dir)
        .args(["dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Semester plan not found"));
}

#[test]
fn doubled_minus_sign_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args(["category", "set", "2", "--", "--100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    helb(&dir)
        .args(["category", "set", "2", "10.999"])
        .assert()
        .failure();

    helb(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated:   KES 20000.00"));
}

#[test]
fn oversized_allocation_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    helb(&dir)
        .args(["category", "set", "1", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount too large"));
}

#[test]
fn interactive_init_conflicts_with_inline_details() {
    let dir = TempDir::new().unwrap();

    helb(&dir)
        .args(["init", "--interactive", "--loan", "45000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn data_dir_flag_selects_storage() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    helb(&env_dir)
        .args(["--data-dir"])
        .arg(flag_dir.path())
        .args(["init", "--loan", "1000", "--start", "2024-08-20", "--end", "2024-12-15"])
        .assert()
        .success();

    assert!(flag_dir.path().join("data").join("plan.json").exists());
    assert!(!env_dir.path().join("data").join("plan.json").exists());
}

#[test]
fn bare_run_points_to_next_step() {
    let dir = TempDir::new().unwrap();

    helb(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("helb init"));

    init_plan(&dir);

    helb(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("helb dashboard"))
        .stdout(predicate::str::contains("helb init").not());
}
