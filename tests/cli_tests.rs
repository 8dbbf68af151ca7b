use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rhy, rhy_home, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rhy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_shows_progress() {
    let db_path = setup_test_db("cli_add_progress");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "add", "250", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Added 250ml on 2025-09-01"))
        .stdout(contains("1.5L / 2.0L"))
        .stdout(contains("75%"));
}

#[test]
fn test_add_rejects_invalid_amount() {
    let db_path = setup_test_db("cli_add_invalid");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "add", "0"])
        .assert()
        .failure()
        .stderr(contains("Amount must be greater than 0"));

    rhy()
        .args(["--db", &db_path, "add", "-100"])
        .assert()
        .failure()
        .stderr(contains("Amount must be greater than 0"));

    rhy()
        .args(["--db", &db_path, "add", "6000"])
        .assert()
        .failure()
        .stderr(contains("max 5000 ml per entry"));
}

#[test]
fn test_add_warning_and_daily_maximum() {
    let db_path = setup_test_db("cli_add_limits");
    rhy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rhy()
        .args(["--db", &db_path, "add", "4800", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("more than").not());

    rhy()
        .args(["--db", &db_path, "add", "300", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("You have drunk more than 5.0L today"));

    rhy()
        .args(["--db", &db_path, "add", "2000", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Daily maximum reached"))
        .stderr(contains("7000 ml limit"));

    rhy()
        .args(["--db", &db_path, "progress", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("5.1L / 2.0L"))
        .stdout(contains("Daily goal reached"));

    rhy()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add_warning"))
        .stdout(contains("add_rejected"));
}

#[test]
fn test_invalid_date_is_reported() {
    let db_path = setup_test_db("cli_invalid_date");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "add", "250", "--date", "2025-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_day_and_period() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("500ml"))
        .stdout(contains("750ml"))
        .stdout(contains("1.2L"))
        .stdout(contains("2025-09-15").not());

    rhy()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));

    rhy()
        .args(["--db", &db_path, "list", "--date", "2025-10-01"])
        .assert()
        .success()
        .stdout(contains("No intakes found"));
}

#[test]
fn test_users_are_separate() {
    let db_path = setup_test_db("cli_users");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "--user", "2", "add", "900", "--date", "2025-09-01"])
        .assert()
        .success();

    rhy()
        .args(["--db", &db_path, "--user", "2", "progress", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("900ml / 2.0L"));

    rhy()
        .args(["--db", &db_path, "progress", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("1.2L / 2.0L"));
}

#[test]
fn test_goal_set_and_history() {
    let db_path = setup_test_db("cli_goal");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "goal", "--set", "300"])
        .assert()
        .failure()
        .stderr(contains("Goal seems too low. Minimum is 500ml"));

    rhy()
        .args(["--db", &db_path, "goal", "--set", "2500"])
        .assert()
        .success()
        .stdout(contains("Daily goal set to 2.5L"));

    rhy()
        .args(["--db", &db_path, "goal", "--set", "1250"])
        .assert()
        .success();

    rhy()
        .args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("1.2L"));

    rhy()
        .args(["--db", &db_path, "goal", "--history"])
        .assert()
        .success()
        .stdout(contains("2.5L"))
        .stdout(contains("active"));

    // 1250ml on 2025-09-01 against a 1250ml goal
    rhy()
        .args(["--db", &db_path, "progress", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("100%"))
        .stdout(contains("Daily goal reached"));
}

#[test]
fn test_week_shows_today() {
    let db_path = setup_test_db("cli_week");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "add", "2000"])
        .assert()
        .success();

    rhy()
        .args(["--db", &db_path, "week"])
        .assert()
        .success()
        .stdout(contains("Last 7 days (goal 2.0L)"))
        .stdout(contains(chrono::Local::now().date_naive().to_string()))
        .stdout(contains("1 day(s)"));
}

#[test]
fn test_remind_due_without_intake() {
    let db_path = setup_test_db("cli_remind");
    init_db_with_data(&db_path);

    let home = tempfile::tempdir().expect("tempdir");

    rhy_home(home.path())
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("Time to drink!"))
        .stdout(contains("rhydrolog add 250"));
}

#[test]
fn test_remind_disabled_by_config() {
    let db_path = setup_test_db("cli_remind_off");
    init_db_with_data(&db_path);

    let home = tempfile::tempdir().expect("tempdir");
    fs::write(
        home.path().join("rhydrolog.conf"),
        format!("database: {db_path}\nnotifications_enabled: false\n"),
    )
    .expect("write config");

    rhy_home(home.path())
        .args(["remind"])
        .assert()
        .success()
        .stdout(contains("Reminders are disabled"));
}

#[test]
fn test_del_day_and_record() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    // ids 1 and 2 are on 2025-09-01, id 3 on 2025-09-15
    rhy()
        .args(["--db", &db_path, "del", "--id", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Intake #3 has been deleted"));

    rhy()
        .args(["--db", &db_path, "del", "--date", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 intakes for 2025-09-01 have been deleted"));

    rhy()
        .args(["--db", &db_path, "del", "--date", "2025-09-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No intake found"));

    rhy()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No intakes found"));
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "del", "--date", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rhy()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("750ml"));
}

#[test]
fn test_config_check_and_migrate() {
    let home = tempfile::tempdir().expect("tempdir");
    let conf = home.path().join("rhydrolog.conf");
    fs::write(&conf, "database: /tmp/unused.sqlite\n").expect("write config");

    rhy_home(home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("default_goal_ml"));

    rhy_home(home.path())
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("quick_amounts"));
    assert!(content.contains("/tmp/unused.sqlite"));

    rhy_home(home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db");
    init_db_with_data(&db_path);

    rhy()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total intakes:"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}
