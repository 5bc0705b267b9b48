use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{DISHES, YARD, clg_db, init_db, submit_at};

#[test]
fn test_submit_accepts_first_claim() {
    let db = init_db("submit_first");

    submit_at("submit_first", &db, "YAFA", DISHES, "2024-01-01 10:00:00")
        .success()
        .stdout(contains("Well done YAFA"));

    clg_db("submit_first", &db)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("2024-01-01 10:00:00"))
        .stdout(contains("שני"));
}

#[test]
fn test_same_day_repeat_is_flagged() {
    let name = "submit_repeat";
    let db = init_db(name);

    submit_at(name, &db, "YAFA", DISHES, "2024-01-01 09:00:00").success();

    submit_at(name, &db, "YAFA", DISHES, "2024-01-01 15:00:00")
        .failure()
        .stderr(contains("YAFA already logged"));

    clg_db(name, &db)
        .args(["flagged"])
        .assert()
        .success()
        .stdout(contains("Flagged claims (1)"))
        .stdout(contains("2024-01-01 15:00:00"));

    // the primary log still has the single accepted entry
    clg_db(name, &db)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("Latest 1 of 1"))
        .stdout(contains("2024-01-01 15:00:00").not());
}

#[test]
fn test_other_chore_and_next_day_are_accepted() {
    let name = "submit_other";
    let db = init_db(name);

    submit_at(name, &db, "YAFA", DISHES, "2024-01-01 09:00:00").success();
    submit_at(name, &db, "YAFA", YARD, "2024-01-01 15:00:00").success();
    submit_at(name, &db, "YAFA", DISHES, "2024-01-02 08:00:00").success();

    clg_db(name, &db)
        .args(["flagged"])
        .assert()
        .success()
        .stdout(contains("Nobody has been flagged"));

    clg_db(name, &db)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("Latest 3 of 3"));
}

#[test]
fn test_test_performer_is_never_flagged() {
    let name = "submit_test_name";
    let db = init_db(name);

    submit_at(name, &db, "TEST", DISHES, "2024-01-01 09:00:00").success();
    submit_at(name, &db, "TEST", DISHES, "2024-01-01 09:05:00").success();

    clg_db(name, &db)
        .args(["flagged"])
        .assert()
        .success()
        .stdout(contains("Nobody has been flagged"));
}

#[test]
fn test_invalid_selection_is_rejected() {
    let name = "submit_invalid";
    let db = init_db(name);

    submit_at(name, &db, "YAFA", "laundry", "2024-01-01 09:00:00")
        .failure()
        .stderr(contains("Unknown chore"));

    submit_at(name, &db, "-", DISHES, "2024-01-01 09:00:00")
        .failure()
        .stderr(contains("Please pick who did the chore"));

    submit_at(name, &db, "yafa", DISHES, "2024-01-01 09:00:00")
        .failure()
        .stderr(contains("Unknown performer"));

    clg_db(name, &db)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("No entries in the log yet"));
}

#[test]
fn test_submit_without_init_creates_schema() {
    let name = "submit_no_init";
    let db = common::setup_test_db(name);

    submit_at(name, &db, "GAMAL", DISHES, "2024-05-05 20:00:00")
        .success()
        .stdout(contains("Well done GAMAL"));
}

#[test]
fn test_submit_uses_current_time_by_default() {
    let name = "submit_now";
    let db = init_db(name);

    clg_db(name, &db)
        .args(["submit", "--name", "LAKERD", "--chore", DISHES])
        .assert()
        .success();

    clg_db(name, &db)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("LAKERD"));
}

#[test]
fn test_bad_timestamp_override_is_rejected() {
    let name = "submit_bad_at";
    let db = init_db(name);

    submit_at(name, &db, "YAFA", DISHES, "01/01/2024 10:00")
        .failure()
        .stderr(contains("Invalid date format"));
}
