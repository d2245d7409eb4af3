use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, sf, signup_worker};

#[test]
fn test_assign_and_list_for_worker() {
    let db_path = setup_test_db("assign_and_list");
    init_db(&db_path);
    signup_worker(&db_path, "w1", "w1@factory.example"); // id 1

    sf()
        .args([
            "--db",
            &db_path,
            "--test",
            "assign",
            "--title",
            "Inspect line 3",
            "--desc",
            "Check the conveyor belt",
            "--to",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("assigned to worker 1"));

    sf()
        .args(["--db", &db_path, "--test", "tasks", "--worker", "1"])
        .assert()
        .success()
        .stdout(contains("Inspect line 3"))
        .stdout(contains("open"));
}

#[test]
fn test_completion_flips_and_leaves_fields_unchanged() {
    let db_path = setup_test_db("completion_scenario");
    init_db(&db_path);
    signup_worker(&db_path, "w1", "w1@factory.example"); // id 1

    sf()
        .args([
            "--db",
            &db_path,
            "--test",
            "assign",
            "--title",
            "Inspect line 3",
            "--desc",
            "Check the conveyor belt",
            "--to",
            "1",
        ])
        .assert()
        .success();

    sf()
        .args(["--db", &db_path, "--test", "done", "1"])
        .assert()
        .success()
        .stdout(contains("Task 1 marked as completed"));

    sf()
        .args(["--db", &db_path, "--test", "tasks", "--worker", "1"])
        .assert()
        .success()
        .stdout(contains("done"))
        .stdout(contains("Inspect line 3"));

    // Title and description survive the flip.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (title, description, completed): (String, String, i64) = conn
        .query_row(
            "SELECT title, description, completed FROM tasks WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .expect("task row");
    assert_eq!(title, "Inspect line 3");
    assert_eq!(description, "Check the conveyor belt");
    assert_eq!(completed, 1);
}

#[test]
fn test_completion_is_idempotent() {
    let db_path = setup_test_db("completion_idempotent");
    init_db(&db_path);
    signup_worker(&db_path, "w1", "w1@factory.example");

    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "Sweep bay", "--to", "1",
        ])
        .assert()
        .success();

    // Marking done twice ends in the same stored state as once.
    sf().args(["--db", &db_path, "--test", "done", "1"])
        .assert()
        .success();
    sf().args(["--db", &db_path, "--test", "done", "1"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let completed: i64 = conn
        .query_row("SELECT completed FROM tasks WHERE id = 1", [], |r| r.get(0))
        .expect("task row");
    assert_eq!(completed, 1);

    // And a reopen flips it back.
    sf()
        .args(["--db", &db_path, "--test", "done", "1", "--reopen"])
        .assert()
        .success()
        .stdout(contains("Task 1 reopened"));

    let completed: i64 = conn
        .query_row("SELECT completed FROM tasks WHERE id = 1", [], |r| r.get(0))
        .expect("task row");
    assert_eq!(completed, 0);
}

#[test]
fn test_done_unknown_task_fails() {
    let db_path = setup_test_db("done_unknown");
    init_db(&db_path);

    sf()
        .args(["--db", &db_path, "--test", "done", "99"])
        .assert()
        .failure()
        .stderr(contains("Task 99 not found"));
}

#[test]
fn test_board_shows_assignee_names() {
    let db_path = setup_test_db("board_names");
    init_db(&db_path);
    signup_worker(&db_path, "mario", "mario@factory.example"); // id 1

    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "Grease press", "--to", "1",
        ])
        .assert()
        .success();

    sf()
        .args(["--db", &db_path, "--test", "tasks"])
        .assert()
        .success()
        .stdout(contains("Grease press"))
        .stdout(contains("mario"));
}

#[test]
fn test_dangling_assignee_shows_unknown() {
    let db_path = setup_test_db("dangling_assignee");
    init_db(&db_path);

    // No account 42 exists; the listing must not fail, it degrades to
    // the sentinel.
    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "Orphan task", "--to", "42",
        ])
        .assert()
        .success();

    // Non-numeric references degrade the same way.
    sf()
        .args([
            "--db",
            &db_path,
            "--test",
            "assign",
            "--title",
            "Ghost task",
            "--to",
            "not-an-id",
        ])
        .assert()
        .success();

    sf()
        .args(["--db", &db_path, "--test", "tasks"])
        .assert()
        .success()
        .stdout(contains("Orphan task"))
        .stdout(contains("Ghost task"))
        .stdout(contains("Unknown"));
}

#[test]
fn test_worker_listing_matches_exact_assignee_only() {
    let db_path = setup_test_db("worker_listing_exact");
    init_db(&db_path);
    signup_worker(&db_path, "w1", "w1@factory.example"); // id 1
    signup_worker(&db_path, "w2", "w2@factory.example"); // id 2

    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "For one", "--to", "1",
        ])
        .assert()
        .success();
    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "For two", "--to", "2",
        ])
        .assert()
        .success();

    sf()
        .args(["--db", &db_path, "--test", "tasks", "--worker", "2"])
        .assert()
        .success()
        .stdout(contains("For two"))
        .stdout(contains("For one").not());
}

#[test]
fn test_tasks_json_output() {
    let db_path = setup_test_db("tasks_json");
    init_db(&db_path);
    signup_worker(&db_path, "mario", "mario@factory.example");

    sf()
        .args([
            "--db", &db_path, "--test", "assign", "--title", "Oil change", "--to", "1",
        ])
        .assert()
        .success();

    sf()
        .args(["--db", &db_path, "--test", "tasks", "--json"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"Oil change\""))
        .stdout(contains("\"assigned_to_name\": \"mario\""))
        .stdout(contains("\"completed\": false"));
}
