
use predicates::str::contains;
use assert_cmd::Command;

fn heron_cmd() -> Command {
  Command::cargo_bin("heron").expect("binary exists")
}

#[test]
fn test_sides_from_stdin() {
  heron_cmd().write_stdin("3 4 5\n").assert().success().stdout("6.0\n");
}

#[test]
fn test_sides_from_args() {
  heron_cmd().args(["3", "4", "5"]).assert().success().stdout("6.0\n");
}

#[test]
fn test_impossible_triangle_is_nan() {
  heron_cmd().write_stdin("1 1 10").assert().success().stdout("NaN\n");
}

#[test]
fn test_missing_side_fails() {
  heron_cmd().write_stdin("3 4").assert().failure().stderr(contains("Expected 3 side lengths"));
}

#[test]
fn test_invalid_number_fails() {
  heron_cmd().args(["3", "x", "5"]).assert().failure().stderr(contains("Invalid side length 'x'"));
}
