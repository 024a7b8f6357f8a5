use std::process::Command;

use assert_cmd::assert::Assert;
use assert_cmd::prelude::*;

fn sokoban() -> Command {
    Command::cargo_bin("sokoban-astar").unwrap()
}

fn stdout(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn run_corridor() {
    let solution = r"Found solution:
######
#@$ .#
######

######
# @$.#
######

######
#  @*#
######

RR
Moves: 2
Pushes: 2
";

    let assert = sokoban()
        .arg("levels/custom/01-corridor.txt")
        .assert()
        .success()
        .stderr("");
    let out = stdout(&assert);
    assert!(out.starts_with("Solving levels/custom/01-corridor.txt...\n"));
    assert!(out.contains("States created total: 4\n"));
    assert!(out.contains("Unique visited total: 3\n"));
    assert!(out.contains("Pruned by dead squares: 0\n"));
    assert!(out.ends_with(solution), "{}", out);
}

#[test]
fn run_custom_format() {
    let solution = r"
<><><><><><>
<>  P B  _<>
<><><><><><>

<><><><><><>
<>    P B_<>
<><><><><><>

RR
";

    let assert = sokoban()
        .arg("--custom")
        .arg("--heuristic")
        .arg("optimal")
        .arg("levels/custom/01-corridor-custom.txt")
        .assert()
        .success()
        .stderr("");
    let out = stdout(&assert);
    assert!(out.contains(solution), "{}", out);
}

#[test]
fn run_steps() {
    let assert = sokoban()
        .arg("--steps")
        .arg("levels/custom/02-walk-then-push.txt")
        .assert()
        .success()
        .stderr("");
    let out = stdout(&assert);
    let last_steps = "#####\n# @ #\n# $ #\n# . #\n#####\n\n#####\n#   #\n# @ #\n# * #\n#####\n\nrD\n";
    assert!(out.contains(last_steps), "{}", out);
}

#[test]
fn run_no_solution() {
    let assert = sokoban()
        .arg("levels/custom/no-solution-corner.txt")
        .assert()
        .success()
        .stderr("");
    assert!(stdout(&assert).ends_with("No solution\n"));
}

#[test]
fn run_out_of_budget() {
    let assert = sokoban()
        .arg("--max-visited")
        .arg("1")
        .arg("levels/microban/1.txt")
        .assert()
        .success()
        .stderr("");
    assert!(stdout(&assert).ends_with("Gave up after the search visited 1 states\n"));
}

#[test]
fn run_missing_file() {
    let assert = sokoban()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stdout("");
    assert!(stderr(&assert).starts_with("Can't read file levels/does-not-exist.txt"));
}

#[test]
fn run_invalid_level() {
    // custom level forced through the XSB parser
    let assert = sokoban()
        .arg("--xsb")
        .arg("levels/custom/01-corridor-custom.txt")
        .assert()
        .failure()
        .code(1);
    assert!(stderr(&assert).starts_with("Failed to parse: "));
}

#[test]
fn run_invalid_arguments() {
    sokoban()
        .arg("--heuristic")
        .arg("fastest")
        .arg("levels/custom/01-corridor.txt")
        .assert()
        .failure();
}
