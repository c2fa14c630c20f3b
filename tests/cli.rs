use assert_cmd::Command;
use predicates::prelude::*;

mod common;

fn marquee() -> Command {
    let mut cmd = Command::cargo_bin("marquee").unwrap();
    for var in [
        "MARQUEE_BOARD",
        "MARQUEE_COLUMNS",
        "MARQUEE_ROWS",
        "MARQUEE_LED_SIZE",
        "MARQUEE_PITCH_H",
        "MARQUEE_PITCH_V",
        "MARQUEE_STYLE",
        "MARQUEE_SCALE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn runs() {
    marquee()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'marquee --help'"));
}

#[test]
fn outputs_tool_name() {
    marquee()
        .arg("-V")
        .assert()
        .success()
        .stdout("marquee 0.1.0\n");
}

// Render subcommand tests

#[test]
fn render_matching_image_to_stdout() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    let output = marquee()
        .arg("render")
        .arg(&image)
        .args(["--columns", "2", "--rows", "1"])
        .output()
        .expect("run marquee");
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<tr>").count(), 1);
    assert_eq!(html.matches("<td ").count(), 2);
    assert_eq!(common::colors_in_order(&html), vec!["#ff0000", "#00ff00"]);
    assert!(html.contains("width: 5px; height: 5px;"));
}

#[test]
fn render_mismatch_writes_placeholder() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("render")
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid image: image is 2x1 pixels but the board has 128x32 LEDs",
        ))
        .stdout(predicate::str::contains("<table").not())
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn render_mismatch_strict_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("render")
        .arg(&image)
        .args(["--columns", "3", "--rows", "3", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid image"))
        .stderr(predicate::str::contains(
            "Error: image is 2x1 pixels but the board has 3x3 LEDs",
        ));
}

#[test]
fn render_to_output_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());
    let out = temp.path().join("preview.html");

    marquee()
        .arg("render")
        .arg(&image)
        .args(["--columns", "2", "--rows", "1", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&out).expect("read preview");
    assert_eq!(common::colors_in_order(&html), vec!["#ff0000", "#00ff00"]);
}

#[test]
fn render_with_json_board_profile() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("render")
        .arg(&image)
        .args(["--board", "tests/fixtures/small_board.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width: 4px; height: 6px;"))
        .stdout(predicate::str::contains("margin: 2px 1px; width: 2px; height: 2px;"))
        .stdout(predicate::str::contains("border-radius: 50%"));
}

#[test]
fn render_with_yaml_board_profile_and_override() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("render")
        .arg(&image)
        .args(["--board", "tests/fixtures/small_board.yaml", "--style", "round"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width: 12px; height: 18px;"))
        .stdout(predicate::str::contains("border-radius: 50%"));
}

#[test]
fn render_reads_board_from_environment() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .env("MARQUEE_COLUMNS", "2")
        .env("MARQUEE_ROWS", "1")
        .arg("render")
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("#00ff00"));
}

#[test]
fn render_invalid_geometry_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("render")
        .arg(&image)
        .args(["--board", "tests/fixtures/overlapping_board.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid LED geometry"));
}

#[test]
fn render_nonexistent_image_fails() {
    marquee()
        .args(["render", "nonexistent_image.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode image"));
}

// Geometry subcommand tests

#[test]
fn geometry_reference_board_text() {
    marquee()
        .arg("geometry")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unit = 0.75"))
        .stdout(predicate::str::contains("Cell:            5 x 5 units"));
}

#[test]
fn geometry_json_output_format() {
    marquee()
        .args(["geometry", "--pitch-v", "6", "--led-size", "2", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outer_width\": 4"))
        .stdout(predicate::str::contains("\"outer_height\": 6"));
}

#[test]
fn geometry_rejects_pitch_below_led_size() {
    marquee()
        .args(["geometry", "--led-size", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is smaller than the LED size"));
}

#[test]
fn geometry_unsupported_format_fails() {
    marquee()
        .args(["geometry", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

// Inspect subcommand tests

#[test]
fn inspect_matching_image() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("inspect")
        .arg(&image)
        .args(["--columns", "2", "--rows", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pixels: 2x1"))
        .stdout(predicate::str::contains("Image matches the board"));
}

#[test]
fn inspect_mismatched_image_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = common::write_red_green_strip(temp.path());

    marquee()
        .arg("inspect")
        .arg(&image)
        .args(["--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"matches\": false"))
        .stdout(predicate::str::contains("\"columns\": 128"));
}
