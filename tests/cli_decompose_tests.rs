//! End-to-end tests for `mathsheet decompose` command.

mod fixtures;
use fixtures::*;

#[test]
fn test_decompose_json_23_by_14() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["decompose", "23", "14", "--json"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Decompose should succeed. stderr: {}",
        stderr(&output)
    );

    let json = stdout_json(&output);
    assert_eq!(json["product"], 322);

    let steps = json["steps"].as_array().expect("Should have steps");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["value"], 92);
    assert_eq!(steps[1]["value"], 230);
    assert_eq!(steps[1]["digit_position"], 1);
}

#[test]
fn test_decompose_json_placeholder() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["decompose", "7", "105", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["display"], "35");
    assert_eq!(steps[1]["display"], "0");
    assert_eq!(steps[1]["placeholder"], true);
    assert_eq!(steps[1]["value"], 0);
    assert_eq!(steps[2]["display"], "700");

    let total: u64 = steps.iter().map(|s| s["value"].as_u64().unwrap()).sum();
    assert_eq!(total, 735);
}

#[test]
fn test_decompose_human_readable_with_grid() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["decompose", "456", "20", "--grid"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.starts_with("456 x 20 = 9120"));
    assert!(text.contains("step 1:  000"));
    assert!(text.contains("step 2: 9120"));
    assert!(text.contains('╞'), "Grid should be drawn");
}

#[test]
fn test_decompose_overflow() {
    let config_dir = temp_config_dir();

    let output = run_isolated(
        &["decompose", "18446744073709551615", "2"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("overflows"));
}

#[test]
fn test_decompose_rejects_non_numbers() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["decompose", "twelve", "3"], config_dir.path());

    // clap usage errors exit with code 2
    assert_eq!(output.status.code(), Some(2));
}
