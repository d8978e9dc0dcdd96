//! End-to-end tests for `mathsheet generate` command.

use mathsheet::config::Config;
use mathsheet::models::Category;
use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_text_default() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["generate", "--seed", "1"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generate should succeed. stderr: {}",
        stderr(&output)
    );

    let text = stdout(&output);
    assert!(text.starts_with("Tens x tens (TExTE) - 10 exercises"));
    assert!(text.contains("Seed: 1"));
    assert!(text.contains("10. "));
    assert!(text.contains('┌'), "Should contain top-left corner");
    assert!(text.contains('╞'), "Should contain the product rule");
    assert!(text.contains("│ H  │ T  │ E  │"));
}

#[test]
fn test_generate_json_respects_bounds() {
    let config_dir = temp_config_dir();

    let output = run_isolated(
        &[
            "generate",
            "--category",
            "HTExTE",
            "--count",
            "25",
            "--format",
            "json",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json = stdout_json(&output);
    assert_eq!(json["category"], "hundreds-by-tens");
    assert_eq!(json["range"]["min_first"], 100);
    assert_eq!(json["range"]["max_second"], 90);

    let exercises = json["exercises"].as_array().expect("Should have exercises");
    assert_eq!(exercises.len(), 25);
    for sheet in exercises {
        let first = sheet["exercise"]["first_multiplier"].as_u64().unwrap();
        let second = sheet["exercise"]["second_multiplier"].as_u64().unwrap();
        assert!((100..=900).contains(&first));
        assert!((10..=90).contains(&second));
        assert_eq!(sheet["product"].as_u64().unwrap(), first * second);
        assert_eq!(sheet["steps"].as_array().unwrap().len(), 2);
    }
}

#[test]
fn test_generate_same_seed_same_output() {
    let config_dir = temp_config_dir();
    let args = ["generate", "--seed", "77", "--format", "json"];

    let first = run_isolated(&args, config_dir.path());
    let second = run_isolated(&args, config_dir.path());

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_generate_blank_has_no_answers() {
    let config_dir = temp_config_dir();

    let output = run_isolated(
        &["generate", "--blank", "--format", "json", "--count", "5"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["show_solution"], false);
    for sheet in json["exercises"].as_array().unwrap() {
        let cells = sheet["product_row"]["cells"].as_array().unwrap();
        assert!(cells.iter().all(serde_json::Value::is_null));
    }
}

#[test]
fn test_generate_uses_config_defaults() {
    let mut config = Config::new();
    config.worksheet.category = Category::UnitsByUnits;
    config.worksheet.count = 3;
    config.worksheet.show_solution = false;
    let config_dir = temp_config_with(&config);

    let output = run_isolated(&["generate", "--format", "json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json = stdout_json(&output);
    assert_eq!(json["category"], "units-by-units");
    assert_eq!(json["exercises"].as_array().unwrap().len(), 3);
    assert_eq!(json["show_solution"], false);
}

#[test]
fn test_generate_solutions_flag_overrides_config() {
    let mut config = Config::new();
    config.worksheet.show_solution = false;
    let config_dir = temp_config_with(&config);

    let output = run_isolated(
        &["generate", "--solutions", "--format", "json", "--count", "2"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["show_solution"], true);
}

#[test]
fn test_generate_markdown_to_file() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("sheet.md");

    let output = run_isolated(
        &[
            "generate",
            "--format",
            "markdown",
            "--count",
            "4",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty(), "Nothing should go to stdout");

    let content = fs::read_to_string(&out_path).expect("Failed to read export file");
    assert!(content.contains("# Multiplication Worksheet"));
    assert!(content.contains("## Exercise 4: "));
    assert_eq!(content.matches("```text").count(), 4);
}

#[test]
fn test_generate_html() {
    let config_dir = temp_config_dir();

    let output = run_isolated(
        &["generate", "--format", "html", "--count", "2", "-c", "ExE"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));

    let html = stdout(&output);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<section class=\"card\"").count(), 2);
    assert!(html.contains("value=\"units-by-units\" checked"));
}

#[test]
fn test_generate_invalid_category() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["generate", "--category", "unknown"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid category should exit with code 1"
    );
    assert!(stderr(&output).contains("Invalid category"));
    assert!(stderr(&output).contains("mathsheet categories"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_generate_count_above_max() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["generate", "--count", "1000"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("at most 200"));
    assert!(!stderr(&output).contains("mathsheet categories"));
}

#[test]
fn test_generate_unreadable_config() {
    let config_dir = temp_config_dir();
    fs::create_dir(config_dir.path().join("config.toml")).unwrap();

    let output = run_isolated(&["generate"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_generate_zero_count() {
    let config_dir = temp_config_dir();

    let output = run_isolated(
        &["generate", "--count", "0", "--format", "json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_json(&output)["exercises"]
        .as_array()
        .unwrap()
        .is_empty());
}
