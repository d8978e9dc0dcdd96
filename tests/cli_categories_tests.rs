//! End-to-end tests for `mathsheet categories` command.

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategoryItem {
    id: String,
    code: String,
    min_first: u64,
    max_first: u64,
    min_second: u64,
    max_second: u64,
}

#[derive(Debug, Deserialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

#[test]
fn test_categories_json() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["categories", "--json"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr(&output)
    );

    let response: ListCategoriesResponse =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    assert_eq!(response.count, 5);
    assert_eq!(response.categories.len(), 5);

    let units = &response.categories[0];
    assert_eq!(units.id, "units-by-units");
    assert_eq!(units.code, "ExE");
    assert_eq!(
        (units.min_first, units.max_first, units.min_second, units.max_second),
        (1, 9, 1, 9)
    );

    for item in &response.categories {
        assert!(item.min_first <= item.max_first, "{}", item.id);
        assert!(item.min_second <= item.max_second, "{}", item.id);
    }
}

#[test]
fn test_categories_table() {
    let config_dir = temp_config_dir();

    let output = run_isolated(&["categories"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("tens-by-tens"));
    assert!(text.contains("HTExHTE"));
    assert!(text.contains("100-900 x 100-900"));
}
