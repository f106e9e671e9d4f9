//! Tests for Library read operations: search, tree printing, category lookup

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use jdlib::infrastructure::traits::RealFileSystem;
use jdlib::util::testing;
use jdlib::{Library, TreeOptions};

fn mkdir(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel)).expect("create dir");
}

fn touch(root: &Path, rel: &str) {
    fs::write(root.join(rel), "").expect("write file");
}

fn open(root: &Path) -> Library {
    Library::open(root, Arc::new(RealFileSystem)).expect("open library")
}

#[fixture]
fn library_root() -> TempDir {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    mkdir(root, "00-09 System/01 Inbox");
    mkdir(root, "10-19 Reference/11 Recipes/11.01 Pasta");
    mkdir(root, "10-19 Reference/11 Recipes/11.02 Soup");
    mkdir(root, "10-19 Reference/12 Travel/12.01 Japan");

    touch(root, "10-19 Reference/11 Recipes/11.01 Pasta/carbonara.md");
    touch(root, "10-19 Reference/11 Recipes/11.01 Pasta/bolognese.md");
    touch(root, "10-19 Reference/11 Recipes/11.02 Soup/tomato.md");
    touch(root, "10-19 Reference/11 Recipes/11.02 Soup/.DS_Store");
    touch(root, "10-19 Reference/12 Travel/12.01 Japan/itinerary.md");
    temp
}

// ============================================================
// search
// ============================================================

#[rstest]
#[case::plain("pasta", false, "[11.01] Pasta")]
#[case::upper_case("PASTA", false, "[11.01] Pasta")]
#[case::with_category("pasta", true, "[11] Recipes -> [11.01] Pasta")]
#[case::category_match("recipes", false, "[11] Recipes")]
#[case::code_match("12", false, "[12] Travel\n[12.01] Japan")]
fn given_term_when_searching_then_matches_in_tree_order(
    library_root: TempDir,
    #[case] term: &str,
    #[case] include_category: bool,
    #[case] expected: &str,
) {
    let library = open(library_root.path());
    assert_eq!(library.search(term, include_category, false), expected);
}

#[rstest]
fn given_include_files_when_searching_then_files_listed(library_root: TempDir) {
    let library = open(library_root.path());

    let result = library.search("md", false, true);

    assert_eq!(
        result,
        "[11.01] bolognese.md\n[11.01] carbonara.md\n[11.02] tomato.md\n[12.01] itinerary.md"
    );
}

#[rstest]
fn given_file_match_without_include_files_when_searching_then_no_results(library_root: TempDir) {
    let library = open(library_root.path());

    assert!(library.search_lines("carbonara", true, false).is_empty());
    assert_eq!(
        library.search("carbonara", true, false),
        "No results found for carbonara"
    );
}

#[rstest]
fn given_hidden_file_when_searching_files_then_never_matched(library_root: TempDir) {
    let library = open(library_root.path());
    assert_eq!(
        library.search("ds_store", false, true),
        "No results found for ds_store"
    );
}

#[rstest]
fn given_category_and_identifier_match_when_searching_then_both_listed(library_root: TempDir) {
    let library = open(library_root.path());

    let lines = library.search_lines("soup", true, false);
    assert_eq!(lines, vec!["[11] Recipes -> [11.02] Soup"]);

    let lines = library.search_lines("e", false, false);
    assert_eq!(
        lines,
        vec!["[11] Recipes", "[12] Travel"],
        "identifier names Pasta, Soup, Japan contain no 'e'"
    );
}

// ============================================================
// print_tree
// ============================================================

#[rstest]
fn given_default_options_when_printing_tree_then_four_space_indent(library_root: TempDir) {
    let library = open(library_root.path());

    let tree = library.print_tree(&TreeOptions::default());

    assert_eq!(
        tree,
        "[00-09] System\n\
         \x20   [01] Inbox\n\
         [10-19] Reference\n\
         \x20   [11] Recipes\n\
         \x20       [11.01] Pasta\n\
         \x20       [11.02] Soup\n\
         \x20   [12] Travel\n\
         \x20       [12.01] Japan\n"
    );
}

#[rstest]
fn given_tabs_and_files_when_printing_tree_then_files_at_depth_three(library_root: TempDir) {
    let library = open(library_root.path());
    let options = TreeOptions {
        indent_width: 4,
        use_tabs: true,
        print_files: true,
    };

    let tree = library.print_tree(&options);

    let lines: Vec<_> = tree.lines().collect();
    assert!(lines.contains(&"\t[11] Recipes"));
    assert!(lines.contains(&"\t\t[11.01] Pasta"));
    assert!(lines.contains(&"\t\t\t[11.01] bolognese.md"));
    assert!(!tree.contains(".DS_Store"));
    assert_eq!(lines.len(), 12);
}

#[rstest]
fn given_indent_width_two_when_printing_tree_then_two_spaces(library_root: TempDir) {
    let library = open(library_root.path());
    let options = TreeOptions {
        indent_width: 2,
        ..TreeOptions::default()
    };

    let tree = library.print_tree(&options);

    assert!(tree.contains("\n  [01] Inbox\n"));
    assert!(tree.contains("\n    [11.01] Pasta\n"));
}

#[rstest]
fn given_library_when_fancy_tree_then_contains_every_node(library_root: TempDir) {
    let library = open(library_root.path());

    let rendered = library.fancy_tree(true).to_string();

    assert!(rendered.contains("[10-19] Reference"));
    assert!(rendered.contains("[12.01] Japan"));
    assert!(rendered.contains("itinerary.md"));
    assert!(!library.fancy_tree(false).to_string().contains("itinerary.md"));
}

// ============================================================
// get_category
// ============================================================

#[test]
fn given_reference_example_when_getting_category_then_exact_format() {
    // Arrange
    let temp = TempDir::new().unwrap();
    mkdir(temp.path(), "10-19 Reference/11 Recipes/11.01 Pasta");

    // Act
    let library = open(temp.path());

    // Assert
    assert_eq!(library.get_category("11"), "[11] Recipes\n    [11.01] Pasta");
    let category = library.find_category("11").unwrap();
    assert_eq!(category.code, "11");
    assert_eq!(library.areas()[0].range, "10-19");
}

#[rstest]
fn given_empty_category_when_getting_category_then_only_header(library_root: TempDir) {
    let library = open(library_root.path());
    assert_eq!(library.get_category("01"), "[01] Inbox");
}

#[rstest]
fn given_unknown_code_when_getting_category_then_not_found(library_root: TempDir) {
    let library = open(library_root.path());
    assert_eq!(library.get_category("99"), "No category found for 99");
}

// ============================================================
// flattened views
// ============================================================

#[rstest]
fn given_library_when_flattening_then_traversal_order(library_root: TempDir) {
    let library = open(library_root.path());

    let categories: Vec<_> = library.categories().map(|c| c.code.as_str()).collect();
    assert_eq!(categories, vec!["01", "11", "12"]);

    let identifiers: Vec<_> = library.identifiers().map(|i| i.full_id()).collect();
    assert_eq!(identifiers, vec!["11.01", "11.02", "12.01"]);

    assert_eq!(library.files().count(), 4);
    assert_eq!(library.root(), library_root.path());
}

#[rstest]
fn given_conforming_library_when_validating_then_clean(library_root: TempDir) {
    let library = open(library_root.path());
    assert!(library.validate().is_empty());
}

#[rstest]
fn given_misplaced_category_when_validating_then_reported(library_root: TempDir) {
    mkdir(library_root.path(), "00-09 System/15 Misfiled");
    let library = open(library_root.path());

    let violations = library.validate();

    assert_eq!(violations.len(), 1);
    assert!(violations[0].path.ends_with("15 Misfiled"));
}
