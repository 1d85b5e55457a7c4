use super::*;
use crate::catalog::model::{Catalog, Category, ProjectRecord, Status};

fn record(id: &str, category: Category) -> ProjectRecord {
    ProjectRecord {
        id: id.to_owned(),
        title: format!("Project {id}"),
        description: "A project.".to_owned(),
        technologies: vec![],
        date: "2025-01".to_owned(),
        status: Status::Completed,
        category,
        github_url: None,
        live_url: None,
        highlights: vec![],
    }
}

fn mixed_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("w1", Category::Web),
        record("p1", Category::Plugin),
        record("t1", Category::Tool),
        record("p2", Category::Plugin),
        record("w2", Category::Web),
    ])
    .unwrap()
}

#[test]
fn all_is_the_identity_projection() {
    let catalog = mixed_catalog();
    let view = filter(&catalog, FilterSelection::All);
    assert_eq!(view.len(), catalog.len());
    for (projected, original) in view.iter().zip(catalog.records()) {
        assert!(std::ptr::eq(*projected, original));
    }
}

#[test]
fn category_selection_is_pure_and_order_preserving() {
    let catalog = mixed_catalog();
    let view = filter(&catalog, FilterSelection::Only(Category::Plugin));
    let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert!(view.iter().all(|r| r.category == Category::Plugin));
}

#[test]
fn zero_match_selection_yields_empty_view() {
    let catalog = mixed_catalog();
    assert!(filter(&catalog, FilterSelection::Only(Category::Game)).is_empty());
}

#[test]
fn filter_is_idempotent() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::Only(Category::Web);
    let first: Vec<&str> = filter(&catalog, selection).iter().map(|r| r.id.as_str()).collect();
    let second: Vec<&str> = filter(&catalog, selection).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(first, second);
}

#[test]
fn count_ignores_selection() {
    let catalog = mixed_catalog();
    assert_eq!(count(&catalog), 5);
    assert_eq!(category_count(&catalog, Category::Web), 2);
    assert_eq!(category_count(&catalog, Category::Plugin), 2);
    assert_eq!(category_count(&catalog, Category::Tool), 1);
    assert_eq!(category_count(&catalog, Category::Game), 0);
}

#[test]
fn filter_bar_order_and_labels() {
    let labels: Vec<&str> = FilterSelection::BAR.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["All", "Web", "Plugin", "Tool", "Game"]);
    assert_eq!(FilterSelection::default(), FilterSelection::All);
}
