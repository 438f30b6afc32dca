use pushkind_forms::blocks::PagerError;
use pushkind_forms::blocks::pager::{PageType, Pager};
use pushkind_forms::domain::item::NewItem;
use pushkind_forms::domain::sort::SortOrder;
use pushkind_forms::models::item::Item;
use pushkind_forms::repository::DieselItemRepository;
use pushkind_forms::resource::Resource;
use pushkind_forms::resource::errors::ResourceError;

mod common;

fn seeded(name: &str, count: usize) -> (common::TestDb, DieselItemRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselItemRepository::new(test_db.pool().clone());
    let items: Vec<NewItem> = (1..=count)
        .map(|i| NewItem::new(format!("Item {i:03}")))
        .collect();
    if !items.is_empty() {
        assert_eq!(repo.create(&items).unwrap(), count);
    }
    (test_db, repo)
}

#[test]
fn test_counts_and_loads_window() {
    let (_db, repo) = seeded("test_counts_and_loads_window.db", 12);
    let mut resource = repo.listing();

    resource.add_limit(5, 5);
    resource.calculate_found_rows().unwrap();
    assert_eq!(resource.total_rows(), 12);

    let rows = resource.load::<Item>().unwrap();
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
}

#[test]
fn test_orders_by_allowed_column() {
    let (_db, repo) = seeded("test_orders_by_allowed_column.db", 4);
    let mut resource = repo.listing();

    resource.add_order("name", SortOrder::Desc).unwrap();
    resource.add_limit(0, 2);

    let names: Vec<String> = resource
        .load::<Item>()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Item 004", "Item 003"]);
}

#[test]
fn test_rejects_unknown_sort_column() {
    let (_db, repo) = seeded("test_rejects_unknown_sort_column.db", 1);
    let mut resource = repo.listing();

    let err = resource
        .add_order("name; DROP TABLE items", SortOrder::Asc)
        .unwrap_err();
    assert!(matches!(err, ResourceError::InvalidSortColumn(_)));
    assert!(resource.order().is_none());
}

#[test]
fn test_pager_over_sql_resource() {
    let (_db, repo) = seeded("test_pager_over_sql_resource.db", 100);

    let mut pager = Pager::new();
    pager
        .set_limit(25)
        .unwrap()
        .set_pager_url("/")
        .set_resource(repo.listing());
    pager.load(&[("p", "4")]).unwrap();

    assert_eq!(pager.total_rows(), 100);
    assert_eq!(pager.total_pages(), 4);
    assert_eq!(pager.next_page(&[("p", "4")]).unwrap(), None);
    assert_eq!(
        pager.previous_page(&[("p", "4")]).unwrap().as_deref(),
        Some("/?p=3")
    );

    let rows = pager.resource().unwrap().load::<Item>().unwrap();
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0].id, 76);

    let pages = pager.pages(&[("p", "4")]).unwrap();
    assert_eq!(pages[&4].kind, PageType::Current);
    assert_eq!(pages[&1].kind, PageType::First);
}

#[test]
fn test_empty_table_has_single_page() {
    let (_db, repo) = seeded("test_empty_table_has_single_page.db", 0);

    let mut pager = Pager::new();
    pager.set_resource(repo.listing());
    pager.load(&[("p", "1")]).unwrap();

    assert_eq!(pager.total_pages(), 0);
    assert_eq!(pager.pages(&[("p", "1")]).unwrap().len(), 1);
    assert!(pager.resource().unwrap().load::<Item>().unwrap().is_empty());
}

#[test]
fn test_pager_surfaces_invalid_sort_column() {
    let (_db, repo) = seeded("test_pager_surfaces_invalid_sort_column.db", 3);

    let mut pager = Pager::new();
    pager.set_sort("password").set_resource(repo.listing());

    assert!(matches!(
        pager.load(&[("p", "1")]),
        Err(PagerError::Resource(ResourceError::InvalidSortColumn(_)))
    ));
}
