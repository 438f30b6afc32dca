use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use pushkind_forms::domain::item::NewItem;
use pushkind_forms::models::config::ServerConfig;
use pushkind_forms::repository::DieselItemRepository;
use pushkind_forms::routes::items::{add_item, show_items};
use tera::Tera;

mod common;

fn server_config(page_size: usize) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        templates_dir: "templates/**/*".to_string(),
        page_size,
        page_parameter: "p".to_string(),
    }
}

macro_rules! listing_app {
    ($repo:expr, $page_size:expr) => {
        test::init_service(
            App::new()
                .service(show_items)
                .service(add_item)
                .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(server_config($page_size))),
        )
        .await
    };
}

fn seeded(name: &str, count: usize) -> (common::TestDb, DieselItemRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselItemRepository::new(test_db.pool().clone());
    let items: Vec<NewItem> = (1..=count)
        .map(|i| NewItem::new(format!("Row {i}")))
        .collect();
    if !items.is_empty() {
        repo.create(&items).unwrap();
    }
    (test_db, repo)
}

#[actix_web::test]
async fn test_renders_requested_page_with_links() {
    let (_db, repo) = seeded("renders_requested_page_with_links.db", 7);
    let app = listing_app!(repo, 3);

    let req = test::TestRequest::get().uri("/?p=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Row 4"));
    assert!(body.contains("Row 6"));
    assert!(!body.contains("Row 7<"));
    assert!(body.contains("href=\"/?p=3\""));
    assert!(body.contains("href=\"/?p=1\""));
    assert!(body.contains("Add item"));
}

#[actix_web::test]
async fn test_sort_is_kept_in_page_links() {
    let (_db, repo) = seeded("sort_is_kept_in_page_links.db", 5);
    let app = listing_app!(repo, 2);

    let req = test::TestRequest::get()
        .uri("/?sort=name&order=DESC")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("sort=name&order=DESC&p=2"));
    assert!(body.contains("Row 5"));
}

#[actix_web::test]
async fn test_bad_page_and_sort_are_client_errors() {
    let (_db, repo) = seeded("bad_page_and_sort_are_client_errors.db", 1);
    let app = listing_app!(repo, 25);

    for uri in ["/?p=abc", "/?order=sideways", "/?sort=secret"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn test_add_item_redirects_to_listing() {
    let (_db, repo) = seeded("add_item_redirects_to_listing.db", 0);
    let app = listing_app!(repo, 25);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_form([("name", "Fresh")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8(body.to_vec()).unwrap().contains("Fresh"));
}

#[actix_web::test]
async fn test_blank_item_name_is_rejected() {
    let (_db, repo) = seeded("blank_item_name_is_rejected.db", 0);
    let app = listing_app!(repo, 25);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_form([("name", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
