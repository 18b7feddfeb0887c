#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, missing_debug_implementations, unreachable_pub)]
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_root_banner() {
    let app = common::TestApp::spawn().await;
    let body = app.get_json("/").await;
    assert_eq!(body["message"], "Pataky Technikum API");
}

#[tokio::test]
async fn test_root_banner_without_trailing_slash() {
    let app = common::TestApp::spawn().await;
    let body = app.get_json("").await;
    assert_eq!(body["message"], "Pataky Technikum API");
}

#[tokio::test]
async fn test_school_info_and_contact() {
    let app = common::TestApp::spawn().await;

    let info = app.get_json("/school-info").await;
    assert_eq!(info["short_name"], "Pataky Technikum");
    assert_eq!(info["founded"], "1952");

    let contact = app.get_json("/contact").await;
    assert_eq!(contact["email"], "pataky@pataky.hu");
    assert!(contact["social_links"]["instagram"].as_str().unwrap().contains("instagram.com"));
}

#[tokio::test]
async fn test_news_list_and_lookup() {
    let app = common::TestApp::spawn().await;

    let news = app.get_json("/news").await;
    assert_eq!(news.as_array().unwrap().len(), 5);
    assert!(news[0]["image_url"].is_null());

    let article = app.get_json("/news/2").await;
    assert_eq!(article["category"], "Felnőttoktatás");
}

#[tokio::test]
async fn test_unknown_ids_return_null() {
    let app = common::TestApp::spawn().await;

    assert!(app.get_json("/news/999").await.is_null());
    assert!(app.get_json("/gallery/999").await.is_null());
    assert!(app.get_json("/campus/999").await.is_null());
}

#[tokio::test]
async fn test_courses_by_type() {
    let app = common::TestApp::spawn().await;

    let all = app.get_json("/courses").await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let adult = app.get_json("/courses/felnott").await;
    let adult = adult.as_array().unwrap();
    assert_eq!(adult.len(), 1);
    assert_eq!(adult[0]["type"], "felnott");

    assert_eq!(app.get_json("/courses/ismeretlen").await, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_static_lists() {
    let app = common::TestApp::spawn().await;

    assert_eq!(app.get_json("/staff").await.as_array().unwrap().len(), 5);
    assert_eq!(app.get_json("/events").await.as_array().unwrap().len(), 5);
    assert_eq!(app.get_json("/quick-links").await.as_array().unwrap().len(), 4);
    assert_eq!(app.get_json("/teachers").await.as_array().unwrap().len(), 12);
    assert_eq!(app.get_json("/gallery").await.as_array().unwrap().len(), 4);
    assert_eq!(app.get_json("/campus").await.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_teacher_search() {
    let app = common::TestApp::spawn().await;

    let hits = app.get_json("/teachers/search?q=ANGOL").await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Kiss Andrea");

    let all = app.get_json("/teachers/search").await;
    assert_eq!(all.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_menu_is_in_table_order() {
    let app = common::TestApp::spawn().await;

    let menu = app.get_json("/menu").await;
    let days: Vec<&str> = menu.as_array().unwrap().iter().map(|d| d["day"].as_str().unwrap()).collect();
    assert_eq!(days, vec!["Hétfő", "Kedd", "Szerda", "Csütörtök", "Péntek"]);

    assert_eq!(menu[0]["date"], "2025-02-10");
    assert_eq!(menu[0]["soup"]["allergens"][0], "glutén");
    assert!(menu[2]["dessert"]["allergens"].is_null());
}

#[tokio::test]
async fn test_album_and_building_lookup() {
    let app = common::TestApp::spawn().await;

    let album = app.get_json("/gallery/4").await;
    assert_eq!(album["image_count"], 3);
    assert_eq!(album["images"].as_array().unwrap().len(), 3);

    let building = app.get_json("/campus/2").await;
    assert_eq!(building["code"], "B");
    assert_eq!(building["rooms"][0]["type"], "facility");
}

#[tokio::test]
async fn test_room_search() {
    let app = common::TestApp::spawn().await;

    let hits = app.get_json("/rooms/search?q=labor").await;
    let hits = hits.as_array().unwrap();
    assert!(!hits.is_empty());
    for hit in hits {
        assert!(hit["room"]["name"].as_str().unwrap().to_lowercase().contains("labor"));
        assert!(hit["building"].is_string());
        assert_eq!(hit["building_code"], hit["room"]["building"]);
    }

    let by_id = app.get_json("/rooms/search?q=s-004").await;
    assert_eq!(by_id[0]["room"]["name"], "Konditerem");
    assert_eq!(by_id[0]["building"], "Sportlétesítmény");

    assert_eq!(app.get_json("/rooms/search").await, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(app.api("/news")).header("origin", "https://app.example").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(app.api("/")).send().await.unwrap();
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = app.client.get(app.api("/")).header("x-request-id", "trace-me").send().await.unwrap();
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-me");
}
