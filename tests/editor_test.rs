//! HTML editor flow over the in-memory gateway.

use std::sync::Arc;

use actix_web::test;
use uuid::Uuid;

use decks::gateway::{Gateway, MemoryGateway};
use decks::models::{BlockKind, ContentBlock};

#[macro_use]
mod common;
use common::{Browser, body_string, current_slide_id, location};

#[actix_rt::test]
async fn test_root_redirects_to_list() {
    let app = test::init_service(common::app(Arc::new(MemoryGateway::new()))).await;
    let mut browser = Browser::default();

    let resp = send!(app, browser, browser.get("/"));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/presentations");

    let html = page!(app, browser, "/presentations");
    assert!(html.contains("No presentations yet"));
}

#[actix_rt::test]
async fn test_create_presentation_opens_empty_editor() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();

    let (id, _) = new_deck!(app, browser);
    let stored = gw.get_presentation(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Untitled Presentation");
    assert_eq!(stored.theme, "navy");

    let html = page!(app, browser, &format!("/presentations/{id}"));
    assert!(html.contains("Untitled Presentation"));
    assert!(html.contains("This presentation has no slides yet"));
    assert!(html.contains("Add a slide first"));

    let list = page!(app, browser, "/presentations");
    assert!(list.contains(&format!("/presentations/{id}")));
}

#[actix_rt::test]
async fn test_add_slides_and_blocks() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    let csrf = [("csrf_token", token.as_str())];

    let resp = send!(app, browser, browser.post_form(&format!("/presentations/{id}/slides"), &csrf));
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    let resp = send!(app, browser, browser.post_form(&format!("/presentations/{id}/slides"), &csrf));
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=1"));

    let html = page!(app, browser, &format!("/presentations/{id}?slide=1"));
    assert!(html.contains("2 slides"));
    assert!(html.contains("Slide 2"));
    let slide_id = current_slide_id(&html);
    let blocks = format!("/presentations/{id}/slides/{slide_id}/blocks");

    let resp = send!(
        app,
        browser,
        browser.post_form(&blocks, &[("csrf_token", token.as_str()), ("kind", "heading")])
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=1&editing=0"));
    send!(
        app,
        browser,
        browser.post_form(&blocks, &[("csrf_token", token.as_str()), ("kind", "bullet")])
    );

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("{blocks}/1"),
            &[("csrf_token", token.as_str()), ("value", "Buy milk")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=1"));

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("{blocks}/1/move"),
            &[("csrf_token", token.as_str()), ("direction", "up")]
        )
    );
    assert_eq!(resp.status(), 303);

    let slides = gw.list_slides(id).await.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(
        slides[1].content,
        vec![
            ContentBlock::with_value(BlockKind::Bullet, "Buy milk"),
            ContentBlock::new(BlockKind::Heading),
        ]
    );

    let html = page!(app, browser, &format!("/presentations/{id}?slide=1"));
    assert!(html.contains("Buy milk"));
    assert!(html.contains("\u{2022} Buy milk"));
}

#[actix_rt::test]
async fn test_edit_delete_and_focus() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    let csrf = [("csrf_token", token.as_str())];

    send!(app, browser, browser.post_form(&format!("/presentations/{id}/slides"), &csrf));
    let html = page!(app, browser, &format!("/presentations/{id}"));
    let slide_id = current_slide_id(&html);
    let blocks = format!("/presentations/{id}/slides/{slide_id}/blocks");
    for kind in ["text", "code", "image"] {
        send!(app, browser, browser.post_form(&blocks, &[("csrf_token", token.as_str()), ("kind", kind)]));
    }

    let html = page!(app, browser, &format!("/presentations/{id}?slide=0&editing=2"));
    assert!(html.contains("placeholder=\"Image URL\""));

    let resp = send!(app, browser, browser.post_form(&format!("{blocks}/0/delete?editing=2"), &csrf));
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0&editing=1"));

    let resp = send!(app, browser, browser.post_form(&format!("{blocks}/1/delete?editing=1"), &csrf));
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));

    let slides = gw.list_slides(id).await.unwrap();
    assert_eq!(slides[0].content, vec![ContentBlock::new(BlockKind::Code)]);

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}/slides/{slide_id}"),
            &[("csrf_token", token.as_str()), ("title", "  Intro  "), ("notes", "Smile")]
        )
    );
    assert_eq!(resp.status(), 303);
    let slides = gw.list_slides(id).await.unwrap();
    assert_eq!(slides[0].title, "Intro");
    assert_eq!(slides[0].notes.as_deref(), Some("Smile"));
}

#[actix_rt::test]
async fn test_delete_slide_renumbers() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    let csrf = [("csrf_token", token.as_str())];
    for _ in 0..3 {
        send!(app, browser, browser.post_form(&format!("/presentations/{id}/slides"), &csrf));
    }

    let html = page!(app, browser, &format!("/presentations/{id}?slide=1"));
    let middle = current_slide_id(&html);
    let resp = send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides/{middle}/delete?slide=1"), &csrf)
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=1"));

    let slides = gw.list_slides(id).await.unwrap();
    let order: Vec<(i32, &str)> = slides.iter().map(|s| (s.order_index, s.title.as_str())).collect();
    assert_eq!(order, [(0, "Slide 1"), (1, "Slide 3")]);

    let html = page!(app, browser, &format!("/presentations/{id}?slide=1"));
    assert!(html.contains("Slide deleted."));
}

#[actix_rt::test]
async fn test_delete_from_sidebar_keeps_selection() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    let csrf = [("csrf_token", token.as_str())];
    for _ in 0..3 {
        send!(app, browser, browser.post_form(&format!("/presentations/{id}/slides"), &csrf));
    }
    let slides = gw.list_slides(id).await.unwrap();
    let (first, last) = (slides[0].id, slides[2].id);

    let html = page!(app, browser, &format!("/presentations/{id}?slide=1"));
    let action = format!("/presentations/{id}/slides/{first}/delete?slide=1");
    assert!(html.contains(&format!("action=\"{action}\"")));
    assert_eq!(current_slide_id(&html), slides[1].id);

    let resp = send!(app, browser, browser.post_form(&action, &csrf));
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=1"));
    let titles: Vec<String> = gw.list_slides(id).await.unwrap().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Slide 2", "Slide 3"]);

    let resp = send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides/{last}/delete?slide=1"), &csrf)
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    assert_eq!(gw.list_slides(id).await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_empty_title_is_saved() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}?slide=0"),
            &[("csrf_token", token.as_str()), ("title", "  "), ("description", "")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    assert_eq!(gw.get_presentation(id).await.unwrap().unwrap().title, "");
}

#[actix_rt::test]
async fn test_settings_and_theme() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);

    let html = page!(app, browser, &format!("/presentations/{id}?settings=true"));
    assert!(html.contains("Presentation settings"));

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}?slide=0"),
            &[("csrf_token", token.as_str()), ("title", "Quarterly Review"), ("description", "Q3")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}/theme?slide=0"),
            &[("csrf_token", token.as_str()), ("theme", "dark")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0&settings=true"));

    let stored = gw.get_presentation(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Quarterly Review");
    assert_eq!(stored.description.as_deref(), Some("Q3"));
    assert_eq!(stored.theme, "dark");

    send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}/theme"),
            &[("csrf_token", token.as_str()), ("theme", "sepia")]
        )
    );
    let html = page!(app, browser, &format!("/presentations/{id}"));
    assert!(html.contains("Unknown theme"));
    assert_eq!(gw.get_presentation(id).await.unwrap().unwrap().theme, "dark");
}

#[actix_rt::test]
async fn test_unknown_block_kind_is_rejected() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides"), &[("csrf_token", token.as_str())])
    );
    let slide_id = gw.list_slides(id).await.unwrap()[0].id;

    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}/slides/{slide_id}/blocks"),
            &[("csrf_token", token.as_str()), ("kind", "video")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    let html = page!(app, browser, &format!("/presentations/{id}"));
    assert!(html.contains("unknown block type"));
    assert!(gw.list_slides(id).await.unwrap()[0].content.is_empty());
}

#[actix_rt::test]
async fn test_failed_save_flashes_and_keeps_data() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, token) = new_deck!(app, browser);
    send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides"), &[("csrf_token", token.as_str())])
    );
    let before = gw.list_slides(id).await.unwrap();
    let slide_id = before[0].id;

    gw.set_failing_writes(true);
    let resp = send!(
        app,
        browser,
        browser.post_form(
            &format!("/presentations/{id}/slides/{slide_id}/blocks"),
            &[("csrf_token", token.as_str()), ("kind", "text")]
        )
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    let html = page!(app, browser, &format!("/presentations/{id}"));
    assert!(html.contains("Could not save your changes"));
    assert_eq!(gw.list_slides(id).await.unwrap(), before);

    let resp = send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides"), &[("csrf_token", token.as_str())])
    );
    assert_eq!(location(&resp), format!("/presentations/{id}?slide=0"));
    let html = page!(app, browser, &format!("/presentations/{id}"));
    assert!(html.contains("Could not add slide"));
    assert_eq!(gw.list_slides(id).await.unwrap().len(), 1);

    gw.set_failing(true);
    let resp = send!(app, browser, browser.get(&format!("/presentations/{id}")));
    assert_eq!(resp.status(), 500);
}

#[actix_rt::test]
async fn test_missing_csrf_is_forbidden() {
    let gw = Arc::new(MemoryGateway::new());
    let app = test::init_service(common::app(gw.clone())).await;
    let mut browser = Browser::default();
    let (id, _) = new_deck!(app, browser);

    let resp = send!(
        app,
        browser,
        browser.post_form(&format!("/presentations/{id}/slides"), &[("csrf_token", "forged")])
    );
    assert_eq!(resp.status(), 403);
    assert!(gw.list_slides(id).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_unknown_presentation_shows_not_found() {
    let app = test::init_service(common::app(Arc::new(MemoryGateway::new()))).await;
    let mut browser = Browser::default();

    let resp = send!(app, browser, browser.get(&format!("/presentations/{}", Uuid::new_v4())));
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).await.contains("Presentation not found"));

    let resp = send!(app, browser, browser.get("/presentations/not-a-uuid"));
    assert_eq!(resp.status(), 404);
}
