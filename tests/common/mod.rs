//! Shared helpers for the HTTP integration tests.
//!
//! Every test runs the real route table over an in-memory gateway, with a
//! small cookie jar standing in for the browser session.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::ContentType;
use actix_web::{App, test};
use regex::Regex;
use serde::Serialize;

use decks::gateway::Gateway;

pub const SESSION_COOKIE: &str = "decks_session";

/// Send a request through the app and keep the session cookie it returns.
macro_rules! send {
    ($app:expr, $browser:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        $browser.track(&resp);
        resp
    }};
}

/// Create a presentation through the list page. Yields `(id, csrf_token)`.
macro_rules! new_deck {
    ($app:expr, $browser:expr) => {{
        let resp = send!($app, $browser, $browser.get("/presentations"));
        let token = $crate::common::extract_csrf_token(&$crate::common::body_string(resp).await);
        let resp = send!(
            $app,
            $browser,
            $browser.post_form("/presentations", &[("csrf_token", token.as_str())])
        );
        assert_eq!(resp.status(), 303);
        ($crate::common::presentation_id(&$crate::common::location(&resp)), token)
    }};
}

/// GET a page and return its body.
macro_rules! page {
    ($app:expr, $browser:expr, $uri:expr) => {{
        let resp = send!($app, $browser, $browser.get($uri));
        assert_eq!(resp.status(), 200, "GET {}", $uri);
        $crate::common::body_string(resp).await
    }};
}

/// The application as served, minus logging and static files.
pub fn app(
    gateway: Arc<dyn Gateway>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    decks::app(gateway).wrap(decks::session::middleware(Key::generate()))
}

/// Carries the session cookie from one response to the next request.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn get(&self, uri: &str) -> test::TestRequest {
        self.with_cookie(test::TestRequest::get().uri(uri))
    }

    pub fn post_form<T: Serialize>(&self, uri: &str, form: &T) -> test::TestRequest {
        let body = serde_urlencoded::to_string(form).expect("encode form");
        self.with_cookie(
            test::TestRequest::post()
                .uri(uri)
                .insert_header(ContentType::form_url_encoded())
                .set_payload(body),
        )
    }

    pub fn track<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(cookie) = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
        {
            self.cookie = Some(cookie.into_owned());
        }
    }

    fn with_cookie(&self, req: test::TestRequest) -> test::TestRequest {
        match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("redirect location")
        .to_string()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .expect("CSRF token in page")
}

/// Presentation id from an editor URL such as `/presentations/{id}?slide=0`.
pub fn presentation_id(location: &str) -> uuid::Uuid {
    let re = Regex::new(r"/presentations/([0-9a-f-]{36})").expect("Failed to compile regex");
    let id = re
        .captures(location)
        .and_then(|cap| cap.get(1))
        .expect("presentation id in URL");
    id.as_str().parse().expect("uuid")
}

/// Id of the selected slide, taken from the slide details form on an editor page.
pub fn current_slide_id(html: &str) -> uuid::Uuid {
    let re = Regex::new(r#"/slides/([0-9a-f-]{36})" class="slide-details""#).expect("Failed to compile regex");
    let id = re
        .captures(html)
        .and_then(|cap| cap.get(1))
        .expect("slide id in page");
    id.as_str().parse().expect("uuid")
}

/// Undo HTML escaping in either named or numeric form.
pub fn unescape_html(html: &str) -> String {
    let re = Regex::new(r"&(#(\d+)|amp|lt|gt|quot|#x27);").expect("Failed to compile regex");
    re.replace_all(html, |cap: &regex::Captures| {
        if let Some(code) = cap.get(2) {
            let c = code.as_str().parse::<u32>().ok().and_then(char::from_u32);
            return c.map(String::from).unwrap_or_default();
        }
        match &cap[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        }
        .to_string()
    })
    .into_owned()
}

/// Decoded value of the first `name="..."` attribute in the page.
pub fn attribute(html: &str, name: &str) -> String {
    let re = Regex::new(&format!(r#"{name}="([^"]*)""#)).expect("Failed to compile regex");
    let value = re
        .captures(html)
        .and_then(|cap| cap.get(1))
        .expect("attribute in page");
    unescape_html(value.as_str())
}
