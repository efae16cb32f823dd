use actix_middleware::{AuthenticatedUser, BasicAuthMiddleware, CredentialVerifier, StaticCredentials};
use actix_web::{http::header, test, web, App, HttpMessage, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};

async fn protected_handler(req: HttpRequest) -> HttpResponse {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|u| u.0.clone())
        .unwrap_or_default();
    HttpResponse::Ok().body(format!("hello {}", user))
}

async fn public_handler() -> HttpResponse {
    HttpResponse::Ok().body("public")
}

fn basic(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
}

macro_rules! app {
    ($auth:expr) => {
        test::init_service(
            App::new()
                .service(
                    web::resource("/protected")
                        .wrap($auth)
                        .route(web::get().to(protected_handler)),
                )
                .route("/public", web::get().to(public_handler)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_missing_credentials_returns_challenge() {
    let app = app!(BasicAuthMiddleware::new(
        StaticCredentials::new("admin", "secret"),
        "Login Required"
    ));

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"Login Required\""
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, "Access denied. Please provide valid credentials.");
}

#[actix_web::test]
async fn test_wrong_password_is_rejected() {
    let app = app!(BasicAuthMiddleware::new(
        StaticCredentials::new("admin", "secret"),
        "Login Required"
    ));

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, basic("admin", "wrong")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[actix_web::test]
async fn test_bearer_token_is_rejected() {
    let app = app!(BasicAuthMiddleware::new(
        StaticCredentials::new("admin", "secret"),
        "Login Required"
    ));

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, "Bearer some.jwt.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_valid_credentials_reach_handler() {
    let app = app!(BasicAuthMiddleware::new(
        StaticCredentials::new("admin", "secret"),
        "Login Required"
    ));

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, basic("admin", "secret")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(body, "hello admin");
}

#[actix_web::test]
async fn test_unwrapped_routes_stay_public() {
    let app = app!(BasicAuthMiddleware::new(
        StaticCredentials::new("admin", "secret"),
        "Login Required"
    ));

    let req = test::TestRequest::get().uri("/public").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}

struct AllowList(Vec<(&'static str, &'static str)>);

impl CredentialVerifier for AllowList {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.0.iter().any(|(u, p)| *u == username && *p == password)
    }
}

#[actix_web::test]
async fn test_custom_verifier_and_realm() {
    let app = app!(BasicAuthMiddleware::new(
        AllowList(vec![("alice", "a1"), ("bob", "b2")]),
        "Staff"
    ));

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, basic("bob", "b2")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"Staff\""
    );
}
