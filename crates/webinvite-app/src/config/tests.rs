use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use super::*;

#[handler]
async fn origin(depot: &mut Depot) -> String {
    match get_config_from_depot(depot) {
        Ok(settings) => settings.server.origin(),
        Err(e) => e.to_string(),
    }
}

#[tokio::test]
async fn test_config_handler_injects_settings() {
    let mut settings = Settings::load().expect("defaults load");
    settings.server.serve_origin = Some("https://invite.example/".to_string());

    let router = Router::new()
        .hoop(ConfigHandler { settings })
        .push(Router::with_path("origin").get(origin));

    let body = TestClient::get("http://127.0.0.1:5800/origin")
        .send(router)
        .await
        .take_string()
        .await
        .expect("body");
    assert_eq!(body, "https://invite.example");
}

#[tokio::test]
async fn test_missing_config_is_an_error() {
    let router = Router::new().push(Router::with_path("origin").get(origin));

    let body = TestClient::get("http://127.0.0.1:5800/origin")
        .send(router)
        .await
        .take_string()
        .await
        .expect("body");
    assert!(body.contains("Configuration not found in depot"));
}
