use crate::helpers::basic_header;
use crate::helpers::spawn_app;

#[tokio::test]
async fn unknown_paths_fall_through() {
    let app = spawn_app().await;

    for path in ["/foo", "/secrets", "/secret/", "/secret/extra", "/health_check"] {
        let resp = app.get(path).await;
        assert_eq!(resp.status().as_u16(), 404, "{path}");
        assert_eq!(resp.text().await.unwrap(), "Not found", "{path}");
    }
}

#[tokio::test]
async fn non_get_methods_fall_through() {
    // the dispatch table only knows GET; anything else lands on the 404
    // fallback, even with valid credentials attached
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for path in ["/", "/secret"] {
        let resp = client
            .post(format!("{}{}", app.addr, path))
            .header("Authorization", basic_header("admin", "supersecret"))
            .send()
            .await
            .expect("execute request");
        assert_eq!(resp.status().as_u16(), 404, "POST {path}");

        let resp = client
            .delete(format!("{}{}", app.addr, path))
            .send()
            .await
            .expect("execute request");
        assert_eq!(resp.status().as_u16(), 404, "DELETE {path}");
    }
}
