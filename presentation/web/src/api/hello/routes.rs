use poem::web::Html;
use poem::{Endpoint, Route, get, handler};

const HELLO_PAGE: &str = include_str!("../../../templates/hello.html");

pub fn routes() -> impl Endpoint + 'static {
    Route::new().at("/", get(index))
}

#[handler]
fn index() -> Html<&'static str> {
    Html(HELLO_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;

    #[tokio::test]
    async fn should_serve_static_hello_page() {
        let cli = TestClient::new(routes());

        let response = cli.get("/").send().await;

        response.assert_status_is_ok();
        response.assert_text(HELLO_PAGE).await;
    }

    #[tokio::test]
    async fn should_not_expose_recipe_routes() {
        let cli = TestClient::new(routes());

        let response = cli.post("/generate").send().await;

        response.assert_status(poem::http::StatusCode::NOT_FOUND);
    }
}
