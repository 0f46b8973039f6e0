//! App Router

use salvo::Router;

use crate::{checkout, healthcheck};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("checkout").post(checkout::handler::handler))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        checkout::models::CheckoutResponse, healthcheck::HealthResponse, state::State,
        test_helpers::strict_processor,
    };

    use super::*;

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::shared(Arc::new(strict_processor()))))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn healthcheck_is_routed() -> TestResult {
        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_is_routed() -> TestResult {
        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "email": "ada@example.com", "price": -1 }))
            .send(&service())
            .await;

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid price value");

        Ok(())
    }
}
