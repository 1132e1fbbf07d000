use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use saucier_core::analysis::{
    format_analysis, is_healthy, shopping_list, time_category, total_time_minutes, RecipeAnalysis,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the analyze endpoint (mounted at /api/analyze)
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(analyze_recipe))
}

/// Request body for recipe analysis.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Free-text recipe (ingredients and instructions).
    pub recipe_text: String,
}

/// Derived quick insights over an analysis.
#[derive(Debug, Serialize, ToSchema)]
pub struct Insights {
    pub total_time_minutes: u32,
    pub meal_category: String,
    pub healthy: bool,
    pub shopping_list: Vec<String>,
}

/// Response body for recipe analysis.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: RecipeAnalysis,
    /// The formatted multi-section report.
    pub report: String,
    pub insights: Insights,
}

/// Analyze a recipe using AI
///
/// This is a stateless endpoint that takes recipe text and returns the
/// structured analysis, a rendered report, and derived insights. Nothing is
/// stored; resubmitting after a failure is always safe.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Recipe analysis", body = AnalyzeResponse),
        (status = 503, description = "Analysis failed", body = ErrorResponse)
    )
)]
pub async fn analyze_recipe(
    State(analyzer): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let analysis = match analyzer.analyze(&request.recipe_text).await {
        Ok(a) => a,
        Err(e) => {
            tracing::warn!("Recipe analysis failed: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let insights = Insights {
        total_time_minutes: total_time_minutes(&analysis),
        meal_category: time_category(&analysis).label().to_string(),
        healthy: is_healthy(&analysis),
        shopping_list: shopping_list(&analysis),
    };

    let report = format_analysis(&analysis);

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            analysis,
            report,
            insights,
        }),
    )
        .into_response()
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze_recipe),
    components(schemas(AnalyzeRequest, AnalyzeResponse, Insights))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use saucier_core::ai::FakeClient;
    use saucier_core::analysis::RecipeAnalyzer;
    use std::sync::Arc;
    use tower::ServiceExt;

    const CARBONARA_PAYLOAD: &str = r#"{
        "difficulty_level": "Medium",
        "prep_time_minutes": 15,
        "cook_time_minutes": 20,
        "servings": 4,
        "cuisine_type": "Italian",
        "dietary_tags": ["high-protein"],
        "nutrition": {"calories": 650, "protein_g": 30.0, "carbs_g": 70.0, "fat_g": 25.0, "fiber_g": 3.0},
        "missing_ingredients": ["eggs"],
        "cooking_tips": ["Reserve some pasta water"],
        "healthiness_score": 5
    }"#;

    fn app(client: FakeClient) -> Router {
        router().with_state(Arc::new(RecipeAnalyzer::new(Arc::new(client))))
    }

    fn analyze_request(recipe_text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "recipe_text": recipe_text }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_analyze_returns_report_and_insights() {
        let app = app(FakeClient::with_response(
            "Spaghetti Carbonara",
            CARBONARA_PAYLOAD,
        ));

        let response = app
            .oneshot(analyze_request("Spaghetti Carbonara with eggs"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["analysis"]["difficulty_level"], "Medium");
        assert_eq!(json["analysis"]["nutrition"]["calories"], 650);
        assert_eq!(json["insights"]["total_time_minutes"], 35);
        assert_eq!(json["insights"]["meal_category"], "Regular meal");
        assert_eq!(json["insights"]["healthy"], false);
        assert_eq!(json["insights"]["shopping_list"][0], "□ eggs");
        assert!(json["report"]
            .as_str()
            .unwrap()
            .contains("Difficulty: Medium"));
    }

    #[tokio::test]
    async fn test_analyze_failure_returns_503_with_cause() {
        let app = app(FakeClient::with_error("connection refused"));

        let response = app.oneshot(analyze_request("anything")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let error = json["error"].as_str().unwrap();
        assert!(error.contains("connection refused"), "got: {}", error);
    }
}
