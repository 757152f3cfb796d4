use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::persona::{Field, Goal, Persona, Stage};
use crate::models::resume::ResumeContent;
use crate::state::AppState;
use crate::targets::compatibility::{goal_options, validate, Compatibility, GoalOption};
use crate::targets::compiler::{compile_targets, CareerTarget};
use crate::targets::report::{build_report, ProgressReport};
use crate::targets::setup::{persona_setup, PersonaSetup};
use crate::targets::tables::{persona_definition, Label};

#[derive(Deserialize)]
pub struct CompileRequest {
    pub persona: Persona,
}

#[derive(Serialize)]
pub struct CompileResponse {
    pub persona: Persona,
    pub targets: Vec<CareerTarget>,
}

#[derive(Deserialize)]
pub struct ProgressRequest {
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub resume: ResumeContent,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub report: ProgressReport,
    pub computed_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CompatibilityQuery {
    pub stage: String,
    pub goal: String,
}

#[derive(Deserialize)]
pub struct SetupQuery {
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub goal: String,
}

#[derive(Serialize)]
pub struct GoalOptionsResponse {
    pub stage: Stage,
    pub stage_label: Label,
    pub options: Vec<GoalOption>,
}

/// POST /api/v1/targets/compile
pub async fn handle_compile(Json(req): Json<CompileRequest>) -> Json<CompileResponse> {
    Json(CompileResponse {
        persona: req.persona,
        targets: compile_targets(&req.persona),
    })
}

/// POST /api/v1/targets/progress
pub async fn handle_progress(
    State(state): State<AppState>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let limit = state.config.max_resume_entries;
    if req.resume.max_list_len() > limit {
        return Err(AppError::Validation(format!(
            "Résumé lists may hold at most {limit} entries"
        )));
    }

    Ok(Json(ProgressResponse {
        report: build_report(req.persona, &req.resume),
        computed_at: Utc::now(),
    }))
}

/// GET /api/v1/personas/compatibility
pub async fn handle_compatibility(
    Query(params): Query<CompatibilityQuery>,
) -> Result<Json<Compatibility>, AppError> {
    let stage = Stage::parse(&params.stage)
        .ok_or_else(|| AppError::Validation(format!("Unknown stage '{}'", params.stage)))?;
    let goal = Goal::parse(&params.goal)
        .ok_or_else(|| AppError::Validation(format!("Unknown goal '{}'", params.goal)))?;
    Ok(Json(validate(stage, goal)))
}

/// GET /api/v1/personas/:stage/goals
pub async fn handle_goal_options(
    Path(stage): Path<String>,
) -> Result<Json<GoalOptionsResponse>, AppError> {
    let stage =
        Stage::parse(&stage).ok_or_else(|| AppError::NotFound(format!("Stage '{stage}' not found")))?;
    Ok(Json(GoalOptionsResponse {
        stage,
        stage_label: persona_definition(stage).label,
        options: goal_options(stage),
    }))
}

/// GET /api/v1/personas/setup
pub async fn handle_setup(Query(params): Query<SetupQuery>) -> Json<PersonaSetup> {
    let persona = Persona {
        stage: Stage::resolve(&params.stage),
        field: Field::resolve(&params.field),
        goal: Goal::resolve(&params.goal),
    };
    Json(persona_setup(persona))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app() -> axum::Router {
        build_router(AppState {
            config: Config {
                port: 8080,
                bind_addr: "127.0.0.1".to_string(),
                rust_log: "debug".to_string(),
                max_resume_entries: 3,
            },
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-targets-api");
    }

    #[tokio::test]
    async fn test_compile_accepts_aliases_and_unknown_values() {
        let (status, body) = send(post_json(
            "/api/v1/targets/compile",
            json!({ "persona": { "stage": "graduate", "field": "tech", "goal": "full_time" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persona"]["field"], "technology");
        assert_eq!(body["persona"]["goal"], "full-time");
        assert!(body["targets"].as_array().unwrap().len() > 5);

        let (status, body) = send(post_json(
            "/api/v1/targets/compile",
            json!({ "persona": { "stage": "retired", "field": "nonexistent-key", "goal": "?" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persona"]["stage"], "student");
        assert_eq!(body["persona"]["field"], "other");
        assert_eq!(body["persona"]["goal"], "part-time");
    }

    #[tokio::test]
    async fn test_progress_weighted() {
        let (status, body) = send(post_json(
            "/api/v1/targets/progress",
            json!({
                "persona": { "stage": "freshman", "field": "other", "goal": "part-time" },
                "resume": { "fullName": "[Your Full Name]", "email": "a@b.co" }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "weighted");
        assert_eq!(body["overall"], 0);
        assert_eq!(body["next_priority"]["section"], "personal");
        assert_eq!(body["has_unmet_required"], true);
        assert!(body["computed_at"].is_string());
    }

    #[tokio::test]
    async fn test_progress_accepts_persisted_industry_persona() {
        let (status, body) = send(post_json(
            "/api/v1/targets/progress",
            json!({
                "persona": { "stage": "graduate", "industry": "tech", "goal": null },
                "resume": { "fullName": "Sara Ali" }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "weighted");
        assert_eq!(body["persona"]["stage"], "graduate");
        assert_eq!(body["persona"]["field"], "technology");
        assert_eq!(body["persona"]["goal"], "part-time");
    }

    #[tokio::test]
    async fn test_progress_without_persona_is_legacy() {
        let (status, body) = send(post_json(
            "/api/v1/targets/progress",
            json!({ "persona": null, "resume": {} }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "legacy");
    }

    #[tokio::test]
    async fn test_progress_rejects_oversized_lists() {
        let languages: Vec<Value> = (0..4)
            .map(|i| json!({ "name": format!("lang {i}"), "level": "fluent" }))
            .collect();
        let (status, body) = send(post_json(
            "/api/v1/targets/progress",
            json!({ "resume": { "languages": languages } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_compatibility_verdicts() {
        let (status, body) =
            send(get("/api/v1/personas/compatibility?stage=freshman&goal=internship")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["action"], "block");
        assert!(!body["message"]["ar"].as_str().unwrap().is_empty());

        let (_, body) =
            send(get("/api/v1/personas/compatibility?stage=graduate&goal=volunteering")).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["action"], "warn");
    }

    #[tokio::test]
    async fn test_compatibility_rejects_unknown_values() {
        let (status, body) =
            send(get("/api/v1/personas/compatibility?stage=freshman&goal=retirement")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_goal_options() {
        let (status, body) = send(get("/api/v1/personas/freshman/goals")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["options"].as_array().unwrap().len(), 4);
        assert_eq!(body["stage_label"]["en"], "Freshman");

        let (status, body) = send(get("/api/v1/personas/alumni/goals")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_setup_never_fails() {
        let (status, body) =
            send(get("/api/v1/personas/setup?stage=graduate&field=law&goal=full-time")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"]["template"], "professional");

        let (status, body) = send(get("/api/v1/personas/setup")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persona"]["stage"], "student");
    }
}
