use std::sync::Arc;

use application::usercases::plans::PlanSubmissionUseCase;
use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::WithRejection;
use domain::{
    repositories::plans::PlanRepository,
    value_objects::plans::{InsertPlanModel, PlanCreatedDto},
};
use infra::postgres::{postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres};

use crate::axum_http::error_responses::AppError;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));

    routes_with_repository(Arc::new(plan_repository))
}

pub fn routes_with_repository<T>(plan_repository: Arc<T>) -> Router
where
    T: PlanRepository + Send + Sync + 'static,
{
    let plan_submission_usecase = PlanSubmissionUseCase::new(plan_repository);

    Router::new()
        .route("/api/plans", post(submit_plan::<T>))
        .with_state(Arc::new(plan_submission_usecase))
}

pub async fn submit_plan<T>(
    State(plan_submission_usecase): State<Arc<PlanSubmissionUseCase<T>>>,
    WithRejection(Json(insert_plan_model), _): WithRejection<Json<InsertPlanModel>, AppError>,
) -> Result<Json<PlanCreatedDto>, AppError>
where
    T: PlanRepository + Send + Sync + 'static,
{
    let created = plan_submission_usecase
        .submit_plan(insert_plan_model)
        .await?;

    Ok(Json(created))
}
