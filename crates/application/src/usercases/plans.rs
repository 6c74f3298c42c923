use std::sync::Arc;

use domain::{
    entities::plans::InsertPlanEntity,
    repositories::plans::PlanRepository,
    value_objects::plans::{InsertPlanModel, PlanCreatedDto},
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum PlanSubmissionError {
    #[error("storage operation failed")]
    Storage(#[source] anyhow::Error),
}

pub type UseCaseResult<T> = std::result::Result<T, PlanSubmissionError>;

pub struct PlanSubmissionUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    plan_repository: Arc<T>,
}

impl<T> PlanSubmissionUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    pub fn new(plan_repository: Arc<T>) -> Self {
        Self { plan_repository }
    }

    /// Persists one submission as-is and returns the identifier Postgres assigned.
    pub async fn submit_plan(
        &self,
        insert_plan_model: InsertPlanModel,
    ) -> UseCaseResult<PlanCreatedDto> {
        let insert_plan_entity: InsertPlanEntity = insert_plan_model.into();
        let has_payload = insert_plan_entity.payload.is_some();

        let id = self
            .plan_repository
            .insert(insert_plan_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "plans: failed to insert plan");
                PlanSubmissionError::Storage(err)
            })?;

        info!(plan_id = id, has_payload, "plans: plan stored");
        Ok(PlanCreatedDto { id })
    }
}
