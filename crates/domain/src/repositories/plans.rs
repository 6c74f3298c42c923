use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::entities::plans::InsertPlanEntity;

#[async_trait]
#[automock]
pub trait PlanRepository {
    /// Inserts one row and returns the identifier Postgres assigned to it.
    async fn insert(&self, insert_plan_entity: InsertPlanEntity) -> Result<i32>;
}
