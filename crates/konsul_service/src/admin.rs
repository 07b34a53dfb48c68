use chrono::{DateTime, Utc};
use uuid::Uuid;

use konsul_core::models::{ConsultationRecord, ConsultationStatus, ConsultationUpdate};
use konsul_db::models::{ListPage, ListParams, Statistics};
use konsul_db::ConsultationRepository;

use crate::error::{Error, Result};
use crate::KonsulService;

impl KonsulService {
    fn repo(&self) -> ConsultationRepository {
        ConsultationRepository::new(self.pool.clone())
    }

    pub async fn list_consultations(&self, params: ListParams) -> Result<ListPage> {
        Ok(self.repo().list(params).await?)
    }

    pub async fn get_consultation(&self, id: Uuid) -> Result<ConsultationRecord> {
        Ok(self.repo().get(id).await?)
    }

    /// Partial update. A status change inside the patch goes through the
    /// same transition table as the status-only endpoint. The optional
    /// `expected_updated_at` token rejects stale writes.
    pub async fn update_consultation(
        &self,
        id: Uuid,
        patch: ConsultationUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<ConsultationRecord> {
        if let Some(next) = patch.status {
            let current = self.repo().get(id).await?;
            self.check_transition(current.status, next)?;
        }
        Ok(self.repo().update(id, &patch, expected_updated_at).await?)
    }

    /// Status-only update, guarded by the allow-listed transition table.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ConsultationStatus,
    ) -> Result<ConsultationRecord> {
        let current = self.repo().get(id).await?;
        self.check_transition(current.status, status)?;
        Ok(self.repo().update_status(id, status).await?)
    }

    pub async fn delete_consultation(&self, id: Uuid) -> Result<()> {
        Ok(self.repo().delete(id).await?)
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        Ok(self.repo().statistics().await?)
    }

    fn check_transition(&self, from: ConsultationStatus, to: ConsultationStatus) -> Result<()> {
        if !from.can_transition(to) {
            return Err(Error::BusinessRule(format!(
                "status may not move from {} to {}",
                from, to
            )));
        }
        Ok(())
    }
}
