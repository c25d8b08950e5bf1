use std::sync::Arc;

use async_trait::async_trait;

use compass_core::models::compass::CompassEntry;
use compass_core::models::generation::{GenerationRequest, GenerationResponse};
use compass_core::models::mentor::{MentorInterestForm, MentorInterestSubmission};
use compass_core::models::question::MentorQuestion;
use compass_core::models::user::{DeleteUserResponse, User};

use crate::error::ClientError;

/// The remote operations the client depends on. [`crate::http::HttpClient`]
/// is the real implementation; tests substitute their own.
#[async_trait]
pub trait CompassApi: Send + Sync {
    async fn generate_question(
        &self,
        req: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError>;

    async fn daily_summary(
        &self,
        req: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError>;

    async fn compass_view(&self, date: &str) -> Result<CompassEntry, ClientError>;

    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    /// Delete a user, authenticating with the given token rather than the
    /// client's own.
    async fn delete_user(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<DeleteUserResponse, ClientError>;

    async fn list_mentor_questions(
        &self,
        pillar: Option<&str>,
    ) -> Result<Vec<MentorQuestion>, ClientError>;

    async fn submit_mentor_interest(
        &self,
        form: &MentorInterestForm,
    ) -> Result<MentorInterestSubmission, ClientError>;
}

pub type SharedApi = Arc<dyn CompassApi>;
