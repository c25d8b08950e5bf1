//! The concrete mutation hooks.

use std::sync::Arc;

use compass_core::models::generation::{GenerationRequest, GenerationResponse};
use compass_core::models::mentor::{MentorInterestForm, MentorInterestSubmission};
use compass_core::models::user::DeleteUserResponse;
use compass_core::validation::{validate_generation_request, validate_mentor_interest};

use crate::api::SharedApi;
use crate::cache::QueryCache;
use crate::error::ClientError;
use crate::mutation::{Mutation, MutationState};
use crate::notify::Notifier;
use crate::query_keys;

/// Generate the daily summary for a day's reflection.
pub struct GenerateSummary {
    api: SharedApi,
    inner: Mutation<GenerationResponse>,
}

impl GenerateSummary {
    pub fn new(api: SharedApi, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            inner: Mutation::new(
                cache,
                notifier,
                vec![query_keys::compass_view()],
                "Failed to generate daily summary",
            ),
        }
    }

    pub async fn mutate(&self, req: GenerationRequest) -> Result<GenerationResponse, ClientError> {
        let req = validate_generation_request(req).map_err(|e| self.inner.reject(e.into()))?;
        self.inner.run(self.api.daily_summary(&req)).await
    }

    pub fn state(&self) -> MutationState<GenerationResponse> {
        self.inner.state()
    }
}

/// Generate a reflection question for a day's reflection.
pub struct GenerateQuestion {
    api: SharedApi,
    inner: Mutation<GenerationResponse>,
}

impl GenerateQuestion {
    pub fn new(api: SharedApi, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            inner: Mutation::new(
                cache,
                notifier,
                vec![query_keys::compass_view()],
                "Failed to generate reflection question",
            ),
        }
    }

    pub async fn mutate(&self, req: GenerationRequest) -> Result<GenerationResponse, ClientError> {
        let req = validate_generation_request(req).map_err(|e| self.inner.reject(e.into()))?;
        self.inner.run(self.api.generate_question(&req)).await
    }

    pub fn state(&self) -> MutationState<GenerationResponse> {
        self.inner.state()
    }
}

/// Remove a user. Every failure, whatever its status, surfaces as the
/// same notification; the typed error is still returned to the caller.
pub struct DeleteUser {
    api: SharedApi,
    inner: Mutation<DeleteUserResponse>,
}

impl DeleteUser {
    pub fn new(api: SharedApi, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            inner: Mutation::new(
                cache,
                notifier,
                vec![query_keys::users_all()],
                "Failed to delete user",
            ),
        }
    }

    pub async fn mutate(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<DeleteUserResponse, ClientError> {
        self.inner.run(self.api.delete_user(user_id, token)).await
    }

    pub fn state(&self) -> MutationState<DeleteUserResponse> {
        self.inner.state()
    }
}

/// Submit the mentor-interest form. Invalid input is rejected locally and
/// never sent.
pub struct SubmitMentorInterest {
    api: SharedApi,
    inner: Mutation<MentorInterestSubmission>,
}

impl SubmitMentorInterest {
    pub fn new(api: SharedApi, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            inner: Mutation::new(cache, notifier, Vec::new(), "Failed to submit your details")
                .with_success_message("Thanks! We'll be in touch."),
        }
    }

    pub async fn mutate(
        &self,
        form: MentorInterestForm,
    ) -> Result<MentorInterestSubmission, ClientError> {
        let form = validate_mentor_interest(form).map_err(|e| self.inner.reject(e.into()))?;
        self.inner.run(self.api.submit_mentor_interest(&form)).await
    }

    pub fn state(&self) -> MutationState<MentorInterestSubmission> {
        self.inner.state()
    }
}
