use std::sync::Arc;

use compass_core::models::compass::CompassEntry;
use compass_core::models::question::MentorQuestion;
use compass_core::models::user::User;

use crate::api::SharedApi;
use crate::cache::QueryCache;
use crate::error::ClientError;
use crate::query_keys;

/// Read-side hooks. Each call serves from the cache while the entry is
/// fresh and refetches once a mutation has invalidated it.
#[derive(Clone)]
pub struct Queries {
    api: SharedApi,
    cache: Arc<QueryCache>,
}

impl Queries {
    pub fn new(api: SharedApi, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn compass_view(&self, date: &str) -> Result<CompassEntry, ClientError> {
        self.cache
            .fetch_query(query_keys::compass_view_day(date), || {
                self.api.compass_view(date)
            })
            .await
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.cache
            .fetch_query(query_keys::users_all(), || self.api.list_users())
            .await
    }

    pub async fn mentor_questions(
        &self,
        pillar: Option<&str>,
    ) -> Result<Vec<MentorQuestion>, ClientError> {
        self.cache
            .fetch_query(query_keys::mentor_questions(pillar), || {
                self.api.list_mentor_questions(pillar)
            })
            .await
    }
}
