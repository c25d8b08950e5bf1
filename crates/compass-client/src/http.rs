use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use compass_core::models::compass::CompassEntry;
use compass_core::models::generation::{GenerationRequest, GenerationResponse};
use compass_core::models::mentor::{MentorInterestForm, MentorInterestSubmission};
use compass_core::models::question::MentorQuestion;
use compass_core::models::user::{DeleteUserResponse, User};
use compass_core::validation::FieldErrors;

use crate::api::CompassApi;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// [`CompassApi`] over HTTP.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("compass-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    fields: Option<FieldErrors>,
}

/// Map non-success responses onto [`ClientError`] variants.
///
/// A 400 carrying field errors becomes [`ClientError::Validation`]; any
/// other non-2xx keeps its status and body text.
async fn check_response(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        _ => {
            let text = resp.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorBody>(&text).ok();
            match body {
                Some(ErrorBody {
                    fields: Some(fields),
                    ..
                }) if status == StatusCode::BAD_REQUEST => Err(ClientError::Validation(fields)),
                Some(ErrorBody { error, .. }) if !error.is_empty() => Err(ClientError::Status {
                    status: status.as_u16(),
                    message: error,
                }),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    message: text,
                }),
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = check_response(resp).await?;
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl CompassApi for HttpClient {
    async fn generate_question(
        &self,
        req: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError> {
        let resp = self
            .authorized(self.http.post(self.url("/generate-question")))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    async fn daily_summary(
        &self,
        req: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError> {
        let resp = self
            .authorized(self.http.post(self.url("/daily-summary")))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    async fn compass_view(&self, date: &str) -> Result<CompassEntry, ClientError> {
        let path = format!("/compass-view/{}", urlencoding::encode(date));
        let resp = self.authorized(self.http.get(self.url(&path))).send().await?;
        decode(resp).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self.authorized(self.http.get(self.url("/users"))).send().await?;
        decode(resp).await
    }

    async fn delete_user(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<DeleteUserResponse, ClientError> {
        let path = format!("/user/{}", urlencoding::encode(user_id));
        let resp = self
            .http
            .delete(self.url(&path))
            .bearer_auth(token)
            .send()
            .await?;
        decode(resp).await
    }

    async fn list_mentor_questions(
        &self,
        pillar: Option<&str>,
    ) -> Result<Vec<MentorQuestion>, ClientError> {
        let mut builder = self.http.get(self.url("/mentor-questions"));
        if let Some(pillar) = pillar {
            builder = builder.query(&[("pillar", pillar)]);
        }
        let resp = self.authorized(builder).send().await?;
        decode(resp).await
    }

    async fn submit_mentor_interest(
        &self,
        form: &MentorInterestForm,
    ) -> Result<MentorInterestSubmission, ClientError> {
        let resp = self
            .http
            .post(self.url("/mentor-interest"))
            .json(form)
            .send()
            .await?;
        decode(resp).await
    }
}
