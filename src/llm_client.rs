use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Response;

use crate::consts;
use crate::errors::ExplainerError;
use crate::llm_request::{self, GenerationRequest};
use crate::models::model_list::ModelList;
use crate::models::response::GenerateContentResponse;

/// The remote text-generation API as seen by the rest of the service.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn list_models(&self) -> Result<Vec<String>, ExplainerError>;

    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerateContentResponse, ExplainerError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn check_status(response: Response) -> Result<Response, ExplainerError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ExplainerError::ApiError(format!(
                "status {status}, text {text}"
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn list_models(&self) -> Result<Vec<String>, ExplainerError> {
        let mut names = vec![];
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        for _ in 0..consts::MAX_MODEL_LIST_PAGES {
            let mut query = vec![("pageSize", consts::MODEL_LIST_PAGE_SIZE.to_string())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self
                .client
                .get(format!("{}/models", self.base_url))
                .header(consts::API_KEY_HEADER, &self.api_key)
                .query(&query)
                .send()
                .await?;
            let page: ModelList = Self::check_status(response).await?.json().await?;

            names.extend(page.models.into_iter().map(|model| model.name));

            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(ExplainerError::ApiError(format!(
                            "model list pagination repeated page token {token:?}"
                        )));
                    }
                    page_token = Some(token);
                }
                _ => {
                    log::debug!("model catalog: {} entries", names.len());
                    return Ok(names);
                }
            }
        }

        Err(ExplainerError::ApiError(format!(
            "model list exceeded {} pages",
            consts::MAX_MODEL_LIST_PAGES
        )))
    }

    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerateContentResponse, ExplainerError> {
        llm_request::validate_generation_request(request)?;

        let response = self
            .client
            .post(format!(
                "{}/{}:generateContent",
                self.base_url,
                llm_request::model_path(&request.model)
            ))
            .header(consts::API_KEY_HEADER, &self.api_key)
            .json(&request.to_wire())
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
