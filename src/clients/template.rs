use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{config::Config, models::template::Template};

/// Remote collection of templates.
#[async_trait]
pub trait TemplateApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Template>, Error>;

    /// Any `id` on `template` is left out of the request.
    async fn create(&self, template: &Template) -> Result<Template, Error>;

    async fn update(&self, id: &str, template: &Template) -> Result<Template, Error>;

    async fn delete(&self, id: &str) -> Result<(), Error>;
}

pub struct TemplateServiceClient {
    http_client: Client,
    base_url: Url,
}

impl TemplateServiceClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        let base_url = Url::parse(config.api_url.trim_end_matches('/'))
            .map_err(|e| anyhow!("Invalid template API url '{}': {}", config.api_url, e))?;

        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Template API url '{}' cannot be a base", config.api_url));
        }

        info!(base_url = %base_url, "Template service client initialized");

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn item_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, Error> {
        let status = response.status();

        if !status.is_success() {
            return Err(anyhow!(
                "Template service returned status {} on {}",
                status,
                operation
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| anyhow!("Failed to parse {} response: {}", operation, e))
    }
}

#[async_trait]
impl TemplateApi for TemplateServiceClient {
    async fn list(&self) -> Result<Vec<Template>, Error> {
        debug!(url = %self.base_url, "Fetching templates");

        let response = self
            .http_client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach template service: {}", e))?;

        let templates: Vec<Template> = Self::decode(response, "list").await?;
        debug!(count = templates.len(), "Templates fetched");

        Ok(templates)
    }

    async fn create(&self, template: &Template) -> Result<Template, Error> {
        debug!(name = %template.name, "Creating template");

        let response = self
            .http_client
            .post(self.base_url.clone())
            .json(&template.without_id())
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach template service: {}", e))?;

        Self::decode(response, "create").await
    }

    async fn update(&self, id: &str, template: &Template) -> Result<Template, Error> {
        debug!(id, name = %template.name, "Updating template");

        let response = self
            .http_client
            .put(self.item_url(id))
            .json(template)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach template service: {}", e))?;

        Self::decode(response, "update").await
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(id, "Deleting template");

        let response = self
            .http_client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach template service: {}", e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(anyhow!("Template service returned status {} on delete", status))
        }
    }
}
