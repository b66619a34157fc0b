use std::time::Duration;

use recipe_core::{NewRecipe, Recipe, RecipeId, RecipeRecord, RecipeReplacement};
use recipe_logging::{recipe_debug, recipe_warn};
use reqwest::{Method, Response};
use serde::Serialize;
use url::Url;

use crate::{ClientError, FailureCause};

pub const DEFAULT_BASE_URL: &str = "https://673bc1ca96b8dcd5f3f75bb6.mockapi.io/api/v1/recipes";
const COLLECTION: &str = "recipes";
const NO_BODY: Option<&()> = None;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Store root; `/recipes` is appended to it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// CRUD access to the remote recipe store. Every call is attempted once.
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>, ClientError>;

    /// Fails without a network call when `id` is empty.
    async fn get(&self, id: &RecipeId) -> Result<Recipe, ClientError>;

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, ClientError>;

    /// Full-record replace.
    async fn update(&self, id: &RecipeId, recipe: &NewRecipe) -> Result<Recipe, ClientError>;

    async fn delete(&self, id: &RecipeId) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRecipeStore {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestRecipeStore {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ClientError::new(FailureCause::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureCause::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureCause::Network, err.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, id: Option<&RecipeId>) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`, so the segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    async fn send<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        recipe_debug!("{} {}", method, url);
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            recipe_warn!("{} {} answered {}", method, url, status);
            return Err(ClientError::new(
                FailureCause::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

fn require_id(id: &RecipeId) -> Result<(), ClientError> {
    if id.is_empty() {
        recipe_warn!("Refusing store request without a recipe id");
        return Err(ClientError::missing_id());
    }
    Ok(())
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| ClientError::new(FailureCause::Decode, err.to_string()))
}

/// One unreadable record is skipped rather than failing the whole list.
fn decode_listed(element: serde_json::Value) -> Option<Recipe> {
    match serde_json::from_value::<RecipeRecord>(element) {
        Ok(record) => Some(record.into_recipe()),
        Err(err) => {
            recipe_warn!("Skipping unreadable recipe in list: {}", err);
            None
        }
    }
}

#[async_trait::async_trait]
impl RecipeStore for ReqwestRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .send(Method::GET, self.endpoint(None), NO_BODY)
            .await?;
        let elements: Vec<serde_json::Value> = decode(response).await?;
        Ok(elements.into_iter().filter_map(decode_listed).collect())
    }

    async fn get(&self, id: &RecipeId) -> Result<Recipe, ClientError> {
        require_id(id)?;
        let response = self
            .send(Method::GET, self.endpoint(Some(id)), NO_BODY)
            .await?;
        let record: RecipeRecord = decode(response).await?;
        Ok(record.into_recipe())
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, ClientError> {
        let response = self
            .send(Method::POST, self.endpoint(None), Some(recipe))
            .await?;
        let record: RecipeRecord = decode(response).await?;
        Ok(record.into_recipe())
    }

    async fn update(&self, id: &RecipeId, recipe: &NewRecipe) -> Result<Recipe, ClientError> {
        require_id(id)?;
        let response = self
            .send(
                Method::PUT,
                self.endpoint(Some(id)),
                Some(&RecipeReplacement::new(id, recipe)),
            )
            .await?;
        let record: RecipeRecord = decode(response).await?;
        Ok(record.into_recipe())
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), ClientError> {
        require_id(id)?;
        self.send(Method::DELETE, self.endpoint(Some(id)), NO_BODY)
            .await?;
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureCause::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClientError::new(FailureCause::Decode, err.to_string());
    }
    ClientError::new(FailureCause::Network, err.to_string())
}
