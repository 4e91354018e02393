use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::LOCATION, redirect::Policy};
use roster::{
    Contact,
    payloads::{ROOT_DATA_PATH, RootData, SEARCH_PARAM, contact_data_path},
};
use tracing::debug;
use url::Url;

use crate::{
    error::NavigatorError,
    location::Location,
    navigation::Submission,
    routes::{RouteId, RouteMatch},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoaderData {
    Root(RootData),
    Contact(Contact),
    /// A detail loader miss. Rendered in place, not an error.
    NotFound(String),
    Empty,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn load(
        &self,
        route: &RouteMatch,
        location: &Location,
    ) -> Result<LoaderData, NavigatorError>;

    /// Runs an action and answers with the location it redirected to.
    async fn submit(&self, submission: &Submission) -> Result<Location, NavigatorError>;
}

/// Talks to the server's `/_data` routes and posts forms to its action routes.
pub struct HttpTransport {
    base: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, NavigatorError> {
        let client = Client::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            base: Url::parse(base_url)?,
            client,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn load(
        &self,
        route: &RouteMatch,
        location: &Location,
    ) -> Result<LoaderData, NavigatorError> {
        match (route.route, route.id.as_deref()) {
            (RouteId::Root, _) => {
                let mut url = self.base.join(ROOT_DATA_PATH)?;
                if let Some(q) = location.q() {
                    url.query_pairs_mut().append_pair(SEARCH_PARAM, &q);
                }

                debug!("Loading {url}");
                let root = self
                    .client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<RootData>()
                    .await?;

                Ok(LoaderData::Root(root))
            }
            (RouteId::Contact | RouteId::EditContact, Some(id)) => {
                let url = self.base.join(&contact_data_path(id))?;

                debug!("Loading {url}");
                let response = self.client.get(url).send().await?;
                if response.status() == StatusCode::NOT_FOUND {
                    return Ok(LoaderData::NotFound(id.to_string()));
                }

                let contact = response.error_for_status()?.json::<Contact>().await?;
                Ok(LoaderData::Contact(contact))
            }
            _ => Ok(LoaderData::Empty),
        }
    }

    async fn submit(&self, submission: &Submission) -> Result<Location, NavigatorError> {
        let url = self.base.join(&submission.action)?;

        debug!("Submitting {} fields to {url}", submission.fields.len());
        let response = self
            .client
            .post(url)
            .form(&submission.fields)
            .send()
            .await?;

        if !response.status().is_redirection() {
            return Err(NavigatorError::UnexpectedStatus(response.status().as_u16()));
        }

        let target = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(NavigatorError::MissingRedirect)?;

        Location::parse(target)
    }
}
