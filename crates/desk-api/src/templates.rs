//! `/templates` endpoints.

use desk_auth::Session;
use desk_core::entities::{Template, TemplateCreate};

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
    with_query,
};

impl DeskHubClient {
    /// List templates, newest first, with offset pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_templates(&self, skip: u32, limit: u32) -> Result<Vec<Template>, ApiError> {
        let path = with_query(
            "/templates/",
            &[
                ("skip", Some(skip.to_string())),
                ("limit", Some(limit.to_string())),
            ],
        );
        let resp = check_response(self.get(&path).send().await?).await?;
        json(resp).await
    }

    /// Fetch one template with its creator and tagged products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_template(&self, id: i64) -> Result<Template, ApiError> {
        let resp = check_response(self.get(&format!("/templates/{id}")).send().await?).await?;
        json(resp).await
    }

    /// Publish a new template as the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the session is rejected.
    pub async fn create_template(
        &self,
        session: &Session,
        template: &TemplateCreate,
    ) -> Result<Template, ApiError> {
        let resp = check_response(
            self.authed(reqwest::Method::POST, "/templates/", session)
                .json(template)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }

    /// Replace a template. Items are replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the template is missing or not owned by the user.
    pub async fn update_template(
        &self,
        session: &Session,
        id: i64,
        template: &TemplateCreate,
    ) -> Result<Template, ApiError> {
        let resp = check_response(
            self.authed(reqwest::Method::PUT, &format!("/templates/{id}"), session)
                .json(template)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }

    /// Delete a template owned by the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the template is missing or not owned by the user.
    pub async fn delete_template(&self, session: &Session, id: i64) -> Result<(), ApiError> {
        check_response(
            self.authed(reqwest::Method::DELETE, &format!("/templates/{id}"), session)
                .send()
                .await?,
        )
        .await?;
        tracing::debug!(id, "template deleted");
        Ok(())
    }
}
