//! Request dispatcher for the Zendesk REST API.
//!
//! This module provides the `ZdeskClient` struct. Every API call funnels
//! through a single execution path ([`ZdeskClient::execute`]): registry
//! lookup, path template rendering, URL assembly, credential attachment,
//! dispatch, and status classification. The per-resource methods further
//! down are thin wrappers that name a registered operation and forward to
//! `execute`.
//!
//! # Security
//!
//! Credentials are attached as an HTTP Basic `Authorization` header and are
//! never logged.

use std::collections::BTreeMap;

use reqwest::{header, Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::Credentials;
use crate::config::{ApiVersion, Config};
use crate::endpoints::{self, Operation};
use crate::error::ZdeskError;

/// User-Agent header sent with every request.
const USER_AGENT: &str = concat!("zdesk/", env!("CARGO_PKG_VERSION"));

/// Client for the Zendesk REST API.
///
/// Handles authentication, URL construction, and response classification
/// for all registered API operations. Cloning is cheap and clones share the
/// underlying connection pool, so a single client can serve many tasks.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZdeskClient::new(&config)?;
///
/// let ticket = client.show_ticket(42).await?;
/// ```
#[derive(Clone)]
pub struct ZdeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL of the Zendesk instance, without a trailing slash
    /// (e.g. `https://company.zendesk.com`).
    base_url: String,

    /// Credentials attached to every request.
    /// SECURITY: Never log this value!
    credentials: Credentials,

    /// API version selecting the URL prefix requests are dispatched under.
    version: ApiVersion,
}

impl ZdeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration containing base URL, credentials, API
    ///   version, and timeout
    ///
    /// # Errors
    ///
    /// Returns `ZdeskError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, ZdeskError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(ZdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            version: config.version,
        })
    }

    /// Assembles the absolute URL for a rendered path.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.version.path_prefix(), path)
    }

    /// Dispatches a registered operation.
    ///
    /// This is the single funnel every per-resource method goes through:
    /// the name is resolved against the endpoint registry, the path template
    /// is rendered from `params`, the URL is assembled from the configured
    /// base URL and version prefix, credentials are attached, and the
    /// response is classified against the operation's documented success
    /// status.
    ///
    /// # Arguments
    ///
    /// * `operation` - Registered operation name (e.g. `"show_ticket"`)
    /// * `params` - Path, query, collection, and body parameters
    ///
    /// # Errors
    ///
    /// * `ZdeskError::UnknownOperation` if the name is not registered
    /// * `ZdeskError::MissingParameter` if the path template references a
    ///   placeholder with no supplied value
    /// * `ZdeskError::Transport` if the request fails to complete
    /// * `ZdeskError::RequestFailed` if the response status differs from
    ///   the operation's documented success status
    /// * `ZdeskError::Serialization` if a non-blank response body is not
    ///   valid JSON
    ///
    /// The first two are detected before any request is built, so they
    /// never touch the network.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let response = client
    ///     .execute("show_ticket", RequestParams::new().with_param("id", 42))
    ///     .await?;
    /// ```
    pub async fn execute(
        &self,
        operation: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, ZdeskError> {
        let op = endpoints::lookup(operation)
            .ok_or_else(|| ZdeskError::unknown_operation(operation))?;

        let path = op.render_path(&params.path_params)?;
        let url = self.endpoint_url(&path);

        tracing::debug!(
            operation = operation,
            method = %op.method,
            path = %path,
            "Dispatching Zendesk API request"
        );

        let mut req = self.http.request(op.method.clone(), &url);
        req = self.credentials.apply(req);

        if !params.query.is_empty() {
            req = req.query(&params.query);
        }

        if let Some(collection) = &params.collection {
            req = req.query(collection);
        }

        if let Some(body) = &params.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(ZdeskError::Transport)?;

        self.handle_response(op, response).await
    }

    /// Classifies a response against the operation's documented success
    /// status and converts the payload into an [`ApiResponse`].
    async fn handle_response(
        &self,
        op: &Operation,
        response: Response,
    ) -> Result<ApiResponse, ZdeskError> {
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(ZdeskError::Transport)?;

        tracing::trace!(status = %status, body = %body, "Zendesk API response");

        if status != op.status {
            return Err(ZdeskError::RequestFailed { status, body });
        }

        if !body.trim().is_empty() {
            let json = serde_json::from_str(&body)?;
            return Ok(ApiResponse::Json(json));
        }

        if let Some(location) = location {
            return Ok(ApiResponse::Location(location));
        }

        Ok(ApiResponse::Status(status))
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Lists all tickets in the account.
    pub async fn list_tickets(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_tickets", RequestParams::new().with_collection(options))
            .await
    }

    /// Lists recently viewed tickets.
    pub async fn list_recent_tickets(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_recent_tickets",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Lists the tickets of an organization.
    pub async fn list_organization_tickets(
        &self,
        organization_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_organization_tickets",
            RequestParams::new()
                .with_param("organization_id", organization_id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the tickets a user requested.
    pub async fn list_user_requested_tickets(
        &self,
        user_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_user_requested_tickets",
            RequestParams::new()
                .with_param("user_id", user_id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the tickets a user is CC'd on.
    pub async fn list_user_ccd_tickets(
        &self,
        user_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_user_ccd_tickets",
            RequestParams::new()
                .with_param("user_id", user_id)
                .with_collection(options),
        )
        .await
    }

    /// Shows a single ticket.
    pub async fn show_ticket(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_ticket", RequestParams::new().with_param("id", id))
            .await
    }

    /// Creates a ticket from a full JSON envelope.
    ///
    /// The body is sent untouched, so it must carry the `ticket` wrapper the
    /// API expects.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let response = client
    ///     .create_ticket(serde_json::json!({
    ///         "ticket": {"subject": "Printer not working", "description": "..."}
    ///     }))
    ///     .await?;
    /// ```
    pub async fn create_ticket(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_ticket", RequestParams::new().with_body(body))
            .await
    }

    /// Updates a ticket from a full JSON envelope.
    pub async fn update_ticket(&self, id: u64, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_ticket",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes a ticket.
    pub async fn delete_ticket(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("delete_ticket", RequestParams::new().with_param("id", id))
            .await
    }

    /// Lists the collaborators of a ticket.
    pub async fn list_ticket_collaborators(
        &self,
        id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_ticket_collaborators",
            RequestParams::new()
                .with_param("id", id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the incidents linked to a problem ticket.
    pub async fn list_ticket_incidents(
        &self,
        id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_ticket_incidents",
            RequestParams::new()
                .with_param("id", id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the audit trail of a ticket.
    pub async fn list_ticket_audits(
        &self,
        ticket_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_ticket_audits",
            RequestParams::new()
                .with_param("ticket_id", ticket_id)
                .with_collection(options),
        )
        .await
    }

    /// Shows a single audit of a ticket.
    pub async fn show_ticket_audit(
        &self,
        ticket_id: u64,
        id: u64,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "show_ticket_audit",
            RequestParams::new()
                .with_param("ticket_id", ticket_id)
                .with_param("id", id),
        )
        .await
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Lists all users in the account.
    pub async fn list_users(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_users", RequestParams::new().with_collection(options))
            .await
    }

    /// Lists the users of a group.
    pub async fn list_group_users(
        &self,
        group_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_group_users",
            RequestParams::new()
                .with_param("group_id", group_id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the users of an organization.
    pub async fn list_organization_users(
        &self,
        organization_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_organization_users",
            RequestParams::new()
                .with_param("organization_id", organization_id)
                .with_collection(options),
        )
        .await
    }

    /// Shows a single user.
    pub async fn show_user(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_user", RequestParams::new().with_param("id", id))
            .await
    }

    /// Shows the authenticated user.
    pub async fn show_current_user(&self) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_current_user", RequestParams::new()).await
    }

    /// Creates a user from a full JSON envelope.
    pub async fn create_user(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_user", RequestParams::new().with_body(body))
            .await
    }

    /// Updates a user from a full JSON envelope.
    pub async fn update_user(&self, id: u64, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_user",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("delete_user", RequestParams::new().with_param("id", id))
            .await
    }

    /// Searches users by name or email.
    pub async fn search_users(
        &self,
        query: &str,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "search_users",
            RequestParams::new()
                .with_query("query", query)
                .with_collection(options),
        )
        .await
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Lists all groups in the account.
    pub async fn list_groups(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_groups", RequestParams::new().with_collection(options))
            .await
    }

    /// Lists the groups tickets can be assigned to.
    pub async fn list_assignable_groups(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_assignable_groups",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Shows a single group.
    pub async fn show_group(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_group", RequestParams::new().with_param("id", id))
            .await
    }

    /// Creates a group from a full JSON envelope.
    pub async fn create_group(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_group", RequestParams::new().with_body(body))
            .await
    }

    /// Updates a group from a full JSON envelope.
    pub async fn update_group(&self, id: u64, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_group",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes a group.
    pub async fn delete_group(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("delete_group", RequestParams::new().with_param("id", id))
            .await
    }

    // ========================================================================
    // Organizations
    // ========================================================================

    /// Lists all organizations in the account.
    pub async fn list_organizations(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_organizations",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Autocompletes organization names against a prefix.
    pub async fn autocomplete_organizations(
        &self,
        name: &str,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "autocomplete_organizations",
            RequestParams::new().with_query("name", name),
        )
        .await
    }

    /// Shows a single organization.
    pub async fn show_organization(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "show_organization",
            RequestParams::new().with_param("id", id),
        )
        .await
    }

    /// Creates an organization from a full JSON envelope.
    pub async fn create_organization(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_organization", RequestParams::new().with_body(body))
            .await
    }

    /// Updates an organization from a full JSON envelope.
    pub async fn update_organization(
        &self,
        id: u64,
        body: Value,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_organization",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes an organization.
    pub async fn delete_organization(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "delete_organization",
            RequestParams::new().with_param("id", id),
        )
        .await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Lists the most used tags.
    pub async fn list_tags(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_tags", RequestParams::new().with_collection(options))
            .await
    }

    /// Autocompletes tag names against a prefix.
    pub async fn autocomplete_tags(&self, name: &str) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "autocomplete_tags",
            RequestParams::new().with_query("name", name),
        )
        .await
    }

    // ========================================================================
    // Ticket fields
    // ========================================================================

    /// Lists the ticket fields of the account.
    pub async fn list_ticket_fields(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_ticket_fields",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Shows a single ticket field.
    pub async fn show_ticket_field(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "show_ticket_field",
            RequestParams::new().with_param("id", id),
        )
        .await
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Lists shared and personal views.
    pub async fn list_views(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_views", RequestParams::new().with_collection(options))
            .await
    }

    /// Lists active views only.
    pub async fn list_active_views(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_active_views",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Shows a single view.
    pub async fn show_view(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_view", RequestParams::new().with_param("id", id))
            .await
    }

    /// Lists the tickets matched by a view.
    pub async fn list_view_tickets(
        &self,
        view_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_view_tickets",
            RequestParams::new()
                .with_param("view_id", view_id)
                .with_collection(options),
        )
        .await
    }

    /// Counts the tickets matched by a view.
    pub async fn count_view_tickets(&self, view_id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "count_view_tickets",
            RequestParams::new().with_param("view_id", view_id),
        )
        .await
    }

    // ========================================================================
    // Macros
    // ========================================================================

    /// Lists the macros of the account.
    pub async fn list_macros(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_macros", RequestParams::new().with_collection(options))
            .await
    }

    /// Shows a single macro.
    pub async fn show_macro(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_macro", RequestParams::new().with_param("id", id))
            .await
    }

    /// Shows the changes a macro would apply.
    pub async fn apply_macro(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("apply_macro", RequestParams::new().with_param("id", id))
            .await
    }

    // ========================================================================
    // Forums
    // ========================================================================

    /// Lists the forums of the account.
    pub async fn list_forums(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_forums", RequestParams::new().with_collection(options))
            .await
    }

    /// Shows a single forum.
    pub async fn show_forum(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_forum", RequestParams::new().with_param("id", id))
            .await
    }

    /// Creates a forum from a full JSON envelope.
    pub async fn create_forum(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_forum", RequestParams::new().with_body(body))
            .await
    }

    /// Updates a forum from a full JSON envelope.
    pub async fn update_forum(&self, id: u64, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_forum",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes a forum.
    pub async fn delete_forum(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("delete_forum", RequestParams::new().with_param("id", id))
            .await
    }

    // ========================================================================
    // Topics
    // ========================================================================

    /// Lists all forum topics.
    pub async fn list_topics(&self, options: CollectionParams) -> Result<ApiResponse, ZdeskError> {
        self.execute("list_topics", RequestParams::new().with_collection(options))
            .await
    }

    /// Lists the topics of a forum.
    pub async fn list_forum_topics(
        &self,
        forum_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_forum_topics",
            RequestParams::new()
                .with_param("forum_id", forum_id)
                .with_collection(options),
        )
        .await
    }

    /// Lists the topics a user created.
    pub async fn list_user_topics(
        &self,
        user_id: u64,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_user_topics",
            RequestParams::new()
                .with_param("user_id", user_id)
                .with_collection(options),
        )
        .await
    }

    /// Shows a single topic.
    pub async fn show_topic(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_topic", RequestParams::new().with_param("id", id))
            .await
    }

    /// Creates a topic from a full JSON envelope.
    pub async fn create_topic(&self, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute("create_topic", RequestParams::new().with_body(body))
            .await
    }

    /// Updates a topic from a full JSON envelope.
    pub async fn update_topic(&self, id: u64, body: Value) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "update_topic",
            RequestParams::new().with_param("id", id).with_body(body),
        )
        .await
    }

    /// Deletes a topic.
    pub async fn delete_topic(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("delete_topic", RequestParams::new().with_param("id", id))
            .await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Searches across tickets, users, and organizations.
    ///
    /// The query uses the Zendesk search syntax, e.g.
    /// `"type:ticket status:open"`.
    pub async fn search(
        &self,
        query: &str,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "search",
            RequestParams::new()
                .with_query("query", query)
                .with_collection(options),
        )
        .await
    }

    /// Counts the results a search would return.
    pub async fn search_count(&self, query: &str) -> Result<ApiResponse, ZdeskError> {
        self.execute("search_count", RequestParams::new().with_query("query", query))
            .await
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    /// Shows the metadata of an attachment.
    pub async fn show_attachment(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_attachment", RequestParams::new().with_param("id", id))
            .await
    }

    /// Deletes an attachment.
    pub async fn delete_attachment(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "delete_attachment",
            RequestParams::new().with_param("id", id),
        )
        .await
    }

    // ========================================================================
    // Satisfaction ratings
    // ========================================================================

    /// Lists the satisfaction ratings received.
    pub async fn list_satisfaction_ratings(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_satisfaction_ratings",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Shows a single satisfaction rating.
    pub async fn show_satisfaction_rating(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "show_satisfaction_rating",
            RequestParams::new().with_param("id", id),
        )
        .await
    }

    // ========================================================================
    // Activities
    // ========================================================================

    /// Lists the activity stream of the authenticated agent.
    pub async fn list_activities(
        &self,
        options: CollectionParams,
    ) -> Result<ApiResponse, ZdeskError> {
        self.execute(
            "list_activities",
            RequestParams::new().with_collection(options),
        )
        .await
    }

    /// Shows a single activity.
    pub async fn show_activity(&self, id: u64) -> Result<ApiResponse, ZdeskError> {
        self.execute("show_activity", RequestParams::new().with_param("id", id))
            .await
    }
}

/// Parameters for a dispatched operation.
///
/// Bundles the inputs an operation can take: values for `{placeholder}`
/// tokens in the path template, free query string pairs, pagination and
/// ordering options, and a JSON body.
///
/// # Example
///
/// ```ignore
/// let params = RequestParams::new()
///     .with_param("id", 42)
///     .with_collection(CollectionParams::new().with_per_page(50));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    /// Values substituted into `{placeholder}` tokens of the path template.
    /// Supplied values that no placeholder references are ignored.
    path_params: BTreeMap<String, String>,

    /// Free query string pairs appended to the URL.
    query: Vec<(String, String)>,

    /// Pagination and ordering parameters.
    collection: Option<CollectionParams>,

    /// JSON request body.
    body: Option<Value>,
}

impl RequestParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a value for a `{placeholder}` token in the path template.
    ///
    /// The value is percent-encoded when the template is rendered.
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.insert(name.into(), value.to_string());
        self
    }

    /// Appends a query string pair.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets pagination and ordering parameters.
    pub fn with_collection(mut self, collection: CollectionParams) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Sets the JSON request body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Pagination and ordering options shared by collection endpoints.
///
/// Fields left unset are omitted from the query string, so the default
/// value adds nothing to the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionParams {
    /// Page number to fetch (the API counts from 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Sort direction, `"asc"` or `"desc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl CollectionParams {
    /// Creates empty options (the server applies its own defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number to fetch.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort direction (`"asc"` or `"desc"`).
    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }
}

/// The classified payload of a successful operation.
///
/// Most operations answer with a JSON document. Creation operations may
/// answer with an empty body and a `Location` header naming the new
/// resource, and a few operations answer with an empty body and no
/// `Location` at all; the status alone is returned for those.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Decoded JSON document.
    Json(Value),

    /// `Location` header of a bodyless response.
    Location(String),

    /// Status of a bodyless response carrying no `Location` header.
    Status(StatusCode),
}

impl ApiResponse {
    /// Returns the decoded document, if the response carried one.
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the response, returning the decoded document if present.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the `Location` header value, if that is what came back.
    pub fn location(&self) -> Option<&str> {
        match self {
            ApiResponse::Location(location) => Some(location),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Creates a ZdeskClient for unit tests without touching the network.
    fn test_client(version: ApiVersion) -> ZdeskClient {
        ZdeskClient {
            http: Client::new(),
            base_url: "https://example.zendesk.com".to_string(),
            credentials: Credentials::basic("agent@example.com", "secret"),
            version,
        }
    }

    #[test]
    fn test_endpoint_url_v2_prefix() {
        let client = test_client(ApiVersion::V2);
        assert_eq!(
            client.endpoint_url("/tickets/42.json"),
            "https://example.zendesk.com/api/v2/tickets/42.json"
        );
    }

    #[test]
    fn test_endpoint_url_v1_has_no_prefix() {
        let client = test_client(ApiVersion::V1);
        assert_eq!(
            client.endpoint_url("/tickets/42.json"),
            "https://example.zendesk.com/tickets/42.json"
        );
    }

    #[test]
    fn test_request_params_builders() {
        let params = RequestParams::new()
            .with_param("id", 42)
            .with_query("query", "printer")
            .with_collection(CollectionParams::new().with_page(2))
            .with_body(json!({"ticket": {"subject": "x"}}));

        assert_eq!(params.path_params.get("id"), Some(&"42".to_string()));
        assert_eq!(
            params.query,
            vec![("query".to_string(), "printer".to_string())]
        );
        assert_eq!(params.collection.unwrap().page, Some(2));
        assert_eq!(params.body.unwrap()["ticket"]["subject"], "x");
    }

    #[test]
    fn test_collection_params_omit_unset_fields() {
        let empty = serde_json::to_value(CollectionParams::new()).unwrap();
        assert_eq!(empty, json!({}));

        let paged = serde_json::to_value(
            CollectionParams::new()
                .with_page(3)
                .with_per_page(50)
                .with_sort_order("desc"),
        )
        .unwrap();
        assert_eq!(paged, json!({"page": 3, "per_page": 50, "sort_order": "desc"}));
    }

    #[test]
    fn test_api_response_json_accessors() {
        let response = ApiResponse::Json(json!({"ticket": {"id": 42}}));
        assert_eq!(response.json().unwrap()["ticket"]["id"], 42);
        assert!(response.location().is_none());
        assert_eq!(response.into_json().unwrap()["ticket"]["id"], 42);
    }

    #[test]
    fn test_api_response_location_accessors() {
        let response =
            ApiResponse::Location("https://example.zendesk.com/tickets/99.json".to_string());
        assert_eq!(
            response.location(),
            Some("https://example.zendesk.com/tickets/99.json")
        );
        assert!(response.json().is_none());
        assert!(response.into_json().is_none());
    }

    #[test]
    fn test_client_new_from_config() {
        let config = Config::new(
            "https://example.zendesk.com",
            Credentials::token("agent@example.com", "apitoken"),
        )
        .unwrap();
        let client = ZdeskClient::new(&config).unwrap();

        assert_eq!(client.base_url, "https://example.zendesk.com");
        assert_eq!(client.version, ApiVersion::V2);
    }
}
