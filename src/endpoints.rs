//! Endpoint registry for the Zendesk REST API.
//!
//! This module is the declarative half of the client: a static table mapping
//! every supported operation name to its HTTP method, its URL path template,
//! and the success status the service documents for it. The table is pure
//! data; the only behavior here is name lookup and path template rendering.
//!
//! Path templates use `{placeholder}` tokens (e.g. `/tickets/{id}.json`)
//! substituted from caller-supplied parameters at dispatch time. Templates
//! are written without the API version prefix; the client prepends
//! `/api/v2` (or nothing, for v1) when building the final URL.

use std::collections::BTreeMap;

use reqwest::{Method, StatusCode};

use crate::error::ZdeskError;

/// One registered API operation.
///
/// Descriptors are immutable, defined at compile time, and shared read-only
/// across all calls.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Logical operation name, e.g. `"show_ticket"`.
    pub name: &'static str,

    /// HTTP method the operation is invoked with.
    pub method: Method,

    /// URL path template with `{placeholder}` tokens.
    pub path: &'static str,

    /// The success status the service documents for this operation.
    /// Any other response status fails the call.
    pub status: StatusCode,
}

const fn get(name: &'static str, path: &'static str) -> Operation {
    Operation {
        name,
        method: Method::GET,
        path,
        status: StatusCode::OK,
    }
}

const fn post(name: &'static str, path: &'static str) -> Operation {
    Operation {
        name,
        method: Method::POST,
        path,
        status: StatusCode::CREATED,
    }
}

const fn put(name: &'static str, path: &'static str) -> Operation {
    Operation {
        name,
        method: Method::PUT,
        path,
        status: StatusCode::OK,
    }
}

const fn delete(name: &'static str, path: &'static str) -> Operation {
    Operation {
        name,
        method: Method::DELETE,
        path,
        status: StatusCode::OK,
    }
}

/// Every operation the client can dispatch, grouped by resource.
///
/// Creation operations answer 201, everything else 200.
pub static OPERATIONS: &[Operation] = &[
    // Tickets
    get("list_tickets", "/tickets.json"),
    get("list_recent_tickets", "/tickets/recent.json"),
    get(
        "list_organization_tickets",
        "/organizations/{organization_id}/tickets.json",
    ),
    get(
        "list_user_requested_tickets",
        "/users/{user_id}/tickets/requested.json",
    ),
    get("list_user_ccd_tickets", "/users/{user_id}/tickets/ccd.json"),
    get("show_ticket", "/tickets/{id}.json"),
    post("create_ticket", "/tickets.json"),
    put("update_ticket", "/tickets/{id}.json"),
    delete("delete_ticket", "/tickets/{id}.json"),
    get("list_ticket_collaborators", "/tickets/{id}/collaborators.json"),
    get("list_ticket_incidents", "/tickets/{id}/incidents.json"),
    get("list_ticket_audits", "/tickets/{ticket_id}/audits.json"),
    get("show_ticket_audit", "/tickets/{ticket_id}/audits/{id}.json"),
    // Users
    get("list_users", "/users.json"),
    get("list_group_users", "/groups/{group_id}/users.json"),
    get(
        "list_organization_users",
        "/organizations/{organization_id}/users.json",
    ),
    get("show_user", "/users/{id}.json"),
    get("show_current_user", "/users/me.json"),
    post("create_user", "/users.json"),
    put("update_user", "/users/{id}.json"),
    delete("delete_user", "/users/{id}.json"),
    get("search_users", "/users/search.json"),
    // Groups
    get("list_groups", "/groups.json"),
    get("list_assignable_groups", "/groups/assignable.json"),
    get("show_group", "/groups/{id}.json"),
    post("create_group", "/groups.json"),
    put("update_group", "/groups/{id}.json"),
    delete("delete_group", "/groups/{id}.json"),
    // Organizations
    get("list_organizations", "/organizations.json"),
    get("autocomplete_organizations", "/organizations/autocomplete.json"),
    get("show_organization", "/organizations/{id}.json"),
    post("create_organization", "/organizations.json"),
    put("update_organization", "/organizations/{id}.json"),
    delete("delete_organization", "/organizations/{id}.json"),
    // Tags
    get("list_tags", "/tags.json"),
    get("autocomplete_tags", "/autocomplete/tags.json"),
    // Ticket fields
    get("list_ticket_fields", "/ticket_fields.json"),
    get("show_ticket_field", "/ticket_fields/{id}.json"),
    // Views
    get("list_views", "/views.json"),
    get("list_active_views", "/views/active.json"),
    get("show_view", "/views/{id}.json"),
    get("list_view_tickets", "/views/{view_id}/tickets.json"),
    get("count_view_tickets", "/views/{view_id}/count.json"),
    // Macros
    get("list_macros", "/macros.json"),
    get("show_macro", "/macros/{id}.json"),
    get("apply_macro", "/macros/{id}/apply.json"),
    // Forums
    get("list_forums", "/forums.json"),
    get("show_forum", "/forums/{id}.json"),
    post("create_forum", "/forums.json"),
    put("update_forum", "/forums/{id}.json"),
    delete("delete_forum", "/forums/{id}.json"),
    // Topics
    get("list_topics", "/topics.json"),
    get("list_forum_topics", "/forums/{forum_id}/topics.json"),
    get("list_user_topics", "/users/{user_id}/topics.json"),
    get("show_topic", "/topics/{id}.json"),
    post("create_topic", "/topics.json"),
    put("update_topic", "/topics/{id}.json"),
    delete("delete_topic", "/topics/{id}.json"),
    // Search
    get("search", "/search.json"),
    get("search_count", "/search/count.json"),
    // Attachments
    get("show_attachment", "/attachments/{id}.json"),
    delete("delete_attachment", "/attachments/{id}.json"),
    // Satisfaction ratings
    get("list_satisfaction_ratings", "/satisfaction_ratings.json"),
    get("show_satisfaction_rating", "/satisfaction_ratings/{id}.json"),
    // Activities
    get("list_activities", "/activities.json"),
    get("show_activity", "/activities/{id}.json"),
];

/// Resolves an operation name against the registry.
pub fn lookup(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|operation| operation.name == name)
}

/// Enumerates the `{placeholder}` names referenced by a path template, in
/// order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

impl Operation {
    /// Renders the path template, substituting every placeholder with the
    /// percent-encoded value supplied for it.
    ///
    /// # Errors
    ///
    /// Returns `ZdeskError::MissingParameter` naming this operation and the
    /// first unresolved placeholder; a `{` with no closing brace is reported
    /// the same way, naming the remainder of the template. Rendering happens
    /// before any request is built, so a failed render never reaches the
    /// network.
    pub fn render_path(&self, params: &BTreeMap<String, String>) -> Result<String, ZdeskError> {
        let mut rendered = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                // Unterminated token, reported like an unsupplied placeholder.
                return Err(ZdeskError::missing_parameter(self.name, after));
            };
            let name = &after[..end];
            let value = params
                .get(name)
                .ok_or_else(|| ZdeskError::missing_parameter(self.name, name))?;
            rendered.push_str(&urlencoding::encode(value));
            rest = &after[end + 1..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn params_for(operation: &Operation) -> BTreeMap<String, String> {
        placeholders(operation.path)
            .into_iter()
            .map(|name| (name.to_string(), "123".to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_known_operation() {
        let operation = lookup("show_ticket").unwrap();
        assert_eq!(operation.method, Method::GET);
        assert_eq!(operation.path, "/tickets/{id}.json");
        assert_eq!(operation.status, StatusCode::OK);
    }

    #[test]
    fn test_lookup_unknown_operation() {
        assert!(lookup("frobnicate_ticket").is_none());
    }

    #[test]
    fn test_creation_operations_expect_201() {
        for operation in OPERATIONS {
            if operation.method == Method::POST {
                assert_eq!(
                    operation.status,
                    StatusCode::CREATED,
                    "{} should expect 201",
                    operation.name
                );
            } else {
                assert_eq!(
                    operation.status,
                    StatusCode::OK,
                    "{} should expect 200",
                    operation.name
                );
            }
        }
    }

    #[test]
    fn test_operation_names_are_unique() {
        let names: BTreeSet<&str> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn test_templates_are_well_formed() {
        for operation in OPERATIONS {
            assert!(
                operation.path.starts_with('/'),
                "{}: template must be rooted",
                operation.name
            );
            assert!(
                operation.path.ends_with(".json"),
                "{}: template must request the JSON representation",
                operation.name
            );
            assert_eq!(
                operation.path.matches('{').count(),
                operation.path.matches('}').count(),
                "{}: unbalanced braces",
                operation.name
            );
            for name in placeholders(operation.path) {
                assert!(
                    !name.is_empty()
                        && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_'),
                    "{}: bad placeholder name {:?}",
                    operation.name,
                    name
                );
            }
        }
    }

    #[test]
    fn test_every_template_renders_without_leftover_tokens() {
        for operation in OPERATIONS {
            let rendered = operation.render_path(&params_for(operation)).unwrap();
            assert!(
                !rendered.contains('{') && !rendered.contains('}'),
                "{}: unresolved tokens in {:?}",
                operation.name,
                rendered
            );
        }
    }

    #[test]
    fn test_placeholders_extraction() {
        assert_eq!(placeholders("/tickets.json"), Vec::<&str>::new());
        assert_eq!(placeholders("/tickets/{id}.json"), vec!["id"]);
        assert_eq!(
            placeholders("/tickets/{ticket_id}/audits/{id}.json"),
            vec!["ticket_id", "id"]
        );
    }

    #[test]
    fn test_render_path_substitutes_value() {
        let operation = lookup("show_ticket").unwrap();
        let mut params = BTreeMap::new();
        params.insert("id".to_string(), "42".to_string());
        assert_eq!(operation.render_path(&params).unwrap(), "/tickets/42.json");
    }

    #[test]
    fn test_render_path_substitutes_multiple_values() {
        let operation = lookup("show_ticket_audit").unwrap();
        let mut params = BTreeMap::new();
        params.insert("ticket_id".to_string(), "42".to_string());
        params.insert("id".to_string(), "7".to_string());
        assert_eq!(
            operation.render_path(&params).unwrap(),
            "/tickets/42/audits/7.json"
        );
    }

    #[test]
    fn test_render_path_percent_encodes() {
        let operation = lookup("show_ticket").unwrap();
        let mut params = BTreeMap::new();
        params.insert("id".to_string(), "a/b c".to_string());
        assert_eq!(
            operation.render_path(&params).unwrap(),
            "/tickets/a%2Fb%20c.json"
        );
    }

    #[test]
    fn test_render_path_missing_parameter() {
        let operation = lookup("show_ticket").unwrap();
        let err = operation.render_path(&BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err,
            ZdeskError::MissingParameter { ref operation, ref placeholder }
                if operation == "show_ticket" && placeholder == "id"
        ));
    }

    #[test]
    fn test_render_path_rejects_unterminated_token() {
        let operation = Operation {
            name: "show_widget",
            method: Method::GET,
            path: "/widgets/{id.json",
            status: StatusCode::OK,
        };
        let mut params = BTreeMap::new();
        params.insert("id".to_string(), "42".to_string());
        let err = operation.render_path(&params).unwrap_err();
        assert!(matches!(
            err,
            ZdeskError::MissingParameter { ref operation, ref placeholder }
                if operation == "show_widget" && placeholder == "id.json"
        ));
    }

    #[test]
    fn test_render_path_ignores_extra_parameters() {
        let operation = lookup("list_tickets").unwrap();
        let mut params = BTreeMap::new();
        params.insert("id".to_string(), "42".to_string());
        assert_eq!(operation.render_path(&params).unwrap(), "/tickets.json");
    }
}
