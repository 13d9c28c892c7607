use contracts::system::roles::Role;

use crate::shared::api::{ApiContext, ListDataClient};
use crate::shared::params::sort::SORT_KEY;
use crate::shared::params::ParameterMap;

pub const ROLES_PATH: &str = "roles/";

/// Pulp's name for the sort parameter
pub const ORDERING_KEY: &str = "ordering";

/// Client for pulp roles (`pulp/api/v3/roles/`); list responses use the
/// `count`/`results` envelope
pub fn roles_api(ctx: &ApiContext) -> ListDataClient<Role> {
    ctx.client(ctx.config().pulp_path(ROLES_PATH))
}

/// Pages keep `sort` in the URL like every other list; pulp wants `ordering`
pub fn pulp_list_params(params: &ParameterMap) -> ParameterMap {
    let mut params = params.clone();
    if let Some(sort) = params.remove(SORT_KEY) {
        params.insert(ORDERING_KEY, sort);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::{CookieJar, Method};
    use crate::shared::api_utils::pulp_id_from_href;
    use serde_json::json;
    use std::rc::Rc;

    fn context() -> (ApiContext, Rc<RecordingTransport>) {
        let transport = Rc::new(RecordingTransport::new());
        let ctx = ApiContext::load(
            None,
            transport.clone(),
            Rc::new(CookieJar::new("csrftoken=abc")),
        )
        .unwrap();
        (ctx, transport)
    }

    #[test]
    fn test_sort_becomes_ordering() {
        let params: ParameterMap = [("sort", "-name"), ("name__icontains", "galaxy")]
            .into_iter()
            .collect();
        let params = pulp_list_params(&params);
        assert_eq!(params.get_text("ordering"), Some("-name"));
        assert!(!params.contains_key("sort"));
        assert_eq!(params.get_text("name__icontains"), Some("galaxy"));
    }

    #[tokio::test]
    async fn test_delete_by_href_id() {
        let (ctx, transport) = context();
        transport.respond(204, "No Content", serde_json::Value::Null);

        let href = "/api/automation-hub/pulp/api/v3/roles/0186d1e6/";
        let id = pulp_id_from_href(href).unwrap();
        roles_api(&ctx).delete(id).await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "/api/automation-hub/pulp/api/v3/roles/0186d1e6/");
        assert_eq!(request.header("X-CSRFToken"), Some("abc"));
    }

    #[tokio::test]
    async fn test_list_decodes_pulp_envelope() {
        let (ctx, transport) = context();
        transport.respond(
            200,
            "OK",
            json!({
                "count": 31,
                "next": "/api/automation-hub/pulp/api/v3/roles/?limit=10&offset=10",
                "previous": null,
                "results": [
                    {
                        "pulp_href": "/api/automation-hub/pulp/api/v3/roles/0186d1e6/",
                        "name": "galaxy.collection_admin",
                        "description": null,
                        "permissions": ["ansible.add_collection"],
                        "locked": true,
                        "pulp_created": "2023-02-20T10:11:12Z"
                    }
                ]
            }),
        );

        let params: ParameterMap = [("sort", "name"), ("page", "1")].into_iter().collect();
        let result = roles_api(&ctx).list(Some(&pulp_list_params(&params))).await.unwrap();

        assert_eq!(result.total_count, 31);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "galaxy.collection_admin");
        assert!(result.items[0].locked);
        assert_eq!(
            transport.last().url,
            "/api/automation-hub/pulp/api/v3/roles/?limit=10&offset=0&ordering=name"
        );
    }
}
