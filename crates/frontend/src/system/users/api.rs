use contracts::system::users::User;

use crate::shared::api::{ApiContext, ListDataClient};

pub const USERS_PATH: &str = "users/";

/// Client for the UI API user endpoint (`_ui/v1/users/`)
pub fn users_api(ctx: &ApiContext) -> ListDataClient<User> {
    ctx.client(ctx.config().ui_path(USERS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::CookieJar;
    use crate::shared::api::Method;
    use contracts::system::users::{CreateUserDto, UpdateUserDto};
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_users_endpoint() {
        let transport = Rc::new(RecordingTransport::new());
        let ctx = ApiContext::load(
            None,
            transport.clone(),
            Rc::new(CookieJar::new("csrftoken=t")),
        )
        .unwrap();
        let api = users_api(&ctx);
        transport.respond(
            200,
            "OK",
            json!({"id": 3, "username": "jdoe", "email": "jdoe@example.com", "date_joined": "2024-03-15T14:02:26Z"}),
        );

        let dto = UpdateUserDto {
            email: Some("jdoe@example.com".to_string()),
            ..Default::default()
        };
        let user = api.patch(3, &dto).await.unwrap();

        assert_eq!(user.email, "jdoe@example.com");
        let request = transport.last();
        assert_eq!(request.url, "/api/automation-hub/_ui/v1/users/3/");
        assert_eq!(request.body.as_deref(), Some(r#"{"email":"jdoe@example.com"}"#));
        assert_eq!(request.header("X-CSRFToken"), Some("t"));
    }

    #[tokio::test]
    async fn test_create_user_posts_to_collection() {
        let transport = Rc::new(RecordingTransport::new());
        let ctx = ApiContext::load(None, transport.clone(), Rc::new(CookieJar::default())).unwrap();
        transport.respond(201, "Created", json!({"id": 9, "username": "newbie"}));

        let dto = CreateUserDto {
            username: "newbie".to_string(),
            password: "s3cret-pass".to_string(),
            ..Default::default()
        };
        let user = users_api(&ctx).create(&dto).await.unwrap();

        assert_eq!(user.id, 9);
        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/api/automation-hub/_ui/v1/users/");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "newbie");
        assert_eq!(body["groups"], json!([]));
        assert_eq!(request.header("X-CSRFToken"), None);
    }
}
