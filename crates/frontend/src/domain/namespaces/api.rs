use contracts::domain::namespace::Namespace;

use crate::shared::api::{ApiContext, ListDataClient};

pub const NAMESPACES_PATH: &str = "namespaces/";

/// Namespaces as seen by the UI API; `my-namespaces/` lists only the
/// ones the current user can manage
pub fn namespaces_api(ctx: &ApiContext) -> ListDataClient<Namespace> {
    ctx.client(ctx.config().ui_path(NAMESPACES_PATH))
}

pub fn my_namespaces_path(ctx: &ApiContext) -> String {
    ctx.config().ui_path("my-namespaces/")
}
