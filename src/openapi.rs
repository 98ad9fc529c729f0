use utoipa::OpenApi;

use crate::api::todo;
use crate::models::{Todo, TodoPayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "A simple Todo API"
    ),
    paths(
        todo::list_todos,
        todo::get_todo,
        todo::create_todo,
        todo::update_todo,
        todo::delete_todo,
    ),
    components(schemas(Todo, TodoPayload)),
    tags((name = "Todo", description = "The Todo managing API"))
)]
pub struct ApiDoc;

const SWAGGER_UI_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{{title}}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "{{spec_url}}", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Swagger UI page that loads the document served at `spec_url`.
pub fn swagger_ui_html(spec_url: &str) -> String {
    SWAGGER_UI_TEMPLATE
        .replace("{{title}}", &ApiDoc::openapi().info.title)
        .replace("{{spec_url}}", spec_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_todo_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let collection = paths.get("/api/Todo").expect("collection path");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = paths.get("/api/Todo/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn registers_todo_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.schemas.contains_key("Todo"));
        assert!(components.schemas.contains_key("TodoPayload"));
    }

    #[test]
    fn swagger_page_points_at_spec_url() {
        let html = swagger_ui_html("/api-docs/openapi.json");

        assert!(html.contains("<title>Todo API</title>"));
        assert!(html.contains(r#"url: "/api-docs/openapi.json""#));
        assert!(!html.contains("{{"));
    }
}
