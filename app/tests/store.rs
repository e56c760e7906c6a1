use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;

use app::store::{Error, Store};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Binds an ephemeral port, serves `router` on it, and returns the base URL.
async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn two_documents() -> serde_json::Value {
    serde_json::json!({
        "documents": [
            {
                "id": "a",
                "fields": {
                    "title": "Foo",
                    "description": "A web thing",
                    "category": "Web",
                    "coverImage": "https://assets.example.net/foo.webp",
                    "createdAt": "2025-11-02T09:30:00Z",
                },
            },
            {
                "id": "b",
                "fields": {
                    "title": "Bar",
                    "description": "A design thing",
                    "category": "Design",
                    "coverImage": "https://assets.example.net/bar.webp",
                    "createdAt": "2025-10-28T18:00:00Z",
                },
            },
        ],
    })
}

#[tokio::test]
async fn list_projects_decodes_and_preserves_order() {
    setup();

    let router = axum::Router::new().route(
        "/collections/repositories/documents",
        get(|axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
            // The client must ask the store for the ordering, it never
            // re-sorts locally.
            let query = query.unwrap_or_default();
            assert!(query.contains("order_by=createdAt"));
            assert!(query.contains("direction=desc"));
            Json(two_documents())
        }),
    );
    let store = Store::new(serve(router).await, String::from("repositories"));

    let projects = store.list_projects().await.unwrap();
    assert_eq!(2, projects.len());
    assert_eq!("a", projects[0].id);
    assert_eq!("Foo", projects[0].title);
    assert_eq!("Web", projects[0].category);
    assert_eq!("A web thing", projects[0].description);
    assert_eq!("https://assets.example.net/foo.webp", projects[0].cover_image);
    assert_eq!("b", projects[1].id);
    assert_eq!("Bar", projects[1].title);
    assert_eq!("Design", projects[1].category);
}

#[tokio::test]
async fn list_projects_empty_collection() {
    setup();

    let router = axum::Router::new().route(
        "/collections/repositories/documents",
        get(|| async { Json(serde_json::json!({ "documents": [] })) }),
    );
    let store = Store::new(serve(router).await, String::from("repositories"));

    let projects = store.list_projects().await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn list_projects_server_error() {
    setup();

    let router = axum::Router::new().route(
        "/collections/repositories/documents",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let store = Store::new(serve(router).await, String::from("repositories"));

    match store.list_projects().await {
        Err(Error::Status { status, .. }) => {
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), status.as_u16())
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn list_projects_unreachable_store() {
    setup();

    // Grab a port that nothing listens on anymore.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = Store::new(format!("http://{}", addr), String::from("repositories"));

    match store.list_projects().await {
        Err(Error::Http { .. }) => (),
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn list_projects_malformed_document() {
    setup();

    let router = axum::Router::new().route(
        "/collections/repositories/documents",
        get(|| async {
            Json(serde_json::json!({
                "documents": [
                    {
                        "id": "broken",
                        "fields": {
                            "description": "No title, no category",
                            "coverImage": "https://assets.example.net/x.webp",
                            "createdAt": "2025-11-02T09:30:00Z",
                        },
                    },
                ],
            }))
        }),
    );
    let store = Store::new(serve(router).await, String::from("repositories"));

    match store.list_projects().await {
        Err(Error::Decode { id, .. }) => assert_eq!("broken", id),
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn get_project_by_id() {
    setup();

    let router = axum::Router::new().route(
        "/collections/repositories/documents/{id}",
        get(|Path(id): Path<String>| async move {
            if id == "a" {
                Json(serde_json::json!({
                    "id": "a",
                    "fields": {
                        "title": "Foo",
                        "description": "A web thing",
                        "category": "Web",
                        "coverImage": "https://assets.example.net/foo.webp",
                        "createdAt": "2025-11-02T09:30:00Z",
                    },
                }))
                .into_response()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }),
    );
    let store = Store::new(serve(router).await, String::from("repositories"));

    let project = store.get_project("a").await.unwrap();
    assert_eq!("a", project.id);
    assert_eq!("Foo", project.title);

    match store.get_project("nope").await {
        Err(Error::NotFound { id }) => assert_eq!("nope", id),
        other => panic!("expected not found, got {:?}", other),
    }
}
