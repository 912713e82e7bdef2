//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.
mod common;
use api_endpoints::{ClientBuilder, Error, ModifyVersionOptions, StatusValue, VersionSelector};
use assert_json_diff::assert_json_include;
use async_trait::async_trait;
use http::Extensions;
use mockito::Matcher;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use serde_json::json;

const VERSIONS_PATH: &str = "/api-definitions/v2/endpoints/42/versions";

/// Test Client.list_versions().
#[tokio::test]
async fn test_list_versions() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[1, 2, 3]).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let versions = client.list_versions(42).await.unwrap();

    assert_eq!(versions.api_endpoint_id, 42);
    assert_eq!(versions.api_endpoint_name, "bookstore");
    let numbers: Vec<u64> = versions
        .api_versions
        .iter()
        .map(|v| v.version_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(versions.api_versions[2].based_on, Some(2));
    assert_eq!(versions.api_versions[0].based_on, None);

    versions_mock.assert_async().await;
}

/// Test Client.get_version() with `latest` picks the last listed version.
#[tokio::test]
async fn test_get_latest_version() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[1, 2, 3]).to_string())
        .create_async()
        .await;
    let detail_mock = server
        .mock("GET", "/api-definitions/v2/endpoints/42/versions/3/resources-detail")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 3).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let endpoint = client
        .get_version(42, "latest".parse().unwrap())
        .await
        .unwrap();

    assert_eq!(endpoint.version_number, Some(3));
    assert_eq!(endpoint.api_resources.len(), 1);
    assert_eq!(
        endpoint.staging_version.and_then(|v| v.status),
        Some(StatusValue::Active)
    );

    versions_mock.assert_async().await;
    detail_mock.assert_async().await;
}

/// `latest` is the last version in server order, not the highest number.
#[tokio::test]
async fn test_get_latest_version_uses_server_order() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[3, 1, 2]).to_string())
        .create_async()
        .await;
    let highest_mock = server
        .mock("GET", "/api-definitions/v2/endpoints/42/versions/3/resources-detail")
        .expect(0)
        .create_async()
        .await;
    let detail_mock = server
        .mock("GET", "/api-definitions/v2/endpoints/42/versions/2/resources-detail")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 2).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let endpoint = client
        .get_version(42, VersionSelector::Latest)
        .await
        .unwrap();

    assert_eq!(endpoint.version_number, Some(2));

    versions_mock.assert_async().await;
    highest_mock.assert_async().await;
    detail_mock.assert_async().await;
}

/// Test Client.get_version() with an explicit number does not list versions.
#[tokio::test]
async fn test_get_numbered_version() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .expect(0)
        .create_async()
        .await;
    let detail_mock = server
        .mock("GET", "/api-definitions/v2/endpoints/42/versions/2/resources-detail")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 2).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let endpoint = client
        .get_version(42, VersionSelector::Number(2))
        .await
        .unwrap();

    let actual = serde_json::to_value(&endpoint).unwrap();
    assert_json_include!(
        actual: actual,
        expected: json!({
            "apiEndPointId": 42,
            "apiEndPointName": "bookstore",
            "versionNumber": 2,
            "apiEndPointHosts": ["books.example.com"],
            "apiResources": [{"resourcePath": "/books"}]
        })
    );

    versions_mock.assert_async().await;
    detail_mock.assert_async().await;
}

/// `latest` on an endpoint without versions is a NotFound error.
#[tokio::test]
async fn test_get_latest_version_without_versions() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[]).to_string())
        .create_async()
        .await;
    let detail_mock = server
        .mock("GET", Matcher::Regex(r"/resources-detail$".to_string()))
        .expect(0)
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let err = client
        .get_version(42, VersionSelector::Latest)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { endpoint_id: 42 }));

    versions_mock.assert_async().await;
    detail_mock.assert_async().await;
}

/// Test Client.modify_version() sends only the fields that are set.
#[tokio::test]
async fn test_modify_version_sends_only_set_fields() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let modify_mock = server
        .mock("PUT", "/api-definitions/v2/endpoints/42/versions/3")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"apiEndPointName": "library"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 3).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let options = ModifyVersionOptions::new().with_name("library");
    let endpoint = client
        .modify_version(42, VersionSelector::Number(3), &options)
        .await
        .unwrap();

    assert_eq!(endpoint.api_endpoint_id, 42);

    modify_mock.assert_async().await;
}

/// Test Client.modify_version() resolves `latest` before sending the update.
#[tokio::test]
async fn test_modify_latest_version() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[4, 5]).to_string())
        .create_async()
        .await;
    let modify_mock = server
        .mock("PUT", "/api-definitions/v2/endpoints/42/versions/5")
        .match_body(Matcher::Json(json!({
            "description": "Books and more",
            "apiEndPointHosts": ["a.example.com", "b.example.com"],
            "apiEndPointScheme": "https"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 5).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let options = ModifyVersionOptions::new()
        .with_description("Books and more")
        .with_hostnames(vec!["a.example.com".to_string(), "b.example.com".to_string()])
        .with_scheme("https");
    let endpoint = client
        .modify_version(42, VersionSelector::Latest, &options)
        .await
        .unwrap();

    assert_eq!(endpoint.version_number, Some(5));

    versions_mock.assert_async().await;
    modify_mock.assert_async().await;
}

/// Test Client.clone_version().
#[tokio::test]
async fn test_clone_version() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let clone_mock = server
        .mock("POST", "/api-definitions/v2/endpoints/42/versions/2/cloneVersion")
        .match_body(Matcher::Json(json!({})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 4).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let endpoint = client
        .clone_version(42, VersionSelector::Number(2))
        .await
        .unwrap();

    assert_eq!(endpoint.version_number, Some(4));

    clone_mock.assert_async().await;
}

/// Test Client.remove_version() builds the version path from both numbers.
#[tokio::test]
async fn test_remove_version() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let remove_mock = server
        .mock("DELETE", "/api-definitions/v2/endpoints/42/versions/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::endpoint(42, 6).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let endpoint = client.remove_version(42, 7).await.unwrap();

    assert_eq!(endpoint.api_endpoint_id, 42);

    remove_mock.assert_async().await;
}

/// A 404 is surfaced as an API error with the problem document attached.
#[tokio::test]
async fn test_not_found_is_api_error() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let problem = json!({
        "type": "/api-definitions/error-types/not-found",
        "title": "Not Found",
        "detail": "Version 9 of endpoint 42 does not exist",
        "status": 404
    });
    let detail_mock = server
        .mock("GET", "/api-definitions/v2/endpoints/42/versions/9/resources-detail")
        .with_status(404)
        .with_header("content-type", "application/problem+json")
        .with_body(problem.to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let err = client
        .get_version(42, VersionSelector::Number(9))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    match err {
        Error::Api { body, problem, .. } => {
            assert!(body.contains("does not exist"));
            let problem = problem.expect("problem document should be parsed");
            assert_eq!(problem.title, "Not Found");
            assert_eq!(problem.status, Some(404));
        }
        other => panic!("unexpected error {other:?}"),
    }

    detail_mock.assert_async().await;
}

/// A non-JSON error body is kept verbatim.
#[tokio::test]
async fn test_plain_text_api_error() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let remove_mock = server
        .mock("DELETE", "/api-definitions/v2/endpoints/42/versions/1")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let err = client.remove_version(42, 1).await.unwrap_err();

    match err {
        Error::Api {
            status,
            body,
            problem,
        } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(body, "Bad Gateway");
            assert!(problem.is_none());
        }
        other => panic!("unexpected error {other:?}"),
    }

    remove_mock.assert_async().await;
}

/// Malformed JSON is a decode error, not a panic.
#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"apiEndPointId": 42, "apiVersions": [{"#)
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let err = client.list_versions(42).await.unwrap_err();

    match err {
        Error::Decode { body, .. } => assert!(body.starts_with(r#"{"apiEndPointId""#)),
        other => panic!("unexpected error {other:?}"),
    }

    versions_mock.assert_async().await;
}

/// Failing to list versions while resolving `latest` aborts the clone.
#[tokio::test]
async fn test_clone_latest_propagates_list_error() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .with_status(403)
        .with_body("{}")
        .create_async()
        .await;
    let clone_mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = ClientBuilder::new(server.url()).build().unwrap();
    let err = client
        .clone_version(42, VersionSelector::Latest)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));

    versions_mock.assert_async().await;
    clone_mock.assert_async().await;
}

/// Connection failures are transport errors.
#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    common::setup();

    // Ask for any free port, then release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientBuilder::new(format!("http://{}", addr)).build().unwrap();
    let err = client.list_versions(42).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}

struct SigningMiddleware;

#[async_trait]
impl Middleware for SigningMiddleware {
    async fn handle(
        &self,
        mut request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        request.headers_mut().insert(
            reqwest::header::AUTHORIZATION,
            "EG1-HMAC-SHA256 client_token=test".parse().unwrap(),
        );
        next.run(request, extensions).await
    }
}

/// Caller supplied middleware and headers are applied to every request.
#[tokio::test]
async fn test_middleware_and_headers_are_applied() {
    common::setup();

    let mut server = mockito::Server::new_async().await;
    let versions_mock = server
        .mock("GET", VERSIONS_PATH)
        .match_header("authorization", "EG1-HMAC-SHA256 client_token=test")
        .match_header("x-trace-id", "abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::versions(42, &[1]).to_string())
        .create_async()
        .await;

    let client = ClientBuilder::new(format!("{}/", server.url()))
        .with_header("x-trace-id", "abc123")
        .with_middleware(SigningMiddleware)
        .build()
        .unwrap();
    let latest = client.latest_version(42).await.unwrap();

    assert_eq!(latest.version_number, 1);

    versions_mock.assert_async().await;
}
