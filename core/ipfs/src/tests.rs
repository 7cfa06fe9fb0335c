use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::{
    resolve_uri,
    ApiEndpoint,
    Config,
    Credentials,
    Error,
    IpfsClient,
    NftMetadata,
    Protocol,
};

const UPLOADED_CID: &str = "QmcZcBrDxzXogmpGoh1jU3AjSjGTqHVoM4pNtejAEeMc5J";
// base64("project:secret")
const EXPECTED_AUTH: &str = "Basic cHJvamVjdDpzZWNyZXQ=";

async fn get_document(Path(cid): Path<String>) -> Result<Json<Value>, StatusCode> {
    match cid.as_str() {
        "metadata" => Ok(Json(json!({
            "name": "Sunrise",
            "description": "First light",
            "image": "ipfs://image-cid",
            "nft": "0x0000000000000000000000000000000000000001",
            "attributes": [{ "trait_type": "sky", "value": "orange" }],
        }))),
        "bare" => Ok(Json(json!({ "name": "Bare" }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn add_file(headers: HeaderMap, body: Bytes) -> Result<Json<Value>, StatusCode> {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == EXPECTED_AUTH)
        .unwrap_or(false);
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }

    if !String::from_utf8_lossy(&body).contains("hello ipfs") {
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(json!({
        "Name": "file",
        "Hash": UPLOADED_CID,
        "Size": "18",
    })))
}

async fn spawn_server() -> SocketAddr {
    let router = Router::new()
        .route("/ipfs/:cid", get(get_document))
        .route("/api/v0/add", post(add_file));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);
    addr
}

fn test_config(addr: SocketAddr) -> Config {
    Config {
        gateway: format!("http://{addr}/ipfs/"),
        api: ApiEndpoint {
            protocol: Protocol::Http,
            authority: addr.to_string(),
            path: "/api/v0/".to_string(),
        },
        credentials: None,
        request_timeout: Duration::from_secs(5),
    }
}

#[test]
fn test_resolve_uri() {
    let gateway = "https://gateway.example/ipfs/";
    assert_eq!(
        resolve_uri(gateway, "ipfs://bafy/1.json"),
        "https://gateway.example/ipfs/bafy/1.json"
    );
    // Only the leading scheme is rewritten.
    assert_eq!(
        resolve_uri(gateway, "ipfs://a/ipfs://b"),
        "https://gateway.example/ipfs/a/ipfs://b"
    );
    assert_eq!(
        resolve_uri(gateway, "https://host/token/1"),
        "https://host/token/1"
    );
}

#[test]
fn test_api_method_url() {
    let config = Config::default();
    assert_eq!(
        config.api.method_url("add").unwrap().as_str(),
        "https://ipfs.infura.io:5001/api/v0/add"
    );
}

#[test]
fn test_credentials_debug_is_redacted() {
    let credentials = Credentials::new("project", "secret");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("project"));
    assert!(!debug.contains("secret\""));
}

#[tokio::test]
async fn test_fetch_metadata_resolves_image() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr)).unwrap();

    let metadata = client.fetch_metadata("ipfs://metadata").await.unwrap();

    assert_eq!(metadata.name.as_deref(), Some("Sunrise"));
    assert_eq!(metadata.description.as_deref(), Some("First light"));
    assert_eq!(
        metadata.image,
        Some(format!("http://{addr}/ipfs/image-cid"))
    );
    assert_eq!(
        metadata.nft.as_deref(),
        Some("0x0000000000000000000000000000000000000001")
    );
    assert!(metadata.extra.contains_key("attributes"));
}

#[tokio::test]
async fn test_fetch_metadata_with_missing_fields() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr)).unwrap();

    let metadata = client.fetch_metadata("ipfs://bare").await.unwrap();

    assert_eq!(
        metadata,
        NftMetadata {
            name: Some("Bare".to_string()),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_fetch_metadata_not_found() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr)).unwrap();

    let err = client.fetch_metadata("ipfs://missing").await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_upload_with_credentials() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr))
        .unwrap()
        .with_credentials(Credentials::new("project", "secret"));

    let uri = client.upload(b"hello ipfs".to_vec()).await.unwrap();

    assert_eq!(uri, format!("ipfs://{UPLOADED_CID}"));
}

#[tokio::test]
async fn test_upload_json() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr))
        .unwrap()
        .with_credentials(Credentials::new("project", "secret"));

    let uri = client
        .upload_json(&json!({ "greeting": "hello ipfs" }))
        .await
        .unwrap();

    assert_eq!(uri, format!("ipfs://{UPLOADED_CID}"));
}

#[tokio::test]
async fn test_upload_without_credentials_is_rejected() {
    let addr = spawn_server().await;
    let client = IpfsClient::new(test_config(addr)).unwrap();

    let err = client.add(b"hello ipfs".to_vec()).await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 401, .. }));
}
