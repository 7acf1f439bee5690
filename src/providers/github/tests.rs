use super::*;
use crate::updater::ReleaseSource;
use mockito::Server;

const LATEST_PATH: &str = "/repos/MovingBlocks/TerasologyLauncher/releases/latest";

const LATEST_RELEASE: &str = r#"{
  "tag_name": "v4.3.0",
  "name": "TerasologyLauncher 4.3.0",
  "body": "- Faster startup\n- Fixed nightly listing",
  "html_url": "https://github.com/MovingBlocks/TerasologyLauncher/releases/tag/v4.3.0",
  "draft": false,
  "prerelease": false,
  "published_at": "2021-03-01T12:00:00Z",
  "assets": [
    {
      "name": "TerasologyLauncher.zip",
      "browser_download_url": "https://github.com/MovingBlocks/TerasologyLauncher/releases/download/v4.3.0/TerasologyLauncher.zip",
      "size": 1024
    }
  ]
}"#;

fn source(api_url: &str) -> GitHubReleaseSource {
    GitHubReleaseSource::new(
        api_url,
        "MovingBlocks/TerasologyLauncher",
        reqwest::Client::new(),
    )
    .unwrap()
}

#[test]
fn test_release_source_invalid_repo_path() {
    let result = GitHubReleaseSource::new(
        "https://api.github.com",
        "invalid-path",
        reqwest::Client::new(),
    );

    assert!(result.is_err());
    assert!(result.err().unwrap().to_string().contains("owner/repo"));
}

#[test]
fn test_release_source_repo_path_with_multiple_slashes() {
    let result = GitHubReleaseSource::new(
        "https://api.github.com",
        "owner/repo/extra",
        reqwest::Client::new(),
    );

    assert!(result.is_err());
}

#[tokio::test]
async fn test_latest_release_is_converted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LATEST_RELEASE)
        .create_async()
        .await;

    let release = source(&server.url()).latest_release().await.unwrap();

    mock.assert_async().await;
    assert_eq!(release.tag, "v4.3.0");
    assert_eq!(release.name, "TerasologyLauncher 4.3.0");
    assert!(release.changelog.contains("Faster startup"));
    assert_eq!(release.assets.len(), 1);
    assert_eq!(release.assets[0].size, 1024);
    assert_eq!(release.version().unwrap().to_string(), "4.3.0");
}

#[tokio::test]
async fn test_missing_release_yields_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", LATEST_PATH)
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    assert!(source(&server.url()).latest_release().await.is_none());
}

#[tokio::test]
async fn test_garbage_body_yields_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;

    assert!(source(&server.url()).latest_release().await.is_none());
}

#[tokio::test]
async fn test_prerelease_is_ignored() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_body(r#"{"tag_name":"v5.0.0-rc.1","prerelease":true}"#)
        .create_async()
        .await;

    assert!(source(&server.url()).latest_release().await.is_none());
}

#[tokio::test]
async fn test_untitled_release_is_named_after_tag() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_body(r#"{"tag_name":"v4.4.0","name":"","assets":[{"name":"bad","browser_download_url":"nope"}]}"#)
        .create_async()
        .await;

    let release = source(&server.url()).latest_release().await.unwrap();

    assert_eq!(release.name, "v4.4.0");
    assert!(release.changelog.is_empty());
    assert!(release.assets.is_empty());
}

#[tokio::test]
async fn test_unreachable_api_yields_none() {
    assert!(source("http://127.0.0.1:1").latest_release().await.is_none());
}
