//! Failure injection tests for the proxy.

use std::time::{Duration, Instant};

use path_proxy::config::ProxyConfig;

mod common;

#[tokio::test]
async fn test_unreachable_origin_is_bad_gateway() {
    let dead = common::closed_port().await;
    let proxy = common::start_proxy(ProxyConfig::default()).await;

    let res = tokio::time::timeout(
        Duration::from_secs(10),
        common::client().get(proxy.url_for(&format!("http://{dead}/get"))).send(),
    )
    .await
    .expect("caller must not be left hanging")
    .expect("Proxy unreachable");

    assert_eq!(res.status(), 502);
    let body = res.text().await.unwrap();
    assert!(body.starts_with("Proxy error: "), "{body}");
    assert!(body.to_ascii_lowercase().contains("connect"), "{body}");
}

#[tokio::test]
async fn test_unresolvable_host_is_bad_gateway() {
    let proxy = common::start_proxy(ProxyConfig::default()).await;

    let res = common::client()
        .get(proxy.url_for("http://no-such-host.invalid/"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    assert!(res.text().await.unwrap().starts_with("Proxy error: "));
}

#[tokio::test]
async fn test_non_http_scheme_fails_at_dispatch() {
    let origin = common::start_echo_origin().await;
    let proxy = common::start_proxy(ProxyConfig::default()).await;

    let res = common::client()
        .get(proxy.url_for(&format!("ftp://{origin}/file")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
}

#[tokio::test]
async fn test_upstream_timeout_is_bad_gateway() {
    let origin = common::start_slow_origin(Duration::from_secs(5), "late").await;
    let mut config = ProxyConfig::default();
    config.timeouts.upstream_secs = Some(1);
    let proxy = common::start_proxy(config).await;

    let start = Instant::now();
    let res = common::client()
        .get(proxy.url_for(&format!("http://{origin}/")))
        .send()
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(4));
    assert_eq!(res.status(), 502);
    assert_eq!(
        res.text().await.unwrap(),
        "Proxy error: upstream did not respond within 1s"
    );
}

#[tokio::test]
async fn test_truncated_body_aborts_client_connection() {
    let origin = common::start_truncating_origin(1024, 16).await;
    let proxy = common::start_proxy(ProxyConfig::default()).await;

    let res = common::client()
        .get(proxy.url_for(&format!("http://{origin}/big")))
        .send()
        .await
        .unwrap();

    // Headers were already relayed, so the failure can only surface as a
    // broken body, never as a rewritten status.
    assert_eq!(res.status(), 200);
    assert!(res.bytes().await.is_err());
}

#[tokio::test]
async fn test_slow_origin_does_not_block_other_requests() {
    let slow = common::start_slow_origin(Duration::from_secs(3), "slow").await;
    let fast = common::start_slow_origin(Duration::ZERO, "fast").await;
    let proxy = common::start_proxy(ProxyConfig::default()).await;
    let client = common::client();

    let slow_url = proxy.url_for(&format!("http://{slow}/"));
    let slow_client = client.clone();
    let slow_request = tokio::spawn(async move {
        slow_client.get(slow_url).send().await.unwrap().text().await.unwrap()
    });

    // let the slow request reach its origin first
    tokio::time::sleep(Duration::from_millis(100)).await;

    let start = Instant::now();
    let res = client
        .get(proxy.url_for(&format!("http://{fast}/")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "fast");
    assert!(
        start.elapsed() < Duration::from_secs(1),
        "fast request waited {:?}",
        start.elapsed()
    );

    assert_eq!(slow_request.await.unwrap(), "slow");
}
