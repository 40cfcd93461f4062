//! Async client tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use middlecoin_sdk::{AsyncMiddlecoinClient, MiddlecoinError};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

fn serve_once(body: Vec<u8>) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/json", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
    });
    (url, handle)
}

#[tokio::test]
async fn fetch_overview_runs_on_blocking_pool() {
    let (url, server) = serve_once(common::to_bytes(&common::sample_document()));
    let client = AsyncMiddlecoinClient::builder().url(url).build().await.unwrap();

    let report = client.fetch_overview().await.unwrap();
    server.join().unwrap();
    client.close().await.unwrap();

    assert_eq!(report.address_reports.len(), 2);
}

#[tokio::test]
async fn fetch_summary_formats_total() {
    let (url, server) = serve_once(common::to_bytes(&common::sample_document()));
    let client = AsyncMiddlecoinClient::builder()
        .url(url)
        .fiat_rate(2.0)
        .build()
        .await
        .unwrap();

    let summary = client
        .fetch_summary(&[common::ADDR_A.to_string(), common::ADDR_B.to_string()])
        .await
        .unwrap();
    server.join().unwrap();
    client.close().await.unwrap();

    assert!(summary.contains("Total Profit(@$2): 11.75\n"));
}

#[tokio::test]
async fn build_rejects_bad_rate() {
    let err = AsyncMiddlecoinClient::builder()
        .fiat_rate(-5.0)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, MiddlecoinError::InvalidArgument(_)));
}

#[tokio::test]
async fn close_releases_client_off_runtime_threads() {
    let (url, server) = serve_once(common::to_bytes(&common::sample_document()));
    let client = AsyncMiddlecoinClient::builder().url(url).build().await.unwrap();

    let count = client
        .run(|c| Ok(c.fetch_overview()?.address_reports.len()))
        .await
        .unwrap();
    server.join().unwrap();

    assert_eq!(count, 2);
    assert_eq!(client.fiat_rate(), 650.0);
    client.close().await.unwrap();
}
