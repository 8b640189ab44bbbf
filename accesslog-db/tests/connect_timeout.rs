//! 응답하지 않는 서버에 대한 연결 타임아웃 (db 불필요)

use std::time::{Duration, Instant};

use tokio::net::TcpListener;

use accesslog_config::DbConfig;
use accesslog_db::{Connect, PgConnector};
use accesslog_error::AccessLogError;

/// 연결은 수락하지만 아무 응답도 보내지 않는 리스너
async fn silent_listener() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    port
}

#[tokio::test]
async fn connect_gives_up_after_connect_timeout() {
    let port = silent_listener().await;
    let config = DbConfig::from_lookup(|key| match key {
        "DB_HOST" => Some("127.0.0.1".to_string()),
        "DB_PORT" => Some(port.to_string()),
        _ => None,
    })
    .unwrap();
    let connector = PgConnector::new(&config);

    let started = Instant::now();
    let err = connector.connect().await.err().unwrap();
    let waited = started.elapsed();

    assert!(matches!(err, AccessLogError::Timeout(_)), "unexpected error: {err}");
    assert!(waited >= Duration::from_secs(3), "waited {waited:?}");
    assert!(waited < Duration::from_secs(6), "waited {waited:?}");
}
