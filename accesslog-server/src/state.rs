use std::sync::Arc;
use std::time::Duration;

use accesslog_config::RetryConfig;
use accesslog_db::{AccessLogStore, Connect, acquire};
use accesslog_error::Result;

use crate::router::Router;

/// 애플리케이션의 공유 상태 (시작 시 생성, 이후 읽기 전용)
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connect>,
    pub retry: RetryConfig,
    pub router: Arc<Router>,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connect>, retry: RetryConfig) -> Self {
        Self {
            connector,
            retry,
            router: Arc::new(Router::new()),
        }
    }

    /// 재시도 정책에 따라 연결 획득
    pub async fn connection(&self) -> Result<Box<dyn AccessLogStore>> {
        acquire(
            self.connector.as_ref(),
            self.retry.max_retries,
            self.retry.retry_delay(),
        )
        .await
    }

    /// 헬스체크용 단일 연결 시도
    pub async fn probe(&self) -> Result<Box<dyn AccessLogStore>> {
        acquire(self.connector.as_ref(), 1, Duration::ZERO).await
    }
}
