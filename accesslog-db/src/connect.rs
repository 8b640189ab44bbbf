use std::time::Duration;

use log::{error, info, warn};

use accesslog_error::Result;

use crate::store::{AccessLogStore, Connect};

/// 연결 획득 (고정 간격 재시도)
///
/// 최대 `max_retries` 번 시도하고 실패할 때마다 `retry_delay` 만큼 대기한다.
/// 마지막 시도의 에러는 그대로 반환한다. `max_retries` 가 0 이면 한 번 시도한다.
pub async fn acquire(
    connector: &dyn Connect,
    max_retries: u32,
    retry_delay: Duration,
) -> Result<Box<dyn AccessLogStore>> {
    let attempts = max_retries.max(1);
    let mut attempt = 1;

    loop {
        match connector.connect().await {
            Ok(store) => {
                if attempt > 1 {
                    info!("db 연결 성공 ({attempt}/{attempts} 번째 시도)");
                }
                return Ok(store);
            }
            Err(e) if attempt < attempts => {
                warn!(
                    "db 연결 실패 ({attempt}/{attempts}), {}ms 후 재시도: {e}",
                    retry_delay.as_millis()
                );
                tokio::time::sleep(retry_delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!("db 연결 실패, 재시도 중단 ({attempt}/{attempts}): {e}");
                return Err(e);
            }
        }
    }
}
