use async_trait::async_trait;
use chrono::NaiveDateTime;

use accesslog_error::Result;

use crate::model::{AccessLogEntry, IpCount};

/// 접근 로그 저장소에 대한 단일 연결
///
/// 값이 drop 되는 시점에 연결이 반환된다. 핸들러는 요청당 하나만 소유한다.
#[async_trait]
pub trait AccessLogStore: Send {
    /// access_log 테이블이 없으면 생성
    async fn ensure_schema(&mut self) -> Result<()>;

    /// 접근 한 건 기록 후 커밋
    async fn insert_access(&mut self, ip: &str, at: NaiveDateTime) -> Result<()>;

    /// 최신순 접근 목록
    async fn recent_logs(&mut self, limit: i64) -> Result<Vec<AccessLogEntry>>;

    /// 전체 접근 수
    async fn count_accesses(&mut self) -> Result<i64>;

    /// 접근 수 상위 ip 목록
    async fn top_ips(&mut self, limit: i64) -> Result<Vec<IpCount>>;
}

/// 저장소 연결을 한 번 시도하는 커넥터
#[async_trait]
pub trait Connect: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn AccessLogStore>>;
}
