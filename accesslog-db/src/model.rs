use chrono::NaiveDateTime;
use serde::Serialize;

/// access_log 테이블의 한 행
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub id: i32,
    pub ip: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

/// ip별 접근 수
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpCount {
    pub ip: String,
    pub count: i64,
}

/// 접근 통계
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessStats {
    pub total_accesses: i64,
    pub top_ips: Vec<IpCount>,
}
