use chrono::NaiveDateTime;
use log::debug;

use accesslog_error::Result;

use crate::model::AccessStats;
use crate::store::AccessLogStore;

/// /logs 조회 최대 행 수
pub const RECENT_LOG_LIMIT: i64 = 100;

/// /stats 상위 ip 수
pub const TOP_IP_LIMIT: i64 = 10;

/// 스키마 확인 후 접근 한 건 기록
pub async fn record_access(
    store: &mut dyn AccessLogStore,
    ip: &str,
    at: NaiveDateTime,
) -> Result<()> {
    store.ensure_schema().await?;
    store.insert_access(ip, at).await?;
    debug!("접근 기록 완료: {ip} ({at})");
    Ok(())
}

/// 전체 접근 수와 상위 ip 목록
pub async fn access_stats(store: &mut dyn AccessLogStore, top: i64) -> Result<AccessStats> {
    let total_accesses = store.count_accesses().await?;
    let top_ips = store.top_ips(top).await?;

    Ok(AccessStats {
        total_accesses,
        top_ips,
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use accesslog_error::db_err;

    use super::*;
    use crate::model::{AccessLogEntry, IpCount};

    #[derive(Default)]
    struct RecordingStore {
        calls: Vec<String>,
        fail_schema: bool,
    }

    #[async_trait]
    impl AccessLogStore for RecordingStore {
        async fn ensure_schema(&mut self) -> Result<()> {
            self.calls.push("ensure_schema".to_string());
            if self.fail_schema {
                return Err(db_err("permission denied for schema public"));
            }
            Ok(())
        }

        async fn insert_access(&mut self, ip: &str, _at: NaiveDateTime) -> Result<()> {
            self.calls.push(format!("insert {ip}"));
            Ok(())
        }

        async fn recent_logs(&mut self, _limit: i64) -> Result<Vec<AccessLogEntry>> {
            Ok(Vec::new())
        }

        async fn count_accesses(&mut self) -> Result<i64> {
            self.calls.push("count".to_string());
            Ok(4)
        }

        async fn top_ips(&mut self, limit: i64) -> Result<Vec<IpCount>> {
            self.calls.push(format!("top {limit}"));
            Ok(vec![
                IpCount { ip: "x".to_string(), count: 3 },
                IpCount { ip: "y".to_string(), count: 1 },
            ])
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn record_ensures_schema_before_insert() {
        let mut store = RecordingStore::default();
        record_access(&mut store, "1.2.3.4", noon()).await.unwrap();
        assert_eq!(store.calls, vec!["ensure_schema", "insert 1.2.3.4"]);
    }

    #[tokio::test]
    async fn schema_failure_skips_insert() {
        let mut store = RecordingStore {
            fail_schema: true,
            ..Default::default()
        };
        let err = record_access(&mut store, "1.2.3.4", noon()).await.unwrap_err();
        assert_eq!(err.to_string(), "permission denied for schema public");
        assert_eq!(store.calls, vec!["ensure_schema"]);
    }

    #[tokio::test]
    async fn stats_combine_total_and_top() {
        let mut store = RecordingStore::default();
        let stats = access_stats(&mut store, TOP_IP_LIMIT).await.unwrap();
        assert_eq!(stats.total_accesses, 4);
        assert_eq!(stats.top_ips[0], IpCount { ip: "x".to_string(), count: 3 });
        assert_eq!(store.calls, vec!["count", "top 10"]);
    }
}
