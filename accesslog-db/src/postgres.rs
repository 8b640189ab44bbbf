use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, error};
use tokio_postgres::{
    Client, NoTls,
    config::{Config, SslMode},
};

use accesslog_config::DbConfig;
use accesslog_error::Result;

use crate::model::{AccessLogEntry, IpCount};
use crate::sql::access_log;
use crate::store::{AccessLogStore, Connect};

/// `PostgreSQL` 커넥터 (요청마다 새 연결)
#[derive(Clone)]
pub struct PgConnector {
    pg_config: Config,
    connect_timeout: Duration,
}

impl PgConnector {
    pub fn new(dbconfig: &DbConfig) -> Self {
        Self {
            pg_config: Self::create_pg_config(dbconfig),
            connect_timeout: dbconfig.retry.connect_timeout(),
        }
    }

    /// `PostgreSQL` 설정 생성
    fn create_pg_config(dbconfig: &DbConfig) -> Config {
        let ssl_mode = match dbconfig.connection.sslmode.to_lowercase().as_str() {
            "disable" => SslMode::Disable,
            "require" => SslMode::Require,
            _ => SslMode::Prefer,
        };

        let mut pg_config = Config::new();
        pg_config
            .host(dbconfig.connection.host.as_str())
            .port(dbconfig.connection.port)
            .dbname(dbconfig.connection.database.as_str())
            .user(dbconfig.connection.user.as_str())
            .password(dbconfig.connection.password.as_str())
            .ssl_mode(ssl_mode)
            .connect_timeout(dbconfig.retry.connect_timeout());

        pg_config
    }
}

#[async_trait]
impl Connect for PgConnector {
    async fn connect(&self) -> Result<Box<dyn AccessLogStore>> {
        let (client, connection) =
            tokio::time::timeout(self.connect_timeout, self.pg_config.connect(NoTls)).await??;

        // 클라이언트가 drop 되면 종료됨
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("db 연결 에러: {e}");
            }
        });

        debug!("db 연결 획득");
        Ok(Box::new(PgConnection { client }))
    }
}

/// 요청 하나가 소유하는 `PostgreSQL` 연결
pub struct PgConnection {
    client: Client,
}

impl Drop for PgConnection {
    fn drop(&mut self) {
        debug!("db 연결 반환");
    }
}

#[async_trait]
impl AccessLogStore for PgConnection {
    async fn ensure_schema(&mut self) -> Result<()> {
        self.client.execute(access_log::CREATE_TABLE, &[]).await?;
        Ok(())
    }

    async fn insert_access(&mut self, ip: &str, at: NaiveDateTime) -> Result<()> {
        // 커밋 전 실패 시 트랜잭션 drop 으로 롤백
        let tx = self.client.transaction().await?;
        tx.execute(access_log::INSERT_ACCESS, &[&ip, &at]).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn recent_logs(&mut self, limit: i64) -> Result<Vec<AccessLogEntry>> {
        let rows = self.client.query(access_log::SELECT_RECENT, &[&limit]).await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(AccessLogEntry {
                id: row.try_get("id")?,
                ip: row.try_get("ip")?,
                timestamp: row.try_get("timestamp")?,
            });
        }
        Ok(entries)
    }

    async fn count_accesses(&mut self) -> Result<i64> {
        let row = self.client.query_one(access_log::COUNT_ACCESSES, &[]).await?;
        let total: i64 = row.try_get(0)?;
        Ok(total)
    }

    async fn top_ips(&mut self, limit: i64) -> Result<Vec<IpCount>> {
        let rows = self.client.query(access_log::SELECT_TOP_IPS, &[&limit]).await?;

        let mut top = Vec::with_capacity(rows.len());
        for row in rows {
            let ip: Option<String> = row.try_get("ip")?;
            top.push(IpCount {
                ip: ip.unwrap_or_default(),
                count: row.try_get("count")?,
            });
        }
        Ok(top)
    }
}
