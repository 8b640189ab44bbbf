#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Response};

use accesslog_config::RetryConfig;
use accesslog_db::{AccessLogEntry, AccessLogStore, Connect, IpCount};
use accesslog_error::{Result, db_err};
use accesslog_server::{AppState, dispatch};

/// 메모리 저장소 공유 상태
#[derive(Default)]
pub struct Shared {
    pub table_exists: Mutex<bool>,
    pub rows: Mutex<Vec<AccessLogEntry>>,
    pub acquired: AtomicUsize,
    pub released: AtomicUsize,
    pub refuse_connections: Mutex<bool>,
    pub fail_queries: Mutex<bool>,
}

impl Shared {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

pub struct MemoryConnector {
    pub shared: Arc<Shared>,
}

#[async_trait]
impl Connect for MemoryConnector {
    async fn connect(&self) -> Result<Box<dyn AccessLogStore>> {
        if *self.shared.refuse_connections.lock().unwrap() {
            return Err(db_err("connection refused"));
        }
        self.shared.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryStore {
            shared: self.shared.clone(),
        }))
    }
}

pub struct MemoryStore {
    shared: Arc<Shared>,
}

impl Drop for MemoryStore {
    fn drop(&mut self) {
        self.shared.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl MemoryStore {
    fn check(&self) -> Result<()> {
        if *self.shared.fail_queries.lock().unwrap() {
            return Err(db_err("server closed the connection unexpectedly"));
        }
        if !*self.shared.table_exists.lock().unwrap() {
            return Err(db_err("relation \"access_log\" does not exist"));
        }
        Ok(())
    }
}

#[async_trait]
impl AccessLogStore for MemoryStore {
    async fn ensure_schema(&mut self) -> Result<()> {
        if *self.shared.fail_queries.lock().unwrap() {
            return Err(db_err("server closed the connection unexpectedly"));
        }
        *self.shared.table_exists.lock().unwrap() = true;
        Ok(())
    }

    async fn insert_access(&mut self, ip: &str, at: NaiveDateTime) -> Result<()> {
        self.check()?;
        let mut rows = self.shared.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(AccessLogEntry {
            id,
            ip: Some(ip.to_string()),
            timestamp: Some(at),
        });
        Ok(())
    }

    async fn recent_logs(&mut self, limit: i64) -> Result<Vec<AccessLogEntry>> {
        self.check()?;
        let mut rows = self.shared.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn count_accesses(&mut self) -> Result<i64> {
        self.check()?;
        Ok(self.shared.rows.lock().unwrap().len() as i64)
    }

    async fn top_ips(&mut self, limit: i64) -> Result<Vec<IpCount>> {
        self.check()?;
        let rows = self.shared.rows.lock().unwrap();
        let mut counts: Vec<IpCount> = Vec::new();
        for row in rows.iter() {
            let ip = row.ip.clone().unwrap_or_default();
            match counts.iter_mut().find(|c| c.ip == ip) {
                Some(existing) => existing.count += 1,
                None => counts.push(IpCount { ip, count: 1 }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit as usize);
        Ok(counts)
    }
}

pub fn test_state() -> (AppState, Arc<Shared>) {
    let shared = Arc::new(Shared::default());
    let connector = Arc::new(MemoryConnector {
        shared: shared.clone(),
    });
    let retry = RetryConfig {
        max_retries: 1,
        retry_delay_ms: 0,
        connect_timeout_secs: 3,
    };
    (AppState::new(connector, retry), shared)
}

pub async fn body_string(response: Response<Full<Bytes>>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get(state: &AppState, path: &str, headers: &HeaderMap) -> Response<Full<Bytes>> {
    dispatch(state, &Method::GET, path, headers, "10.0.0.1").await
}
