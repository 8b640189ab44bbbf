use std::collections::BTreeMap;

use chrono::Local;
use hyper::StatusCode;
use hyper::header::HeaderMap;
use log::{debug, error, warn};
use serde::Serialize;

use accesslog_db::{AccessLogEntry, RECENT_LOG_LIMIT, TOP_IP_LIMIT, access_stats, record_access};
use accesslog_error::Result;

use crate::client_ip::{X_FORWARDED_FOR, X_REAL_IP, header_value, resolve_client_ip};
use crate::response::{HandlerResult, Reply};
use crate::state::AppState;

/// /logs 응답 항목. 모든 필드를 문자열로 내보낸다.
#[derive(Debug, Serialize)]
pub struct LogView {
    pub id: String,
    pub ip: String,
    pub timestamp: String,
}

impl From<AccessLogEntry> for LogView {
    fn from(entry: AccessLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            ip: entry.ip.unwrap_or_default(),
            timestamp: entry
                .timestamp
                .map(|ts| ts.to_string())
                .unwrap_or_default(),
        }
    }
}

/// /debug 응답
#[derive(Debug, Serialize)]
pub struct DebugInfo {
    pub remote_addr: String,
    pub x_forwarded_for: Option<String>,
    pub x_real_ip: Option<String>,
    pub resolved_ip: String,
    pub headers: BTreeMap<String, String>,
}

/// GET / : 접근 기록
pub async fn log_access(state: &AppState, headers: &HeaderMap, remote_addr: &str) -> HandlerResult {
    let ip = resolve_client_ip(headers, remote_addr);

    match record(state, &ip).await {
        Ok(()) => Ok(Reply::text(
            StatusCode::OK,
            format!("Access logged to PostgreSQL from IP: {ip}"),
        )),
        Err(e) => {
            error!("접근 기록 실패 ({ip}): {e}");
            Err(Reply::text(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Logging failed: {e}"),
            ))
        }
    }
}

async fn record(state: &AppState, ip: &str) -> Result<()> {
    let mut conn = state.connection().await?;
    record_access(conn.as_mut(), ip, Local::now().naive_local()).await
}

/// GET /health : db 단일 연결 확인
pub async fn health(state: &AppState) -> HandlerResult {
    match state.probe().await {
        Ok(_conn) => Ok(Reply::text(StatusCode::OK, "OK")),
        Err(e) => {
            warn!("헬스체크 실패: {e}");
            Err(Reply::text(StatusCode::SERVICE_UNAVAILABLE, "Database not ready"))
        }
    }
}

/// GET /logs : 최근 접근 목록
pub async fn logs(state: &AppState) -> HandlerResult {
    fetch_logs(state).await.map_err(|e| {
        error!("접근 목록 조회 실패: {e}");
        Reply::text(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch logs: {e}"),
        )
    })
}

async fn fetch_logs(state: &AppState) -> Result<Reply> {
    let mut conn = state.connection().await?;
    let entries = conn.recent_logs(RECENT_LOG_LIMIT).await?;
    debug!("접근 목록 {}건 조회", entries.len());

    let views: Vec<LogView> = entries.into_iter().map(LogView::from).collect();
    Reply::json(StatusCode::OK, &views)
}

/// GET /stats : 접근 통계
pub async fn stats(state: &AppState) -> HandlerResult {
    fetch_stats(state).await.map_err(|e| {
        error!("접근 통계 조회 실패: {e}");
        Reply::text(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch stats: {e}"),
        )
    })
}

async fn fetch_stats(state: &AppState) -> Result<Reply> {
    let mut conn = state.connection().await?;
    let stats = access_stats(conn.as_mut(), TOP_IP_LIMIT).await?;
    Reply::json(StatusCode::OK, &stats)
}

/// GET /debug : 요청 헤더와 ip 결정 결과 (db 미사용)
pub fn debug_headers(headers: &HeaderMap, remote_addr: &str) -> HandlerResult {
    let mut all_headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        all_headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    let info = DebugInfo {
        remote_addr: remote_addr.to_string(),
        x_forwarded_for: header_value(headers, X_FORWARDED_FOR),
        x_real_ip: header_value(headers, X_REAL_IP),
        resolved_ip: resolve_client_ip(headers, remote_addr),
        headers: all_headers,
    };

    Reply::json(StatusCode::OK, &info).map_err(|e| {
        error!("디버그 응답 직렬화 실패: {e}");
        Reply::text(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
