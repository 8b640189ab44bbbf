use std::time::Duration;

use accesslog_error::{Result, config_err};

/// 데이터베이스 설정
#[derive(Default, Debug, Clone)]
pub struct DbConfig {
    /// 데이터베이스 연결 설정
    pub connection: ConnectionConfig,
    /// 연결 재시도 설정
    pub retry: RetryConfig,
}

impl DbConfig {
    /// 환경변수에서 db 설정 로드
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 조회 함수로 db 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            connection: ConnectionConfig::from_lookup(&lookup)?,
            retry: RetryConfig::from_lookup(&lookup)?,
        })
    }
}

/// db 연결설정
#[derive(Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub sslmode: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "postgres".to_string(),
            port: 5432,
            database: "demo".to_string(),
            user: "demo".to_string(),
            password: "demo".to_string(),
            sslmode: "disable".to_string(),
        }
    }
}

// 비밀번호는 로그에 남기지 않음
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl ConnectionConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| config_err(format!("DB_PORT '{raw}' is not a valid port: {e}")))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("DB_NAME").unwrap_or(defaults.database),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASS").unwrap_or(defaults.password),
            sslmode: lookup("DB_SSLMODE").unwrap_or(defaults.sslmode),
        })
    }
}

/// 연결 재시도 설정
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// 최대 시도 횟수 (첫 시도 포함)
    pub max_retries: u32,
    /// 재시도 간격(밀리초)
    pub retry_delay_ms: u64,
    /// 시도당 연결 타임아웃(초)
    pub connect_timeout_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_delay_ms: 2_000,
            connect_timeout_secs: 3,
        }
    }
}

impl RetryConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_retries = match lookup("DB_MAX_RETRIES") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                config_err(format!("DB_MAX_RETRIES '{raw}' is not a valid count: {e}"))
            })?,
            None => defaults.max_retries,
        };
        let retry_delay_ms = match lookup("DB_RETRY_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                config_err(format!("DB_RETRY_DELAY_MS '{raw}' is not a valid delay: {e}"))
            })?,
            None => defaults.retry_delay_ms,
        };

        Ok(Self {
            max_retries,
            retry_delay_ms,
            connect_timeout_secs: defaults.connect_timeout_secs,
        })
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
