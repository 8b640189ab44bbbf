use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::net::AddrParseError;
use tokio::time::error::Elapsed;
use serde_json::Error as JsonError;
use serde_yml::Error as YmlError;
use tokio_postgres::Error as PgError;

/// 접근 로그 서비스의 모든 에러 타입을 정의합니다.
///
/// `Display` 출력은 HTTP 에러 응답 본문에 그대로 실립니다.
#[derive(Debug)]
pub enum AccessLogError {
    /// 설정 관련 에러
    Config(String),

    /// 네트워크 입출력 에러
    Io(io::Error),

    /// 데이터베이스 관련 에러
    Database(String),

    /// 타임아웃 에러
    Timeout(String),

    /// 직렬화 에러
    Serialization(String),
}

impl fmt::Display for AccessLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLogError::Config(msg) => write!(f, "configuration error: {msg}"),
            AccessLogError::Io(err) => write!(f, "{err}"),
            AccessLogError::Database(msg) => write!(f, "{msg}"),
            AccessLogError::Timeout(msg) => write!(f, "{msg}"),
            AccessLogError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for AccessLogError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AccessLogError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Result 타입 별칭 정의
pub type Result<T> = std::result::Result<T, AccessLogError>;

/// From 트레이트 구현으로 다양한 에러 타입을 AccessLogError로 변환
impl From<io::Error> for AccessLogError {
    fn from(err: io::Error) -> Self {
        AccessLogError::Io(err)
    }
}

impl From<AddrParseError> for AccessLogError {
    fn from(err: AddrParseError) -> Self {
        AccessLogError::Config(format!("invalid address: {err}"))
    }
}

impl From<PgError> for AccessLogError {
    fn from(err: PgError) -> Self {
        AccessLogError::Database(format!("{err}"))
    }
}

impl From<Elapsed> for AccessLogError {
    fn from(err: Elapsed) -> Self {
        AccessLogError::Timeout(format!("operation timed out: {err}"))
    }
}

impl From<YmlError> for AccessLogError {
    fn from(err: YmlError) -> Self {
        AccessLogError::Config(format!("invalid YAML: {err}"))
    }
}

impl From<JsonError> for AccessLogError {
    fn from(err: JsonError) -> Self {
        AccessLogError::Serialization(format!("{err}"))
    }
}

/// 에러 처리 유틸리티 함수
pub fn config_err<E: fmt::Display>(err: E) -> AccessLogError {
    AccessLogError::Config(format!("{err}"))
}

pub fn db_err<E: fmt::Display>(err: E) -> AccessLogError {
    AccessLogError::Database(format!("{err}"))
}
