use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use accesslog_error::Result;

/// HTTP 서버 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_host: String,
    pub bind_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// 기본설정으로 생성
    #[must_use]
    pub fn new() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            bind_port: 5000,
        }
    }

    /// 설정파일에서 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml(&contents)
    }

    /// yml 문자열에서 설정 로드 (누락된 항목은 기본값)
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config = serde_yml::from_str(contents)?;
        Ok(config)
    }

    /// 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}
