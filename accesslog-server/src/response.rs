use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

use accesslog_error::Result;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// 핸들러 응답 (상태코드 + 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

/// 핸들러 결과. 성공/실패 모두 HTTP 응답으로 변환된다.
pub type HandlerResult = std::result::Result<Reply, Reply>;

impl Reply {
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self> {
        Ok(Self {
            status,
            content_type: APPLICATION_JSON,
            body: serde_json::to_string(value)?,
        })
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from(self.body)));
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        response
    }
}

/// 핸들러 결과를 응답으로 변환
pub fn into_response(result: HandlerResult) -> Response<Full<Bytes>> {
    match result {
        Ok(reply) | Err(reply) => reply.into_response(),
    }
}
