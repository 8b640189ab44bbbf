use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::service::service_fn;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as AutoConnBuilder;
use log::{debug, error, info};
use tokio::net::TcpListener;

use accesslog_config::Config;
use accesslog_error::Result;

use crate::handlers;
use crate::response::{Reply, into_response};
use crate::router::{Resolved, Route};
use crate::state::AppState;

/// 접근 로그 HTTP 서버
pub struct AccessLogServer {
    /// 서버 설정 정보
    config: Config,
    /// 핸들러 공유 상태
    state: AppState,
}

impl AccessLogServer {
    pub fn new(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    /// 서버실행
    pub async fn run(&self) -> Result<()> {
        // 바인딩 주소
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        info!("접근 로그 서버 시작: {addr}");

        self.serve(listener).await
    }

    /// 바인딩된 리스너로 요청 수락
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, client_addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("연결 수락 실패: {e}");
                    continue;
                }
            };
            let state = self.state.clone();

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                if let Err(err) = AutoConnBuilder::new(TokioExecutor::new())
                    .serve_connection(
                        io,
                        service_fn(move |req| handle_request(req, state.clone(), client_addr)),
                    )
                    .await
                {
                    error!("커넥션 에러: {err}");
                } else {
                    debug!("커넥션 종료: {client_addr}");
                }
            });
        }
    }
}

/// 요청 하나 처리 (본문은 사용하지 않음)
pub async fn handle_request(
    req: Request<Incoming>,
    state: AppState,
    client_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>> {
    let (parts, _body) = req.into_parts();
    let remote_addr = client_addr.ip().to_string();
    debug!("{} {} from {remote_addr}", parts.method, parts.uri);

    Ok(dispatch(&state, &parts.method, parts.uri.path(), &parts.headers, &remote_addr).await)
}

/// 라우팅 후 핸들러 결과를 응답으로 변환
pub async fn dispatch(
    state: &AppState,
    method: &Method,
    path: &str,
    headers: &HeaderMap,
    remote_addr: &str,
) -> Response<Full<Bytes>> {
    let result = match state.router.resolve(method, path) {
        Resolved::Route(Route::LogAccess) => handlers::log_access(state, headers, remote_addr).await,
        Resolved::Route(Route::Health) => handlers::health(state).await,
        Resolved::Route(Route::Logs) => handlers::logs(state).await,
        Resolved::Route(Route::Stats) => handlers::stats(state).await,
        Resolved::Route(Route::Debug) => handlers::debug_headers(headers, remote_addr),
        Resolved::MethodNotAllowed => Err(Reply::text(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
        )),
        Resolved::NotFound => Err(Reply::text(StatusCode::NOT_FOUND, "Not Found")),
    };

    let response = into_response(result);
    if *method == Method::HEAD {
        // 상태코드와 헤더만 유지
        return response.map(|_| Full::new(Bytes::new()));
    }
    response
}
