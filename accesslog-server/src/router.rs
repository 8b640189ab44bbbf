use std::collections::HashMap;

use hyper::Method;

/// 등록된 라우트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    LogAccess,
    Health,
    Logs,
    Stats,
    Debug,
}

/// 라우팅 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Route(Route),
    MethodNotAllowed,
    NotFound,
}

/// 경로+메서드 → 라우트 테이블. 시작 시 한 번 만들고 이후 변경하지 않는다.
#[derive(Debug)]
pub struct Router {
    routes: HashMap<&'static str, Vec<(Method, Route)>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        let mut router = Self {
            routes: HashMap::new(),
        };
        router.get("/", Route::LogAccess);
        router.get("/health", Route::Health);
        router.get("/logs", Route::Logs);
        router.get("/stats", Route::Stats);
        router.get("/debug", Route::Debug);
        router
    }

    /// GET 등록 (HEAD 도 같은 라우트로)
    fn get(&mut self, path: &'static str, route: Route) {
        self.register(Method::GET, path, route);
        self.register(Method::HEAD, path, route);
    }

    fn register(&mut self, method: Method, path: &'static str, route: Route) {
        self.routes.entry(path).or_default().push((method, route));
    }

    pub fn resolve(&self, method: &Method, path: &str) -> Resolved {
        let Some(candidates) = self.routes.get(path) else {
            return Resolved::NotFound;
        };

        candidates
            .iter()
            .find(|(m, _)| m == method)
            .map_or(Resolved::MethodNotAllowed, |(_, route)| Resolved::Route(*route))
    }
}
