//! # Module Registry / Router
//!
//! 독립적인 기능 모듈들을 하나의 HTTP 표면으로 조립하는 라우트 레지스트리입니다.
//! 전역 가변 상태 없이 명시적으로 조립됩니다.
//!
//! ```text
//! ApiRouter::new("/api/v1")      ← 빈 테이블 + 마운트 prefix
//!      │ register([auth, users])  ← 모듈 함수를 순서대로 적용
//!      │   └─ bind("POST", "/auth/sign-up", handler)
//!      ▼
//! freeze() → RouteTable          ← 이후 불변, Arc로 워커 간 공유
//!      │
//!      ▼
//! dispatch("POST", "/api/v1/auth/sign-up") → Some(endpoint) | None (404)
//! ```
//!
//! ## 매칭 규칙
//!
//! - 전체 경로 = 마운트 prefix + 모듈 경로, 정확히 일치하는 경우만 매칭
//! - HTTP 메서드는 대문자로 정규화하여 대소문자 구분 없이 비교
//! - 같은 (메서드, 전체 경로)를 다시 bind하면 **마지막 등록이 이깁니다**.
//!   의도된 동작이며, 덮어쓸 때 경고 로그를 남깁니다.
//! - 삭제 연산은 없으며 `freeze()` 이후 테이블은 변경되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! fn auth_module(router: &mut ApiRouter) {
//!     router.scope("/auth", |auth| {
//!         auth.bind("post", "/sign-up", SignUpHandler::new(user_service.clone()));
//!     });
//! }
//!
//! let table = ApiRouter::new("/api/v1")
//!     .register(vec![Box::new(auth_module) as Box<dyn ApiModule>])
//!     .freeze();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::core::handler::{Endpoint, SharedEndpoint};
use crate::utils::display_terminal::{print_boxed_title, print_route, print_route_total};

/// 라우트 키: (대문자 메서드, 전체 경로)
pub type RouteKey = (String, String);

/// 라우터에 자신의 라우트를 선언하는 기능 모듈
pub trait ApiModule {
    /// 모듈 이름 (로그 출력용)
    fn name(&self) -> &str {
        "module"
    }

    fn mount(&self, router: &mut ApiRouter);
}

/// 모듈 함수(`Fn(&mut ApiRouter)`)는 그대로 모듈로 사용할 수 있습니다.
impl<F> ApiModule for F
where
    F: Fn(&mut ApiRouter),
{
    fn mount(&self, router: &mut ApiRouter) {
        self(router)
    }
}

/// 이름이 붙은 모듈
///
/// 시작 로그에 모듈 단위로 라우트 등록 결과를 보여줄 때 사용합니다.
pub struct NamedModule<F> {
    name: String,
    mount: F,
}

impl<F> NamedModule<F>
where
    F: Fn(&mut ApiRouter),
{
    pub fn new(name: impl Into<String>, mount: F) -> Self {
        Self {
            name: name.into(),
            mount,
        }
    }
}

impl<F> ApiModule for NamedModule<F>
where
    F: Fn(&mut ApiRouter),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn mount(&self, router: &mut ApiRouter) {
        (self.mount)(router)
    }
}

/// 조립 중인 라우터
pub struct ApiRouter {
    root_path: String,
    routes: HashMap<RouteKey, SharedEndpoint>,
    order: Vec<RouteKey>,
}

impl ApiRouter {
    /// 마운트 prefix로 빈 라우터를 생성합니다. 끝의 `/`는 제거됩니다.
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            root_path: normalize_prefix(&root_path.into()),
            routes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// (메서드, prefix + 경로)에 핸들러를 바인딩합니다.
    ///
    /// 같은 키가 이미 있으면 새 핸들러로 교체합니다 (last registration wins).
    pub fn bind<E>(&mut self, method: &str, path: &str, endpoint: E) -> &mut Self
    where
        E: Endpoint + Send + Sync + 'static,
    {
        self.bind_shared(method, path, Arc::new(endpoint))
    }

    /// 이미 공유 중인 엔드포인트를 바인딩합니다.
    pub fn bind_shared(&mut self, method: &str, path: &str, endpoint: SharedEndpoint) -> &mut Self {
        let key = (method.trim().to_uppercase(), format!("{}{}", self.root_path, path));

        if self.routes.insert(key.clone(), endpoint).is_some() {
            warn!("⚠️ 라우트 재등록, 마지막 등록으로 교체됩니다: {} {}", key.0, key.1);
        } else {
            debug!("라우트 등록: {} {}", key.0, key.1);
            self.order.push(key);
        }
        self
    }

    /// 하위 경로 아래에 라우트를 선언합니다.
    ///
    /// 클로저 안의 `bind` 호출은 `현재 prefix + path` 아래에 등록됩니다.
    pub fn scope<F>(&mut self, path: &str, declare: F) -> &mut Self
    where
        F: FnOnce(&mut ApiRouter),
    {
        let parent = self.root_path.clone();
        self.root_path = format!("{}{}", parent, normalize_prefix(path));
        declare(self);
        self.root_path = parent;
        self
    }

    /// 모듈들을 순서대로 적용합니다.
    pub fn register<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ApiModule>>,
    {
        for module in modules {
            let before = self.routes.len();
            module.mount(&mut self);
            debug!(
                "모듈 '{}' 적용 완료 (신규 라우트 {}개)",
                module.name(),
                self.routes.len() - before
            );
        }
        self
    }

    /// 라우터를 불변 라우트 테이블로 고정합니다.
    pub fn freeze(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
            order: self.order,
        }
    }
}

/// 시작 이후 변경되지 않는 라우트 테이블
pub struct RouteTable {
    routes: HashMap<RouteKey, SharedEndpoint>,
    order: Vec<RouteKey>,
}

impl RouteTable {
    /// (메서드, 경로)에 해당하는 엔드포인트를 찾습니다.
    pub fn dispatch(&self, method: &str, path: &str) -> Option<SharedEndpoint> {
        self.routes
            .get(&(method.to_uppercase(), path.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 등록 순서대로의 라우트 목록
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|(method, path)| (method.as_str(), path.as_str()))
    }

    /// 시작 시 라우트 테이블을 터미널에 출력합니다.
    pub fn print_summary(&self) {
        print_boxed_title("API Route Table");
        for (method, path) in self.routes() {
            print_route(method, path);
        }
        print_route_total(self.len());
    }
}

fn normalize_prefix(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
