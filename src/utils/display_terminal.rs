//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 라우트 테이블과 접속 정보를 보기 좋게 출력합니다.

/// 박스 내부 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 API Route Table                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH);
    println!("╚{}╝", border);
}

/// 라우트 한 줄을 트리 형태로 출력합니다
///
/// ```text
///    ├─ POST   /api/v1/auth/sign-up
/// ```
pub fn print_route(method: &str, path: &str) {
    println!("   ├─ {:<6} {}", method, path);
}

/// 라우트 목록 마지막 줄
pub fn print_route_total(count: usize) {
    println!("   └─ ✓ {} route(s) mounted", count);
}

/// 서버 접속 정보를 출력합니다
pub fn print_server_banner(bind_address: &str, root_path: &str) {
    print_boxed_title("🚀 Account Service Ready");
    println!("   🌐 http://{}", bind_address);
    println!("   📍 Health check: http://{}/health", bind_address);
    println!("   📍 API root:     http://{}{}", bind_address, root_path);
}
