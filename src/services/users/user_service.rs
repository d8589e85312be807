//! # 사용자 서비스 구현
//!
//! 회원가입과 현재 사용자 조회 유스케이스를 담당합니다.
//! 저장소 에러([`StoreError`])를 실패 지점별 고정 메시지의 [`AppError`]로 변환하는 곳도 여기입니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! 1. username 존재 확인 (대소문자 무관) ── 실패 → 400 "Unable to validate user username."
//! 2. email 존재 확인 (대소문자 무관)    ── 실패 → 400 "Unable to validate user email."
//! 3. 중복 메시지 수집                   ── 하나라도 있으면 → 400 "Username already in use. E-mail already in use."
//! 4. 비밀번호 해싱 (web::block)         ── 실패 → 400 "Unable to validate password."
//! 5. INSERT                             ── 유니크 위반 → 400 중복 메시지, 그 외 → 400 "Unable to create user."
//! 6. 201 "Sign up successfully"
//! ```
//!
//! 사전 확인은 안내용입니다. 동시에 같은 이름으로 가입하는 경합은 5단계의 유니크 인덱스가 걸러냅니다.
//!
//! ## 현재 사용자 조회
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 조회 성공 | 200 `{id, username, email, created_at}` |
//! | 쿼리 실패 | 500 "Unable to retrieve current user data." |
//! | 행 없음 / 행 해석 실패 | 500 "Unable to parse current user data." |

use std::sync::Arc;

use actix_web::web;
use log::{debug, error, info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::core::response::MessageResponse;
use crate::db::store::StoreError;
use crate::domain::dto::users::request::{CurrentUserRequest, SignUpRequest};
use crate::domain::dto::users::response::{CurrentUserResponse, SIGN_UP_SUCCESS};
use crate::domain::entities::users::user::NewUser;
use crate::repositories::users::user_repo::{
    UserRepository, EMAIL_UNIQUE_INDEX, USERNAME_UNIQUE_INDEX,
};
use crate::services::auth::password_hasher::CredentialHasher;

pub const UNABLE_TO_VALIDATE_USERNAME: &str = "Unable to validate user username.";
pub const UNABLE_TO_VALIDATE_EMAIL: &str = "Unable to validate user email.";
pub const USERNAME_IN_USE: &str = "Username already in use.";
pub const EMAIL_IN_USE: &str = "E-mail already in use.";
pub const USERNAME_OR_EMAIL_IN_USE: &str = "Username or e-mail already in use.";
pub const UNABLE_TO_VALIDATE_PASSWORD: &str = "Unable to validate password.";
pub const UNABLE_TO_CREATE_USER: &str = "Unable to create user.";
pub const UNABLE_TO_RETRIEVE_CURRENT_USER: &str = "Unable to retrieve current user data.";
pub const UNABLE_TO_PARSE_CURRENT_USER: &str = "Unable to parse current user data.";

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    user_repo: UserRepository,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserService {
    pub fn new(user_repo: UserRepository, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// 새 계정을 등록합니다.
    ///
    /// 요청은 이미 필드 검증을 통과한 상태여야 합니다.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<MessageResponse> {
        let SignUpRequest {
            username,
            email,
            password,
        } = request;

        let username_taken = self
            .user_repo
            .exists_by_username(&username)
            .await
            .map_err(|e| {
                warn!("사용자명 중복 확인 실패: {}", e);
                AppError::BadRequest(UNABLE_TO_VALIDATE_USERNAME.to_string())
            })?;

        let email_taken = self
            .user_repo
            .exists_by_email(&email)
            .await
            .map_err(|e| {
                warn!("이메일 중복 확인 실패: {}", e);
                AppError::BadRequest(UNABLE_TO_VALIDATE_EMAIL.to_string())
            })?;

        let mut conflicts = Vec::new();
        if username_taken {
            conflicts.push(USERNAME_IN_USE);
        }
        if email_taken {
            conflicts.push(EMAIL_IN_USE);
        }
        if !conflicts.is_empty() {
            debug!("회원가입 거부 (중복): {}", username);
            return Err(AppError::ConflictError(conflicts.join(" ")));
        }

        let password_hash = self.hash_password(password).await?;

        let new_user = NewUser::new(username, email, password_hash);
        self.user_repo
            .create(&new_user)
            .await
            .map_err(map_insert_error)?;

        info!("✅ 새 계정 생성: {}", new_user.username);
        Ok(MessageResponse::new(SIGN_UP_SUCCESS))
    }

    /// 요청 컨텍스트의 계정 ID로 공개 프로필을 조회합니다.
    pub async fn current_user(&self, request: CurrentUserRequest) -> AppResult<CurrentUserResponse> {
        match self.user_repo.find_profile_by_id(request.id).await {
            Ok(profile) => Ok(CurrentUserResponse::from(profile)),
            Err(err) => {
                let message = match err {
                    StoreError::Decode(_) | StoreError::NoRows => UNABLE_TO_PARSE_CURRENT_USER,
                    _ => UNABLE_TO_RETRIEVE_CURRENT_USER,
                };
                error!("❌ {} (id={}): {}", message, request.id, err);
                Err(AppError::DependencyError(message.to_string()))
            }
        }
    }

    /// CPU 집약적인 해싱을 blocking 스레드 풀에서 실행합니다.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);

        let hashed = web::block(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                error!("❌ 비밀번호 해싱 작업 실행 실패: {}", e);
                AppError::BadRequest(UNABLE_TO_VALIDATE_PASSWORD.to_string())
            })?;

        hashed.map_err(|e| {
            error!("❌ 비밀번호 해싱 실패: {}", e);
            AppError::BadRequest(UNABLE_TO_VALIDATE_PASSWORD.to_string())
        })
    }
}

/// INSERT 실패를 사용자 메시지로 변환합니다.
fn map_insert_error(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation { constraint } => {
            let message = match constraint.as_deref() {
                Some(USERNAME_UNIQUE_INDEX) => USERNAME_IN_USE,
                Some(EMAIL_UNIQUE_INDEX) => EMAIL_IN_USE,
                _ => USERNAME_OR_EMAIL_IN_USE,
            };
            debug!("INSERT 유니크 위반: {:?}", constraint);
            AppError::ConflictError(message.to_string())
        }
        other => {
            error!("❌ 사용자 생성 실패: {}", other);
            AppError::BadRequest(UNABLE_TO_CREATE_USER.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::{MockStore, Row, SqlValue};
    use crate::services::auth::password_hasher::{HashError, MockCredentialHasher};
    use crate::test_support::{fast_hasher, MemoryStore};
    use chrono::{Duration, Utc};

    fn service_with_store(store: Arc<dyn crate::db::store::Store>) -> UserService {
        UserService::new(UserRepository::new(store), fast_hasher())
    }

    fn message_of(result: AppResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(e) => e.to_string(),
            Ok(v) => panic!("Expected error, got {:?}", v),
        }
    }

    #[actix_web::test]
    async fn test_sign_up_then_duplicate_username() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with_store(store.clone());

        let created = service
            .sign_up(SignUpRequest::new("alice", "alice@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(created.message, SIGN_UP_SUCCESS);

        let message = message_of(
            service
                .sign_up(SignUpRequest::new("ALICE", "other@example.com", "pw"))
                .await,
        );
        assert!(message.contains(USERNAME_IN_USE));
        assert!(!message.contains(EMAIL_IN_USE));
        assert_eq!(store.user_count(), 1);
    }

    #[actix_web::test]
    async fn test_both_taken_reports_both_in_order() {
        let service = service_with_store(Arc::new(MemoryStore::new()));
        service
            .sign_up(SignUpRequest::new("Alice", "a@x.com", "pw"))
            .await
            .unwrap();

        let message = message_of(
            service
                .sign_up(SignUpRequest::new("alice", "A@X.com", "pw"))
                .await,
        );
        assert_eq!(message, "Username already in use. E-mail already in use.");
    }

    #[actix_web::test]
    async fn test_password_is_stored_hashed() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with_store(store.clone());

        service
            .sign_up(SignUpRequest::new("bob", "bob@example.com", "plain-secret"))
            .await
            .unwrap();

        let stored = store.stored_password("bob").unwrap();
        assert_ne!(stored, "plain-secret");
        assert!(bcrypt::verify("plain-secret", &stored).unwrap());
    }

    #[actix_web::test]
    async fn test_username_check_failure_stops_before_insert() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .times(1)
            .returning(|_, _| Err(StoreError::Database("connection refused".to_string())));
        mock.expect_exec().never();

        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash().never();

        let service = UserService::new(UserRepository::new(Arc::new(mock)), Arc::new(hasher));
        let result = service
            .sign_up(SignUpRequest::new("alice", "a@x.com", "pw"))
            .await;

        assert!(matches!(&result, Err(AppError::BadRequest(_))));
        assert_eq!(message_of(result), UNABLE_TO_VALIDATE_USERNAME);
    }

    #[actix_web::test]
    async fn test_email_check_failure() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .withf(|sql, _| sql.contains("LOWER(username)"))
            .returning(|_, _| Ok(Row::new().with("exists", false)));
        mock.expect_query_row()
            .withf(|sql, _| sql.contains("LOWER(email)"))
            .returning(|_, _| Err(StoreError::Database("timeout".to_string())));
        mock.expect_exec().never();

        let service = service_with_store(Arc::new(mock));
        let result = service
            .sign_up(SignUpRequest::new("alice", "a@x.com", "pw"))
            .await;

        assert_eq!(message_of(result), UNABLE_TO_VALIDATE_EMAIL);
    }

    #[actix_web::test]
    async fn test_hash_failure() {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(HashError("invalid cost".to_string())));

        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(UserRepository::new(store.clone()), Arc::new(hasher));
        let result = service
            .sign_up(SignUpRequest::new("alice", "a@x.com", "pw"))
            .await;

        assert_eq!(message_of(result), UNABLE_TO_VALIDATE_PASSWORD);
        assert_eq!(store.user_count(), 0);
    }

    #[actix_web::test]
    async fn test_insert_unique_violation_maps_to_conflict() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .returning(|_, _| Ok(Row::new().with("exists", false)));
        mock.expect_exec().times(1).returning(|_, _| {
            Err(StoreError::UniqueViolation {
                constraint: Some(EMAIL_UNIQUE_INDEX.to_string()),
            })
        });

        let service = service_with_store(Arc::new(mock));
        let result = service
            .sign_up(SignUpRequest::new("alice", "a@x.com", "pw"))
            .await;

        assert!(matches!(&result, Err(AppError::ConflictError(_))));
        assert_eq!(message_of(result), EMAIL_IN_USE);
    }

    #[actix_web::test]
    async fn test_insert_failure_maps_to_generic_message() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .returning(|_, _| Ok(Row::new().with("exists", false)));
        mock.expect_exec()
            .withf(|sql, params| sql.starts_with("INSERT INTO users") && params.len() == 3)
            .returning(|_, _| Err(StoreError::Database("disk full".to_string())));

        let service = service_with_store(Arc::new(mock));
        let result = service
            .sign_up(SignUpRequest::new("alice", "a@x.com", "pw"))
            .await;

        assert_eq!(message_of(result), UNABLE_TO_CREATE_USER);
    }

    #[actix_web::test]
    async fn test_current_user_returns_profile() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with_store(store.clone());
        service
            .sign_up(SignUpRequest::new("carol", "carol@example.com", "pw"))
            .await
            .unwrap();
        let id = store.id_of("carol").unwrap();

        let response = service
            .current_user(CurrentUserRequest { id })
            .await
            .unwrap();

        assert_eq!(response.id, id);
        assert_eq!(response.username, "carol");
        assert_eq!(response.email, "carol@example.com");
        assert!((Utc::now() - response.created_at) < Duration::seconds(5));
    }

    #[actix_web::test]
    async fn test_current_user_query_failure() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .withf(|_, params| params == [SqlValue::Int(1)])
            .returning(|_, _| Err(StoreError::Database("Some error".to_string())));

        let result = service_with_store(Arc::new(mock))
            .current_user(CurrentUserRequest { id: 1 })
            .await;

        assert!(matches!(&result, Err(AppError::DependencyError(_))));
        assert_eq!(message_of(result), UNABLE_TO_RETRIEVE_CURRENT_USER);
    }

    #[actix_web::test]
    async fn test_current_user_malformed_row() {
        let mut mock = MockStore::new();
        mock.expect_query_row()
            .returning(|_, _| Ok(Row::new().with("1", "Test User")));

        let result = service_with_store(Arc::new(mock))
            .current_user(CurrentUserRequest { id: 1 })
            .await;

        assert_eq!(message_of(result), UNABLE_TO_PARSE_CURRENT_USER);
    }

    #[actix_web::test]
    async fn test_current_user_missing_row() {
        let result = service_with_store(Arc::new(MemoryStore::new()))
            .current_user(CurrentUserRequest { id: 404 })
            .await;

        assert_eq!(message_of(result), UNABLE_TO_PARSE_CURRENT_USER);
    }
}
