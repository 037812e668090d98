use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use test_utils::builder::TestBuilder;

/// Tests that a logged-in user passes the guard.
///
/// Expected: Ok(user_id) with the ID stored in the session
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user_id(923456789012345678)
        .await?;

    let user_id = AuthGuard::new(session).require_user().await?;

    assert_eq!(user_id, 923456789012345678);

    Ok(())
}

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_empty_session() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that a malformed stored user ID is reported rather than treated as logged out.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_malformed_user_id() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session
        .insert("auth:user", "not-a-number".to_string())
        .await
        .unwrap();

    let result = AuthGuard::new(session).require_user().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));
}
