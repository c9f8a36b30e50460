use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() {
    let mut test = TestBuilder::new().without_file().build().unwrap();
    let session = test.session();

    let result = AuthGuard::new(&[], session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests a logged-in user with an empty allow-list.
///
/// Expected: Ok with the stored user ID and token
#[tokio::test]
async fn empty_allow_list_admits_everyone() -> Result<(), AppError> {
    let mut test = TestBuilder::new().without_file().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .login(123456789, "access".to_string())
        .await?;

    let user = AuthGuard::new(&[], session)
        .require(&[Permission::Operator])
        .await?;

    assert_eq!(user.user_id, 123456789);
    assert_eq!(user.access_token, "access");

    Ok(())
}

/// Tests the operator allow-list.
///
/// Expected: listed user admitted, anyone else Err(AccessDenied)
#[tokio::test]
async fn enforces_operator_allow_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new().without_file().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .login(123456789, "access".to_string())
        .await?;

    assert!(AuthGuard::new(&[123456789], session)
        .require(&[Permission::Operator])
        .await
        .is_ok());

    let denied = AuthGuard::new(&[987654321], session)
        .require(&[Permission::Operator])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(123456789, _)))
    ));

    Ok(())
}

/// Tests that logging out clears the user.
///
/// Expected: Err(UserNotInSession) after clear
#[tokio::test]
async fn clear_logs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().without_file().build().unwrap();
    let session = test.session();
    let auth_session = AuthSession::new(session);
    auth_session.login(1, "access".to_string()).await?;

    auth_session.clear().await;

    assert!(AuthGuard::new(&[], session).require(&[]).await.is_err());

    Ok(())
}
