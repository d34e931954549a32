use cucumber::then;

use user_lib::errors_service::UserServiceError;

use crate::support::world::TestWorld;

#[then("the operation should succeed")]
pub async fn operation_succeeded(world: &mut TestWorld) {
    assert!(world.error.is_none(), "unexpected error: {:?}", world.error);
}

#[then("the user should be created successfully")]
pub async fn user_created_successfully(world: &mut TestWorld) {
    assert!(world.error.is_none(), "unexpected error: {:?}", world.error);
    let user = world.current_user.as_ref().expect("User should exist");
    assert!(!user.id.is_nil());
}

#[then(expr = "the user should have name {string} and email {string}")]
pub async fn user_has_name_and_email(world: &mut TestWorld, name: String, email: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.name, name);
    assert_eq!(user.email, email);
}

#[then(expr = "I should receive an invalid argument error {string}")]
pub async fn invalid_argument_error(world: &mut TestWorld, message: String) {
    match &world.error {
        Some(UserServiceError::InvalidArgument(msg)) => assert_eq!(msg, &message),
        other => panic!("expected invalid argument error, got {:?}", other),
    }
}

#[then("I should receive a user not found error for that ID")]
pub async fn user_not_found_error(world: &mut TestWorld) {
    let id = world.missing_id.expect("missing id should be set");
    match &world.error {
        Some(UserServiceError::NotFound(msg)) => {
            assert_eq!(msg, &format!("User not found with id: {id}"))
        }
        other => panic!("expected not found error, got {:?}", other),
    }
}

#[then("I should receive a not found error")]
pub async fn not_found_error(world: &mut TestWorld) {
    assert!(matches!(world.error, Some(UserServiceError::NotFound(_))));
}

#[then("no user should be stored")]
pub async fn no_user_stored(world: &mut TestWorld) {
    assert_eq!(world.user_repo.len(), 0);
}

#[then(expr = "I should receive {int} users")]
pub async fn receive_users_count(world: &mut TestWorld, count: usize) {
    assert_eq!(world.users.len(), count);
}
