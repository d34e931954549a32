use cucumber::then;

use crate::support::world::TestWorld;

#[then("the role should be created successfully")]
pub async fn role_created_successfully(world: &mut TestWorld) {
    assert!(world.error.is_none(), "unexpected error: {:?}", world.error);
    let role = world.current_role.as_ref().expect("Role should exist");
    assert!(!role.id.is_nil());
}

#[then(expr = "I should receive the roles {string} and {string}")]
pub async fn receive_roles(world: &mut TestWorld, first: String, second: String) {
    let mut names: Vec<&str> = world.roles.iter().map(|r| r.role_name.as_str()).collect();
    names.sort_unstable();
    let mut expected = vec![first.as_str(), second.as_str()];
    expected.sort_unstable();
    assert_eq!(names, expected);
}

#[then(expr = "the user should have the role {string}")]
pub async fn user_has_role_check(world: &mut TestWorld, role_name: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert!(user.roles.iter().any(|r| r.role_name == role_name));
}

#[then(expr = "the user should not have the role {string}")]
pub async fn user_does_not_have_role(world: &mut TestWorld, role_name: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert!(!user.roles.iter().any(|r| r.role_name == role_name));
}

#[then(expr = "the user should have {int} roles")]
pub async fn user_has_roles_count(world: &mut TestWorld, count: usize) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.roles.len(), count);
}
