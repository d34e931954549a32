use cucumber::given;

use crate::support::world::TestWorld;

#[given("a clean user database")]
pub async fn clean_database(world: &mut TestWorld) {
    *world = TestWorld::default();
}

#[given(expr = "a user exists with name {string} and email {string}")]
pub async fn user_exists(world: &mut TestWorld, name: String, email: String) {
    let user = world
        .user_service()
        .create_user(&name, &email)
        .await
        .expect("seed user should be created");
    world.current_user = Some(user);
}

#[given(expr = "a role exists with name {string}")]
pub async fn role_exists(world: &mut TestWorld, name: String) {
    let role = world
        .role_service()
        .create_role(&name)
        .await
        .expect("seed role should be created");
    world.roles_by_name.insert(name, role.clone());
    world.current_role = Some(role);
}

#[given(expr = "the user has the role {string}")]
pub async fn user_has_role(world: &mut TestWorld, role_name: String) {
    let user_id = world.current_user_id();
    let role_id = world.role_id(&role_name);
    let user = world
        .user_service()
        .assign_role_to_user(user_id, role_id)
        .await
        .expect("seed assignment should succeed");
    world.current_user = Some(user);
}
