use cucumber::when;
use uuid::Uuid;

use crate::support::world::TestWorld;

#[when(expr = "I create a user with name {string} and email {string}")]
pub async fn create_user(world: &mut TestWorld, name: String, email: String) {
    let result = world.user_service().create_user(&name, &email).await;
    world.record_user(result);
}

#[when("I retrieve the user by their ID")]
pub async fn retrieve_user_by_id(world: &mut TestWorld) {
    let user_id = world.current_user_id();
    let result = world.user_service().get_user_by_id(user_id).await;
    world.record_user(result);
}

#[when("I retrieve a user with a random ID")]
pub async fn retrieve_random_user(world: &mut TestWorld) {
    let random_id = Uuid::new_v4();
    world.missing_id = Some(random_id);
    let result = world.user_service().get_user_by_id(random_id).await;
    world.record_user(result);
}

#[when("I list all users")]
pub async fn list_users(world: &mut TestWorld) {
    match world.user_service().get_all_users().await {
        Ok(users) => world.users = users,
        Err(e) => world.error = Some(e),
    }
}

#[when(expr = "I assign the role {string} to the user")]
pub async fn assign_role(world: &mut TestWorld, role_name: String) {
    let user_id = world.current_user_id();
    let role_id = world.role_id(&role_name);
    let result = world.user_service().assign_role_to_user(user_id, role_id).await;
    world.record_user(result);
}

#[when("I assign a random role to the user")]
pub async fn assign_random_role(world: &mut TestWorld) {
    let user_id = world.current_user_id();
    let role_id = Uuid::new_v4();
    world.missing_id = Some(role_id);
    let result = world.user_service().assign_role_to_user(user_id, role_id).await;
    world.record_user(result);
}

#[when(expr = "I remove the role {string} from the user")]
pub async fn remove_role(world: &mut TestWorld, role_name: String) {
    let user_id = world.current_user_id();
    let role_id = world.role_id(&role_name);
    let result = world.user_service().remove_role_from_user(user_id, role_id).await;
    world.record_user(result);
}
