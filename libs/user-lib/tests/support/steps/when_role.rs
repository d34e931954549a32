use cucumber::when;

use crate::support::world::TestWorld;

#[when(expr = "I create a role with name {string}")]
pub async fn create_role(world: &mut TestWorld, name: String) {
    match world.role_service().create_role(&name).await {
        Ok(role) => {
            world.roles_by_name.insert(name, role.clone());
            world.current_role = Some(role);
            world.error = None;
        }
        Err(e) => world.error = Some(e),
    }
}

#[when("I list all roles")]
pub async fn list_roles(world: &mut TestWorld) {
    match world.role_service().get_all_roles().await {
        Ok(roles) => world.roles = roles,
        Err(e) => world.error = Some(e),
    }
}
