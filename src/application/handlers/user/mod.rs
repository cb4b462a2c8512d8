//! User lifecycle handlers - invite, delete, role change, listing, password.

mod change_role;
mod delete_user;
mod invite_user;
mod list_profiles;
mod set_password;

pub use change_role::{ChangeRoleCommand, ChangeRoleHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler, DeleteUserResult};
pub use invite_user::{InviteUserCommand, InviteUserHandler, InviteUserResult};
pub use list_profiles::{ListProfilesHandler, ListProfilesQuery};
pub use set_password::{SetPasswordCommand, SetPasswordHandler};
