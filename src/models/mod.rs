mod user;

pub use user::{INVALID_USER_MESSAGE, NewUser, UpdateUser, User};
