mod user;

pub use self::user::User;
