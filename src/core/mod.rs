pub mod codes;
pub mod login;
pub mod signup;
pub mod tasks;
