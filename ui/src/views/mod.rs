pub mod about;
pub mod article;
pub mod home;
pub mod nav;
