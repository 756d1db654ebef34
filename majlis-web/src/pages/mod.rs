pub mod discussion;
pub mod game;
pub mod games;
pub mod home;
pub mod posts;
pub mod profile;
pub mod reviews;
pub mod sign_in;
pub mod sign_up;
pub mod wiki;
