mod facebook;
mod welcome;

pub use facebook::{FacebookLayout, FacebookPage};
pub use welcome::WelcomePage;
