mod signup;
pub use signup::Signup;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod create_resume;
pub use create_resume::CreateResume;

mod edit_resume;
pub use edit_resume::EditResume;

mod view_resume;
pub use view_resume::ViewResume;

mod not_found;
pub use not_found::NotFound;
