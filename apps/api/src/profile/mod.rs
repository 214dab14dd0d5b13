// Profiles: a job seeker's declared skills and contact details, and a
// recruiter's company page.

pub mod handlers;
pub mod repository;
pub mod skills;
