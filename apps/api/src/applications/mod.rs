// Job applications: one per (user, job), status managed by the posting recruiter.

pub mod handlers;
pub mod repository;
