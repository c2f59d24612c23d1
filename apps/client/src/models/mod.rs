// Wire-faithful records served by the job-match backend, plus the write
// payloads built from form drafts.

pub mod job;
pub mod profile;
pub mod user;

pub use job::{Application, JobPost, JobPostPayload, EMPLOYMENT_TYPES};
pub use profile::{
    CvUpdate, Education, EducationPayload, JobSeekerCv, WorkExperience, WorkExperiencePayload,
};
pub use user::{AuthTokens, NewUser, User};
