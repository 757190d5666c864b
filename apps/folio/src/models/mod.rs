pub mod loose;
pub mod resume;

pub use resume::{
    Description, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument,
    Technologies,
};
