//! Participants and the capabilities they share.

use std::fmt;

use super::model::{InternshipId, MentorId, StudentId, Task, UserId};

/// Completed tasks a student needs before a certificate is issued.
pub const CERTIFICATE_THRESHOLD: usize = 3;

/// Identity shared by every participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl Profile {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Mentor,
    Organization,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Student => "Student",
            Role::Mentor => "Mentor",
            Role::Organization => "Organization",
        };
        f.write_str(label)
    }
}

/// A message addressed to one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub role: Role,
    pub recipient: String,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]: {}", self.role, self.recipient, self.message)
    }
}

/// Anything that can be addressed by a notification.
pub trait User {
    fn profile(&self) -> &Profile;

    fn role(&self) -> Role;

    fn name(&self) -> &str {
        &self.profile().name
    }

    fn notify(&self, message: &str) -> Notification {
        Notification {
            role: self.role(),
            recipient: self.profile().name.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub holder: String,
    pub completed_tasks: usize,
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Certificate Awarded to {}! Congratulations!", self.holder)
    }
}

/// Participants that earn a certificate by completing tasks.
pub trait Certifiable: User {
    fn completed_tasks(&self) -> usize;

    /// Issued every time it is asked for once the threshold is met.
    fn certificate(&self) -> Option<Certificate> {
        let completed_tasks = self.completed_tasks();
        (completed_tasks >= CERTIFICATE_THRESHOLD).then(|| Certificate {
            holder: self.name().to_string(),
            completed_tasks,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    profile: Profile,
    pub(crate) tasks: Vec<Task>,
}

impl Student {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            tasks: Vec::new(),
        }
    }

    /// Tasks in assignment order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl User for Student {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Student
    }
}

impl Certifiable for Student {
    fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }
}

#[derive(Debug, Clone)]
pub struct Mentor {
    profile: Profile,
}

impl Mentor {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl User for Mentor {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Mentor
    }
}

#[derive(Debug, Clone)]
pub struct Organization {
    profile: Profile,
    pub(crate) students: Vec<StudentId>,
    pub(crate) mentors: Vec<MentorId>,
    pub(crate) internships: Vec<InternshipId>,
}

impl Organization {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            students: Vec::new(),
            mentors: Vec::new(),
            internships: Vec::new(),
        }
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn mentors(&self) -> &[MentorId] {
        &self.mentors
    }

    pub fn internships(&self) -> &[InternshipId] {
        &self.internships
    }
}

impl User for Organization {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Organization
    }
}
