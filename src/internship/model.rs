//! Handles, tasks and internships.
//!
//! Entities refer to each other through typed indices into the
//! [`Program`](super::Program) registry, never by ownership.

use std::fmt;

use super::error::ProgramError;

/// Caller supplied user identifier.
pub type UserId = u32;

/// Caller supplied task identifier.
pub type TaskId = u32;

/// Feedback placed on a task when its student submits it.
pub const SUBMITTED_FEEDBACK: &str = "Submitted Successfully";

pub(crate) trait Handle: Copy {
    fn index(self) -> usize;
    fn not_found(self) -> ProgramError;
}

macro_rules! define_handle {
    ($name:ident, $variant:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl Handle for $name {
            fn index(self) -> usize {
                self.0
            }

            fn not_found(self) -> ProgramError {
                ProgramError::$variant(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

define_handle!(StudentId, StudentNotFound);
define_handle!(MentorId, MentorNotFound);
define_handle!(OrganizationId, OrganizationNotFound);
define_handle!(InternshipId, InternshipNotFound);

/// Position of a task inside its student's task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskRef {
    pub student: StudentId,
    pub(crate) slot: usize,
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student {} slot {}", self.student, self.slot)
    }
}

/// Progress of a task. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Assigned,
    Submitted,
    Reviewed,
}

#[derive(Debug, Clone)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) desc: String,
    pub(crate) state: TaskState,
    pub(crate) feedback: String,
    pub(crate) mentor: MentorId,
    pub(crate) student: StudentId,
}

impl Task {
    pub(crate) fn new(id: TaskId, desc: String, mentor: MentorId, student: StudentId) -> Self {
        Self {
            id,
            desc,
            state: TaskState::Assigned,
            feedback: String::new(),
            mentor,
            student,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state != TaskState::Assigned
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn mentor(&self) -> MentorId {
        self.mentor
    }

    pub fn student(&self) -> StudentId {
        self.student
    }
}

#[derive(Debug, Clone)]
pub struct Internship {
    pub(crate) title: String,
    pub(crate) duration: u32,
    pub(crate) mentor: MentorId,
    pub(crate) org: OrganizationId,
    pub(crate) applicants: Vec<StudentId>,
}

impl Internship {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Length in weeks.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn mentor(&self) -> MentorId {
        self.mentor
    }

    pub fn org(&self) -> OrganizationId {
        self.org
    }

    /// Applicants in application order, repeats included.
    pub fn applicants(&self) -> &[StudentId] {
        &self.applicants
    }
}
