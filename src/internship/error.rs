//! Error types for internship coordination.

use thiserror::Error;

use super::model::{InternshipId, MentorId, OrganizationId, StudentId, TaskId, TaskRef, TaskState};

/// Error returned by [`Program`](super::Program) operations.
///
/// A refused operation leaves the registry unchanged.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    #[error("mentor {0} not found")]
    MentorNotFound(MentorId),

    #[error("organization {0} not found")]
    OrganizationNotFound(OrganizationId),

    #[error("internship {0} not found")]
    InternshipNotFound(InternshipId),

    #[error("task at {0} not found")]
    TaskNotFound(TaskRef),

    #[error("task at {task} does not belong to student {student}")]
    TaskNotOwned { task: TaskRef, student: StudentId },

    #[error("task #{task} was assigned by mentor {assigned}, not {reviewer}")]
    MentorMismatch {
        task: TaskId,
        assigned: MentorId,
        reviewer: MentorId,
    },

    #[error("task #{task} is {state:?}, expected {expected:?}")]
    InvalidTaskState {
        task: TaskId,
        state: TaskState,
        expected: TaskState,
    },
}
