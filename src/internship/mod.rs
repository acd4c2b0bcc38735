//! Internship coordination.
//!
//! A [`Program`] owns every participant, internship and task. Participants
//! refer to each other through typed handles, and every action appends the
//! resulting notifications to an ordered event log.

use tracing::{debug, info, warn};

mod error;
pub use error::ProgramError;

mod model;
pub use model::{
    Internship, InternshipId, MentorId, OrganizationId, SUBMITTED_FEEDBACK, StudentId, Task,
    TaskId, TaskRef, TaskState, UserId,
};
use model::Handle;

mod report;
pub use report::{ApplicantList, Event, OrganizationDetails};

mod user;
pub use user::{
    CERTIFICATE_THRESHOLD, Certifiable, Certificate, Mentor, Notification, Organization, Profile,
    Role, Student, User,
};

fn lookup<H: Handle, T>(items: &[T], id: H) -> Result<&T, ProgramError> {
    items.get(id.index()).ok_or_else(|| id.not_found())
}

fn lookup_mut<H: Handle, T>(items: &mut [T], id: H) -> Result<&mut T, ProgramError> {
    items.get_mut(id.index()).ok_or_else(|| id.not_found())
}

/// Registry of participants, internships and their tasks.
#[derive(Debug, Default)]
pub struct Program {
    students: Vec<Student>,
    mentors: Vec<Mentor>,
    organizations: Vec<Organization>,
    internships: Vec<Internship>,
    events: Vec<Event>,
}

/// Registration and lookup
impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_student(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> StudentId {
        let student = Student::new(Profile::new(id, name, email));
        self.students.push(student);
        StudentId(self.students.len() - 1)
    }

    pub fn register_mentor(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> MentorId {
        let mentor = Mentor::new(Profile::new(id, name, email));
        self.mentors.push(mentor);
        MentorId(self.mentors.len() - 1)
    }

    pub fn register_organization(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> OrganizationId {
        let organization = Organization::new(Profile::new(id, name, email));
        self.organizations.push(organization);
        OrganizationId(self.organizations.len() - 1)
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.index())
    }

    pub fn mentor(&self, id: MentorId) -> Option<&Mentor> {
        self.mentors.get(id.index())
    }

    pub fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.organizations.get(id.index())
    }

    pub fn internship(&self, id: InternshipId) -> Option<&Internship> {
        self.internships.get(id.index())
    }

    pub fn task(&self, task: TaskRef) -> Option<&Task> {
        self.student(task.student)?.tasks.get(task.slot)
    }

    /// Every event so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

/// Organization operations
impl Program {
    /// Add a mentor to an organization. Adding an existing member does nothing.
    pub fn add_mentor(
        &mut self,
        org: OrganizationId,
        mentor: MentorId,
    ) -> Result<(), ProgramError> {
        let name = lookup(&self.mentors, mentor)?.name().to_string();
        let organization = lookup_mut(&mut self.organizations, org)?;
        if organization.mentors.contains(&mentor) {
            debug!(org = %org, mentor = %mentor, "mentor already a member");
            return Ok(());
        }
        organization.mentors.push(mentor);

        let note = organization.notify(&format!("New mentor added: {name}"));
        self.emit([Event::Notified(note)]);
        Ok(())
    }

    /// Add a student to an organization. Adding an existing member does nothing.
    pub fn add_student(
        &mut self,
        org: OrganizationId,
        student: StudentId,
    ) -> Result<(), ProgramError> {
        let name = lookup(&self.students, student)?.name().to_string();
        let organization = lookup_mut(&mut self.organizations, org)?;
        if organization.students.contains(&student) {
            debug!(org = %org, student = %student, "student already a member");
            return Ok(());
        }
        organization.students.push(student);

        let note = organization.notify(&format!("New student added: {name}"));
        self.emit([Event::Notified(note)]);
        Ok(())
    }

    /// Open an internship run by `org` and supervised by `mentor`.
    pub fn create_internship(
        &mut self,
        org: OrganizationId,
        title: impl Into<String>,
        duration: u32,
        mentor: MentorId,
    ) -> Result<InternshipId, ProgramError> {
        let title = title.into();
        let mentor_note = lookup(&self.mentors, mentor)?
            .notify(&format!("Assigned as mentor for '{title}' internship."));
        let organization = lookup_mut(&mut self.organizations, org)?;

        let id = InternshipId(self.internships.len());
        organization.internships.push(id);
        let org_note = organization.notify(&format!("Internship created: {title}"));

        info!(org = %org, mentor = %mentor, title = %title, weeks = duration, "internship created");
        self.internships.push(Internship {
            title,
            duration,
            mentor,
            org,
            applicants: Vec::new(),
        });
        self.emit([Event::Notified(mentor_note), Event::Notified(org_note)]);
        Ok(id)
    }

    pub fn show_details(&self, org: OrganizationId) -> Result<OrganizationDetails, ProgramError> {
        let organization = lookup(&self.organizations, org)?;

        let mentors = organization
            .mentors
            .iter()
            .map(|&id| lookup(&self.mentors, id).map(|m| m.name().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        let students = organization
            .students
            .iter()
            .map(|&id| lookup(&self.students, id).map(|s| s.name().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        let internships = organization
            .internships
            .iter()
            .map(|&id| lookup(&self.internships, id).map(|i| (i.title.clone(), i.duration)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrganizationDetails {
            name: organization.name().to_string(),
            mentors,
            students,
            internships,
        })
    }

    pub fn show_applicants(&self, internship: InternshipId) -> Result<ApplicantList, ProgramError> {
        let posting = lookup(&self.internships, internship)?;
        let applicants = posting
            .applicants
            .iter()
            .map(|&id| lookup(&self.students, id).map(|s| s.name().to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicantList {
            title: posting.title.clone(),
            applicants,
        })
    }
}

/// Student and mentor operations
impl Program {
    /// Register `student` as an applicant, then notify the student, the
    /// internship's mentor and its organization.
    ///
    /// Repeated applications are recorded every time.
    pub fn apply(
        &mut self,
        student: StudentId,
        internship: InternshipId,
    ) -> Result<(), ProgramError> {
        let applicant = lookup(&self.students, student)?;
        let posting = lookup(&self.internships, internship)?;
        let mentor = lookup(&self.mentors, posting.mentor)?;
        let organization = lookup(&self.organizations, posting.org)?;

        let name = applicant.name().to_string();
        let title = posting.title.clone();
        let events = [
            Event::Applied {
                student: name.clone(),
                internship: title.clone(),
            },
            Event::Notified(applicant.notify(&format!("Applied for '{title}' internship."))),
            Event::Notified(mentor.notify(&format!("{name} applied for '{title}'."))),
            Event::Notified(organization.notify(&format!("New applicant: {name}"))),
        ];

        let posting = lookup_mut(&mut self.internships, internship)?;
        posting.applicants.push(student);
        info!(student = %name, internship = %title, "application received");
        self.emit(events);
        Ok(())
    }

    /// Give `student` a new task from `mentor` and notify the student.
    pub fn assign_task(
        &mut self,
        mentor: MentorId,
        student: StudentId,
        id: TaskId,
        desc: impl Into<String>,
    ) -> Result<TaskRef, ProgramError> {
        lookup(&self.mentors, mentor)?;
        let desc = desc.into();
        let assignee = lookup_mut(&mut self.students, student)?;

        let note = assignee.notify(&format!("New task assigned: '{desc}'"));
        assignee.tasks.push(Task::new(id, desc, mentor, student));
        let task = TaskRef {
            student,
            slot: assignee.tasks.len() - 1,
        };

        info!(mentor = %mentor, student = %student, task = id, "task assigned");
        self.emit([Event::Notified(note)]);
        Ok(task)
    }

    /// Mark an assigned task as submitted and notify the student and the
    /// task's mentor.
    pub fn submit(&mut self, student: StudentId, task: TaskRef) -> Result<(), ProgramError> {
        if task.student != student {
            return Err(ProgramError::TaskNotOwned { task, student });
        }

        let submitter = lookup_mut(&mut self.students, student)?;
        let entry = submitter
            .tasks
            .get_mut(task.slot)
            .ok_or(ProgramError::TaskNotFound(task))?;
        if entry.state != TaskState::Assigned {
            return Err(ProgramError::InvalidTaskState {
                task: entry.id,
                state: entry.state,
                expected: TaskState::Assigned,
            });
        }
        let mentor = lookup(&self.mentors, entry.mentor)?;

        entry.state = TaskState::Submitted;
        entry.feedback = SUBMITTED_FEEDBACK.to_string();

        let task_id = entry.id;
        let name = submitter.name().to_string();
        let events = [
            Event::Notified(submitter.notify(&format!("Task #{task_id} submitted."))),
            Event::Notified(mentor.notify(&format!("Task #{task_id} submitted by {name}"))),
        ];

        info!(student = %name, task = task_id, "task submitted");
        self.emit(events);
        Ok(())
    }

    /// Replace a task's feedback, notify its student and check whether the
    /// student has earned a certificate.
    ///
    /// The certificate check runs after every review, so a student past the
    /// threshold receives a certificate event on each later review.
    pub fn review(
        &mut self,
        mentor: MentorId,
        task: TaskRef,
        feedback: impl Into<String>,
    ) -> Result<(), ProgramError> {
        lookup(&self.mentors, mentor)?;
        let feedback = feedback.into();
        let student = lookup_mut(&mut self.students, task.student)?;
        let entry = student
            .tasks
            .get_mut(task.slot)
            .ok_or(ProgramError::TaskNotFound(task))?;
        if entry.mentor != mentor {
            return Err(ProgramError::MentorMismatch {
                task: entry.id,
                assigned: entry.mentor,
                reviewer: mentor,
            });
        }

        let task_id = entry.id;
        match entry.state {
            TaskState::Submitted => entry.state = TaskState::Reviewed,
            TaskState::Reviewed => {}
            TaskState::Assigned => {
                warn!(task = task_id, "reviewing a task that was never submitted");
            }
        }
        let message = format!("Task #{task_id} reviewed: {feedback}");
        entry.feedback = feedback;
        let note = student.notify(&message);

        let mut events = vec![Event::Notified(note)];
        if let Some(certificate) = student.certificate() {
            info!(
                student = %certificate.holder,
                completed = certificate.completed_tasks,
                "certificate awarded"
            );
            events.push(Event::CertificateAwarded(certificate));
        }
        self.emit(events);
        Ok(())
    }
}

/// Private API
impl Program {
    fn emit(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            debug!(%event, "event");
            self.events.push(event);
        }
    }
}
