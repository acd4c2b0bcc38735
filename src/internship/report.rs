//! Event log entries and the printable organization and applicant reports.

use std::fmt;

use super::user::{Certificate, Notification};

/// Something that happened in the program, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notified(Notification),
    Applied { student: String, internship: String },
    CertificateAwarded(Certificate),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Notified(notification) => write!(f, "{notification}"),
            Event::Applied {
                student,
                internship,
            } => write!(f, " {student} applied for {internship}"),
            Event::CertificateAwarded(certificate) => write!(f, "\n {certificate}\n"),
        }
    }
}

/// Snapshot of an organization's members and internships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationDetails {
    pub name: String,
    pub mentors: Vec<String>,
    pub students: Vec<String>,
    /// Title and duration in weeks.
    pub internships: Vec<(String, u32)>,
}

impl fmt::Display for OrganizationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Organization: \n - {}", self.name)?;
        writeln!(f, "Mentors:")?;
        for name in &self.mentors {
            writeln!(f, " - {name}")?;
        }
        writeln!(f, "Students:")?;
        for name in &self.students {
            writeln!(f, " - {name}")?;
        }
        writeln!(f, "Internships:")?;
        for (title, weeks) in &self.internships {
            writeln!(f, " - {title} ({weeks} weeks)")?;
        }
        Ok(())
    }
}

/// Applicants of one internship, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantList {
    pub title: String,
    pub applicants: Vec<String>,
}

impl fmt::Display for ApplicantList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Applicants for {}:", self.title)?;
        for name in &self.applicants {
            writeln!(f, " - {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_details_layout() {
        let details = OrganizationDetails {
            name: "Dapplesoft".into(),
            mentors: vec!["Hanif".into()],
            students: vec!["Arman".into()],
            internships: vec![("Python Developer".into(), 8)],
        };
        assert_eq!(
            details.to_string(),
            "Organization: \n - Dapplesoft\nMentors:\n - Hanif\nStudents:\n - Arman\nInternships:\n - Python Developer (8 weeks)\n"
        );
    }

    #[test]
    fn applicant_list_layout() {
        let list = ApplicantList {
            title: "Python Developer".into(),
            applicants: vec!["Arman".into(), "Arman".into()],
        };
        assert_eq!(
            list.to_string(),
            "Applicants for Python Developer:\n - Arman\n - Arman\n"
        );
    }

    #[test]
    fn applied_event_line() {
        let event = Event::Applied {
            student: "Arman".into(),
            internship: "Python Developer".into(),
        };
        assert_eq!(event.to_string(), " Arman applied for Python Developer");
    }
}
