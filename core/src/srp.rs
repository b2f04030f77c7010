//! # Single Responsibility (users & logging)
//!
//! [`before::UserManager`] validates, persists and logs in one type, so a
//! change to any of those concerns reopens it. [`after`] gives each concern
//! its own type and lets [`after::UserService`] compose them.

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::lesson::{Lesson, Principle};

pub mod after;
pub mod before;

const SAMPLE_USERS: [(&str, &str); 2] = [
    ("Ada", "ada@example.com"),
    ("Linus", "linus@example.com"),
];

pub struct SingleResponsibility;

impl Lesson for SingleResponsibility {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    fn before(&self, sink: &dyn Sink) -> Result<()> {
        let manager: before::UserManager = before::UserManager;
        for (name, email) in SAMPLE_USERS {
            manager.create_user(name, email, sink);
        }
        Ok(())
    }

    fn after(&self, sink: &dyn Sink) -> Result<()> {
        let service: after::UserService =
            after::UserService::new(after::UserRepository, after::ActivityLog);
        for (name, email) in SAMPLE_USERS {
            service.register(name, email, sink);
        }
        Ok(())
    }
}
