//! # Dependency Inversion (databases)
//!
//! The [`before::UserService`] builds its own MySQL connection, so the
//! high-level policy is welded to one low-level detail. The
//! [`after::UserService`] receives any [`after::Database`] from its caller.

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::lesson::{Lesson, Principle};

pub mod after;
pub mod before;

pub const USER_DATA: &str = "User data";

pub struct DependencyInversion;

impl Lesson for DependencyInversion {
    fn principle(&self) -> Principle {
        Principle::DependencyInversion
    }

    fn before(&self, sink: &dyn Sink) -> Result<()> {
        before::UserService::new().save_user(USER_DATA, sink);
        Ok(())
    }

    fn after(&self, sink: &dyn Sink) -> Result<()> {
        let stores: [Box<dyn after::Database>; 2] = [
            Box::new(after::MySqlDatabase),
            Box::new(after::MongoDatabase),
        ];
        for database in stores {
            after::UserService::new(database).save_user(USER_DATA, sink);
        }
        Ok(())
    }
}
