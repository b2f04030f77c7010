#![cfg(test)]
use solid_common::output::{MemorySink, Sink};
use solid_core::dip::after::{Database, MongoDatabase, MySqlDatabase, UserService};
use solid_core::lesson::{self, Principle};

struct InMemoryDatabase;

impl Database for InMemoryDatabase {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn save(&self, data: &str, sink: &dyn Sink) {
        sink.emit(&format!("Keeping '{data}' in memory"));
    }
}

#[test]
fn two_stores_same_service_distinct_messages() {
    let mysql: MemorySink = MemorySink::new();
    UserService::new(Box::new(MySqlDatabase)).save_user("User data", &mysql);

    let mongo: MemorySink = MemorySink::new();
    UserService::new(Box::new(MongoDatabase)).save_user("User data", &mongo);

    assert_ne!(mysql.messages(), mongo.messages());
    assert!(mysql.contains("MySQL") && mysql.contains("User data"));
    assert!(mongo.contains("MongoDB") && mongo.contains("User data"));
}

#[test]
fn service_accepts_stores_it_has_never_seen() {
    let sink: MemorySink = MemorySink::new();
    let service: UserService = UserService::new(Box::new(InMemoryDatabase));
    service.save_user("User data", &sink);

    assert_eq!(service.database(), "in-memory");
    assert_eq!(sink.messages(), vec!["Keeping 'User data' in memory"]);
}

#[test]
fn dependency_inversion_lesson_plays_both_stores() -> anyhow::Result<()> {
    let lesson = lesson::find(Principle::DependencyInversion)
        .ok_or_else(|| anyhow::anyhow!("missing lesson"))?;

    let sink: MemorySink = MemorySink::new();
    lesson.after(&sink)?;

    assert_eq!(sink.len(), 2);
    assert!(sink.contains("MySQL"));
    assert!(sink.contains("MongoDB"));
    Ok(())
}

#[test]
fn lessons_stop_at_the_first_violation() -> anyhow::Result<()> {
    let lesson = lesson::find(Principle::OpenClosed)
        .ok_or_else(|| anyhow::anyhow!("missing lesson"))?;

    let sink: MemorySink = MemorySink::new();
    let err = lesson.before(&sink).err().ok_or_else(|| anyhow::anyhow!("expected failure"))?;

    assert_eq!(err.to_string(), "no handler for 'premium'");
    assert_eq!(sink.len(), 3);
    Ok(())
}
