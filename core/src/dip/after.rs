//! The service owns the abstraction; stores plug in from outside.

use solid_common::output::Sink;
use tracing::debug;

/// Anywhere user data can be written.
pub trait Database {
    fn name(&self) -> &'static str;

    fn save(&self, data: &str, sink: &dyn Sink);
}

pub struct MySqlDatabase;

impl Database for MySqlDatabase {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn save(&self, data: &str, sink: &dyn Sink) {
        sink.emit(&format!("Saving '{data}' to MySQL database"));
    }
}

pub struct MongoDatabase;

impl Database for MongoDatabase {
    fn name(&self) -> &'static str {
        "MongoDB"
    }

    fn save(&self, data: &str, sink: &dyn Sink) {
        sink.emit(&format!("Saving '{data}' to MongoDB collection"));
    }
}

/// High-level policy; never constructs its own [`Database`].
pub struct UserService {
    database: Box<dyn Database>,
}

impl UserService {
    pub fn new(database: Box<dyn Database>) -> Self {
        Self { database }
    }

    /// Name of the injected store.
    pub fn database(&self) -> &'static str {
        self.database.name()
    }

    pub fn save_user(&self, data: &str, sink: &dyn Sink) {
        debug!("saving user through {}", self.database.name());
        self.database.save(data, sink);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use solid_common::output::MemorySink;

    #[test]
    fn service_reports_injected_store() {
        assert_eq!(UserService::new(Box::new(MySqlDatabase)).database(), "MySQL");
        assert_eq!(UserService::new(Box::new(MongoDatabase)).database(), "MongoDB");
    }

    #[test]
    fn same_service_code_writes_to_either_store() {
        let mysql: MemorySink = MemorySink::new();
        UserService::new(Box::new(MySqlDatabase)).save_user("User data", &mysql);

        let mongo: MemorySink = MemorySink::new();
        UserService::new(Box::new(MongoDatabase)).save_user("User data", &mongo);

        assert_eq!(mysql.messages(), vec!["Saving 'User data' to MySQL database"]);
        assert_eq!(mongo.messages(), vec!["Saving 'User data' to MongoDB collection"]);
    }
}
