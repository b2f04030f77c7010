use solid_common::output::Sink;

pub struct MySqlDatabase;

impl MySqlDatabase {
    pub fn save(&self, data: &str, sink: &dyn Sink) {
        sink.emit(&format!("Saving '{data}' to MySQL database"));
    }
}

/// High-level policy that constructs its own storage.
pub struct UserService {
    database: MySqlDatabase,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            database: MySqlDatabase,
        }
    }

    pub fn save_user(&self, data: &str, sink: &dyn Sink) {
        self.database.save(data, sink);
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
