//! One type per reason to change.

use solid_common::output::Sink;
use tracing::debug;

/// Plain data; knows nothing about storage or logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    /// Normalises the email address.
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.trim().to_ascii_lowercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Persistence only.
pub struct UserRepository;

impl UserRepository {
    pub fn save(&self, user: &User, sink: &dyn Sink) {
        sink.emit(&format!("Saving user {} <{}> to the database", user.name, user.email));
    }
}

/// Audit logging only.
pub struct ActivityLog;

impl ActivityLog {
    pub fn record(&self, event: &str, sink: &dyn Sink) {
        sink.emit(&format!("[LOG] {event}"));
    }
}

/// Coordinates the single-purpose parts; adds no behaviour of its own.
pub struct UserService {
    repository: UserRepository,
    log: ActivityLog,
}

impl UserService {
    pub fn new(repository: UserRepository, log: ActivityLog) -> Self {
        Self { repository, log }
    }

    pub fn register(&self, name: &str, email: &str, sink: &dyn Sink) -> User {
        let user: User = User::new(name, email);
        debug!("registering {}", user.name());

        self.repository.save(&user, sink);
        self.log.record(&format!("User created: {}", user.name()), sink);
        user
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
