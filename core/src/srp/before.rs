use solid_common::output::Sink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Owns user creation, storage and audit logging at once.
pub struct UserManager;

impl UserManager {
    pub fn create_user(&self, name: &str, email: &str, sink: &dyn Sink) -> User {
        let email: String = email.trim().to_ascii_lowercase();
        let user: User = User {
            name: name.to_string(),
            email,
        };

        sink.emit(&format!("Saving user {} <{}> to the database", user.name, user.email));
        sink.emit(&format!("[LOG] User created: {}", user.name));
        user
    }
}
