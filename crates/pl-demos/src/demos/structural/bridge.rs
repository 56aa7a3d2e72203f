//! Bridge: a user repository delegating query generation to a driver.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TextField};

const DEFAULT_USER: &str = "Alice";
const NAME_MAX_LEN: usize = 24;

const CONTROLS: &[Control] = &[
    Control::new("1", "SQL Driver"),
    Control::new("2", "Mongo Driver"),
    Control::new("e", "Edit user name"),
    Control::new("w", "repo.saveUser()"),
];

/// Implementation side of the bridge.
pub trait StorageDriver {
    fn insert_user(&self, name: &str) -> String;
}

struct SqlDriver;
struct MongoDriver;

impl StorageDriver for SqlDriver {
    fn insert_user(&self, name: &str) -> String {
        format!("INSERT INTO users (name) VALUES ('{name}');")
    }
}

impl StorageDriver for MongoDriver {
    fn insert_user(&self, name: &str) -> String {
        format!("db.collection('users').insertOne({{ name: '{name}' }});")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Sql,
    Mongo,
}

impl DriverKind {
    pub fn label(&self) -> &'static str {
        match self {
            DriverKind::Sql => "SQL Driver",
            DriverKind::Mongo => "Mongo Driver",
        }
    }

    fn driver(&self) -> &'static dyn StorageDriver {
        match self {
            DriverKind::Sql => &SqlDriver,
            DriverKind::Mongo => &MongoDriver,
        }
    }
}

/// Abstraction side of the bridge. Knows nothing about query syntax.
#[derive(Debug, Clone, Copy)]
pub struct UserRepository {
    driver: DriverKind,
}

impl UserRepository {
    pub fn new(driver: DriverKind) -> Self {
        Self { driver }
    }

    /// Swap the implementation without touching the abstraction.
    pub fn set_driver(&mut self, driver: DriverKind) {
        self.driver = driver;
    }

    pub fn driver(&self) -> DriverKind {
        self.driver
    }

    /// Persist a user; a blank name falls back to the default user.
    pub fn save_user(&self, name: &str) -> String {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_USER } else { name };
        self.driver.driver().insert_user(name)
    }
}

#[derive(Debug)]
pub struct BridgeDemo {
    repository: UserRepository,
    name: TextField,
    query: Option<String>,
}

impl Default for BridgeDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeDemo {
    pub fn new() -> Self {
        Self {
            repository: UserRepository::new(DriverKind::Sql),
            name: TextField::new("", NAME_MAX_LEN),
            query: None,
        }
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }

    pub fn name_field(&self) -> &TextField {
        &self.name
    }

    /// Last generated query.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn save_user(&mut self) {
        self.query = Some(self.repository.save_user(self.name.value()));
    }
}

impl Demo for BridgeDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        if self.name.is_editing() {
            return self.name.handle(input);
        }
        match input {
            DemoInput::Key('1') => self.repository.set_driver(DriverKind::Sql),
            DemoInput::Key('2') => self.repository.set_driver(DriverKind::Mongo),
            DemoInput::Key('e') => self.name.begin_editing(),
            DemoInput::Key('w') => self.save_user(),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Abstraction (Repo) uses Implementation (Driver)"
    }

    fn is_editing(&self) -> bool {
        self.name.is_editing()
    }
}
