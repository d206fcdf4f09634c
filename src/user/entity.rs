use anyhow::Result;
use log::debug;

use super::Profile;

/// A mutable user record identified by its username.
///
/// The username is fixed at construction; `name`, `age` and `email` can be
/// replaced at any time without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    name: String,
    age: i32,
    email: String,
}

impl User {
    pub fn new(profile: Profile) -> Self {
        let Profile {
            username,
            name,
            age,
            email,
        } = profile;

        Self {
            username,
            name,
            age,
            email,
        }
    }

    /// Builds a user from the JSON form of a [`Profile`].
    pub fn from_json(json: &str) -> Result<Self> {
        Profile::from_json(json).map(Self::new)
    }

    /// Returns a snapshot of the current field values.
    pub fn profile(&self) -> Profile {
        Profile {
            username: self.username.clone(),
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        debug!("Updated name for {}", self.username);
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
        debug!("Updated age for {}", self.username);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        debug!("Updated email for {}", self.username);
    }
}

impl From<Profile> for User {
    fn from(profile: Profile) -> Self {
        Self::new(profile)
    }
}
