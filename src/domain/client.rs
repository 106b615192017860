use serde::{Deserialize, Serialize};

/// A customer the operator places orders for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    /// Optional; empty when unknown.
    pub phone: String,
}

/// Payload for registering a new client.
#[derive(Debug, Clone)]
pub struct ClientCreate {
    pub name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

/// Edit of a registered client. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Reference to a client held by an order draft.
///
/// The draft does not own the client record. It only keeps the id it will
/// submit and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    pub name: String,
}

impl Client {
    /// Creates a new Client instance.
    ///
    /// The `id` is left empty; the client directory assigns it on creation.
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            last_name: last_name.into(),
            company: company.into(),
            email: email.into(),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.last_name)
        }
    }

    pub fn to_ref(&self) -> ClientRef {
        ClientRef {
            id: self.id.clone(),
            name: self.display_name(),
        }
    }
}

impl ClientRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Client> for ClientRef {
    fn from(client: &Client) -> Self {
        client.to_ref()
    }
}
