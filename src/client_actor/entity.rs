use crate::actor_framework::Entity;
use crate::domain::{Client, ClientCreate, ClientUpdate};

fn check_contact(name: &str, email: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Client name required".to_string());
    }
    if !email.contains('@') {
        return Err(format!("Invalid email: {}", email));
    }
    Ok(())
}

impl Entity for Client {
    type Id = String;
    type CreateParams = ClientCreate;
    type Update = ClientUpdate;
    type Action = ();
    type ActionResult = ();

    /// Creates a new Client from creation parameters.
    ///
    /// # Errors
    /// A client needs a name and a plausible email address.
    fn from_create_params(id: String, params: ClientCreate) -> Result<Self, String> {
        check_contact(&params.name, &params.email)?;
        Ok(Self {
            id,
            name: params.name,
            last_name: params.last_name,
            company: params.company,
            email: params.email,
            phone: params.phone,
        })
    }

    /// Applies the edit only if the resulting record is still valid.
    fn on_update(&mut self, update: ClientUpdate) -> Result<(), String> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let email = update.email.unwrap_or_else(|| self.email.clone());
        check_contact(&name, &email)?;

        self.name = name;
        self.email = email;
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: &str) -> ClientCreate {
        ClientCreate {
            name: name.to_string(),
            last_name: "Lovelace".to_string(),
            company: "Engines Ltd".to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(Client::from_create_params("c1".into(), params("Ada", "ada@example.com")).is_ok());
        assert!(Client::from_create_params("c1".into(), params("", "ada@example.com")).is_err());
        assert_eq!(
            Client::from_create_params("c1".into(), params("Ada", "nope")),
            Err("Invalid email: nope".to_string())
        );
    }

    #[test]
    fn test_update_keeps_untouched_fields() {
        let mut client = Client::from_create_params("c1".into(), params("Ada", "ada@example.com")).unwrap();
        let update = ClientUpdate {
            company: Some("Analytical Co".to_string()),
            phone: Some("555-0100".to_string()),
            ..ClientUpdate::default()
        };
        client.on_update(update).unwrap();

        assert_eq!(client.name, "Ada");
        assert_eq!(client.last_name, "Lovelace");
        assert_eq!(client.company, "Analytical Co");
        assert_eq!(client.phone, "555-0100");
    }

    #[test]
    fn test_invalid_update_changes_nothing() {
        let mut client = Client::from_create_params("c1".into(), params("Ada", "ada@example.com")).unwrap();
        let before = client.clone();
        let update = ClientUpdate {
            email: Some("nope".to_string()),
            phone: Some("555-0100".to_string()),
            ..ClientUpdate::default()
        };
        assert_eq!(client.on_update(update), Err("Invalid email: nope".to_string()));
        assert_eq!(client, before);

        let blank = ClientUpdate {
            name: Some(" ".to_string()),
            ..ClientUpdate::default()
        };
        assert!(client.on_update(blank).is_err());
        assert_eq!(client, before);
    }

    #[test]
    fn test_clients_take_no_actions() {
        let mut client = Client::from_create_params("c1".into(), params("Ada", "ada@example.com")).unwrap();
        assert!(client.handle_action(()).is_err());
    }
}
