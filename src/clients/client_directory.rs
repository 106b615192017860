use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::client_actor::ClientError;
use crate::domain::{Client, ClientCreate, ClientUpdate};

/// Handle to the Client actor.
#[derive(Clone)]
pub struct ClientDirectory {
    inner: ResourceClient<Client>,
}

impl_basic_client!(ClientDirectory, Client, ClientError, client);

impl ClientDirectory {
    #[instrument(skip(self, client), fields(client_name = %client.name))]
    pub async fn create_client(&self, client: Client) -> Result<String, ClientError> {
        debug!("Sending request");
        let params = ClientCreate {
            name: client.name,
            last_name: client.last_name,
            company: client.company,
            email: client.email,
            phone: client.phone,
        };
        self.inner.create(params).await.map_err(ClientError::from)
    }

    /// Edits a registered client and returns the stored record.
    #[instrument(skip(self, update))]
    pub async fn update_client(&self, id: String, update: ClientUpdate) -> Result<Client, ClientError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ClientError::from)
    }
}
