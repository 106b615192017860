//! # Mock Framework
//!
//! Utilities for testing handles in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of spinning up a `ResourceActor`, the test owns the receiving end
/// of the channel, inspects each request as it arrives and answers it. This
/// makes success, failure and ordering of actor replies deterministic.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ClientDirectory;
    use crate::domain::Client;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Client>(10);
        let directory = ClientDirectory::new(inner);

        let create_task = tokio::spawn(async move {
            let client = Client::new("Test", "User", "Acme", "test@example.com");
            directory.create_client(client).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        assert_eq!(params.company, "Acme");
        responder.send(Ok("client_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("client_1".to_string()));
    }

    #[tokio::test]
    async fn test_mock_list() {
        let (inner, mut receiver) = create_mock_client::<Client>(10);
        let directory = ClientDirectory::new(inner);

        let list_task = tokio::spawn(async move { directory.list_clients().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let mut client = Client::new("Ann", "", "", "ann@example.com");
        client.id = "client_1".to_string();
        responder.send(Ok(vec![client.clone()])).unwrap();

        assert_eq!(list_task.await.unwrap(), Ok(vec![client]));
    }
}
