//! Client service — use-cases for managing clients.

use devman_domain::client::Client;
use devman_domain::error::{ConflictError, DevManError, EmptyResultError, NotFoundError};
use devman_domain::id::ClientId;
use devman_domain::value::{ClientName, Email, PhoneNumber};

use crate::ports::ClientRepository;

/// Field changes for [`ClientService::update_client`]. `None` (or blank)
/// fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<bool>,
}

/// Application service for client use-cases.
pub struct ClientService<R> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new client.
    ///
    /// Validates all fields atomically through [`Client::create`], then
    /// pre-checks that no active client already uses the email. The check
    /// runs against the lower-cased email, so it is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::Validation`] for malformed input,
    /// [`DevManError::Conflict`] for a duplicate email, or a storage error
    /// from the repository.
    #[tracing::instrument(skip_all, fields(client_name = name))]
    pub async fn create_client(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Client, DevManError> {
        let client = Client::create(name, email, phone, true)?;

        if self.repo.get_by_email(client.email.as_str()).await?.is_some() {
            return Err(ConflictError::DuplicateEmail.into());
        }

        self.repo.create(client).await
    }

    /// Update an existing client.
    ///
    /// Each provided non-blank field is validated through its value object
    /// before the matching mutator is applied; the first validation failure
    /// aborts the whole update. Persists exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the client is missing,
    /// [`DevManError::Validation`] for a malformed field, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_client(
        &self,
        id: ClientId,
        changes: UpdateClient,
    ) -> Result<Client, DevManError> {
        let mut client = self.get_client(id).await?;

        if let Some(name) = non_blank(changes.name) {
            client.update_name(ClientName::new(name)?);
        }
        if let Some(email) = non_blank(changes.email) {
            client.update_email(Email::new(email)?);
        }
        if let Some(phone) = non_blank(changes.phone) {
            client.update_phone(PhoneNumber::new(phone)?);
        }
        if let Some(status) = changes.status {
            client.update_status(status);
        }

        self.repo.update(client).await
    }

    /// Deactivate a client (soft delete).
    ///
    /// The row is kept; the client disappears from listings and releases
    /// its email for reuse, since uniqueness only spans active clients.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the client is missing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_client(&self, id: ClientId) -> Result<(), DevManError> {
        let mut client = self.get_client(id).await?;
        client.update_status(false);
        self.repo.update(client).await?;
        Ok(())
    }

    /// Look up a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when no client with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_client(&self, id: ClientId) -> Result<Client, DevManError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Client",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all active clients.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::Empty`] when there are no active clients, or
    /// a storage error from the repository.
    pub async fn list_clients(&self) -> Result<Vec<Client>, DevManError> {
        let clients = self.repo.get_all().await?;
        if clients.is_empty() {
            return Err(EmptyResultError::NoClients.into());
        }
        Ok(clients)
    }
}

/// Treat blank strings the same as absent fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devman_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryClientRepo {
        store: Mutex<HashMap<ClientId, Client>>,
    }

    impl ClientRepository for InMemoryClientRepo {
        fn create(
            &self,
            client: Client,
        ) -> impl Future<Output = Result<Client, DevManError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(client.id, client.clone());
            async { Ok(client) }
        }

        fn get_by_id(
            &self,
            id: ClientId,
        ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_by_email(
            &self,
            email: &str,
        ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store
                .values()
                .find(|c| c.status && c.email.as_str() == email)
                .cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, DevManError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Client> = store.values().filter(|c| c.status).cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            client: Client,
        ) -> impl Future<Output = Result<Client, DevManError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(client.id, client.clone());
            async { Ok(client) }
        }

        fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), DevManError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    fn make_service() -> ClientService<InMemoryClientRepo> {
        ClientService::new(InMemoryClientRepo::default())
    }

    #[tokio::test]
    async fn should_create_client_when_valid() {
        let svc = make_service();
        let created = svc
            .create_client("Acme Corp", "contact@acme.com", Some("11998877665"))
            .await
            .unwrap();

        let fetched = svc.get_client(created.id).await.unwrap();
        assert_eq!(fetched.email.as_str(), "contact@acme.com");
        assert!(fetched.status);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_invalid() {
        let svc = make_service();
        let result = svc.create_client("ab", "a@b.com", None).await;
        assert!(matches!(
            result,
            Err(DevManError::Validation(ValidationError::ClientNameTooShort))
        ));
    }

    #[tokio::test]
    async fn should_reject_duplicate_email_case_insensitively() {
        let svc = make_service();
        svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();

        let result = svc.create_client("Other Corp", "A@B.COM", None).await;
        assert!(matches!(
            result,
            Err(DevManError::Conflict(ConflictError::DuplicateEmail))
        ));
    }

    #[tokio::test]
    async fn should_allow_email_reuse_after_soft_delete() {
        let svc = make_service();
        let first = svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();
        svc.delete_client(first.id).await.unwrap();

        let result = svc.create_client("Other Corp", "a@b.com", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_update_only_provided_fields() {
        let svc = make_service();
        let created = svc
            .create_client("Acme Corp", "a@b.com", Some("11998877665"))
            .await
            .unwrap();

        let updated = svc
            .update_client(
                created.id,
                UpdateClient {
                    name: Some("Acme Incorporated".to_string()),
                    ..UpdateClient::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_str(), "Acme Incorporated");
        assert_eq!(updated.email.as_str(), "a@b.com");
        assert_eq!(
            updated.phone.as_ref().map(PhoneNumber::as_str),
            Some("11998877665")
        );
    }

    #[tokio::test]
    async fn should_ignore_blank_fields_on_update() {
        let svc = make_service();
        let created = svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();

        let updated = svc
            .update_client(
                created.id,
                UpdateClient {
                    name: Some("   ".to_string()),
                    ..UpdateClient::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_str(), "Acme Corp");
    }

    #[tokio::test]
    async fn should_reject_update_with_invalid_email() {
        let svc = make_service();
        let created = svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();

        let result = svc
            .update_client(
                created.id,
                UpdateClient {
                    email: Some("not-an-email".to_string()),
                    ..UpdateClient::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(DevManError::Validation(ValidationError::InvalidEmail))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_client() {
        let svc = make_service();
        let result = svc
            .update_client(ClientId::new(), UpdateClient::default())
            .await;
        assert!(matches!(result, Err(DevManError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_soft_delete_and_hide_from_listing() {
        let svc = make_service();
        let created = svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();
        svc.delete_client(created.id).await.unwrap();

        // Row still exists; only the flag flipped.
        let fetched = svc.get_client(created.id).await.unwrap();
        assert!(!fetched.status);

        let result = svc.list_clients().await;
        assert!(matches!(
            result,
            Err(DevManError::Empty(EmptyResultError::NoClients))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_client() {
        let svc = make_service();
        let result = svc.delete_client(ClientId::new()).await;
        assert!(matches!(result, Err(DevManError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_active_clients() {
        let svc = make_service();
        svc.create_client("Acme Corp", "a@b.com", None).await.unwrap();
        svc.create_client("Globex Inc", "c@d.com", None).await.unwrap();

        let all = svc.list_clients().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_treat_empty_listing_as_error() {
        let svc = make_service();
        let result = svc.list_clients().await;
        assert!(matches!(result, Err(DevManError::Empty(_))));
    }
}
