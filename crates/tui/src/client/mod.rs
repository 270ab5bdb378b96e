use api_types::{
    ErrorResponse,
    card::{Card, CardNew, CardPatch, CardStatus},
    dashboard::AccountSummary,
    profile::Profile,
    transaction::TransactionRecord,
};
use engine::TransactionStore;
use reqwest::{Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("store unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// HTTP client of the mock store.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::InvalidConfig(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    async fn request<TReq, TResp>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
    ) -> ClientResult<TResp>
    where
        TReq: Serialize + ?Sized,
        TResp: DeserializeOwned,
    {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))?;

        let mut req = self.http.request(method.clone(), endpoint);
        if let Some(body) = body {
            req = req.json(body);
        }
        let res = req.send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<TResp>().await?);
        }

        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(%method, path, %status, "store request failed: {body}");

        let err = match status {
            StatusCode::NOT_FOUND => ClientError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(body)
            }
            _ => ClientError::Server(body),
        };
        Err(err)
    }

    async fn get<TResp: DeserializeOwned>(&self, path: &str) -> ClientResult<TResp> {
        self.request::<(), TResp>(Method::GET, path, None).await
    }

    pub async fn dashboard(&self) -> ClientResult<AccountSummary> {
        self.get("dashboard").await
    }

    pub async fn put_dashboard(&self, summary: &AccountSummary) -> ClientResult<AccountSummary> {
        self.request(Method::PUT, "dashboard", Some(summary)).await
    }

    pub async fn profile(&self) -> ClientResult<Profile> {
        self.get("profile").await
    }

    pub async fn put_profile(&self, profile: &Profile) -> ClientResult<Profile> {
        self.request(Method::PUT, "profile", Some(profile)).await
    }

    pub async fn transactions(&self) -> ClientResult<Vec<TransactionRecord>> {
        self.get("transactions").await
    }

    pub async fn create_transaction(
        &self,
        record: &TransactionRecord,
    ) -> ClientResult<TransactionRecord> {
        self.request(Method::POST, "transactions", Some(record)).await
    }

    pub async fn cards(&self) -> ClientResult<Vec<Card>> {
        self.get("cards").await
    }

    pub async fn create_card(&self, card: &CardNew) -> ClientResult<Card> {
        self.request(Method::POST, "cards", Some(card)).await
    }

    pub async fn replace_card(&self, id: &str, card: &CardNew) -> ClientResult<Card> {
        self.request(Method::PUT, &format!("cards/{id}"), Some(card)).await
    }

    pub async fn block_card(&self, id: &str) -> ClientResult<Card> {
        let patch = CardPatch {
            status: Some(CardStatus::Blocked),
            ..CardPatch::default()
        };
        self.request(Method::PATCH, &format!("cards/{id}"), Some(&patch))
            .await
    }

    pub async fn delete_card(&self, id: &str) -> ClientResult<()> {
        self.request::<(), serde_json::Value>(Method::DELETE, &format!("cards/{id}"), None)
            .await
            .map(|_| ())
    }
}

impl TransactionStore for Client {
    type Error = ClientError;

    async fn create_transaction(&self, record: &TransactionRecord) -> ClientResult<()> {
        Client::create_transaction(self, record).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use engine::{SubmitPolicy, TransactionFlow, TransactionSubmitter, forms};
    use server::{Db, Store};

    use super::*;

    async fn spawn_store() -> Client {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server::spawn_with_listener(Store::in_memory(Db::seed()), listener).unwrap();
        Client::new(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn reads_seeded_account() {
        let client = spawn_store().await;
        let dashboard = client.dashboard().await.unwrap();
        assert_eq!(dashboard.account_number, "1234567890");
        let profile = client.profile().await.unwrap();
        assert_eq!(profile.name, dashboard.user_name);
    }

    #[tokio::test]
    async fn card_crud_and_missing_ids() {
        let client = spawn_store().await;
        let card = client
            .create_card(&CardNew {
                card_number: "5399 8300 0000 0001".to_string(),
                expiry: "01/29".to_string(),
                cvv: "321".to_string(),
                status: CardStatus::Active,
            })
            .await
            .unwrap();

        let blocked = client.block_card(&card.id).await.unwrap();
        assert_eq!(blocked.status, CardStatus::Blocked);

        client.delete_card(&card.id).await.unwrap();
        assert!(matches!(
            client.delete_card(&card.id).await,
            Err(ClientError::NotFound)
        ));
        assert!(!client.cards().await.unwrap().iter().any(|c| c.id == card.id));
    }

    #[tokio::test]
    async fn submitter_writes_through_the_client() {
        let client = spawn_store().await;
        let before = client.transactions().await.unwrap().len();
        let submitter = TransactionSubmitter::new(
            client.clone(),
            SubmitPolicy {
                latency: Duration::ZERO,
                ..SubmitPolicy::default()
            },
        );

        let mut flow = TransactionFlow::airtime();
        flow.set_field(forms::airtime::PHONE, "08012345678");
        flow.set_field(forms::airtime::NETWORK, "glo");
        flow.set_field(forms::airtime::AMOUNT, "1000");
        flow.request_confirmation().unwrap();
        "1234".chars().for_each(|c| flow.pin_mut().push_digit(c));
        let receipt = submitter.submit(&mut flow).await.unwrap();

        let records = client.transactions().await.unwrap();
        assert_eq!(records.len(), before + 1);
        assert!(records.contains(&receipt.record));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = Client::new(&format!("http://{addr}")).unwrap();
        assert!(matches!(
            client.dashboard().await,
            Err(ClientError::Transport(_))
        ));
    }
}
