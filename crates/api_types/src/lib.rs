use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error body returned by the store for any non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod dashboard {
    use super::*;

    /// Account summary shown on the dashboard.
    ///
    /// `balance` is in whole naira.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountSummary {
        pub user_name: String,
        pub account_number: String,
        pub account_type: String,
        pub balance: i64,
    }
}

pub mod profile {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Profile {
        pub name: String,
        pub email: String,
        pub phone: String,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TransactionType {
        Debit,
        Credit,
    }

    impl TransactionType {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Debit => "debit",
                Self::Credit => "credit",
            }
        }
    }

    /// A ledger line as stored by the mock store.
    ///
    /// Records are immutable once created. `id` is the creation timestamp in
    /// milliseconds, so sorting by id descending yields newest first.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionRecord {
        pub id: i64,
        #[serde(rename = "type")]
        pub kind: TransactionType,
        /// Positive, in whole naira.
        pub amount: u64,
        pub description: String,
        /// ISO calendar date (`YYYY-MM-DD`).
        pub date: NaiveDate,
    }
}

pub mod card {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum CardStatus {
        #[default]
        Active,
        Blocked,
    }

    impl CardStatus {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Active => "active",
                Self::Blocked => "blocked",
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Card {
        pub id: String,
        pub card_number: String,
        pub expiry: String,
        pub cvv: String,
        pub status: CardStatus,
    }

    /// Request body for creating or replacing a card.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CardNew {
        pub card_number: String,
        pub expiry: String,
        pub cvv: String,
        #[serde(default)]
        pub status: CardStatus,
    }

    /// Partial update; absent fields are left untouched.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CardPatch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub card_number: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub expiry: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cvv: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub status: Option<CardStatus>,
    }

    impl Card {
        pub fn from_new(id: String, new: CardNew) -> Self {
            Self {
                id,
                card_number: new.card_number,
                expiry: new.expiry,
                cvv: new.cvv,
                status: new.status,
            }
        }

        pub fn apply(&mut self, patch: CardPatch) {
            if let Some(card_number) = patch.card_number {
                self.card_number = card_number;
            }
            if let Some(expiry) = patch.expiry {
                self.expiry = expiry;
            }
            if let Some(cvv) = patch.cvv {
                self.cvv = cvv;
            }
            if let Some(status) = patch.status {
                self.status = status;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_record_uses_type_key_and_iso_date() {
        let record = transaction::TransactionRecord {
            id: 1_700_000_000_000,
            kind: transaction::TransactionType::Debit,
            amount: 5000,
            description: "Airtime purchase".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "debit");
        assert_eq!(json["date"], "2024-03-09");
    }

    #[test]
    fn account_summary_is_camel_case() {
        let raw = r#"{"userName":"John Doe","accountNumber":"1234567890","accountType":"Savings","balance":250000}"#;
        let summary: dashboard::AccountSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.account_number, "1234567890");
        assert_eq!(summary.balance, 250_000);
    }

    #[test]
    fn card_patch_only_touches_present_fields() {
        let mut card = card::Card {
            id: "1".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry: "09/27".to_string(),
            cvv: "123".to_string(),
            status: card::CardStatus::Active,
        };
        let patch: card::CardPatch = serde_json::from_str(r#"{"status":"blocked"}"#).unwrap();
        card.apply(patch);
        assert_eq!(card.status, card::CardStatus::Blocked);
        assert_eq!(card.expiry, "09/27");
    }
}
