use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// One showing of a play; one line of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID", alias = "play_id")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice. Performance order is the statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_deserializes_legacy_play_id_key() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [
                {"playID": "hamlet", "audience": 55},
                {"play_id": "as-like", "audience": 35}
            ]
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(
            invoice.performances,
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ]
        );
    }

    #[test]
    fn negative_audience_is_rejected() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [{"playID": "hamlet", "audience": -1}]
        }"#;
        assert!(serde_json::from_str::<Invoice>(json).is_err());
    }

    #[test]
    fn blank_play_id_is_rejected() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [{"playID": " ", "audience": 10}]
        }"#;
        let err = serde_json::from_str::<Invoice>(json).unwrap_err();
        assert!(err.to_string().contains("PlayId: must not be empty"));
    }
}
