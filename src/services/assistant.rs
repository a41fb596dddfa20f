use anyhow::{Context, Result};

use crate::{
    data::{Bill, BillStore},
    llm::{ChatCompletion, ChatMessage},
};

pub const FALLBACK_RESPONSE: &str = "Sorry, I couldn't generate a response";

/// One `<description>: $<price>` line per bill.
pub fn build_prompt(bills: &[Bill]) -> String {
    bills
        .iter()
        .map(|bill| format!("{}: ${}", bill.description, bill.price))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn respond(store: &dyn BillStore, llm: &dyn ChatCompletion) -> Result<String> {
    let bills = store.list().await.context("error listing bills")?;

    tracing::debug!("asking assistant about {} bills", bills.len());

    let answer = llm
        .complete(vec![ChatMessage::user(build_prompt(&bills))])
        .await
        .context("error completing chat")?;

    Ok(answer.unwrap_or_else(|| FALLBACK_RESPONSE.to_owned()))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::data::{InMemoryBills, NewBill};

    struct StubLlm {
        answer: Option<String>,
        fail: bool,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl StubLlm {
        fn answering(answer: Option<&str>) -> Self {
            Self {
                answer: answer.map(str::to_owned),
                fail: false,
                seen: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl ChatCompletion for StubLlm {
        async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>> {
            self.seen.lock().unwrap().extend(messages);
            if self.fail {
                return Err(anyhow!("provider down"));
            }
            Ok(self.answer.clone())
        }
    }

    fn bill(id: i64, description: &str, price: f64) -> Bill {
        Bill {
            id,
            description: description.to_owned(),
            price,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn prompt_has_one_line_per_bill() {
        let prompt = build_prompt(&[bill(1, "Coffee", 3.5), bill(2, "Rent", 800.0)]);
        assert_eq!(prompt, "Coffee: $3.5\nRent: $800");
    }

    #[test]
    fn prompt_for_no_bills_is_empty() {
        assert_eq!(build_prompt(&[]), "");
    }

    #[tokio::test]
    async fn sends_stored_bills_and_returns_answer() {
        let store = InMemoryBills::new();
        store
            .insert(NewBill {
                description: "Coffee".to_owned(),
                price: 3.5,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .await
            .unwrap();
        let llm = StubLlm::answering(Some("Cut down on coffee."));

        let answer = respond(&store, &llm).await.unwrap();

        assert_eq!(answer, "Cut down on coffee.");
        assert_eq!(
            *llm.seen.lock().unwrap(),
            vec![ChatMessage::user("Coffee: $3.5")]
        );
    }

    #[tokio::test]
    async fn empty_answer_falls_back() {
        let store = InMemoryBills::new();
        let llm = StubLlm::answering(None);

        assert_eq!(respond(&store, &llm).await.unwrap(), FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let store = InMemoryBills::new();
        let llm = StubLlm {
            fail: true,
            ..StubLlm::answering(None)
        };

        assert!(respond(&store, &llm).await.is_err());
    }
}
