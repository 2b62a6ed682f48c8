//! End-to-end runs of the pipeline against in-memory collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use parking_lot::Mutex;

use hubdigest::pipeline::{self, Delivery, RunOutcome};
use hubdigest::{Category, Digest, RawCandidate, RecipientList};
use hubdigest_adapters::{AdapterError, ItemSource, Mailer};

/// Registry double serving fixed pages per category.
#[derive(Debug, Default)]
struct FakeRegistry {
    models: Vec<RawCandidate>,
    datasets: Vec<RawCandidate>,
    calls: Mutex<Vec<Category>>,
}

#[async_trait]
impl ItemSource for FakeRegistry {
    async fn fetch(&self, category: Category) -> Result<Vec<RawCandidate>, AdapterError> {
        self.calls.lock().push(category);
        Ok(match category {
            Category::Model => self.models.clone(),
            Category::Dataset => self.datasets.clone(),
        })
    }

    fn description(&self) -> &str {
        "fake registry"
    }
}

/// Mailer double recording every attempt; fails for listed recipients.
#[derive(Debug, Default)]
struct FakeMailer {
    fail_for: Vec<String>,
    attempts: Mutex<Vec<(String, Digest)>>,
    successes: Mutex<Vec<String>>,
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn deliver(&self, recipient: &str, digest: &Digest) -> Result<(), AdapterError> {
        self.attempts
            .lock()
            .push((recipient.to_string(), digest.clone()));

        if self.fail_for.iter().any(|r| r == recipient) {
            return Err(AdapterError::Smtp(format!(
                "535 authentication rejected for {recipient}"
            )));
        }

        self.successes.lock().push(recipient.to_string());
        Ok(())
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn hours_ago(hours: i64) -> String {
    (now() - Duration::hours(hours)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn delivery(mailer: &Arc<FakeMailer>, recipients: &str) -> Delivery {
    let mailer: Arc<dyn Mailer> = mailer.clone();
    Delivery::new(mailer, RecipientList::parse(recipients), 5)
}

#[tokio::test]
async fn test_recent_model_is_mailed_in_the_digest() {
    let registry = FakeRegistry {
        models: vec![RawCandidate::new("x/y").created_at(hours_ago(2)).likes(5)],
        ..FakeRegistry::default()
    };
    let mailer = Arc::new(FakeMailer::default());
    let delivery = delivery(&mailer, "me@example.com");

    let outcome = pipeline::run(&registry, Some(&delivery), now(), today())
        .await
        .unwrap();

    let (digest, recipients) = match outcome {
        RunOutcome::Dispatched { digest, recipients } => (digest, recipients),
        other => panic!("expected a dispatched digest, got {other:?}"),
    };
    assert_eq!(recipients, 1);
    assert!(digest
        .html
        .contains("<a href=\"https://huggingface.co/x/y\">x/y</a>"));
    assert!(digest.html.contains(Category::Model.heading()));
    assert!(!digest.html.contains(Category::Dataset.heading()));
    assert_eq!(*mailer.successes.lock(), vec!["me@example.com"]);
    assert_eq!(
        *registry.calls.lock(),
        vec![Category::Model, Category::Dataset]
    );
}

#[tokio::test]
async fn test_item_older_than_a_day_is_excluded() {
    let registry = FakeRegistry {
        models: vec![
            RawCandidate::new("old/model").created_at(hours_ago(25)).likes(100),
            RawCandidate::new("new/model").created_at(hours_ago(1)),
        ],
        ..FakeRegistry::default()
    };

    let collected = pipeline::collect(&registry, now()).await.unwrap();
    let ids: Vec<&str> = collected.models.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["new/model"]);
}

#[tokio::test]
async fn test_unparsable_timestamp_is_skipped_without_error() {
    let registry = FakeRegistry {
        datasets: vec![
            RawCandidate::new("bad/date").created_at("not-a-date"),
            RawCandidate::new("good/date").created_at(hours_ago(3)),
        ],
        ..FakeRegistry::default()
    };

    let collected = pipeline::collect(&registry, now()).await.unwrap();
    let ids: Vec<&str> = collected.datasets.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["good/date"]);
}

#[tokio::test]
async fn test_nothing_new_never_dispatches() {
    let registry = FakeRegistry {
        models: vec![RawCandidate::new("stale").created_at(hours_ago(30))],
        datasets: vec![RawCandidate::new("broken").created_at("yesterday")],
        ..FakeRegistry::default()
    };
    let mailer = Arc::new(FakeMailer::default());
    let delivery = delivery(&mailer, "a@example.com,b@example.com");

    let outcome = pipeline::run(&registry, Some(&delivery), now(), today())
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoUpdates);
    assert!(mailer.attempts.lock().is_empty());
}

#[tokio::test]
async fn test_failing_recipient_does_not_affect_the_others() {
    let registry = FakeRegistry {
        models: vec![RawCandidate::new("org/model").created_at(hours_ago(4))],
        datasets: vec![RawCandidate::new("org/data").created_at(hours_ago(5))],
        ..FakeRegistry::default()
    };
    let mailer = Arc::new(FakeMailer {
        fail_for: vec!["two@example.com".to_string()],
        ..FakeMailer::default()
    });
    let delivery = delivery(&mailer, "one@example.com,two@example.com,three@example.com");

    let outcome = pipeline::run(&registry, Some(&delivery), now(), today())
        .await
        .unwrap();
    assert!(matches!(outcome, RunOutcome::Dispatched { recipients: 3, .. }));

    let mut successes = mailer.successes.lock().clone();
    successes.sort();
    assert_eq!(successes, vec!["one@example.com", "three@example.com"]);

    // Every recipient received the same digest.
    let attempts = mailer.attempts.lock();
    assert_eq!(attempts.len(), 3);
    assert!(attempts.iter().all(|(_, digest)| *digest == attempts[0].1));
    assert_eq!(
        attempts[0].1.subject,
        "Hugging Face Daily Updates - 2024-05-01"
    );
}

#[tokio::test]
async fn test_ranking_and_top_n_cap_flow_into_the_digest() {
    let models: Vec<RawCandidate> = (0..12)
        .map(|i| {
            RawCandidate::new(format!("org/m{i:02}"))
                .created_at(hours_ago(1))
                .likes(i)
        })
        .collect();
    let registry = FakeRegistry {
        models,
        ..FakeRegistry::default()
    };

    let outcome = pipeline::run(&registry, None, now(), today()).await.unwrap();
    let digest = match outcome {
        RunOutcome::DryRun(digest) => digest,
        other => panic!("expected a dry run, got {other:?}"),
    };

    // Most liked first; the two least liked fall outside the top ten.
    let first = digest.html.find(">org/m11</a>").unwrap();
    let second = digest.html.find(">org/m10</a>").unwrap();
    assert!(first < second);
    assert!(digest.html.contains(">org/m02</a>"));
    assert!(!digest.html.contains(">org/m01</a>"));
    assert!(!digest.html.contains(">org/m00</a>"));
}

#[tokio::test]
async fn test_configuration_gap_degrades_to_dry_run() {
    let settings = hubdigest::Settings {
        email_sender: Some("bot@example.com".to_string()),
        email_password: None,
        email_receiver: Some("me@example.com".to_string()),
        ..hubdigest::Settings::default()
    };
    assert!(settings.delivery().is_none());

    let registry = FakeRegistry {
        models: vec![RawCandidate::new("x/y").created_at(hours_ago(2))],
        ..FakeRegistry::default()
    };
    let outcome = pipeline::run(&registry, None, now(), today()).await.unwrap();
    assert!(matches!(outcome, RunOutcome::DryRun(_)));
}
