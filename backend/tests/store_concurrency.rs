//! Concurrent submissions against the shared in-memory store.

use std::collections::BTreeSet;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rstest::rstest;
use serde_json::json;

use hiring_backend::domain::{ApplicationsService, CredentialHasher};
use hiring_backend::outbound::memory::MemoryStore;

const SUBMISSIONS: u64 = 64;

fn service() -> Arc<ApplicationsService> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = Arc::new(MemoryStore::new(clock.clone(), CredentialHasher::low_cost()));
    Arc::new(ApplicationsService::new(store, clock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_get_distinct_sequential_ids() {
    let service = service();

    let tasks: Vec<_> = (0..SUBMISSIONS)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move {
                let payload = json!({
                    "firstName": format!("Applicant{n}"),
                    "lastName": "Lee",
                    "email": format!("applicant{n}@example.com"),
                    "age": 30,
                    "position": "Engineer",
                    "experience": "5+",
                    "education": "PhD",
                    "motivation": "Concurrency is my favourite hobby."
                });
                service.submit(&payload).await.expect("submit").id().get()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for task in tasks {
        ids.insert(task.await.expect("join"));
    }

    let expected: BTreeSet<u64> = (1..=SUBMISSIONS).collect();
    assert_eq!(ids, expected);
    assert_eq!(service.list().await.expect("list").len(), expected.len());
}
