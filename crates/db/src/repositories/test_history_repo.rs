//! Repository for recorded test calls.

use apiflow_core::test_history::{TestStats, TestStatus};
use apiflow_core::types::Timestamp;

use crate::models::test_history::{CreateTestRecord, TestHistoryRecord};
use crate::store::next_id;
use crate::DbPool;

pub struct TestHistoryRepo;

impl TestHistoryRepo {
    /// All records, newest first.
    pub async fn list_all(pool: &DbPool) -> Vec<TestHistoryRecord> {
        let mut records = pool.test_history.read().await.clone();
        sort_newest_first(&mut records);
        records
    }

    /// Records for one API, newest first.
    pub async fn list_by_api_id(pool: &DbPool, api_id: &str) -> Vec<TestHistoryRecord> {
        let mut records: Vec<TestHistoryRecord> = pool
            .test_history
            .read()
            .await
            .iter()
            .filter(|t| t.api_id == api_id)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        records
    }

    /// Records with the given status, newest first.
    pub async fn list_by_status(pool: &DbPool, status: TestStatus) -> Vec<TestHistoryRecord> {
        let mut records: Vec<TestHistoryRecord> = pool
            .test_history
            .read()
            .await
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        records
    }

    /// The `limit` most recent records.
    pub async fn recent(pool: &DbPool, limit: usize) -> Vec<TestHistoryRecord> {
        let mut records = Self::list_all(pool).await;
        records.truncate(limit);
        records
    }

    /// Append a record with the next id, stamped `now`.
    pub async fn create(
        pool: &DbPool,
        input: CreateTestRecord,
        now: Timestamp,
    ) -> TestHistoryRecord {
        let mut records = pool.test_history.write().await;
        let record = TestHistoryRecord {
            id: next_id(records.iter().map(|t| t.id)),
            api_id: input.api_id,
            endpoint: input.endpoint,
            method: input.method,
            request: input.request,
            response: input.response,
            duration: input.duration,
            status: input.status,
            status_code: input.status_code,
            timestamp: now,
        };
        records.push(record.clone());
        record
    }

    /// Aggregate statistics over the full history.
    pub async fn stats(pool: &DbPool) -> TestStats {
        let records = pool.test_history.read().await;
        TestStats::compute(records.iter().map(|t| (t.status, t.duration)))
    }
}

fn sort_newest_first(records: &mut [TestHistoryRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
