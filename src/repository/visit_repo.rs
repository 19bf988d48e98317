use crate::model::visit::{CityCount, DailyTraffic, DeviceCount, PageCount, Visit};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::Database;

fn get_count(doc: &Document, key: &str) -> i64 {
    doc.get_i64(key)
        .or_else(|_| doc.get_i32(key).map(i64::from))
        .unwrap_or(0)
}

#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn insert(&self, visit: Visit) -> RepositoryResult<Visit>;
    /// Total and distinct-visitor counts since `start`.
    async fn totals(&self, start: bson::DateTime) -> RepositoryResult<(i64, i64)>;
    /// Visits grouped by calendar day since `start`, ascending by date.
    async fn daily_traffic(&self, start: bson::DateTime) -> RepositoryResult<Vec<DailyTraffic>>;
    async fn top_pages(
        &self,
        start: bson::DateTime,
        limit: i64,
    ) -> RepositoryResult<Vec<PageCount>>;
    async fn device_breakdown(&self, start: bson::DateTime) -> RepositoryResult<Vec<DeviceCount>>;
    /// Visit counts grouped by city, descending.
    async fn by_city(&self, start: bson::DateTime) -> RepositoryResult<Vec<CityCount>>;
}

pub struct MongoVisitRepository {
    collection: mongodb::Collection<Visit>,
}

impl MongoVisitRepository {
    pub fn new(db: &Database) -> Self {
        MongoVisitRepository {
            collection: db.collection::<Visit>("visits"),
        }
    }

    async fn run_pipeline(&self, pipeline: Vec<Document>) -> RepositoryResult<Vec<Document>> {
        let mut cursor = self
            .collection
            .aggregate(pipeline, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Visit aggregation failed: {}", e)))?;
        let mut docs = Vec::new();
        while let Some(doc) = cursor.next().await {
            docs.push(doc.map_err(|e| {
                RepositoryError::database(format!("Visit aggregation failed: {}", e))
            })?);
        }
        Ok(docs)
    }
}

#[async_trait]
impl VisitRepository for MongoVisitRepository {
    async fn insert(&self, mut visit: Visit) -> RepositoryResult<Visit> {
        visit.id = Some(ObjectId::new());
        match self.collection.insert_one(visit.clone(), None).await {
            Ok(_) => Ok(visit),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to record visit: {}",
                e
            ))),
        }
    }

    async fn totals(&self, start: bson::DateTime) -> RepositoryResult<(i64, i64)> {
        let pipeline = vec![
            doc! { "$match": { "timestamp": { "$gte": start } } },
            doc! { "$group": {
                "_id": null,
                "visits": { "$sum": 1 },
                "visitors": { "$addToSet": "$visitor_id" },
            } },
            doc! { "$project": {
                "visits": 1,
                "unique_visitors": { "$size": "$visitors" },
            } },
        ];
        let docs = self.run_pipeline(pipeline).await?;
        match docs.first() {
            Some(doc) => Ok((get_count(doc, "visits"), get_count(doc, "unique_visitors"))),
            None => Ok((0, 0)),
        }
    }

    async fn daily_traffic(&self, start: bson::DateTime) -> RepositoryResult<Vec<DailyTraffic>> {
        let pipeline = vec![
            doc! { "$match": { "timestamp": { "$gte": start } } },
            doc! { "$group": {
                "_id": { "$dateToString": { "format": "%Y-%m-%d", "date": "$timestamp" } },
                "visits": { "$sum": 1 },
                "visitors": { "$addToSet": "$visitor_id" },
            } },
            doc! { "$project": {
                "visits": 1,
                "unique_visitors": { "$size": "$visitors" },
            } },
            doc! { "$sort": { "_id": 1 } },
        ];
        let docs = self.run_pipeline(pipeline).await?;
        Ok(docs
            .iter()
            .map(|doc| DailyTraffic {
                date: doc.get_str("_id").unwrap_or_default().to_string(),
                visits: get_count(doc, "visits"),
                unique_visitors: get_count(doc, "unique_visitors"),
            })
            .collect())
    }

    async fn top_pages(
        &self,
        start: bson::DateTime,
        limit: i64,
    ) -> RepositoryResult<Vec<PageCount>> {
        let pipeline = vec![
            doc! { "$match": { "timestamp": { "$gte": start } } },
            doc! { "$group": { "_id": "$page", "visits": { "$sum": 1 } } },
            doc! { "$sort": { "visits": -1 } },
            doc! { "$limit": limit },
        ];
        let docs = self.run_pipeline(pipeline).await?;
        Ok(docs
            .iter()
            .map(|doc| PageCount {
                page: doc.get_str("_id").unwrap_or_default().to_string(),
                visits: get_count(doc, "visits"),
            })
            .collect())
    }

    async fn device_breakdown(&self, start: bson::DateTime) -> RepositoryResult<Vec<DeviceCount>> {
        let pipeline = vec![
            doc! { "$match": { "timestamp": { "$gte": start } } },
            doc! { "$group": { "_id": "$device_type", "visits": { "$sum": 1 } } },
            doc! { "$sort": { "visits": -1 } },
        ];
        let docs = self.run_pipeline(pipeline).await?;
        Ok(docs
            .iter()
            .map(|doc| DeviceCount {
                device_type: doc.get_str("_id").unwrap_or_default().to_string(),
                visits: get_count(doc, "visits"),
            })
            .collect())
    }

    async fn by_city(&self, start: bson::DateTime) -> RepositoryResult<Vec<CityCount>> {
        let pipeline = vec![
            doc! { "$match": { "timestamp": { "$gte": start } } },
            doc! { "$group": { "_id": "$location.city", "visits": { "$sum": 1 } } },
            doc! { "$sort": { "visits": -1 } },
        ];
        let docs = self.run_pipeline(pipeline).await?;
        Ok(docs
            .iter()
            .map(|doc| CityCount {
                city: doc.get_str("_id").unwrap_or_default().to_string(),
                visits: get_count(doc, "visits"),
            })
            .collect())
    }
}
