use async_trait::async_trait;
use orgmap_common::types::{BoundingBox, CreateLocation, CreateOrganisation, Location, Organisation};
use sqlx::PgPool;

use super::{LocationRepository, OrganisationRepository};
use crate::db::DbResult;

/// PostgreSQL-backed repository for organisations and locations
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganisationRepository for PgRepository {
    #[tracing::instrument(skip(self))]
    async fn create_organisation(&self, request: CreateOrganisation) -> DbResult<Organisation> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, OrganisationRecord>(
            r#"
            INSERT INTO organisations (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&request.name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn list_organisations(&self) -> DbResult<Vec<Organisation>> {
        let records = sqlx::query_as::<_, OrganisationRecord>(
            r#"
            SELECT id, name
            FROM organisations
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Organisation::from).collect())
    }

    async fn get_organisation(&self, id: i64) -> DbResult<Option<Organisation>> {
        let record = sqlx::query_as::<_, OrganisationRecord>(
            r#"
            SELECT id, name
            FROM organisations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Organisation::from))
    }
}

#[async_trait]
impl LocationRepository for PgRepository {
    #[tracing::instrument(skip(self))]
    async fn create_location(&self, request: CreateLocation) -> DbResult<Location> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, LocationRecord>(
            r#"
            INSERT INTO locations (organisation_id, location_name, longitude, latitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, organisation_id, location_name, longitude, latitude
            "#,
        )
        .bind(request.organisation_id)
        .bind(&request.location_name)
        .bind(request.longitude)
        .bind(request.latitude)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn list_locations(
        &self,
        organisation_id: i64,
        bounding_box: Option<BoundingBox>,
    ) -> DbResult<Vec<Location>> {
        let records = match bounding_box {
            Some(bbox) => {
                sqlx::query_as::<_, LocationRecord>(
                    r#"
                    SELECT id, organisation_id, location_name, longitude, latitude
                    FROM locations
                    WHERE organisation_id = $1
                      AND longitude >= $2 AND longitude <= $3
                      AND latitude >= $4 AND latitude <= $5
                    "#,
                )
                .bind(organisation_id)
                .bind(bbox.min_longitude)
                .bind(bbox.max_longitude)
                .bind(bbox.min_latitude)
                .bind(bbox.max_latitude)
                .fetch_all(&self.pool)
                .await?
            },
            None => {
                sqlx::query_as::<_, LocationRecord>(
                    r#"
                    SELECT id, organisation_id, location_name, longitude, latitude
                    FROM locations
                    WHERE organisation_id = $1
                    "#,
                )
                .bind(organisation_id)
                .fetch_all(&self.pool)
                .await?
            },
        };

        Ok(records.into_iter().map(Location::from).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrganisationRecord {
    id: i64,
    name: String,
}

impl From<OrganisationRecord> for Organisation {
    fn from(record: OrganisationRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LocationRecord {
    id: i64,
    organisation_id: i64,
    location_name: String,
    longitude: f64,
    latitude: f64,
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Self {
            id: record.id,
            organisation_id: record.organisation_id,
            location_name: record.location_name,
            longitude: record.longitude,
            latitude: record.latitude,
        }
    }
}
