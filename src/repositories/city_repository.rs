use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::CityRepository;
use crate::models::{City, CityId, NewCity};
use crate::utils::errors::AppResult;

pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn create(&self, city: NewCity) -> AppResult<City> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (id, name, x, y, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, x, y, created_at
            "#,
        )
        .bind(CityId::new())
        .bind(city.name)
        .bind(city.x)
        .bind(city.y)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        log::debug!("💾 City {} stored", city.id);
        Ok(city)
    }

    async fn find_by_id(&self, id: CityId) -> AppResult<Option<City>> {
        let city = sqlx::query_as::<_, City>(
            "SELECT id, name, x, y, created_at FROM cities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(city)
    }

    async fn find_all(&self) -> AppResult<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(
            "SELECT id, name, x, y, created_at FROM cities ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cities)
    }
}
