use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::RouteRepository;
use crate::models::{NewRoute, Route, RouteId};
use crate::utils::errors::AppResult;

pub struct PgRouteRepository {
    pool: PgPool,
}

impl PgRouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteRepository for PgRouteRepository {
    async fn create(&self, route: NewRoute) -> AppResult<Route> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, start_city_id, end_city_id, vehicle_id, distance, cost,
                                cost_basis, time_in_minutes, revenue, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, start_city_id, end_city_id, vehicle_id, distance, cost,
                      cost_basis, time_in_minutes, revenue, created_at
            "#,
        )
        .bind(RouteId::new())
        .bind(route.start_city_id)
        .bind(route.end_city_id)
        .bind(route.vehicle_id)
        .bind(route.distance)
        .bind(route.cost)
        .bind(route.cost_basis)
        .bind(route.time_in_minutes)
        .bind(route.revenue)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        log::debug!("💾 Route {} stored", route.id);
        Ok(route)
    }

    async fn find_all(&self) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, start_city_id, end_city_id, vehicle_id, distance, cost,
                   cost_basis, time_in_minutes, revenue, created_at
            FROM routes
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }
}
