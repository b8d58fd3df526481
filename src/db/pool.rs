//! PostgreSQL connection wrapper (a single blocking client for CLI usage).

use crate::config::{Config, Credentials};
use crate::db::executor::QueryExecutor;
use crate::db::queries::ReportQuery;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, HourlyRecord, TimeRange};
use postgres::types::ToSql;
use postgres::{Client, NoTls, Row};

pub struct DbPool {
    pub conn: Client,
}

impl DbPool {
    pub fn connect(cfg: &Config, creds: &Credentials) -> AppResult<Self> {
        let user = creds.user.as_deref().ok_or_else(|| {
            AppError::Config("no database user: set PGUSER (or USER)".to_string())
        })?;

        let mut pg = postgres::Config::new();
        pg.host(&cfg.host)
            .port(cfg.port)
            .dbname(&cfg.database)
            .user(user);
        if let Some(password) = &creds.password {
            pg.password(password);
        }

        let conn = pg.connect(NoTls)?;
        Ok(Self { conn })
    }

    fn run(&mut self, query: &ReportQuery, range: &TimeRange) -> AppResult<Vec<Row>> {
        let filter: Option<Vec<String>> = query
            .filter
            .values()
            .map(|v| v.iter().map(|s| s.to_string()).collect());

        let rows = match &filter {
            Some(values) => {
                let params: [&(dyn ToSql + Sync); 3] = [&range.start, &range.end, values];
                self.conn.query(query.sql, &params)?
            }
            None => {
                let params: [&(dyn ToSql + Sync); 2] = [&range.start, &range.end];
                self.conn.query(query.sql, &params)?
            }
        };

        Ok(rows)
    }
}

impl QueryExecutor for DbPool {
    fn fetch_activity(
        &mut self,
        query: &ReportQuery,
        range: &TimeRange,
    ) -> AppResult<Vec<ActivityRecord>> {
        let rows = self.run(query, range)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_activity_row(&row)?);
        }
        Ok(out)
    }

    fn fetch_hourly(
        &mut self,
        query: &ReportQuery,
        range: &TimeRange,
    ) -> AppResult<Vec<HourlyRecord>> {
        let rows = self.run(query, range)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_hourly_row(&row)?);
        }
        Ok(out)
    }
}

fn map_activity_row(row: &Row) -> AppResult<ActivityRecord> {
    Ok(ActivityRecord {
        category: row.try_get("category")?,
        bucket_start: row.try_get("bucket_start")?,
        bucket: row.try_get("bucket")?,
        metric: row.try_get("metric")?,
    })
}

fn map_hourly_row(row: &Row) -> AppResult<HourlyRecord> {
    let day: i32 = row.try_get("day_num")?;
    let hour: i32 = row.try_get("hour_num")?;

    let day = u32::try_from(day).map_err(|_| AppError::InvalidBucket(format!("day {day}")))?;
    let hour = u32::try_from(hour).map_err(|_| AppError::InvalidBucket(format!("hour {hour}")))?;

    Ok(HourlyRecord {
        day,
        hour,
        count: row.try_get("metric")?,
    })
}
