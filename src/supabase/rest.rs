//! Row operations over the PostgREST endpoints

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_RANGE};
use serde::{de::DeserializeOwned, Serialize};

use super::{check_response, SupabaseClient};
use crate::{
    core::http::{parse_content_range_total, PREFER, SINGLE_OBJECT},
    AutopilotError, Result,
};


/// Select filters: equality matches, one ordering column and a row limit.
///
/// ```rust
/// use seo_autopilot::supabase::Query;
///
/// let query = Query::new()
///     .eq("project_id", "42")
///     .order_by("detected_at", false)
///     .limit(20);
/// assert_eq!(
///     query.to_params(),
///     vec![
///         ("select".to_string(), "*".to_string()),
///         ("project_id".to_string(), "eq.42".to_string()),
///         ("order".to_string(), "detected_at.desc".to_string()),
///         ("limit".to_string(), "20".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    columns: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned columns (defaults to `*`).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((column.into(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some((column.into(), ascending));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs in PostgREST syntax.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "select".to_string(),
            self.columns.clone().unwrap_or_else(|| "*".to_string()),
        )];
        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{}", value)));
        }
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{}", column, direction)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

impl SupabaseClient {
    /// Insert one row and return it as stored.
    pub async fn insert_one<T, R>(&self, table: &str, row: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(&format!("rest/v1/{}", table))?;
        tracing::debug!(table, "insert single row");

        let mut headers = self.headers()?;
        headers.insert(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT));
        headers.insert(PREFER, HeaderValue::from_static("return=representation"));

        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(row)
            .send()
            .await?;

        let stored = check_response(res).await?.json::<R>().await?;
        Ok(stored)
    }

    /// Insert all rows in one request; nothing is returned.
    pub async fn insert_many<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        let url = self.config.endpoint(&format!("rest/v1/{}", table))?;
        tracing::debug!(table, rows = rows.len(), "bulk insert");

        let mut headers = self.headers()?;
        headers.insert(PREFER, HeaderValue::from_static("return=minimal"));

        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(rows)
            .send()
            .await?;

        check_response(res).await?;
        Ok(())
    }

    pub async fn select<R: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<Vec<R>> {
        let url = self.config.endpoint(&format!("rest/v1/{}", table))?;
        tracing::debug!(table, ?query, "select rows");

        let res = self
            .http
            .get(url)
            .headers(self.headers()?)
            .query(&query.to_params())
            .send()
            .await?;

        let rows = check_response(res).await?.json::<Vec<R>>().await?;
        Ok(rows)
    }

    /// Fetch exactly one row; `NoData` when nothing matches.
    pub async fn select_single<R: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<R> {
        let mut rows: Vec<R> = self.select(table, &query.clone().limit(1)).await?;
        if rows.is_empty() {
            return Err(AutopilotError::NoData);
        }
        Ok(rows.swap_remove(0))
    }

    /// Exact number of rows matching the query's filters.
    pub async fn count(&self, table: &str, query: &Query) -> Result<u64> {
        let url = self.config.endpoint(&format!("rest/v1/{}", table))?;
        tracing::debug!(table, ?query, "count rows");

        let mut headers = self.headers()?;
        headers.insert(PREFER, HeaderValue::from_static("count=exact"));

        let res = self
            .http
            .head(url)
            .headers(headers)
            .query(&query.to_params())
            .send()
            .await?;

        let res = check_response(res).await?;
        res.headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or(AutopilotError::NoData)
    }
}
