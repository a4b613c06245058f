//! Departure queries across both providers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{Journey, ProductFilter, StationId};
use crate::opendata::{ConnectionProvider, summarize};
use crate::sbb::{BoardQuery, ScheduleProvider, parse_journeys};

use super::error::DelayError;

/// Answers "when is the next departure" using the injected providers.
///
/// Holds no mutable state; one instance serves all requests concurrently.
#[derive(Clone)]
pub struct DelayService {
    schedule: Arc<dyn ScheduleProvider>,
    connections: Arc<dyn ConnectionProvider>,
}

impl DelayService {
    /// Create a service from a station board provider and a connections provider.
    pub fn new(
        schedule: impl ScheduleProvider + 'static,
        connections: impl ConnectionProvider + 'static,
    ) -> Self {
        Self {
            schedule: Arc::new(schedule),
            connections: Arc::new(connections),
        }
    }

    /// Next departure between two named stations, rendered as text.
    ///
    /// `categories` is a string of category letters. `None` selects every
    /// category; `Some("")` selects none.
    #[instrument(skip(self))]
    pub async fn next_departure(
        &self,
        from: &str,
        to: &str,
        categories: Option<&str>,
    ) -> Result<String, DelayError> {
        let products = match categories {
            None => ProductFilter::all(),
            Some(letters) => ProductFilter::encode(letters)?,
        };
        let from_id = StationId::resolve(from)?;
        let to_id = StationId::resolve(to)?;

        let journeys = self
            .fetch_departures(from_id.clone(), Some(to_id.clone()), products)
            .await?;

        let first = journeys.first().ok_or_else(|| DelayError::EmptyResponse {
            from: from_id.to_string(),
            to: to_id.to_string(),
        })?;
        Ok(first.to_string())
    }

    /// The next ten departures between two station identifiers.
    ///
    /// `products` is a rendered 10-digit mask; missing or empty selects every
    /// category. An empty result is returned as-is.
    #[instrument(skip(self))]
    pub async fn list_next_10(
        &self,
        from: &str,
        to: Option<&str>,
        products: Option<&str>,
    ) -> Result<Vec<Journey>, DelayError> {
        let from = from.trim();
        if from.is_empty() {
            return Err(DelayError::InvalidArgument(
                "from must not be empty".to_string(),
            ));
        }

        let products = match products.map(str::trim) {
            None | Some("") => ProductFilter::all(),
            Some(mask) => mask.parse()?,
        };
        let to = to
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(StationId::new);

        self.fetch_departures(StationId::new(from), to, products)
            .await
    }

    /// Next departure summary from the connections API.
    ///
    /// Names go to the provider unresolved and no category filter applies.
    #[instrument(skip(self))]
    pub async fn next_departure_alt(&self, from: &str, to: &str) -> Result<String, DelayError> {
        if from.trim().is_empty() {
            return Err(DelayError::InvalidArgument(
                "from must not be empty".to_string(),
            ));
        }
        if to.trim().is_empty() {
            return Err(DelayError::InvalidArgument(
                "to must not be empty".to_string(),
            ));
        }

        let response = self.connections.connections(from, to).await?;
        let connection = response
            .connections
            .first()
            .ok_or_else(|| DelayError::EmptyResponse {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        Ok(summarize(connection)?)
    }

    async fn fetch_departures(
        &self,
        from: StationId,
        to: Option<StationId>,
        products: ProductFilter,
    ) -> Result<Vec<Journey>, DelayError> {
        let query = BoardQuery::departures(from, to, products);
        let body = self.schedule.station_board(&query).await?;
        let journeys = parse_journeys(&body);
        debug!(count = journeys.len(), "parsed station board");
        Ok(journeys)
    }
}

impl fmt::Debug for DelayService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayService").finish_non_exhaustive()
    }
}
