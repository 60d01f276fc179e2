pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::types::{ChartPeriod, PriceSeries, Ticker};

/// Supplies daily price history for a set of tickers.
pub trait PriceProvider: Send + Sync {
    /// Fetch one series per ticker, in request order.
    ///
    /// Tickers whose data is missing or invalid are omitted. Fails with
    /// [`AppError::DataUnavailable`](crate::error::AppError::DataUnavailable)
    /// when no ticker returned any data.
    fn fetch<'a>(
        &'a self,
        tickers: &'a [Ticker],
        period: ChartPeriod,
    ) -> BoxFuture<'a, Result<Vec<PriceSeries>>>;
}
