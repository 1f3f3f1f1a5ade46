//! yfinq: pull-based market data queries against Yahoo Finance.
//!
//! Every query resolves to an [`Iter`]: the network round trip happens once,
//! when the cursor is built, and the decoded results are then traversed in
//! memory with [`Iter::advance`] / [`Iter::current`]. Side-channel metadata
//! and the terminal error ride on the same cursor.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), yfinq::YqError> {
//! let client = yfinq::YqClient::default();
//!
//! let mut quotes = yfinq::quote::list(&client, ["AAPL", "MSFT"]).await;
//! while quotes.advance() {
//!     let q = quotes.current().unwrap();
//!     println!("{} {:?}", q.symbol, q.regular_market_price);
//! }
//! if let Some(err) = quotes.into_error() {
//!     return Err(err);
//! }
//! # Ok(())
//! # }
//! ```

mod core;

pub mod chart;
pub mod equity;
pub mod etf;
pub mod forex;
pub mod future;
pub mod index;
pub mod mutualfund;
pub mod options;
pub mod quote;

pub use crate::core::{ErrorKind, Iter, ListParams, YqClient, YqClientBuilder, YqError};

pub use chart::{Bar, ChartIter, ChartMeta, ChartParams, Interval};
pub use options::{Contract, OptionsMeta, OptionsParams, Straddle, StraddleIter};
pub use quote::{MarketState, Quote, QuoteIter, QuoteType};
