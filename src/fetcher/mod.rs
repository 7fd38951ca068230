pub mod coingecko;
pub mod traits;

pub use coingecko::CoinGeckoSource;
pub use traits::MarketDataSource;
