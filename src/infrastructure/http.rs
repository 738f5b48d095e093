//! HTTP access to the CoinGecko public API.

pub mod coingecko_rest_client;
pub mod dto;

pub use coingecko_rest_client::*;
