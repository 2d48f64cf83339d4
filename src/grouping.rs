//! Stock Grouping
//!
//! Pure distribution of a fetched stock list into the board's strategy
//! buckets. Fetch order is preserved within each bucket.

use crate::config::StrategyBucket;
use crate::models::Stock;

/// Stocks distributed across the configured buckets.
///
/// Stocks whose strategy key matches no bucket land in `unrecognized`
/// instead of being dropped, so they stay visible on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedStocks {
    pub buckets: Vec<(StrategyBucket, Vec<Stock>)>,
    pub unrecognized: Vec<Stock>,
}

pub fn group_by_strategy(buckets: &[StrategyBucket], stocks: &[Stock]) -> GroupedStocks {
    let mut grouped: Vec<(StrategyBucket, Vec<Stock>)> = buckets
        .iter()
        .map(|bucket| (bucket.clone(), Vec::new()))
        .collect();
    let mut unrecognized = Vec::new();

    for stock in stocks {
        match grouped.iter_mut().find(|(b, _)| b.key == stock.strategy) {
            Some((_, members)) => members.push(stock.clone()),
            None => unrecognized.push(stock.clone()),
        }
    }

    GroupedStocks {
        buckets: grouped,
        unrecognized,
    }
}
