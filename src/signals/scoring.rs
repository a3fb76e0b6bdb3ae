//! Vote percentage split

use crate::signals::aggregation::SentimentTally;

/// `(bullish_percent, bearish_percent)`, always summing to 100.
///
/// The bullish share is rounded half-up; bearish takes the remainder.
pub fn vote_percentages(tally: &SentimentTally) -> (u8, u8) {
    let total = tally.total();
    if total == 0 {
        return (50, 50);
    }
    let bullish = ((tally.bullish as f64 / total as f64) * 100.0).round() as u8;
    (bullish, 100 - bullish)
}
