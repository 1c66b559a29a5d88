//! Statistics service

use crate::{
    api::stats::{Counter, CounterSummary, CounterTotal, StatsResponse},
    models::DailyCount,
};

#[derive(Clone, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Summary table and totals for a history
    pub fn summarize(&self, history: &[DailyCount]) -> StatsResponse {
        let are: Vec<i32> = history.iter().map(|c| c.are_you_with_me).collect();
        let thumbs: Vec<i32> = history.iter().map(|c| c.thumbs_up).collect();

        let totals = [
            (Counter::AreYouWithMe, &are),
            (Counter::ThumbsUp, &thumbs),
        ]
        .into_iter()
        .map(|(counter, values)| CounterTotal {
            counter,
            total: values.iter().map(|&v| v as i64).sum(),
        })
        .filter(|t| t.total > 0)
        .collect();

        StatsResponse {
            days: history.len(),
            are_you_with_me: summarize_counter(&are),
            thumbs_up: summarize_counter(&thumbs),
            totals,
        }
    }
}

fn summarize_counter(values: &[i32]) -> Option<CounterSummary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    // Lower-index percentile: sorted[floor(n * q)]
    let percentile = |q: f64| sorted[((n as f64 * q).floor() as usize).min(n - 1)];

    Some(CounterSummary {
        count: n,
        mean,
        std: variance.sqrt(),
        min: sorted[0],
        p25: percentile(0.25),
        p50: percentile(0.5),
        p75: percentile(0.75),
        max: sorted[n - 1],
    })
}
