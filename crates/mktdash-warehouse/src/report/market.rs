use super::{join_list, Direction};
use crate::error::{Error, Result};
use crate::schema::market::equity::EquityBar;
use crate::schema::market::rates::RefRate;
use crate::schema::market::repo::{OperationKind, RepoOperation};

/// Lowest and highest reference rate, followed by every rate.
pub fn rate_range(rates: &[RefRate]) -> Result<String> {
    let first = rates
        .first()
        .ok_or_else(|| Error::Lookup("reference rates are empty".to_string()))?;
    let (low, high) = rates
        .iter()
        .fold((first.rate, first.rate), |(low, high), r| {
            (low.min(r.rate), high.max(r.rate))
        });
    let listing: Vec<String> = rates
        .iter()
        .map(|r| format!("{} at {:.2}%", r.rate_type, r.rate))
        .collect();

    Ok(format!(
        "In money markets, reference rates ranged from a low of {low:.2}% to a high of {high:.2}%, with {}.",
        join_list(&listing)
    ))
}

/// Repo minimum bid rate less the reverse repo offering rate.
///
/// Needs exactly the `[repo, reverse repo]` pair.
pub fn rate_spread(operations: &[RepoOperation]) -> Result<String> {
    match operations {
        [repo, reverse]
            if repo.kind == OperationKind::Repo && reverse.kind == OperationKind::ReverseRepo =>
        {
            Ok(format!(
                "The latest repo operation set a minimum bid rate of {:.2}% against a reverse repo offering rate of {:.2}%, a spread of {:.2} percentage points.",
                repo.rate,
                reverse.rate,
                repo.rate - reverse.rate
            ))
        }
        _ => Err(Error::Lookup(format!(
            "expected a repo and a reverse repo operation, found {} operations",
            operations.len()
        ))),
    }
}

fn closed(bar: &EquityBar) -> &'static str {
    match Direction::of(bar.close - bar.open) {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Flat => "flat",
    }
}

/// How each index closed against its open. One sentence covers all of them when they agree.
pub fn equity_close(bars: &[EquityBar]) -> Result<String> {
    let first = bars
        .first()
        .ok_or_else(|| Error::Lookup("equity bars are empty".to_string()))?;

    if bars.iter().all(|bar| closed(bar) == closed(first)) {
        let names: Vec<&str> = bars.iter().map(|bar| bar.index.as_str()).collect();
        return Ok(format!(
            "All tracked indices ({}) closed {} in the latest session.",
            join_list(&names),
            closed(first)
        ));
    }

    let clauses: Vec<String> = bars
        .iter()
        .map(|bar| format!("the {} closed {}", bar.index, closed(bar)))
        .collect();
    Ok(format!("In the latest session, {}.", join_list(&clauses)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rate(rate_type: &str, rate: f64) -> RefRate {
        RefRate {
            dated: "2024-05-01".into(),
            rate_type: rate_type.into(),
            rate,
        }
    }

    fn operation(kind: OperationKind, rate: f64) -> RepoOperation {
        RepoOperation {
            kind,
            operation_date: "2024-05-01".into(),
            maturity_date: "2024-05-02".into(),
            security_type: "Treasury".into(),
            rate,
        }
    }

    fn bar(index: &str, open: f64, close: f64) -> EquityBar {
        EquityBar {
            index: index.into(),
            dated: "2024-05-01".into(),
            ticker: "X".into(),
            open,
            close,
            volume: 1,
        }
    }

    #[test]
    fn range_lists_every_rate() {
        let rates = vec![rate("EFFR", 5.33), rate("OBFR", 5.32), rate("TGCR", 5.3)];
        assert_eq!(
            rate_range(&rates).unwrap(),
            "In money markets, reference rates ranged from a low of 5.30% to a high of 5.33%, with EFFR at 5.33%, OBFR at 5.32%, and TGCR at 5.30%."
        );
    }

    #[test]
    fn spread_is_repo_less_reverse() {
        let pair = vec![
            operation(OperationKind::Repo, 5.33),
            operation(OperationKind::ReverseRepo, 5.08),
        ];
        assert_eq!(
            rate_spread(&pair).unwrap(),
            "The latest repo operation set a minimum bid rate of 5.33% against a reverse repo offering rate of 5.08%, a spread of 0.25 percentage points."
        );
    }

    #[test]
    fn spread_needs_the_pair() {
        let single = vec![operation(OperationKind::Repo, 5.33)];
        assert!(matches!(rate_spread(&single), Err(Error::Lookup(_))));

        let swapped = vec![
            operation(OperationKind::ReverseRepo, 5.08),
            operation(OperationKind::Repo, 5.33),
        ];
        assert!(rate_spread(&swapped).is_err());
    }

    #[test]
    fn agreeing_indices_share_a_sentence() {
        let bars = vec![
            bar("S&P 500 (ETF)", 500.0, 505.0),
            bar("NASDAQ 100 (ETF)", 430.0, 431.0),
            bar("DJIA (ETF)", 380.0, 382.5),
        ];
        assert_eq!(
            equity_close(&bars).unwrap(),
            "All tracked indices (S&P 500 (ETF), NASDAQ 100 (ETF), and DJIA (ETF)) closed up in the latest session."
        );
    }

    #[test]
    fn mixed_indices_are_listed() {
        let bars = vec![
            bar("S&P 500 (ETF)", 500.0, 505.0),
            bar("NASDAQ 100 (ETF)", 430.0, 428.0),
        ];
        assert_eq!(
            equity_close(&bars).unwrap(),
            "In the latest session, the S&P 500 (ETF) closed up and the NASDAQ 100 (ETF) closed down."
        );
    }

    #[test]
    fn up_down_and_flat_get_a_clause_each() {
        let bars = vec![
            bar("S&P 500 (ETF)", 100.0, 105.0),
            bar("NASDAQ 100 (ETF)", 50.0, 48.0),
            bar("DJIA (ETF)", 10.0, 10.0),
        ];
        assert_eq!(
            equity_close(&bars).unwrap(),
            "In the latest session, the S&P 500 (ETF) closed up, the NASDAQ 100 (ETF) closed down, and the DJIA (ETF) closed flat."
        );
    }

    #[test]
    fn empty_inputs_are_lookup_errors() {
        assert!(rate_range(&[]).is_err());
        assert!(equity_close(&[]).is_err());
    }
}
