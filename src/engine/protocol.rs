use serde::Serialize;

use crate::domain::{Position, Protocol};

/// A position whose leverage exceeds the account's protocol limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageBreach {
    pub symbol: String,
    pub leverage: f64,
    pub max_leverage: f64,
}

/// Positions above `protocol.max_leverage`. A missing or non-positive limit means no limit.
pub fn leverage_breaches<'a, I>(positions: I, protocol: &Protocol) -> Vec<LeverageBreach>
where
    I: IntoIterator<Item = &'a Position>,
{
    let max_leverage = protocol.max_leverage.value();
    if max_leverage <= 0.0 {
        return Vec::new();
    }
    positions
        .into_iter()
        .filter(|p| p.leverage.value() > max_leverage)
        .map(|p| LeverageBreach {
            symbol: p.symbol.clone(),
            leverage: p.leverage.value(),
            max_leverage,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Numeric;

    fn position(symbol: &str, leverage: f64) -> Position {
        Position {
            symbol: symbol.to_string(),
            leverage: Numeric::new(leverage),
            ..Default::default()
        }
    }

    #[test]
    fn test_breaches_above_limit_only() {
        let protocol = Protocol {
            max_leverage: Numeric::from("10"),
            ..Default::default()
        };
        let positions = [position("A", 5.0), position("B", 10.0), position("C", 25.0)];
        let breaches = leverage_breaches(&positions, &protocol);
        assert_eq!(breaches.len(), 1);
        assert_eq!(breaches[0].symbol, "C");
        assert_eq!(breaches[0].max_leverage, 10.0);
    }

    #[test]
    fn test_no_limit_configured() {
        let positions = [position("A", 100.0)];
        assert!(leverage_breaches(&positions, &Protocol::default()).is_empty());
    }
}
