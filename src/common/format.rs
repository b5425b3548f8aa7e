// src/common/format.rs

use rust_decimal::{Decimal, RoundingStrategy};

const BRL_PREFIX: &str = "R$ ";

/// Formata um valor em reais: duas casas fixas, vírgula como separador
/// decimal e sem agrupamento de milhar ("R$ 1234,50").
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // `{:.2}` completa as casas que faltam (89.9 -> 89.90)
    let fixed = format!("{:.2}", rounded);
    format!("{}{}", BRL_PREFIX, fixed.replacen('.', ",", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_order_totals() {
        assert_eq!(format_brl(Decimal::new(899, 1)), "R$ 89,90");
        assert_eq!(format_brl(Decimal::new(1565, 1)), "R$ 156,50");
        assert_eq!(format_brl(Decimal::new(673, 1)), "R$ 67,30");
    }

    #[test]
    fn pads_integers_and_rounds_extra_places() {
        assert_eq!(format_brl(Decimal::from(1200)), "R$ 1200,00");
        assert_eq!(format_brl(Decimal::new(10005, 3)), "R$ 10,01");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn keeps_no_thousands_separator() {
        assert_eq!(format_brl(Decimal::new(123456, 1)), "R$ 12345,60");
    }
}
