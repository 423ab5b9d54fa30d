use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
/// Exchange prices are whole ticks, but fair values and margins are not.
pub type Price = Decimal;

/// Signed quantity: positive = buy / long, negative = sell / short
pub type Quantity = i64;

/// Tick timestamp within a trading round
pub type Timestamp = i64;
