mod order;
mod order_depth;
mod side;
mod trade;
mod trading_state;

pub use order::Order;
pub use order_depth::OrderDepth;
pub use side::Side;
pub use trade::Trade;
pub use trading_state::TradingState;
