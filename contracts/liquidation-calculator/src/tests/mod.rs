pub mod breakeven_price;
pub mod initialize;
