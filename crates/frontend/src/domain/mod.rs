pub mod a001_focus_ring;
pub mod a002_lightbox;
pub mod a003_portfolio_filter;
