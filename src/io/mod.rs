/// CSV export of simulation output.
pub mod export;
