pub mod correction;

pub use correction::apply_wind_correction;
