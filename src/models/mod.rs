pub mod coin;
pub mod period;
pub mod series;
pub mod settings;

pub use coin::*;
pub use period::*;
pub use series::*;
pub use settings::*;
