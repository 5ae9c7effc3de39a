/// Integer math for the PNYX hub exchange
///
/// Provides checked arithmetic, 256-bit intermediates with floor division,
/// integer square root and the stateless constant-product pricing kernel.
/// Nothing here touches floating point.
pub mod amm;
pub mod big_int;
pub mod safe;

// Re-export commonly used functions
pub use amm::*;
pub use big_int::*;
pub use safe::*;
