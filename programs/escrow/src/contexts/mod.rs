pub mod make;
pub use make::*;

pub mod take;
pub use take::*;

pub mod refund;
pub use refund::*;

pub mod vault;
pub use vault::*;
