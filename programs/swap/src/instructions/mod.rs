pub mod make_offer;
pub mod refund_offer;
pub mod shared;
pub mod take_offer;

pub use make_offer::*;
pub use refund_offer::*;
pub use take_offer::*;
