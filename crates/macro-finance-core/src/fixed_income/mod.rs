//! Safe cash flows: discount and coupon bond pricing.

pub mod bonds;
