mod address;
mod coupon;
mod event;
