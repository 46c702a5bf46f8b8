pub use super::address::Entity as Address;
pub use super::coupon::Entity as Coupon;
pub use super::event::Entity as Event;
