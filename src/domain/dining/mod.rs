//! Dining module - Restaurants and their descriptive value objects.

mod contact;
mod cuisine;
mod price;
mod rating;
mod restaurant;

pub use contact::{ContactDetails, PhoneNumber, StreetAddress, WebsiteUrl};
pub use cuisine::{CuisineTag, CuisineTags};
pub use price::PriceInfo;
pub use rating::StarRating;
pub use restaurant::{Restaurant, RestaurantName};
