//! Shared database models

pub mod catalog;
pub mod quote;
pub mod session;
pub mod user;

pub use catalog::{
    Destination, Hotel, MealPlan, NewDestination, NewHotel, NewPackagePolicy, NewPlace,
    NewTrainPrice, NewTransportPrice, PackagePolicy, Place, TrainPrice, TransportPrice,
};
pub use quote::{NewQuote, Quote, QuoteDetail, QuoteStatus, QuoteSummary};
pub use session::Session;
pub use user::{PublicUser, Role, User};
