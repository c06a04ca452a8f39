//! Offer Queries

#[derive(Debug, Clone)]
pub struct GetOffer {
    pub offer_id: i64,
}

#[derive(Debug, Clone)]
pub struct GetOfferByName {
    pub name: String,
}
