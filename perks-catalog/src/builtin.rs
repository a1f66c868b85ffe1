use chrono::{DateTime, TimeZone, Utc};
use perks_offer::models::{Offer, OfferLocation};

fn end_of_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 23, 59, 59).unwrap()
}

fn location(
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    city: &str,
) -> Option<OfferLocation> {
    Some(OfferLocation {
        name: Some(name.to_string()),
        address: Some(address.to_string()),
        latitude,
        longitude,
        city: city.to_string(),
    })
}

/// The built-in offer catalogue, served whenever no feed is configured or
/// the feed cannot be reached.
pub fn builtin_offers() -> Vec<Offer> {
    vec![
        Offer {
            id: 1,
            title: "50% off at Pizza Hut".to_string(),
            description: "Use code PIZZA50 at checkout. Perfect for family dinners and group \
                          orders. Cannot be combined with other offers."
                .to_string(),
            category: "Food".to_string(),
            discount_type: "percentage".to_string(),
            discount_percent: 50,
            expiry: end_of_day(2027, 8, 31),
            location: location(
                "Pizza Hut - Connaught Place",
                "Connaught Place, New Delhi, Delhi 110001",
                28.6139,
                77.2090,
                "Delhi",
            ),
            link: Some("https://pizzahut.com/offers".to_string()),
            tags: vec!["pizza".to_string(), "restaurant".to_string(), "family".to_string()],
        },
        Offer {
            id: 2,
            title: "30% off on Electronics".to_string(),
            description: "Get 30% off on all electronics at Best Buy. Limited time offer on \
                          smartphones, laptops, and accessories. Valid on select brands only."
                .to_string(),
            category: "Electronics".to_string(),
            discount_type: "percentage".to_string(),
            discount_percent: 30,
            expiry: end_of_day(2027, 9, 15),
            location: location(
                "Best Buy - Delhi",
                "Saket, New Delhi, Delhi 110017",
                28.6139,
                77.2090,
                "Delhi",
            ),
            link: Some("https://bestbuy.com/deals".to_string()),
            tags: vec![
                "electronics".to_string(),
                "smartphones".to_string(),
                "laptops".to_string(),
            ],
        },
        Offer {
            id: 3,
            title: "Buy 1 Get 1 Free on Coffee".to_string(),
            description: "Valid at Starbucks locations. Show this offer at the counter. Valid \
                          on all coffee beverages including seasonal drinks."
                .to_string(),
            category: "Food".to_string(),
            discount_type: "bogo".to_string(),
            discount_percent: 100,
            expiry: end_of_day(2027, 10, 1),
            location: location(
                "Starbucks - Bandra West",
                "Bandra West, Mumbai, Maharashtra 400050",
                19.0760,
                72.8777,
                "Mumbai",
            ),
            link: Some("https://starbucks.com/offers".to_string()),
            tags: vec!["coffee".to_string(), "beverages".to_string(), "cafe".to_string()],
        },
        Offer {
            id: 4,
            title: "20% off on Clothing".to_string(),
            description: "End of season sale at H&M. Valid on all clothing items including \
                          dresses, tops, and accessories. Limited stock available."
                .to_string(),
            category: "Fashion".to_string(),
            discount_type: "percentage".to_string(),
            discount_percent: 20,
            expiry: end_of_day(2027, 9, 30),
            location: location(
                "H&M - Phoenix MarketCity",
                "Phoenix MarketCity, Whitefield, Bangalore 560066",
                12.9716,
                77.5946,
                "Bangalore",
            ),
            link: Some("https://hm.com/sale".to_string()),
            tags: vec!["clothing".to_string(), "fashion".to_string(), "sale".to_string()],
        },
        Offer {
            id: 5,
            title: "Free Delivery on Orders Above ₹500".to_string(),
            description: "Valid on all restaurants. Use code FREEDEL at checkout. No minimum \
                          order value for premium members. Valid across all cities."
                .to_string(),
            category: "Food".to_string(),
            discount_type: "delivery".to_string(),
            discount_percent: 0,
            expiry: end_of_day(2027, 12, 31),
            location: location(
                "Swiggy - Kolkata",
                "Park Street, Kolkata, West Bengal 700016",
                22.5726,
                88.3639,
                "Kolkata",
            ),
            link: Some("https://swiggy.com/offers".to_string()),
            tags: vec!["delivery".to_string(), "food".to_string(), "online".to_string()],
        },
        Offer {
            id: 6,
            title: "15% off on Movie Tickets".to_string(),
            description: "Valid on all movies. Book through the app for best prices. Includes \
                          premium formats like IMAX and 4DX. Valid for all show timings."
                .to_string(),
            category: "Entertainment".to_string(),
            discount_type: "percentage".to_string(),
            discount_percent: 15,
            expiry: end_of_day(2027, 11, 30),
            location: location(
                "PVR Cinemas - Hyderabad",
                "Banjara Hills, Hyderabad, Telangana 500034",
                17.3850,
                78.4867,
                "Hyderabad",
            ),
            link: Some("https://bookmyshow.com/offers".to_string()),
            tags: vec![
                "movies".to_string(),
                "entertainment".to_string(),
                "cinema".to_string(),
            ],
        },
        Offer {
            id: 7,
            title: "25% off on Gym Memberships".to_string(),
            description: "New member special. Valid for the first 3 months. Includes access to \
                          all facilities, group classes, and personal training sessions."
                .to_string(),
            category: "Health".to_string(),
            discount_type: "membership".to_string(),
            discount_percent: 25,
            expiry: end_of_day(2027, 10, 15),
            location: location(
                "Fitness First - Lucknow",
                "Hazratganj, Lucknow, Uttar Pradesh 226001",
                26.8467,
                80.9462,
                "Lucknow",
            ),
            link: Some("https://fitnessfirst.com/offers".to_string()),
            tags: vec!["gym".to_string(), "fitness".to_string(), "membership".to_string()],
        },
        Offer {
            id: 8,
            title: "10% off on Groceries".to_string(),
            description: "Valid on all grocery items. Use your loyalty card at checkout for \
                          fresh produce and daily essentials."
                .to_string(),
            category: "Grocery".to_string(),
            discount_type: "loyalty".to_string(),
            discount_percent: 10,
            expiry: end_of_day(2027, 12, 15),
            location: location(
                "BigBasket - Ahmedabad",
                "Navrangpura, Ahmedabad, Gujarat 380009",
                23.0225,
                72.5714,
                "Ahmedabad",
            ),
            link: Some("https://bigbasket.com/offers".to_string()),
            tags: vec!["grocery".to_string(), "fresh".to_string(), "daily".to_string()],
        },
    ]
}
