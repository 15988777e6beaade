//! Static marketing content for the landing page.

use api::RoomType;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomOffer {
    pub room_type: RoomType,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amenity {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ROOMS: [RoomOffer; 4] = [
    RoomOffer {
        room_type: RoomType::Standard,
        description: "Comfortable and affordable accommodation perfect for short stays",
        features: &["Queen Bed", "City View", "Free WiFi"],
        price: "From $99/night",
    },
    RoomOffer {
        room_type: RoomType::Deluxe,
        description: "Spacious rooms with premium amenities and stunning views",
        features: &["King Bed", "Balcony", "Mini Bar"],
        price: "From $149/night",
    },
    RoomOffer {
        room_type: RoomType::Suite,
        description: "Luxurious suites with separate living areas for ultimate comfort",
        features: &["King Bed", "Living Room", "Premium View"],
        price: "From $249/night",
    },
    RoomOffer {
        room_type: RoomType::Executive,
        description: "The ultimate in luxury with premium amenities and exceptional service",
        features: &["King Bed", "Dining Area", "Panoramic View"],
        price: "From $349/night",
    },
];

pub const AMENITIES: [Amenity; 6] = [
    Amenity {
        icon: "🏊",
        title: "Swimming Pool",
        description: "Outdoor pool with stunning views",
    },
    Amenity {
        icon: "🍽️",
        title: "Fine Dining",
        description: "World-class restaurant on-site",
    },
    Amenity {
        icon: "💼",
        title: "Business Center",
        description: "Fully equipped meeting rooms",
    },
    Amenity {
        icon: "🚗",
        title: "Free Parking",
        description: "Complimentary valet parking",
    },
    Amenity {
        icon: "🏋️",
        title: "Fitness Center",
        description: "24/7 gym with modern equipment",
    },
    Amenity {
        icon: "🛎️",
        title: "Concierge",
        description: "24-hour concierge service",
    },
];

#[component]
pub fn RoomCatalog() -> Element {
    rsx! {
        section {
            id: "rooms",
            class: "rooms-section",
            h2 { class: "section-title", "Our Rooms" }
            div {
                class: "rooms-grid",
                for room in ROOMS {
                    div {
                        key: "{room.room_type.as_str()}",
                        class: "room-card",
                        h3 { "{room.room_type.label()}" }
                        p { class: "room-description", "{room.description}" }
                        ul {
                            class: "room-features",
                            for feature in room.features {
                                li { "{feature}" }
                            }
                        }
                        p { class: "room-price", "{room.price}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AmenityList() -> Element {
    rsx! {
        section {
            id: "amenities",
            class: "amenities-section",
            h2 { class: "section-title", "Amenities" }
            div {
                class: "amenities-grid",
                for amenity in AMENITIES {
                    div {
                        key: "{amenity.title}",
                        class: "amenity-card",
                        span { class: "amenity-icon", "{amenity.icon}" }
                        h3 { "{amenity.title}" }
                        p { "{amenity.description}" }
                    }
                }
            }
        }
    }
}
