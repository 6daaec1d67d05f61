use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub hotel_id: String,
    pub destination_id: String,
    pub name: String,
    pub location: Option<HotelLocation>,
    pub description: Option<String>,
    pub images: Option<HotelImages>,
    pub amenities: Option<HotelAmenities>,
    pub booking_conditions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct HotelLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelImage {
    pub link: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct HotelImages {
    #[serde(default)]
    pub rooms: Vec<HotelImage>,
    #[serde(default)]
    pub services: Vec<HotelImage>,
    #[serde(default)]
    pub amenities: Vec<HotelImage>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct HotelAmenities {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub room: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_optional_fields_serialize_as_null() {
        let now = Utc::now();
        let hotel = Hotel {
            id: 1,
            hotel_id: "hotel_123".to_string(),
            destination_id: "dest_456".to_string(),
            name: "Test Hotel".to_string(),
            location: Some(HotelLocation {
                city: Some("Test City".to_string()),
                ..Default::default()
            }),
            description: None,
            images: None,
            amenities: None,
            booking_conditions: vec!["No smoking".to_string()],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&hotel).unwrap();

        assert_eq!(value["hotel_id"], json!("hotel_123"));
        assert_eq!(value["destination_id"], json!("dest_456"));
        assert_eq!(value["description"], json!(null));
        assert_eq!(value["images"], json!(null));
        assert_eq!(value["amenities"], json!(null));
        assert_eq!(value["location"]["latitude"], json!(null));
        assert_eq!(value["location"]["city"], json!("Test City"));
        assert_eq!(value["booking_conditions"], json!(["No smoking"]));
    }
}
