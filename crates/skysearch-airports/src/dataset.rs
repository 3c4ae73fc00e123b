//! Embedded airport reference data.
//!
//! Major international airports only; departure resolution needs a plausible
//! origin near the device, not an exhaustive gazetteer. Coordinates are the
//! published airport reference points in decimal degrees.

use serde::Serialize;

/// One airport record from the embedded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    /// IATA location code.
    pub code: &'static str,
    pub name: &'static str,
    pub municipality: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn airport(
    code: &'static str,
    name: &'static str,
    municipality: &'static str,
    latitude: f64,
    longitude: f64,
) -> Airport {
    Airport {
        code,
        name,
        municipality,
        latitude,
        longitude,
    }
}

/// Static airport table, grouped roughly by region.
pub const AIRPORTS: &[Airport] = &[
    // East Asia
    airport("HKG", "Hong Kong International Airport", "Hong Kong", 22.308_0, 113.918_5),
    airport("NRT", "Narita International Airport", "Tokyo", 35.765_3, 140.385_6),
    airport("HND", "Tokyo Haneda Airport", "Tokyo", 35.549_4, 139.779_8),
    airport("KIX", "Kansai International Airport", "Osaka", 34.434_7, 135.244_1),
    airport("ICN", "Incheon International Airport", "Seoul", 37.460_2, 126.440_7),
    airport("PEK", "Beijing Capital International Airport", "Beijing", 40.079_9, 116.603_1),
    airport("PVG", "Shanghai Pudong International Airport", "Shanghai", 31.144_3, 121.808_3),
    airport("TPE", "Taiwan Taoyuan International Airport", "Taipei", 25.077_7, 121.232_8),
    // Southeast Asia & Oceania
    airport("SIN", "Singapore Changi Airport", "Singapore", 1.364_4, 103.991_5),
    airport("BKK", "Suvarnabhumi Airport", "Bangkok", 13.690_0, 100.750_1),
    airport("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", 2.745_6, 101.709_9),
    airport("CGK", "Soekarno-Hatta International Airport", "Jakarta", -6.125_6, 106.655_9),
    airport("MNL", "Ninoy Aquino International Airport", "Manila", 14.508_6, 121.019_4),
    airport("SYD", "Sydney Kingsford Smith Airport", "Sydney", -33.939_9, 151.175_3),
    airport("MEL", "Melbourne Airport", "Melbourne", -37.669_0, 144.841_0),
    airport("AKL", "Auckland Airport", "Auckland", -37.008_2, 174.785_0),
    // South Asia & Middle East
    airport("DEL", "Indira Gandhi International Airport", "Delhi", 28.556_2, 77.100_0),
    airport("BOM", "Chhatrapati Shivaji Maharaj International Airport", "Mumbai", 19.088_7, 72.867_9),
    airport("DXB", "Dubai International Airport", "Dubai", 25.253_2, 55.365_7),
    airport("DOH", "Hamad International Airport", "Doha", 25.273_1, 51.608_1),
    airport("IST", "Istanbul Airport", "Istanbul", 41.275_3, 28.751_9),
    // Europe
    airport("LHR", "London Heathrow Airport", "London", 51.470_0, -0.454_3),
    airport("CDG", "Paris Charles de Gaulle Airport", "Paris", 49.009_7, 2.547_9),
    airport("AMS", "Amsterdam Airport Schiphol", "Amsterdam", 52.310_5, 4.768_3),
    airport("FRA", "Frankfurt Airport", "Frankfurt", 50.037_9, 8.562_2),
    airport("MUC", "Munich Airport", "Munich", 48.353_7, 11.775_0),
    airport("ZRH", "Zurich Airport", "Zurich", 47.458_2, 8.555_5),
    airport("MAD", "Adolfo Suarez Madrid-Barajas Airport", "Madrid", 40.498_3, -3.567_6),
    airport("BCN", "Josep Tarradellas Barcelona-El Prat Airport", "Barcelona", 41.297_4, 2.083_3),
    airport("FCO", "Leonardo da Vinci-Fiumicino Airport", "Rome", 41.804_5, 12.250_8),
    // North America
    airport("JFK", "John F. Kennedy International Airport", "New York", 40.641_3, -73.778_1),
    airport("EWR", "Newark Liberty International Airport", "Newark", 40.689_5, -74.174_5),
    airport("LAX", "Los Angeles International Airport", "Los Angeles", 33.941_6, -118.408_5),
    airport("SFO", "San Francisco International Airport", "San Francisco", 37.621_3, -122.379_0),
    airport("ORD", "O'Hare International Airport", "Chicago", 41.974_2, -87.907_3),
    airport("DFW", "Dallas Fort Worth International Airport", "Dallas", 32.899_8, -97.040_3),
    airport("SEA", "Seattle-Tacoma International Airport", "Seattle", 47.450_2, -122.308_8),
    airport("MIA", "Miami International Airport", "Miami", 25.795_9, -80.287_0),
    airport("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta", 33.640_7, -84.427_7),
    airport("YYZ", "Toronto Pearson International Airport", "Toronto", 43.677_7, -79.624_8),
    airport("YVR", "Vancouver International Airport", "Vancouver", 49.196_7, -123.181_5),
    airport("MEX", "Mexico City International Airport", "Mexico City", 19.436_1, -99.071_9),
    // South America & Africa
    airport("GRU", "Sao Paulo/Guarulhos International Airport", "Sao Paulo", -23.430_6, -46.473_0),
    airport("EZE", "Ministro Pistarini International Airport", "Buenos Aires", -34.822_2, -58.535_8),
    airport("JNB", "O. R. Tambo International Airport", "Johannesburg", -26.136_7, 28.241_1),
    airport("CAI", "Cairo International Airport", "Cairo", 30.121_9, 31.405_6),
];
