use serde::{Deserialize, Serialize};

/// Whether an optional cost area is part of the quotation.
///
/// Detail fields only exist while the area is included, so an excluded area
/// cannot carry a stale price into the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "details", rename_all = "snake_case")]
pub enum Inclusion<T> {
    Excluded,
    Included(T),
}

impl<T> Default for Inclusion<T> {
    fn default() -> Self {
        Inclusion::Excluded
    }
}

impl<T> Inclusion<T> {
    pub fn is_included(&self) -> bool {
        matches!(self, Inclusion::Included(_))
    }

    pub fn as_included(&self) -> Option<&T> {
        match self {
            Inclusion::Included(details) => Some(details),
            Inclusion::Excluded => None,
        }
    }

    pub fn as_included_mut(&mut self) -> Option<&mut T> {
        match self {
            Inclusion::Included(details) => Some(details),
            Inclusion::Excluded => None,
        }
    }
}

impl<T: Default> Inclusion<T> {
    /// Switches the area on or off. Switching on an already included area
    /// keeps its details; switching off discards them.
    pub fn set_included(&mut self, included: bool) {
        match (included, self.is_included()) {
            (true, false) => *self = Inclusion::Included(T::default()),
            (false, true) => *self = Inclusion::Excluded,
            _ => {}
        }
    }
}

impl Inclusion<Vec<DomesticFlightRow>> {
    pub fn row_count(&self) -> usize {
        self.as_included().map(Vec::len).unwrap_or(0)
    }
}

/// Raw control values of one hotel row, as typed by the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelRow {
    pub city: String,
    pub hotel: String,
    pub stars: String,
    pub rooms: String,
    pub room_type: String,
    pub meals: String,
    pub price: String,
}

impl Default for HotelRow {
    fn default() -> Self {
        Self {
            city: String::new(),
            hotel: String::new(),
            stars: "*4".to_string(),
            rooms: "1".to_string(),
            room_type: "غرفة مزدوجة".to_string(),
            meals: "بالافطار".to_string(),
            price: "0".to_string(),
        }
    }
}

/// Canonical hotel line item rebuilt from a [`HotelRow`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelStay {
    pub city: String,
    pub hotel: String,
    pub stars: String,
    pub rooms: String,
    pub room_type: String,
    pub meals: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomesticFlightRow {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub airline: String,
    pub price: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomesticFlight {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub airline: String,
    pub price: f64,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightLeg {
    pub from_city: String,
    pub to_city: String,
    pub departure_time: String,
    pub arrival_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightDetails {
    pub flight_type: String,
    pub baggage_kg: String,
    pub price: String,
    pub note: String,
    pub outbound: FlightLeg,
    pub inbound: FlightLeg,
}

impl Default for FlightDetails {
    fn default() -> Self {
        Self {
            flight_type: "ذهاب وعودة".to_string(),
            baggage_kg: "23".to_string(),
            price: "0".to_string(),
            note: String::new(),
            outbound: FlightLeg::default(),
            inbound: FlightLeg::default(),
        }
    }
}

/// A priced service with a free-text description (transfer, intercity
/// transport, sightseeing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDetails {
    pub description: String,
    pub price: String,
}

impl Default for ServiceDetails {
    fn default() -> Self {
        Self {
            description: String::new(),
            price: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTours {
    pub count: String,
}

impl Default for DailyTours {
    fn default() -> Self {
        Self {
            count: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarRental {
    pub car_type: String,
    pub price: String,
    pub tours: Inclusion<DailyTours>,
    pub images: Vec<String>,
}

impl Default for CarRental {
    fn default() -> Self {
        Self {
            car_type: String::new(),
            price: "0".to_string(),
            tours: Inclusion::Excluded,
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDisplay {
    #[default]
    Total,
    PerPerson,
}

/// Ordered set of destination labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destinations(Vec<String>);

impl Destinations {
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Returns false when the label was blank or already selected.
    pub fn insert(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.0.push(label.to_string());
        true
    }

    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|l| l != label.trim());
        self.0.len() != before
    }

    pub fn toggle(&mut self, label: &str) {
        if !self.remove(label) {
            self.insert(label);
        }
    }

    pub fn replace<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.clear();
        for label in labels {
            self.insert(label.as_ref());
        }
    }
}

/// The whole quotation form: every control value plus the line-item rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteForm {
    pub company: CompanyInfo,
    pub client_name: String,
    pub quote_no: String,
    pub quote_date: String,
    pub currency: String,
    pub destinations: Destinations,
    pub adults: String,
    pub children: String,
    pub departure_date: String,
    pub return_date: String,
    pub program_details: String,
    pub flight: Inclusion<FlightDetails>,
    pub hotels: Vec<HotelRow>,
    pub transfer: Inclusion<ServiceDetails>,
    pub car: Inclusion<CarRental>,
    pub intercity: Inclusion<ServiceDetails>,
    pub sightseeing: Inclusion<ServiceDetails>,
    pub domestic_flights: Inclusion<Vec<DomesticFlightRow>>,
    pub transport_notes: String,
    pub discount: String,
    pub tax_percent: String,
    pub notes: String,
    pub terms: String,
    pub price_display: PriceDisplay,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            client_name: String::new(),
            quote_no: String::new(),
            quote_date: String::new(),
            currency: "USD".to_string(),
            destinations: Destinations::default(),
            adults: "1".to_string(),
            children: "0".to_string(),
            departure_date: String::new(),
            return_date: String::new(),
            program_details: String::new(),
            flight: Inclusion::Excluded,
            hotels: Vec::new(),
            transfer: Inclusion::Excluded,
            car: Inclusion::Excluded,
            intercity: Inclusion::Excluded,
            sightseeing: Inclusion::Excluded,
            domestic_flights: Inclusion::Excluded,
            transport_notes: String::new(),
            discount: "0".to_string(),
            tax_percent: "0".to_string(),
            notes: String::new(),
            terms: String::new(),
            price_display: PriceDisplay::Total,
        }
    }
}

/// Country choice as shown in the destination list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub local_name: String,
    pub english_name: String,
}

impl Country {
    pub fn label(&self) -> &str {
        if self.local_name.trim().is_empty() {
            &self.english_name
        } else {
            &self.local_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl Airport {
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.code, self.city, self.name)
    }
}

/// A reference list as the choice widgets see it.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceList<T> {
    Loaded(Vec<T>),
    Fallback(Vec<T>),
    Unavailable(String),
}

impl<T> ReferenceList<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ReferenceList::Loaded(items) | ReferenceList::Fallback(items) => items,
            ReferenceList::Unavailable(_) => &[],
        }
    }

    pub fn unavailable_message(&self) -> Option<&str> {
        match self {
            ReferenceList::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}
