use crate::domain::model::{DomesticFlight, DomesticFlightRow, HotelRow, HotelStay};
use crate::utils::number::coerce_number;
use serde::{Deserialize, Serialize};

/// A repeatable form row whose raw control values resync into a line item.
pub trait LineItemRow {
    type Field: Copy + std::fmt::Debug;
    type Item;

    const KIND: &'static str;

    fn set_field(&mut self, field: Self::Field, value: String);
    fn to_item(&self) -> Self::Item;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelField {
    City,
    Hotel,
    Stars,
    Rooms,
    RoomType,
    Meals,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomesticFlightField {
    Origin,
    Destination,
    Date,
    Airline,
    Price,
    Note,
}

impl LineItemRow for HotelRow {
    type Field = HotelField;
    type Item = HotelStay;

    const KIND: &'static str = "hotel";

    fn set_field(&mut self, field: HotelField, value: String) {
        let slot = match field {
            HotelField::City => &mut self.city,
            HotelField::Hotel => &mut self.hotel,
            HotelField::Stars => &mut self.stars,
            HotelField::Rooms => &mut self.rooms,
            HotelField::RoomType => &mut self.room_type,
            HotelField::Meals => &mut self.meals,
            HotelField::Price => &mut self.price,
        };
        *slot = value;
    }

    fn to_item(&self) -> HotelStay {
        HotelStay {
            city: self.city.trim().to_string(),
            hotel: self.hotel.trim().to_string(),
            stars: self.stars.clone(),
            rooms: self.rooms.clone(),
            room_type: self.room_type.clone(),
            meals: self.meals.clone(),
            price: coerce_number(&self.price),
        }
    }
}

impl LineItemRow for DomesticFlightRow {
    type Field = DomesticFlightField;
    type Item = DomesticFlight;

    const KIND: &'static str = "domestic_flight";

    fn set_field(&mut self, field: DomesticFlightField, value: String) {
        let slot = match field {
            DomesticFlightField::Origin => &mut self.origin,
            DomesticFlightField::Destination => &mut self.destination,
            DomesticFlightField::Date => &mut self.date,
            DomesticFlightField::Airline => &mut self.airline,
            DomesticFlightField::Price => &mut self.price,
            DomesticFlightField::Note => &mut self.note,
        };
        *slot = value;
    }

    fn to_item(&self) -> DomesticFlight {
        DomesticFlight {
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            date: self.date.trim().to_string(),
            airline: self.airline.trim().to_string(),
            price: coerce_number(&self.price),
            note: self.note.trim().to_string(),
        }
    }
}

/// Appends a row. Missing prefill values were already filled with row defaults
/// when the prefill was built.
pub fn add_item<R: LineItemRow>(rows: &mut Vec<R>, prefill: R) {
    rows.push(prefill);
    tracing::debug!("Added {} row #{}", R::KIND, rows.len() - 1);
}

pub fn update_item<R: LineItemRow>(
    rows: &mut [R],
    index: usize,
    field: R::Field,
    value: String,
) -> bool {
    match rows.get_mut(index) {
        Some(row) => {
            row.set_field(field, value);
            true
        }
        None => {
            tracing::warn!("Ignoring {:?} update for missing {} row #{}", field, R::KIND, index);
            false
        }
    }
}

pub fn remove_item<R: LineItemRow>(rows: &mut Vec<R>, index: usize) -> bool {
    if index < rows.len() {
        rows.remove(index);
        tracing::debug!("Removed {} row #{}", R::KIND, index);
        true
    } else {
        tracing::warn!("Ignoring removal of missing {} row #{}", R::KIND, index);
        false
    }
}

/// Rebuilds the canonical list from every row's current control values.
pub fn resync<R: LineItemRow>(rows: &[R]) -> Vec<R::Item> {
    rows.iter().map(R::to_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hotel_row_uses_defaults() {
        let mut rows = Vec::new();
        add_item(&mut rows, HotelRow::default());

        let stays = resync(&rows);
        assert_eq!(stays.len(), 1);
        assert_eq!(stays[0].stars, "*4");
        assert_eq!(stays[0].rooms, "1");
        assert_eq!(stays[0].room_type, "غرفة مزدوجة");
        assert_eq!(stays[0].meals, "بالافطار");
        assert_eq!(stays[0].price, 0.0);
    }

    #[test]
    fn test_resync_trims_text_and_coerces_price() {
        let mut rows = vec![HotelRow::default()];
        assert!(update_item(&mut rows, 0, HotelField::City, "  موسكو ".to_string()));
        assert!(update_item(&mut rows, 0, HotelField::Price, "abc".to_string()));

        let stays = resync(&rows);
        assert_eq!(stays[0].city, "موسكو");
        assert_eq!(stays[0].price, 0.0);

        update_item(&mut rows, 0, HotelField::Price, "420.5".to_string());
        assert_eq!(resync(&rows)[0].price, 420.5);
    }

    #[test]
    fn test_missing_rows_are_ignored() {
        let mut rows = vec![DomesticFlightRow::default()];
        assert!(!update_item(&mut rows, 3, DomesticFlightField::Price, "10".to_string()));
        assert!(!remove_item(&mut rows, 1));
        assert_eq!(rows.len(), 1);
        assert!(remove_item(&mut rows, 0));
        assert!(rows.is_empty());
    }
}
