use crate::core::line_items::{
    add_item, remove_item, update_item, DomesticFlightField, HotelField,
};
use crate::domain::model::{DomesticFlightRow, HotelRow, PriceDisplay, QuoteForm};
use serde::{Deserialize, Serialize};

/// Plain form controls that always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    CompanyName,
    CompanyPhone,
    CompanyEmail,
    CompanyAddress,
    ClientName,
    QuoteNo,
    QuoteDate,
    Currency,
    Adults,
    Children,
    DepartureDate,
    ReturnDate,
    ProgramDetails,
    TransportNotes,
    Discount,
    TaxPercent,
    Notes,
    Terms,
}

/// Optional cost areas, each behind an "included?" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureArea {
    Flight,
    Transfer,
    Car,
    Tours,
    Intercity,
    Sightseeing,
    DomesticFlights,
}

/// Controls that only exist while their area is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailField {
    FlightType,
    FlightBaggage,
    FlightPrice,
    FlightNote,
    OutboundFrom,
    OutboundTo,
    OutboundDeparture,
    OutboundArrival,
    InboundFrom,
    InboundTo,
    InboundDeparture,
    InboundArrival,
    TransferDescription,
    TransferPrice,
    CarType,
    CarPrice,
    ToursCount,
    IntercityDescription,
    IntercityPrice,
    SightseeingDescription,
    SightseeingPrice,
}

impl DetailField {
    pub fn area(&self) -> FeatureArea {
        use DetailField::*;
        match self {
            FlightType | FlightBaggage | FlightPrice | FlightNote | OutboundFrom | OutboundTo
            | OutboundDeparture | OutboundArrival | InboundFrom | InboundTo | InboundDeparture
            | InboundArrival => FeatureArea::Flight,
            TransferDescription | TransferPrice => FeatureArea::Transfer,
            CarType | CarPrice => FeatureArea::Car,
            ToursCount => FeatureArea::Tours,
            IntercityDescription | IntercityPrice => FeatureArea::Intercity,
            SightseeingDescription | SightseeingPrice => FeatureArea::Sightseeing,
        }
    }
}

/// One discrete edit of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    SetField {
        field: FormField,
        value: String,
    },
    SetIncluded {
        area: FeatureArea,
        included: bool,
    },
    SetDetail {
        field: DetailField,
        value: String,
    },
    AddHotel {
        #[serde(default)]
        prefill: HotelRow,
    },
    UpdateHotel {
        index: usize,
        field: HotelField,
        value: String,
    },
    RemoveHotel {
        index: usize,
    },
    AddDomesticFlight {
        #[serde(default)]
        prefill: DomesticFlightRow,
    },
    UpdateDomesticFlight {
        index: usize,
        field: DomesticFlightField,
        value: String,
    },
    RemoveDomesticFlight {
        index: usize,
    },
    ToggleDestination {
        label: String,
    },
    SetDestinations {
        labels: Vec<String>,
    },
    AddCarImage {
        path: String,
    },
    RemoveCarImage {
        index: usize,
    },
    SetPriceDisplay {
        display: PriceDisplay,
    },
}

fn field_slot(form: &mut QuoteForm, field: FormField) -> &mut String {
    match field {
        FormField::CompanyName => &mut form.company.name,
        FormField::CompanyPhone => &mut form.company.phone,
        FormField::CompanyEmail => &mut form.company.email,
        FormField::CompanyAddress => &mut form.company.address,
        FormField::ClientName => &mut form.client_name,
        FormField::QuoteNo => &mut form.quote_no,
        FormField::QuoteDate => &mut form.quote_date,
        FormField::Currency => &mut form.currency,
        FormField::Adults => &mut form.adults,
        FormField::Children => &mut form.children,
        FormField::DepartureDate => &mut form.departure_date,
        FormField::ReturnDate => &mut form.return_date,
        FormField::ProgramDetails => &mut form.program_details,
        FormField::TransportNotes => &mut form.transport_notes,
        FormField::Discount => &mut form.discount,
        FormField::TaxPercent => &mut form.tax_percent,
        FormField::Notes => &mut form.notes,
        FormField::Terms => &mut form.terms,
    }
}

/// The control behind a detail field, or `None` while its area is excluded.
fn detail_slot(form: &mut QuoteForm, field: DetailField) -> Option<&mut String> {
    use DetailField::*;
    match field {
        FlightType => form.flight.as_included_mut().map(|f| &mut f.flight_type),
        FlightBaggage => form.flight.as_included_mut().map(|f| &mut f.baggage_kg),
        FlightPrice => form.flight.as_included_mut().map(|f| &mut f.price),
        FlightNote => form.flight.as_included_mut().map(|f| &mut f.note),
        OutboundFrom => form.flight.as_included_mut().map(|f| &mut f.outbound.from_city),
        OutboundTo => form.flight.as_included_mut().map(|f| &mut f.outbound.to_city),
        OutboundDeparture => form
            .flight
            .as_included_mut()
            .map(|f| &mut f.outbound.departure_time),
        OutboundArrival => form.flight.as_included_mut().map(|f| &mut f.outbound.arrival_time),
        InboundFrom => form.flight.as_included_mut().map(|f| &mut f.inbound.from_city),
        InboundTo => form.flight.as_included_mut().map(|f| &mut f.inbound.to_city),
        InboundDeparture => form
            .flight
            .as_included_mut()
            .map(|f| &mut f.inbound.departure_time),
        InboundArrival => form.flight.as_included_mut().map(|f| &mut f.inbound.arrival_time),
        TransferDescription => form.transfer.as_included_mut().map(|t| &mut t.description),
        TransferPrice => form.transfer.as_included_mut().map(|t| &mut t.price),
        CarType => form.car.as_included_mut().map(|c| &mut c.car_type),
        CarPrice => form.car.as_included_mut().map(|c| &mut c.price),
        ToursCount => form
            .car
            .as_included_mut()
            .and_then(|c| c.tours.as_included_mut())
            .map(|t| &mut t.count),
        IntercityDescription => form.intercity.as_included_mut().map(|s| &mut s.description),
        IntercityPrice => form.intercity.as_included_mut().map(|s| &mut s.price),
        SightseeingDescription => form.sightseeing.as_included_mut().map(|s| &mut s.description),
        SightseeingPrice => form.sightseeing.as_included_mut().map(|s| &mut s.price),
    }
}

fn set_included(form: &mut QuoteForm, area: FeatureArea, included: bool) {
    match area {
        FeatureArea::Flight => form.flight.set_included(included),
        FeatureArea::Transfer => form.transfer.set_included(included),
        FeatureArea::Car => form.car.set_included(included),
        FeatureArea::Tours => match form.car.as_included_mut() {
            Some(car) => car.tours.set_included(included),
            None => tracing::debug!("Ignoring tours selector while car rental is excluded"),
        },
        FeatureArea::Intercity => form.intercity.set_included(included),
        FeatureArea::Sightseeing => form.sightseeing.set_included(included),
        FeatureArea::DomesticFlights => form.domestic_flights.set_included(included),
    }
}

/// Applies one event to the form and returns the next form.
///
/// Never fails. Edits addressed to controls that do not currently exist
/// (excluded areas, missing rows) leave the form unchanged.
pub fn reduce(mut form: QuoteForm, event: FormEvent) -> QuoteForm {
    match event {
        FormEvent::SetField { field, value } => {
            *field_slot(&mut form, field) = value;
        }
        FormEvent::SetIncluded { area, included } => {
            set_included(&mut form, area, included);
        }
        FormEvent::SetDetail { field, value } => match detail_slot(&mut form, field) {
            Some(slot) => *slot = value,
            None => tracing::debug!(
                "Ignoring {:?} while {:?} is excluded",
                field,
                field.area()
            ),
        },
        FormEvent::AddHotel { prefill } => add_item(&mut form.hotels, prefill),
        FormEvent::UpdateHotel {
            index,
            field,
            value,
        } => {
            update_item(&mut form.hotels, index, field, value);
        }
        FormEvent::RemoveHotel { index } => {
            remove_item(&mut form.hotels, index);
        }
        FormEvent::AddDomesticFlight { prefill } => {
            form.domestic_flights.set_included(true);
            if let Some(rows) = form.domestic_flights.as_included_mut() {
                add_item(rows, prefill);
            }
        }
        FormEvent::UpdateDomesticFlight {
            index,
            field,
            value,
        } => match form.domestic_flights.as_included_mut() {
            Some(rows) => {
                update_item(rows, index, field, value);
            }
            None => tracing::debug!("Ignoring domestic flight update while excluded"),
        },
        FormEvent::RemoveDomesticFlight { index } => {
            if let Some(rows) = form.domestic_flights.as_included_mut() {
                remove_item(rows, index);
            }
        }
        FormEvent::ToggleDestination { label } => form.destinations.toggle(&label),
        FormEvent::SetDestinations { labels } => form.destinations.replace(labels),
        FormEvent::AddCarImage { path } => match form.car.as_included_mut() {
            Some(car) if !path.trim().is_empty() => car.images.push(path.trim().to_string()),
            Some(_) => {}
            None => tracing::debug!("Ignoring car image while car rental is excluded"),
        },
        FormEvent::RemoveCarImage { index } => {
            if let Some(car) = form.car.as_included_mut() {
                if index < car.images.len() {
                    car.images.remove(index);
                }
            }
        }
        FormEvent::SetPriceDisplay { display } => form.price_display = display,
    }
    form
}

/// Folds a whole script of events over a starting form.
pub fn reduce_all<I>(form: QuoteForm, events: I) -> QuoteForm
where
    I: IntoIterator<Item = FormEvent>,
{
    events.into_iter().fold(form, reduce)
}
