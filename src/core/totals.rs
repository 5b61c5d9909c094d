use crate::core::line_items::resync;
use crate::domain::model::{Inclusion, QuoteForm, ServiceDetails};
use crate::utils::number::{coerce_count, coerce_number};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub flight_price: f64,
    pub hotels_total: f64,
    pub transport_total: f64,
    pub domestic_flights_total: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub after_discount: f64,
    pub tax_amount: f64,
    pub grand: f64,
    pub travellers: u32,
    pub per_person: f64,
}

/// Price inputs after coercion, as plain numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceInputs {
    pub flight_price: f64,
    pub hotels_total: f64,
    pub transport_total: f64,
    pub domestic_flights_total: f64,
    pub discount: f64,
    pub tax_percent: f64,
    pub adults: u32,
    pub children: u32,
}

pub fn compute_totals(inputs: &PriceInputs) -> Totals {
    let subtotal = inputs.flight_price
        + inputs.hotels_total
        + inputs.transport_total
        + inputs.domestic_flights_total;
    let after_discount = (subtotal - inputs.discount).max(0.0);
    let tax_amount = after_discount * inputs.tax_percent / 100.0;
    let grand = after_discount + tax_amount;
    let travellers = inputs.adults.saturating_add(inputs.children);

    Totals {
        flight_price: inputs.flight_price,
        hotels_total: inputs.hotels_total,
        transport_total: inputs.transport_total,
        domestic_flights_total: inputs.domestic_flights_total,
        subtotal,
        discount: inputs.discount,
        after_discount,
        tax_amount,
        grand,
        travellers,
        per_person: grand / f64::from(travellers.max(1)),
    }
}

fn service_price(service: &Inclusion<ServiceDetails>) -> f64 {
    service
        .as_included()
        .map(|details| coerce_number(&details.price))
        .unwrap_or(0.0)
}

/// Transfer, car rental, intercity transport and sightseeing, each counted
/// only while included.
pub fn transport_total(form: &QuoteForm) -> f64 {
    let car = form
        .car
        .as_included()
        .map(|car| coerce_number(&car.price))
        .unwrap_or(0.0);

    service_price(&form.transfer)
        + car
        + service_price(&form.intercity)
        + service_price(&form.sightseeing)
}

pub fn price_inputs(form: &QuoteForm) -> PriceInputs {
    let flight_price = form
        .flight
        .as_included()
        .map(|flight| coerce_number(&flight.price))
        .unwrap_or(0.0);

    let hotels_total: f64 = resync(&form.hotels).iter().map(|stay| stay.price).sum();

    let domestic_flights_total = form
        .domestic_flights
        .as_included()
        .map(|rows| resync(rows).iter().map(|flight| flight.price).sum::<f64>())
        .unwrap_or(0.0);

    PriceInputs {
        flight_price,
        hotels_total,
        transport_total: transport_total(form),
        domestic_flights_total,
        discount: coerce_number(&form.discount),
        tax_percent: coerce_number(&form.tax_percent),
        adults: coerce_count(&form.adults),
        children: coerce_count(&form.children),
    }
}

pub fn totals(form: &QuoteForm) -> Totals {
    compute_totals(&price_inputs(form))
}
