//! Human-readable paragraphs of the printed quotation.
//!
//! Every builder is a pure function of the form; the wording is the agency's
//! standard Arabic quotation phrasing.

use crate::core::line_items::resync;
use crate::domain::model::{
    CompanyInfo, DomesticFlightRow, FlightDetails, FlightLeg, HotelStay, Inclusion, QuoteForm,
};
use crate::utils::number::{coerce_count, money, or_placeholder, PLACEHOLDER};

pub const FLIGHT_EXCLUDED: &str = "لا يشمل العرض الطيران الدولي.";
const TRANSFER_SENTENCE: &str = "العرض يشمل الإستقبال والتوديع من المطار بسيارة خاصة مع سائق خاص";
pub const TRANSFER_INCLUDED: &str =
    "العرض يشمل الإستقبال والتوديع من المطار بسيارة خاصة مع سائق خاص.";
pub const TRANSFER_EXCLUDED: &str = "لا يشمل العرض التوصيل من/إلى المطار.";
pub const CAR_EXCLUDED: &str = "لا يشمل العرض سيارة إيجار.";
pub const DOMESTIC_FLIGHTS_EXCLUDED: &str = "لا يشمل العرض الطيران الداخلي.";

fn leg_text(title: &str, leg: &FlightLeg) -> String {
    format!(
        "*{}*\nمن {} إلى {}\nإقلاع {} وصول {}",
        title, leg.from_city, leg.to_city, leg.departure_time, leg.arrival_time
    )
}

pub fn flight_text(flight: &Inclusion<FlightDetails>) -> String {
    let Some(details) = flight.as_included() else {
        return FLIGHT_EXCLUDED.to_string();
    };

    let note = details.note.trim();
    let note = if note.is_empty() {
        String::new()
    } else {
        format!("\n\nملاحظة: {}", note)
    };

    format!(
        "يشمل العرض الطيران الدولي: نعم\nنوع الرحلة: {} - وزن الشنطة: {} كجم\n\n{}\n\n{}{}",
        details.flight_type,
        details.baggage_kg,
        leg_text("رحلة الذهاب", &details.outbound),
        leg_text("رحلة العودة", &details.inbound),
        note
    )
}

pub fn transport_text(form: &QuoteForm) -> String {
    let mut parts = Vec::new();

    parts.push(match form.transfer.as_included() {
        Some(transfer) => with_detail(TRANSFER_SENTENCE, &transfer.description),
        None => TRANSFER_EXCLUDED.to_string(),
    });

    match form.car.as_included() {
        Some(car) => {
            let car_type = or_placeholder(&car.car_type);
            parts.push(format!(
                "العرض يشمل سيارة إيجار طوال مدة الرحلة (النوع: {}).",
                car_type
            ));

            if let Some(tours) = car.tours.as_included() {
                parts.push(format!(
                    "العرض يشمل ({}) جولات يومية من 8 إلى 9 ساعات بسيارة خاصة مع سائق خاص.",
                    coerce_count(&tours.count)
                ));
            }
        }
        None => parts.push(CAR_EXCLUDED.to_string()),
    }

    if let Some(intercity) = form.intercity.as_included() {
        parts.push(with_detail(
            "العرض يشمل التنقل بين المدن",
            &intercity.description,
        ));
    }

    if let Some(sightseeing) = form.sightseeing.as_included() {
        parts.push(with_detail(
            "العرض يشمل برنامج الجولات السياحية",
            &sightseeing.description,
        ));
    }

    let note = form.transport_notes.trim();
    if !note.is_empty() {
        parts.push(format!("ملاحظات: {}", note));
    }

    parts.join("\n")
}

fn with_detail(sentence: &str, detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        format!("{}.", sentence)
    } else {
        format!("{} ({}).", sentence, detail)
    }
}

fn stay_line(stay: &HotelStay) -> String {
    format!(
        "{}: {} ({}) - {} × {} - {}",
        or_placeholder(&stay.city),
        or_placeholder(&stay.hotel),
        or_placeholder(&stay.stars),
        or_placeholder(&stay.rooms),
        or_placeholder(&stay.room_type),
        or_placeholder(&stay.meals)
    )
}

pub fn stay_summary(stays: &[HotelStay]) -> String {
    if stays.is_empty() {
        return PLACEHOLDER.to_string();
    }
    stays.iter().map(stay_line).collect::<Vec<_>>().join("\n")
}

pub fn domestic_flights_text(flights: &Inclusion<Vec<DomesticFlightRow>>) -> String {
    let Some(rows) = flights.as_included() else {
        return DOMESTIC_FLIGHTS_EXCLUDED.to_string();
    };

    let flights = resync(rows);
    if flights.is_empty() {
        return PLACEHOLDER.to_string();
    }

    flights
        .iter()
        .map(|flight| {
            let mut line = format!(
                "من {} إلى {} - {} - {} - {}",
                or_placeholder(&flight.origin),
                or_placeholder(&flight.destination),
                or_placeholder(&flight.date),
                or_placeholder(&flight.airline),
                money(flight.price)
            );
            if !flight.note.is_empty() {
                line.push_str(&format!(" ({})", flight.note));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn company_meta(company: &CompanyInfo) -> String {
    let meta = [&company.address, &company.phone, &company.email]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ");
    or_placeholder(&meta)
}
