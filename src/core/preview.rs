use crate::core::duration::calc_duration;
use crate::core::line_items::resync;
use crate::core::narrative::{
    company_meta, domestic_flights_text, flight_text, stay_summary, transport_text,
};
use crate::core::totals::{totals, Totals};
use crate::domain::model::{HotelStay, PriceDisplay, QuoteForm};
use crate::utils::number::{money, or_placeholder, PLACEHOLDER};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelPreviewRow {
    pub city: String,
    pub hotel: String,
    pub stars: String,
    pub rooms: String,
    pub room_type: String,
    pub meals: String,
    pub price: String,
}

impl From<&HotelStay> for HotelPreviewRow {
    fn from(stay: &HotelStay) -> Self {
        Self {
            city: or_placeholder(&stay.city),
            hotel: or_placeholder(&stay.hotel),
            stars: or_placeholder(&stay.stars),
            rooms: or_placeholder(&stay.rooms),
            room_type: or_placeholder(&stay.room_type),
            meals: or_placeholder(&stay.meals),
            price: money(stay.price),
        }
    }
}

/// Money fields as printed, two decimals each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountsPreview {
    pub flight_price: String,
    pub hotels_total: String,
    pub transport_total: String,
    pub domestic_flights_total: String,
    pub subtotal: String,
    pub discount: String,
    pub tax_amount: String,
    pub grand: String,
    pub per_person: String,
}

impl From<&Totals> for AmountsPreview {
    fn from(t: &Totals) -> Self {
        Self {
            flight_price: money(t.flight_price),
            hotels_total: money(t.hotels_total),
            transport_total: money(t.transport_total),
            domestic_flights_total: money(t.domestic_flights_total),
            subtotal: money(t.subtotal),
            discount: money(t.discount),
            tax_amount: money(t.tax_amount),
            grand: money(t.grand),
            per_person: money(t.per_person),
        }
    }
}

/// The read-only quotation, fully derived from a [`QuoteForm`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub company_name: String,
    pub company_meta: String,
    pub quote_no: String,
    pub quote_date: String,
    pub client_name: String,
    pub destinations: String,
    pub adults: String,
    pub children: String,
    pub departure_date: String,
    pub return_date: String,
    pub duration: String,
    /// Shown next to the date inputs rather than on the printed page.
    pub duration_hint: String,
    pub flight: String,
    pub program_details: String,
    pub hotels: Vec<HotelPreviewRow>,
    pub stay_summary: String,
    pub domestic_flights: String,
    pub transport: String,
    pub car_images: Vec<String>,
    pub currency: String,
    pub totals: Totals,
    pub amounts: AmountsPreview,
    pub price_display: PriceDisplay,
    pub notes: String,
    pub terms: String,
}

/// Re-derives every preview field from the current form. Always a full pass.
pub fn render_all(form: &QuoteForm) -> Preview {
    let duration = calc_duration(&form.departure_date, &form.return_date);
    let stays = resync(&form.hotels);
    let totals = totals(form);

    let destinations = if form.destinations.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        form.destinations.labels().join(" - ")
    };

    Preview {
        company_name: or_placeholder(&form.company.name),
        company_meta: company_meta(&form.company),
        quote_no: or_placeholder(&form.quote_no),
        quote_date: or_placeholder(&form.quote_date),
        client_name: or_placeholder(&form.client_name),
        destinations,
        adults: or_placeholder(&form.adults),
        children: or_placeholder(&form.children),
        departure_date: or_placeholder(&form.departure_date),
        return_date: or_placeholder(&form.return_date),
        duration: duration.text(),
        duration_hint: duration.hint(),
        flight: flight_text(&form.flight),
        program_details: or_placeholder(&form.program_details),
        hotels: stays.iter().map(HotelPreviewRow::from).collect(),
        stay_summary: stay_summary(&stays),
        domestic_flights: domestic_flights_text(&form.domestic_flights),
        transport: transport_text(form),
        car_images: form
            .car
            .as_included()
            .map(|car| car.images.clone())
            .unwrap_or_default(),
        currency: form.currency.trim().to_string(),
        amounts: AmountsPreview::from(&totals),
        totals,
        price_display: form.price_display,
        notes: or_placeholder(&form.notes),
        terms: or_placeholder(&form.terms),
    }
}

impl Preview {
    /// Headline price line, following the selected display mode.
    pub fn headline_price(&self) -> String {
        match self.price_display {
            PriceDisplay::Total => {
                format!("الإجمالي النهائي: {} {}", self.amounts.grand, self.currency)
            }
            PriceDisplay::PerPerson => format!(
                "السعر للشخص الواحد: {} {} ({} مسافرين)",
                self.amounts.per_person, self.currency, self.totals.travellers
            ),
        }
    }

    /// The printable quotation document.
    pub fn to_document(&self) -> String {
        let mut doc = String::new();
        let c = &self.currency;
        let a = &self.amounts;

        // Writing into a String cannot fail.
        let _ = writeln!(doc, "{}", self.company_name);
        let _ = writeln!(doc, "{}", self.company_meta);
        let _ = writeln!(doc);
        let _ = writeln!(doc, "عرض سعر رقم: {}", self.quote_no);
        let _ = writeln!(doc, "التاريخ: {}", self.quote_date);
        let _ = writeln!(doc, "العميل: {}", self.client_name);
        let _ = writeln!(doc, "الوجهات: {}", self.destinations);
        let _ = writeln!(doc, "البالغين: {} - الأطفال: {}", self.adults, self.children);
        let _ = writeln!(
            doc,
            "الذهاب: {} - العودة: {} - المدة: {}",
            self.departure_date, self.return_date, self.duration
        );

        section(&mut doc, "الطيران الدولي", &self.flight);
        section(&mut doc, "تفاصيل البرنامج", &self.program_details);

        let _ = writeln!(doc, "\n== الفنادق ==");
        let _ = writeln!(
            doc,
            "المدينة | الفندق | التصنيف | الغرف | نوع الغرفة | الوجبات | السعر ({})",
            c
        );
        if self.hotels.is_empty() {
            let _ = writeln!(doc, "{}", PLACEHOLDER);
        }
        for row in &self.hotels {
            let _ = writeln!(
                doc,
                "{} | {} | {} | {} | {} | {} | {}",
                row.city, row.hotel, row.stars, row.rooms, row.room_type, row.meals, row.price
            );
        }

        section(&mut doc, "الطيران الداخلي", &self.domestic_flights);
        section(&mut doc, "المواصلات", &self.transport);
        if !self.car_images.is_empty() {
            let _ = writeln!(doc, "صور السيارة: {}", self.car_images.join(", "));
        }

        let _ = writeln!(doc, "\n== الأسعار ==");
        for (label, amount) in [
            ("الطيران الدولي", &a.flight_price),
            ("الفنادق", &a.hotels_total),
            ("المواصلات", &a.transport_total),
            ("الطيران الداخلي", &a.domestic_flights_total),
            ("المجموع", &a.subtotal),
            ("الخصم", &a.discount),
            ("الضريبة", &a.tax_amount),
            ("الإجمالي", &a.grand),
        ] {
            let _ = writeln!(doc, "{}: {} {}", label, amount, c);
        }
        let _ = writeln!(doc, "{}", self.headline_price());

        section(&mut doc, "ملاحظات", &self.notes);
        section(&mut doc, "الشروط والأحكام", &self.terms);

        doc
    }
}

fn section(doc: &mut String, title: &str, body: &str) {
    let _ = writeln!(doc, "\n== {} ==", title);
    let _ = writeln!(doc, "{}", body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::{reduce_all, DetailField, FeatureArea, FormEvent};
    use crate::domain::model::{HotelRow, Inclusion, ServiceDetails};

    fn sample_form() -> QuoteForm {
        let mut form = QuoteForm::default();
        form.company.name = "رحلات الشرق".to_string();
        form.quote_no = "Q-77".to_string();
        form.client_name = "سارة".to_string();
        form.adults = "2".to_string();
        form.children = "1".to_string();
        form.departure_date = "2024-01-10".to_string();
        form.return_date = "2024-01-15".to_string();
        form.destinations.insert("روسيا");
        form.destinations.insert("جورجيا");
        form.hotels.push(HotelRow {
            city: "موسكو".to_string(),
            hotel: "فندق اكوامارين".to_string(),
            price: "300".to_string(),
            ..HotelRow::default()
        });
        form
    }

    #[test]
    fn test_render_all_fills_every_field() {
        let preview = render_all(&sample_form());

        assert_eq!(preview.company_name, "رحلات الشرق");
        assert_eq!(preview.company_meta, "—");
        assert_eq!(preview.destinations, "روسيا - جورجيا");
        assert_eq!(preview.duration, "05 ليالي / 06 أيام");
        assert_eq!(preview.hotels.len(), 1);
        assert_eq!(preview.hotels[0].price, "300.00");
        assert_eq!(preview.amounts.grand, "300.00");
        assert_eq!(preview.amounts.per_person, "100.00");
        assert_eq!(preview.notes, "—");
    }

    #[test]
    fn test_preview_never_goes_stale() {
        let mut form = sample_form();
        let first = render_all(&form);

        form.transfer = Inclusion::Included(ServiceDetails {
            description: String::new(),
            price: "50".to_string(),
        });
        let second = render_all(&form);

        assert_ne!(first.transport, second.transport);
        assert_eq!(second.amounts.transport_total, "50.00");
        assert_eq!(second.amounts.grand, "350.00");
        assert_eq!(render_all(&form), second);
    }

    #[test]
    fn test_empty_hotels_and_invalid_dates() {
        let mut form = QuoteForm::default();
        form.departure_date = "2024-05-02".to_string();
        form.return_date = "2024-05-01".to_string();

        let preview = render_all(&form);
        assert!(preview.hotels.is_empty());
        assert_eq!(preview.duration, "—");
        assert_ne!(preview.duration_hint, "—");

        let doc = preview.to_document();
        assert!(doc.contains("== الفنادق ==\nالمدينة | الفندق"));
        assert!(doc.contains("الإجمالي: 0.00 USD"));
    }

    #[test]
    fn test_document_follows_price_display() {
        let mut form = sample_form();
        let doc = render_all(&form).to_document();
        assert!(doc.contains("الإجمالي النهائي: 300.00 USD"));
        assert!(doc.contains("موسكو | فندق اكوامارين | *4 | 1 | غرفة مزدوجة | بالافطار | 300.00"));

        form.price_display = PriceDisplay::PerPerson;
        let doc = render_all(&form).to_document();
        assert!(doc.contains("السعر للشخص الواحد: 100.00 USD (3 مسافرين)"));
    }

    #[test]
    fn test_document_carries_transfer_description() {
        let form = reduce_all(
            sample_form(),
            [
                FormEvent::SetIncluded {
                    area: FeatureArea::Transfer,
                    included: true,
                },
                FormEvent::SetDetail {
                    field: DetailField::TransferDescription,
                    value: "VIP-VAN".to_string(),
                },
            ],
        );

        let doc = render_all(&form).to_document();
        assert!(doc.contains("مع سائق خاص (VIP-VAN)."));
    }
}
