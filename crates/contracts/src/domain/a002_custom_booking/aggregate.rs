use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::domain::a001_vendor::{Vendor, VendorId};
use crate::domain::common::aggregate_id::numeric_id;

numeric_id!(
    /// Backend-assigned custom booking identifier
    BookingId
);

/// Accepts either a JSON string or a JSON number and keeps its text form.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Full booking record from `GET /api/masteradmins/{id}/custom-bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomBooking {
    pub booking_id: BookingId,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub booking_status: Option<String>,
    pub booking_type: Option<String>,
    pub booking_details: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub booking_amount: Option<String>,
    pub customer_name: Option<String>,
    pub customer_mobile_no: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub pick_up_date: Option<String>,
    pub pick_up_time: Option<String>,
    pub car_type: Option<String>,
    pub return_date: Option<String>,
    pub trip_type: Option<String>,
    pub collection: Option<f64>,
    pub full_name: Option<String>,
    pub customer_email: Option<String>,
}

/// Assignment metadata from the auxiliary
/// `GET /api/bookings/masteradmins/{id}/custom-bookings` read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAssignment {
    pub booking_id: BookingId,
    pub assigned_vendor_id: Option<VendorId>,
    pub assigned_vendor_name: Option<String>,
}

/// A booking joined with its vendor assignment, as shown in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub booking: CustomBooking,
    pub assigned_vendor_id: Option<VendorId>,
    pub assigned_vendor_name: Option<String>,
}

impl BookingRow {
    pub fn id(&self) -> BookingId {
        self.booking.booking_id
    }

    /// Label for the "Assign Vendor" column: the assignment name, else the
    /// company of the matching known vendor, else a generic marker. `None`
    /// when unassigned.
    pub fn assignment_label(&self, vendors: &[Vendor]) -> Option<String> {
        let vendor_id = self.assigned_vendor_id?;
        let name = self
            .assigned_vendor_name
            .clone()
            .or_else(|| {
                vendors
                    .iter()
                    .find(|v| v.id == vendor_id)
                    .and_then(|v| v.company_name().map(str::to_string))
            })
            .unwrap_or_else(|| "Assigned".to_string());
        Some(format!("{} (ID: {})", name, vendor_id))
    }
}

/// Join assignment metadata onto bookings by `bookingId`. Bookings without an
/// assignment entry stay unassigned; the first entry for a booking wins.
pub fn merge_assignments(
    bookings: Vec<CustomBooking>,
    assignments: Vec<BookingAssignment>,
) -> Vec<BookingRow> {
    let mut by_booking: HashMap<BookingId, BookingAssignment> = HashMap::new();
    for assignment in assignments {
        by_booking.entry(assignment.booking_id).or_insert(assignment);
    }

    bookings
        .into_iter()
        .map(|booking| {
            let assignment = by_booking.remove(&booking.booking_id);
            let (assigned_vendor_id, assigned_vendor_name) = match assignment {
                Some(a) => (
                    a.assigned_vendor_id,
                    a.assigned_vendor_name.filter(|n| !n.trim().is_empty()),
                ),
                None => (None, None),
            };
            BookingRow {
                booking,
                assigned_vendor_id,
                assigned_vendor_name,
            }
        })
        .collect()
}

fn parse_array<T: serde::de::DeserializeOwned>(body: &str, what: &str) -> anyhow::Result<Vec<T>> {
    let items: Vec<Value> =
        serde_json::from_str(body).with_context(|| format!("expected a JSON array of {what}"))?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).with_context(|| format!("{what} entry #{index} is malformed"))
        })
        .collect()
}

pub fn parse_bookings(body: &str) -> anyhow::Result<Vec<CustomBooking>> {
    parse_array(body, "bookings")
}

pub fn parse_assignments(body: &str) -> anyhow::Result<Vec<BookingAssignment>> {
    parse_array(body, "booking assignments")
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    CustomerName,
    CustomerMobileNo,
    CustomerEmail,
    FullName,
    BookingDate,
    BookingTime,
    BookingStatus,
    BookingType,
    BookingDetails,
    BookingAmount,
    PickupLocation,
    DropLocation,
    PickUpDate,
    PickUpTime,
    CarType,
    ReturnDate,
    TripType,
    Collection,
}

impl BookingField {
    pub const ALL: [BookingField; 18] = [
        BookingField::CustomerName,
        BookingField::CustomerMobileNo,
        BookingField::CustomerEmail,
        BookingField::FullName,
        BookingField::BookingDate,
        BookingField::BookingTime,
        BookingField::BookingStatus,
        BookingField::BookingType,
        BookingField::BookingDetails,
        BookingField::BookingAmount,
        BookingField::PickupLocation,
        BookingField::DropLocation,
        BookingField::PickUpDate,
        BookingField::PickUpTime,
        BookingField::CarType,
        BookingField::ReturnDate,
        BookingField::TripType,
        BookingField::Collection,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            BookingField::CustomerName => "customerName",
            BookingField::CustomerMobileNo => "customerMobileNo",
            BookingField::CustomerEmail => "customerEmail",
            BookingField::FullName => "fullName",
            BookingField::BookingDate => "bookingDate",
            BookingField::BookingTime => "bookingTime",
            BookingField::BookingStatus => "bookingStatus",
            BookingField::BookingType => "bookingType",
            BookingField::BookingDetails => "bookingDetails",
            BookingField::BookingAmount => "bookingAmount",
            BookingField::PickupLocation => "pickupLocation",
            BookingField::DropLocation => "dropLocation",
            BookingField::PickUpDate => "pickUpDate",
            BookingField::PickUpTime => "pickUpTime",
            BookingField::CarType => "carType",
            BookingField::ReturnDate => "returnDate",
            BookingField::TripType => "tripType",
            BookingField::Collection => "collection",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::CustomerName => "Customer Name",
            BookingField::CustomerMobileNo => "Customer Mobile No",
            BookingField::CustomerEmail => "Customer Email",
            BookingField::FullName => "Full Name",
            BookingField::BookingDate => "Booking Date",
            BookingField::BookingTime => "Booking Time",
            BookingField::BookingStatus => "Booking Status",
            BookingField::BookingType => "Booking Type",
            BookingField::BookingDetails => "Booking Details",
            BookingField::BookingAmount => "Booking Amount",
            BookingField::PickupLocation => "Pickup Location",
            BookingField::DropLocation => "Drop Location",
            BookingField::PickUpDate => "Pick-up Date",
            BookingField::PickUpTime => "Pick-up Time",
            BookingField::CarType => "Car Type",
            BookingField::ReturnDate => "Return Date",
            BookingField::TripType => "Trip Type",
            BookingField::Collection => "Collection",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            BookingField::BookingDate | BookingField::PickUpDate | BookingField::ReturnDate => {
                "date"
            }
            BookingField::BookingTime | BookingField::PickUpTime => "time",
            BookingField::Collection => "number",
            BookingField::CustomerEmail => "email",
            BookingField::CustomerMobileNo => "tel",
            _ => "text",
        }
    }
}

/// Create/update body for a custom booking. Every value is edited as text;
/// `collection` is sent as a JSON number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomBookingForm {
    values: HashMap<BookingField, String>,
}

impl CustomBookingForm {
    pub fn from_booking(booking: &CustomBooking) -> Self {
        let mut form = Self::default();
        let pairs = [
            (BookingField::CustomerName, &booking.customer_name),
            (BookingField::CustomerMobileNo, &booking.customer_mobile_no),
            (BookingField::CustomerEmail, &booking.customer_email),
            (BookingField::FullName, &booking.full_name),
            (BookingField::BookingDate, &booking.booking_date),
            (BookingField::BookingTime, &booking.booking_time),
            (BookingField::BookingStatus, &booking.booking_status),
            (BookingField::BookingType, &booking.booking_type),
            (BookingField::BookingDetails, &booking.booking_details),
            (BookingField::BookingAmount, &booking.booking_amount),
            (BookingField::PickupLocation, &booking.pickup_location),
            (BookingField::DropLocation, &booking.drop_location),
            (BookingField::PickUpDate, &booking.pick_up_date),
            (BookingField::PickUpTime, &booking.pick_up_time),
            (BookingField::CarType, &booking.car_type),
            (BookingField::ReturnDate, &booking.return_date),
            (BookingField::TripType, &booking.trip_type),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                form.set(field, v.clone());
            }
        }
        if let Some(collection) = booking.collection {
            form.set(BookingField::Collection, collection.to_string());
        }
        form
    }

    pub fn get(&self, field: BookingField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        self.values.insert(field, value);
    }

    fn collection(&self) -> Result<f64, String> {
        let raw = self.get(BookingField::Collection).trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse::<f64>()
            .map_err(|_| format!("Collection must be a number, got `{raw}`"))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.get(BookingField::CustomerName).trim().is_empty() {
            return Err("Customer Name is required".into());
        }
        self.collection().map(|_| ())
    }

    /// JSON request body with every field present
    pub fn to_json(&self) -> Result<Value, String> {
        let mut body = Map::new();
        for field in BookingField::ALL {
            let value = match field {
                BookingField::Collection => Number::from_f64(self.collection()?)
                    .map(Value::Number)
                    .ok_or_else(|| "Collection must be finite".to_string())?,
                other => Value::String(self.get(other).to_string()),
            };
            body.insert(field.field_name().to_string(), value);
        }
        Ok(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(id: i64, customer: &str) -> CustomBooking {
        serde_json::from_value(json!({ "bookingId": id, "customerName": customer })).unwrap()
    }

    fn assignment(id: i64, vendor: Option<i64>, name: Option<&str>) -> BookingAssignment {
        BookingAssignment {
            booking_id: BookingId(id),
            assigned_vendor_id: vendor.map(VendorId),
            assigned_vendor_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_bookings_accepts_numeric_amount() {
        let body = json!([
            {"bookingId": 42, "customerName": "Meera", "bookingAmount": 1500, "collection": 200.5},
            {"bookingId": 43, "bookingAmount": "990", "pickUpDate": "2024-05-01"}
        ])
        .to_string();
        let bookings = parse_bookings(&body).unwrap();
        assert_eq!(bookings[0].booking_amount.as_deref(), Some("1500"));
        assert_eq!(bookings[0].collection, Some(200.5));
        assert_eq!(bookings[1].booking_amount.as_deref(), Some("990"));
        assert_eq!(bookings[1].pick_up_date.as_deref(), Some("2024-05-01"));
        assert_eq!(bookings[1].customer_name, None);
    }

    #[test]
    fn test_parse_bookings_rejects_entries_without_id() {
        let err = parse_bookings(r#"[{"bookingId": 1}, {"customerName": "x"}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("bookings entry #1"));
        assert!(parse_bookings(r#"{"bookingId": 1}"#).is_err());
    }

    #[test]
    fn test_merge_joins_by_booking_id() {
        let rows = merge_assignments(
            vec![booking(42, "Meera"), booking(43, "Arun")],
            vec![
                assignment(42, Some(3), Some("Skyline Tours")),
                assignment(42, Some(9), Some("Ignored")),
                assignment(99, Some(1), Some("Orphan")),
            ],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), BookingId(42));
        assert_eq!(rows[0].assigned_vendor_id, Some(VendorId(3)));
        assert_eq!(rows[0].assigned_vendor_name.as_deref(), Some("Skyline Tours"));
        assert_eq!(rows[1].assigned_vendor_id, None);
        assert_eq!(rows[1].assigned_vendor_name, None);
    }

    #[test]
    fn test_merge_drops_blank_vendor_names() {
        let rows = merge_assignments(vec![booking(1, "A")], vec![assignment(1, Some(2), Some("  "))]);
        assert_eq!(rows[0].assigned_vendor_id, Some(VendorId(2)));
        assert_eq!(rows[0].assigned_vendor_name, None);
    }

    #[test]
    fn test_assignment_label_falls_back_to_known_vendor() {
        let vendor: Vendor = serde_json::from_value(json!({
            "id": 2, "vendorCompanyName": "Harbour Cabs", "vendorEmail": "h@c.in", "status": "Active"
        }))
        .unwrap();
        let mut row = merge_assignments(vec![booking(1, "A")], vec![assignment(1, Some(2), None)])
            .remove(0);
        assert_eq!(row.assignment_label(&[vendor]).as_deref(), Some("Harbour Cabs (ID: 2)"));
        assert_eq!(row.assignment_label(&[]).as_deref(), Some("Assigned (ID: 2)"));

        row.assigned_vendor_id = None;
        assert_eq!(row.assignment_label(&[]), None);
    }

    #[test]
    fn test_form_round_trip_from_booking() {
        let mut b = booking(7, "Nisha");
        b.collection = Some(250.0);
        b.car_type = Some("SUV".into());
        let form = CustomBookingForm::from_booking(&b);
        assert_eq!(form.get(BookingField::CarType), "SUV");
        assert_eq!(form.get(BookingField::TripType), "");

        let body = form.to_json().unwrap();
        assert_eq!(body["customerName"], "Nisha");
        assert_eq!(body["collection"], json!(250.0));
        assert_eq!(body["returnDate"], "");
        assert_eq!(body.as_object().unwrap().len(), BookingField::ALL.len());
    }

    #[test]
    fn test_form_validation() {
        let mut form = CustomBookingForm::default();
        assert!(form.validate().is_err());
        form.set(BookingField::CustomerName, "Ravi".into());
        assert!(form.validate().is_ok());
        assert_eq!(form.to_json().unwrap()["collection"], json!(0.0));

        form.set(BookingField::Collection, "ten".into());
        assert!(form.validate().unwrap_err().contains("Collection"));
    }
}
