pub mod aggregate;

pub use aggregate::{
    merge_assignments, parse_assignments, parse_bookings, BookingAssignment, BookingField,
    BookingId, BookingRow, CustomBooking, CustomBookingForm,
};
