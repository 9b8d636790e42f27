//! Domain layer: room identity and the appointment snapshot model.
//!
//! Holds the validated types the services operate on: [`RoomId`], the
//! [`AppointmentType`] enumeration, the denormalized [`RoomPayload`]
//! snapshot, and the [`AssignmentDraft`] normalization step that turns a
//! raw request into a payload.

pub mod appointment;
pub mod room_id;

pub use appointment::{AppointmentType, AssignmentDraft, RoomPayload, RoomState};
pub use room_id::RoomId;
