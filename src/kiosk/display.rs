//! Terminal rendering of the room board.
//!
//! The board is rebuilt as a plain string and only redrawn when it
//! changes, so the 200 ms timer tick does not flood the terminal.

use std::io::Write;

use chrono::Local;

use crate::api::dto::RoomStateResponse;
use crate::domain::RoomId;

use super::timers::{TimerBank, TimerKey, mmss};

/// Placeholder for empty display values.
const DASH: &str = "—";

fn value_or_dash(s: &str) -> &str {
    if s.is_empty() { DASH } else { s }
}

/// Builds the full board text for one render pass.
#[must_use]
pub fn render_board(
    room_id: RoomId,
    data: Option<&RoomStateResponse>,
    error: Option<&str>,
    timers: &TimerBank,
    in_window: bool,
) -> String {
    let mut out = String::new();

    let window_note = if in_window {
        "(activo)"
    } else {
        "(fuera de horario)"
    };
    out.push_str(&format!(
        "Cubículo {room_id}    Polling: 1 min {window_note} · Hard: 5 min\n\n"
    ));

    let payload = data.and_then(|d| d.payload.as_ref());
    match payload {
        Some(p) => {
            let tipo = p
                .appointment_type
                .map_or(DASH, |t| t.as_str());
            let hora = p
                .scheduled_at
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string();

            out.push_str(&format!("  Doctor/a:    {}\n", value_or_dash(&p.doctor_name)));
            out.push_str(&format!(
                "  Asistente:   {}\n",
                value_or_dash(&p.assistant_name)
            ));
            out.push_str(&format!(
                "  Paciente:    {}\n",
                value_or_dash(&p.patient_name)
            ));
            out.push_str(&format!(
                "  Expediente:  {}\n",
                value_or_dash(&p.record_number)
            ));
            out.push_str(&format!("  Tipo de cita: {tipo}\n"));
            out.push_str(&format!("  Diente:      {}\n", value_or_dash(&p.tooth)));
            out.push_str(&format!("  Hora:        {hora}\n"));
        }
        None => {
            out.push_str("  Cubículo libre\n");
        }
    }

    out.push('\n');
    for key in TimerKey::ALL {
        let state = timers.state(key);
        let status = if state.running { "corriendo" } else { "detenido" };
        out.push_str(&format!(
            "  [{}] {}  {}\n",
            key.label(),
            mmss(state.remaining_ms),
            status
        ));
    }
    out.push_str("\n  7 / 17: iniciar o detener temporizador · q: salir\n\n");

    match error {
        Some(e) => out.push_str(&format!("  Error: {e}\n")),
        None => out.push_str("  Kiosco Dental\n"),
    }

    out
}

/// Clears the terminal and draws the board; write failures are ignored.
pub fn draw(board: &str) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "\x1b[2J\x1b[H{board}");
    let _ = stdout.flush();
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{AppointmentType, RoomPayload};

    fn room(n: i32) -> RoomId {
        let Ok(id) = RoomId::new(n) else {
            panic!("expected valid room id");
        };
        id
    }

    fn response(payload: Option<RoomPayload>) -> RoomStateResponse {
        RoomStateResponse {
            ok: true,
            room_id: room(1),
            payload,
            updated_at: Some(Utc::now()),
        }
    }

    #[test]
    fn free_room_renders_as_libre() {
        let board = render_board(
            room(1),
            Some(&response(None)),
            None,
            &TimerBank::default(),
            true,
        );
        assert!(board.contains("Cubículo libre"));
        assert!(board.contains("(activo)"));
        assert!(board.contains("[7:00] 07:00"));
        assert!(board.contains("[17:00] 17:00"));
    }

    #[test]
    fn assignment_renders_all_fields() {
        let payload = RoomPayload {
            doctor_name: "Dra. Rivera".to_string(),
            doctor_color: "#0ea5e9".to_string(),
            assistant_name: "Sofía".to_string(),
            patient_name: "Marco".to_string(),
            record_number: "EXP-104".to_string(),
            appointment_type: Some(AppointmentType::Emergencia),
            tooth: "26".to_string(),
            scheduled_at: Utc::now(),
        };
        let board = render_board(
            room(3),
            Some(&response(Some(payload))),
            None,
            &TimerBank::default(),
            false,
        );
        assert!(board.contains("Cubículo 3"));
        assert!(board.contains("Dra. Rivera"));
        assert!(board.contains("Emergencia"));
        assert!(board.contains("EXP-104"));
        assert!(board.contains("(fuera de horario)"));
    }

    #[test]
    fn empty_optionals_render_as_dash() {
        let payload = RoomPayload {
            doctor_name: "Dr. Ibáñez".to_string(),
            doctor_color: "#abc".to_string(),
            assistant_name: String::new(),
            patient_name: String::new(),
            record_number: String::new(),
            appointment_type: None,
            tooth: String::new(),
            scheduled_at: Utc::now(),
        };
        let board = render_board(
            room(2),
            Some(&response(Some(payload))),
            None,
            &TimerBank::default(),
            true,
        );
        assert!(board.contains("Asistente:   —"));
        assert!(board.contains("Tipo de cita: —"));
    }

    #[test]
    fn fetch_error_shows_in_footer() {
        let board = render_board(
            room(1),
            None,
            Some("connection refused"),
            &TimerBank::default(),
            true,
        );
        assert!(board.contains("Error: connection refused"));
    }
}
