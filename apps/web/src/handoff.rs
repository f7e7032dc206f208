//! WhatsApp handoff: turns a selection into a pre-filled order message and
//! the `wa.me` deep link that carries it.
//!
//! The service never talks to WhatsApp. The browser opens the link and the
//! visitor sends the message themselves.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use url::Url;

use crate::pricing::{format_amount, SelectionState};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Characters escaped the same way as JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Phone number '{0}' contains no digits")]
    InvalidPhone(String),

    #[error("Invalid handoff URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The order message sent to the studio. Mentions the size label, the sheet
/// count and the estimated total with two decimals.
pub fn compose_message(studio_name: &str, selection: &SelectionState) -> String {
    let total = format_amount(selection.quote().total);
    format!(
        "Hola {studio_name}! 📸\n\n\
         Estoy interesado en un PhotoBook con las siguientes especificaciones:\n\n\
         📖 Tamaño: {label}\n\
         📄 Hojas: {sheets}\n\
         💰 Precio Estimado: ${total}\n\n\
         ¿Me podrían dar más información sobre cómo enviar mis fotos?",
        label = selection.size().label,
        sheets = selection.sheet_count(),
    )
}

/// `https://wa.me/<digits>?text=<message>`. wa.me wants the international
/// number without `+`, spaces or dashes, so everything but digits is dropped.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, HandoffError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(HandoffError::InvalidPhone(phone.to_string()));
    }

    let mut url = Url::parse(WHATSAPP_BASE)?.join(&digits)?;
    let encoded = utf8_percent_encode(message, COMPONENT);
    url.set_query(Some(&format!("text={encoded}")));
    Ok(url)
}

/// Message and link for a selection in one step.
pub fn order_link(
    phone: &str,
    studio_name: &str,
    selection: &SelectionState,
) -> Result<Url, HandoffError> {
    let message = compose_message(studio_name, selection);
    let url = whatsapp_link(phone, &message)?;
    tracing::debug!(
        size = selection.size_id(),
        sheets = selection.sheet_count(),
        "Built WhatsApp handoff link"
    );
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> SelectionState {
        SelectionState::from_params(Some("8x10"), Some(20))
    }

    #[test]
    fn test_message_contains_size_sheets_and_total() {
        let message = compose_message("Cerimagen", &scenario_a());
        assert!(message.contains("8 x 10\""), "{message}");
        assert!(message.contains("20"), "{message}");
        assert!(message.contains("85.00"), "{message}");
        assert!(message.starts_with("Hola Cerimagen!"));
    }

    #[test]
    fn test_message_uses_current_selection() {
        let mut selection = scenario_a();
        selection.select_size("10x12").unwrap();
        selection.set_sheet_count(24);
        let message = compose_message("Cerimagen", &selection);
        assert!(message.contains("10 x 12\""));
        assert!(message.contains("Hojas: 24"));
        assert!(message.contains("$189.00"));
    }

    #[test]
    fn test_link_strips_phone_formatting() {
        let url = whatsapp_link("+53 5111-0501", "hola").unwrap();
        assert_eq!(url.as_str(), "https://wa.me/5351110501?text=hola");
    }

    #[test]
    fn test_link_encodes_like_encode_uri_component() {
        let url = whatsapp_link("5351110501", "8 x 10\" & más\n(ok)!").unwrap();
        assert_eq!(
            url.query(),
            Some("text=8%20x%2010%22%20%26%20m%C3%A1s%0A(ok)!")
        );
    }

    #[test]
    fn test_link_round_trips_message() {
        let message = compose_message("Cerimagen", &scenario_a());
        let url = whatsapp_link("+5351110501", &message).unwrap();
        let (key, text) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(text, message);
    }

    #[test]
    fn test_phone_without_digits_rejected() {
        let err = whatsapp_link("+--", "hola").unwrap_err();
        assert!(matches!(err, HandoffError::InvalidPhone(_)));
    }
}
