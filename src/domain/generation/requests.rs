//! Validated generation request.

use serde_json::Value;

use crate::config::GenerationLimits;
use crate::domain::foundation::{FieldErrors, Payload, StringRules};

/// Structured prompt fields submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    pub title: String,
    pub objective: String,
    pub data: String,
    pub return_format: String,
}

impl GenerationSpec {
    pub fn from_payload(raw: &Value, limits: &GenerationLimits) -> Result<Self, FieldErrors> {
        let mut payload = Payload::new(raw);
        let title = payload.string("title", StringRules::new().max(limits.title_max_length));
        let objective = payload.string(
            "objective",
            StringRules::new().max(limits.objective_max_length),
        );
        let data = payload.string("data", StringRules::new().max(limits.data_max_length));
        let return_format = payload.string(
            "return_format",
            StringRules::new().max(limits.return_max_length),
        );

        payload.finish(move || {
            Some(Self {
                title: title?,
                objective: objective?,
                data: data?,
                return_format: return_format?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::validation::{max_length_message, NOT_BLANK};
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "title": "Descrição de cargo",
            "objective": "Criar descrição para analista de dados",
            "data": "Senioridade: pleno",
            "return_format": "markdown"
        })
    }

    #[test]
    fn accepts_complete_payload() {
        let spec = GenerationSpec::from_payload(&valid(), &GenerationLimits::default()).unwrap();
        assert_eq!(spec.return_format, "markdown");
    }

    #[test]
    fn limits_come_from_configuration() {
        let limits = GenerationLimits {
            title_max_length: 5,
            ..GenerationLimits::default()
        };
        let errors = GenerationSpec::from_payload(&valid(), &limits).unwrap_err();
        assert_eq!(errors.messages("title"), [max_length_message(5)]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut payload = valid();
        payload["data"] = json!("   ");
        let errors =
            GenerationSpec::from_payload(&payload, &GenerationLimits::default()).unwrap_err();
        assert_eq!(errors.messages("data"), [NOT_BLANK]);
    }
}
