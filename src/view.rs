//! Render model of the contact form.
//!
//! Presentation layers (and the MCP tools) draw the form from a [`FormView`];
//! it carries every piece of text the user sees and nothing else.

use crate::domain::Field;
use crate::models::SubmissionStatus;
use crate::services::FormState;
use serde::Serialize;

pub const FORM_TITLE: &str = "Formulario de Contacto";
pub const SUBMIT_LABEL: &str = "Enviar";
pub const SUBMIT_PENDING_LABEL: &str = "Enviando...";

/// One labelled input with its current value and inline error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// The form-wide status banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    pub fields: Vec<FieldView>,
    pub submit: SubmitButton,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                value: state.values.get(field).to_string(),
                error: state.errors.message(field),
            })
            .collect();

        let pending = state.status.is_pending();
        let submit = SubmitButton {
            label: if pending { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL },
            disabled: pending,
        };

        let banner = match &state.status {
            SubmissionStatus::Succeeded(message) => Some(Banner {
                kind: BannerKind::Success,
                message: message.clone(),
            }),
            SubmissionStatus::Failed(message) => Some(Banner {
                kind: BannerKind::Error,
                message: message.clone(),
            }),
            SubmissionStatus::None | SubmissionStatus::Pending => None,
        };

        Self {
            title: FORM_TITLE,
            banner,
            fields,
            submit,
        }
    }

    /// The input view for one field.
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }
}
