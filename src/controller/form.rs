use crate::client::ResourceGateway;
use crate::entity::{Attachment, FieldError, FieldKind, FieldValue, Resource};
use crate::error::ApiError;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit,
    ReadOnly,
}

/// Owns one draft entity while a form panel is open.
///
/// The draft is a detached copy: it never touches the list controller's
/// collection until a save round-trip succeeds, and it is kept intact on
/// failure so the user's input is not lost.
pub struct FormController<T: Resource> {
    draft: T,
    mode: FormMode,
    /// Set while a save is in flight; a second submit is refused instead
    /// of racing a duplicate request. Cleared through a drop guard, so an
    /// abandoned save (timeout, navigation away) cannot wedge the form.
    saving: bool,
}

/// Clears the in-flight flag on drop, including when the save future is
/// dropped at its await point.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl<T: Resource> FormController<T> {
    /// Open with the type's empty entity.
    pub fn create() -> Self {
        Self {
            draft: T::default(),
            mode: FormMode::Create,
            saving: false,
        }
    }

    /// Open with a field-by-field copy of an existing entity.
    pub fn edit(entity: &T) -> Self {
        Self {
            draft: entity.clone(),
            mode: FormMode::Edit,
            saving: false,
        }
    }

    pub fn read_only(entity: &T) -> Self {
        Self {
            draft: entity.clone(),
            mode: FormMode::ReadOnly,
            saving: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Parse raw input per the field's declared kind and update exactly
    /// that field, leaving every other one untouched.
    pub fn edit_field(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        let spec = T::fields()
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        let value = spec.kind.parse(spec.name, raw)?;
        self.draft.set_field(name, value)
    }

    /// Attach a locally selected binary, replacing any stored URL the
    /// field held before.
    pub fn attach_file(
        &mut self,
        name: &str,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), FieldError> {
        let spec = T::fields()
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        if spec.kind != FieldKind::Attachment {
            return Err(FieldError::KindMismatch {
                field: name.to_string(),
            });
        }
        self.draft.set_field(
            name,
            FieldValue::Attachment(Attachment::pending(file_name, content_type, bytes)),
        )
    }

    /// Submit the draft. Read-only forms are a no-op; create vs update
    /// follows the mode. A submit while another save is in flight is
    /// refused with `ApiError::Busy`. On success the server's canonical
    /// entity is returned for the list controller to reconcile and the
    /// draft is reset; on failure the draft is retained and the error
    /// propagates to the notification surface.
    pub async fn save<G>(
        &mut self,
        session: &Session,
        gateway: &G,
    ) -> Result<Option<T>, ApiError>
    where
        G: ResourceGateway<T> + ?Sized,
    {
        if self.mode == FormMode::ReadOnly {
            return Ok(None);
        }
        if self.saving {
            tracing::debug!(entity = T::LABEL, "save already in flight, refusing submit");
            return Err(ApiError::Busy);
        }

        let token = session.require_token()?.to_string();

        self.saving = true;
        let in_flight = InFlight(&mut self.saving);
        let result = gateway
            .save(&token, &self.draft, self.mode == FormMode::Edit)
            .await;
        drop(in_flight);

        let saved = result?;
        self.draft = T::default();
        Ok(Some(saved))
    }
}
