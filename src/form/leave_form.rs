//! Form-state adapter for a leave request.
//!
//! [`LeaveForm`] holds what a form host holds: raw date text as typed, the
//! other field values, attached and stored documents, and the derived day
//! count, end date and errors. Every change re-runs the pure computation.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calculation::{
    FORM_DATE_FORMAT, ValidationContext, calculate_entitlement, on_leave_type_change,
    parse_form_date, prepare_submission,
};
use crate::models::{
    LeaveComputation, LeavePayload, LeaveRequestInput, LeaveType, MaternityType,
    SupportingDocuments, ValidationErrors,
};

/// Raw text of the date inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DateText {
    date_from: String,
    date_to: String,
    delivery_date: String,
    childs_dob: String,
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(FORM_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// An in-progress leave request, new or being edited.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::ValidationContext;
/// use leave_engine::form::LeaveForm;
/// use leave_engine::models::LeaveType;
/// use chrono::NaiveDate;
///
/// let mut form = LeaveForm::new();
/// form.change_leave_type(Some(LeaveType::Sick));
/// form.set_date_from("2024-03-04");
/// form.set_date_to("2024-03-06");
/// form.set_reason("Flu");
///
/// assert_eq!(form.days(), 3);
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let payload = form.submit(&ValidationContext::new(today)).unwrap();
/// assert_eq!(payload.days, 3);
/// ```
#[derive(Debug, Clone)]
pub struct LeaveForm {
    leave_id: Option<Uuid>,
    input: LeaveRequestInput,
    text: DateText,
    attached: SupportingDocuments,
    stored: SupportingDocuments,
    computation: LeaveComputation,
    original_days: Option<u32>,
    errors: ValidationErrors,
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaveForm {
    /// Creates an empty form with Vacation selected.
    pub fn new() -> Self {
        Self {
            leave_id: None,
            input: LeaveRequestInput::default(),
            text: DateText::default(),
            attached: SupportingDocuments::default(),
            stored: SupportingDocuments::default(),
            computation: LeaveComputation::empty(),
            original_days: None,
            errors: ValidationErrors::new(),
        }
    }

    /// Pre-populates a form from a previously submitted request.
    ///
    /// Stored document names stand in for attachments until replaced, so a
    /// stored solo-parent document keeps the bonus claimable.
    pub fn from_existing(payload: &LeavePayload) -> Self {
        let mut form = Self::new();
        form.leave_id = payload.leave_id;
        form.input.leave_type = Some(payload.leave_type);
        form.input.reason = payload.reason.clone();
        form.text.date_from = format_date(Some(payload.date_from));
        form.text.date_to = format_date(Some(payload.date_to));

        if let Some(details) = &payload.maternity_details {
            form.input.maternity_type = details.maternity_type;
            form.input.is_solo_parent = details.is_solo_parent;
            form.input.will_allocate = details.allocation_days > 0;
            form.input.allocation_days = details.allocation_days;
            form.text.delivery_date = format_date(Some(details.delivery_date));
            form.stored.medical_document = details.medical_document_name.clone();
            form.stored.solo_parent_document = details.solo_parent_document_name.clone();
        }

        if let Some(details) = &payload.paternity_details {
            form.input.is_eligible_paternity = details.is_eligible_paternity;
            form.text.childs_dob = format_date(Some(details.childs_dob));
            form.stored.marriage_cert = details.marriage_cert_name.clone();
            form.stored.birth_cert = details.birth_cert_name.clone();
        }

        form.sync_dates();
        form.sync_documents();
        form.recompute();
        form
    }

    fn sync_dates(&mut self) {
        self.input.date_from = parse_form_date(&self.text.date_from);
        self.input.date_to = parse_form_date(&self.text.date_to);
        self.input.delivery_date = parse_form_date(&self.text.delivery_date);
        self.input.childs_dob = parse_form_date(&self.text.childs_dob);
    }

    fn sync_documents(&mut self) {
        self.input.documents = self.attached.or(&self.stored);
        self.input.has_solo_parent_document = self.input.documents.solo_parent_document.is_some();
    }

    /// Re-derives the day count and end date from the current fields.
    ///
    /// While the start date text is present but unparseable, the previous
    /// result is kept.
    pub fn recompute(&mut self) {
        let date_from_text = self.text.date_from.trim();
        if !date_from_text.is_empty() && self.input.date_from.is_none() {
            return;
        }

        let result = calculate_entitlement(&self.input);
        self.computation = result.computation;
        self.original_days = result.original_days;
    }

    /// Switches leave type, keeping only the reason and start date.
    pub fn change_leave_type(&mut self, leave_type: Option<LeaveType>) {
        self.input = on_leave_type_change(leave_type, &self.input);
        self.text = DateText {
            date_from: std::mem::take(&mut self.text.date_from),
            ..DateText::default()
        };
        self.attached = SupportingDocuments::default();
        self.stored = SupportingDocuments::default();
        self.errors.clear();
        self.sync_dates();
        self.sync_documents();
        self.recompute();
    }

    /// Sets the start date from form text.
    pub fn set_date_from(&mut self, text: &str) {
        self.text.date_from = text.to_string();
        self.sync_dates();
        self.recompute();
    }

    /// Sets the end date from form text. Ignored by the computation for
    /// policy-bound types.
    pub fn set_date_to(&mut self, text: &str) {
        self.text.date_to = text.to_string();
        self.sync_dates();
        self.recompute();
    }

    /// Sets the reason.
    pub fn set_reason(&mut self, reason: &str) {
        self.input.reason = reason.to_string();
    }

    /// Sets the maternity application type.
    pub fn set_maternity_type(&mut self, maternity_type: MaternityType) {
        self.input.maternity_type = maternity_type;
        self.recompute();
    }

    /// Sets the expected or actual delivery date from form text.
    pub fn set_delivery_date(&mut self, text: &str) {
        self.text.delivery_date = text.to_string();
        self.sync_dates();
        self.recompute();
    }

    /// Declares or withdraws solo-parent status.
    pub fn set_is_solo_parent(&mut self, is_solo_parent: bool) {
        self.input.is_solo_parent = is_solo_parent;
        self.recompute();
    }

    /// Turns allocation to an alternate caregiver on or off.
    pub fn set_will_allocate(&mut self, will_allocate: bool) {
        self.input.will_allocate = will_allocate;
        self.recompute();
    }

    /// Sets the number of days allocated to the alternate caregiver.
    pub fn set_allocation_days(&mut self, allocation_days: u32) {
        self.input.allocation_days = allocation_days;
        self.recompute();
    }

    /// Sets the child's date of birth or the miscarriage date from form text.
    pub fn set_childs_dob(&mut self, text: &str) {
        self.text.childs_dob = text.to_string();
        self.sync_dates();
    }

    /// Sets the paternity eligibility confirmation.
    pub fn set_is_eligible_paternity(&mut self, eligible: bool) {
        self.input.is_eligible_paternity = eligible;
    }

    /// Attaches or removes the medical document.
    pub fn set_medical_document(&mut self, name: Option<String>) {
        if name.is_none() {
            self.stored.medical_document = None;
        }
        self.attached.medical_document = name;
        self.sync_documents();
    }

    /// Attaches or removes the solo parent document.
    ///
    /// Removing it also withdraws the solo-parent declaration.
    pub fn set_solo_parent_document(&mut self, name: Option<String>) {
        if name.is_none() {
            self.stored.solo_parent_document = None;
            self.input.is_solo_parent = false;
        }
        self.attached.solo_parent_document = name;
        self.sync_documents();
        self.recompute();
    }

    /// Attaches or removes the marriage certificate.
    pub fn set_marriage_cert(&mut self, name: Option<String>) {
        if name.is_none() {
            self.stored.marriage_cert = None;
        }
        self.attached.marriage_cert = name;
        self.sync_documents();
    }

    /// Attaches or removes the child's birth certificate.
    pub fn set_birth_cert(&mut self, name: Option<String>) {
        if name.is_none() {
            self.stored.birth_cert = None;
        }
        self.attached.birth_cert = name;
        self.sync_documents();
    }

    /// Validates the form and builds the payload when it passes.
    ///
    /// Errors are kept on the form either way; they are empty after a
    /// successful submit.
    pub fn submit(&mut self, context: &ValidationContext) -> Option<LeavePayload> {
        match prepare_submission(&self.input, &self.computation, self.leave_id, context) {
            Ok(payload) => {
                self.errors.clear();
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The id of the request being edited, if any.
    pub fn leave_id(&self) -> Option<Uuid> {
        self.leave_id
    }

    /// The current field values.
    pub fn input(&self) -> &LeaveRequestInput {
        &self.input
    }

    /// The start date as typed.
    pub fn date_from_text(&self) -> &str {
        &self.text.date_from
    }

    /// Current day count.
    pub fn days(&self) -> u32 {
        self.computation.days
    }

    /// Current end date: derived for policy-bound types, as entered otherwise.
    pub fn date_to(&self) -> Option<NaiveDate> {
        self.computation.date_to
    }

    /// Maternity entitlement before allocation.
    pub fn original_days(&self) -> Option<u32> {
        self.original_days
    }

    /// Errors from the last submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}
