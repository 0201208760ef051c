//! Application services

mod delivery_service;
mod draft_service;
mod wizard_session;

pub use delivery_service::DeliveryService;
pub use draft_service::DraftService;
pub use wizard_session::WizardSession;
