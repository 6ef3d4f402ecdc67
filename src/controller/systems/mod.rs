//! Controller domain: system modules for the per-step body update.

pub(crate) mod contacts;
pub(crate) mod step;

pub(crate) use contacts::refresh_contacts;
pub(crate) use step::apply_motion;
