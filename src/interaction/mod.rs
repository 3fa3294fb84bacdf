//! Client-side interaction state.
//!
//! Each unit is a plain state machine driven by explicit events and elapsed
//! time, so rendering can read its initial state and tests can step it.

mod category;
mod contact_form;
mod lightbox;
mod nav;
mod slideshow;

pub use category::{CategorySelector, DEFAULT_CATEGORY_IDS, MOBILE_BREAKPOINT_PX};
pub use contact_form::{
    ContactFields, ContactForm, InquiryType, Notification, SubmitError, SubmitState, SUBMIT_DELAY,
    SUBMIT_LABEL, SUBMITTING_LABEL,
};
pub use lightbox::{Key, Lightbox};
pub use nav::{MobileNav, NavHighlighter, SectionOffset, ACTIVE_OFFSET_THRESHOLD, INITIAL_SECTION};
pub use slideshow::{Slideshow, SLIDE_INTERVAL};
