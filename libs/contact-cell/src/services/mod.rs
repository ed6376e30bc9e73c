pub mod enquiry;

pub use enquiry::EnquiryService;
